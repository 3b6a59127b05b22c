use symbols_theme_core::checker::ThemeChecker;
use symbols_theme_core::layout::OutputLayout;

fn main() {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        eprintln!("usage: theme_checker <path/to/output_dir>");
        std::process::exit(2);
    }

    let checker = ThemeChecker::new(OutputLayout::new(&args[1]));
    match checker.check() {
        Ok(summary) => {
            match serde_json::to_string_pretty(&summary) {
                Ok(s) => println!("{}", s),
                Err(e) => eprintln!("failed to render summary: {}", e),
            }
            if summary.passed() {
                std::process::exit(0);
            } else {
                std::process::exit(1);
            }
        }
        Err(e) => {
            eprintln!("checker error: {}", e);
            std::process::exit(1);
        }
    }
}
