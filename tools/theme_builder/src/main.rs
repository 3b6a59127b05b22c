use std::path::PathBuf;
use symbols_theme_core::config::BuildConfig;
use symbols_theme_core::pipeline::{run_build, BuildOptions};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

fn main() {
    // theme_builder [ROOT]
    // Clones the upstream Symbols repository, converts its icon theme to the
    // Zed schema and writes icon_themes/ + icons/ under ROOT (default: cwd).
    init_tracing();

    let args: Vec<String> = std::env::args().collect();
    if args.len() > 2 || args.iter().any(|a| a == "-h" || a == "--help") {
        eprintln!("usage: theme_builder [ROOT]");
        std::process::exit(2);
    }
    let root = args.get(1).map(PathBuf::from).unwrap_or_else(|| PathBuf::from("."));

    let config = match BuildConfig::from_env(&root) {
        Ok(c) => c,
        Err(e) => {
            tracing::error!("{}", e);
            std::process::exit(1);
        }
    };
    tracing::debug!(?config, "build configuration");

    let repo = config.git_repository();
    match run_build(&repo, &BuildOptions::from(&config)) {
        Ok(report) => {
            println!(
                "THEME_BUILT path={} sha256={} file_icons={} named_directory_icons={} assets={}",
                report.manifest_path.display(),
                report.manifest_sha256,
                report.file_icons,
                report.named_directory_icons,
                report.copied_file_assets + report.copied_folder_assets,
            );
        }
        Err(e) => {
            tracing::error!("build failed: {}", e);
            std::process::exit(1);
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("SYMBOLS_THEME_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| "info".into());
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
