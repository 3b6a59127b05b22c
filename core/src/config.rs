use crate::error::{CoreError, CoreResult};
use crate::fetch::git::GitRepository;
use crate::layout::{CheckoutLayout, OutputLayout};
use std::env;
use std::path::{Path, PathBuf};

pub const DEFAULT_REPOSITORY_URL: &str = "https://github.com/miguelsolorio/vscode-symbols.git";
pub const DEFAULT_CHECKOUT_DIR_NAME: &str = "symbols";
pub const DEFAULT_GIT_BINARY: &str = "git";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildConfig {
    pub repository_url: String,
    pub checkout_dir: PathBuf,
    pub output_dir: PathBuf,
    /// Keep the upstream clone after a successful build.
    pub keep_checkout: bool,
    pub git_binary: String,
}

impl BuildConfig {
    /// Defaults relative to `root`, overridden by `SYMBOLS_*` environment
    /// variables (a `.env` file is loaded first when present).
    pub fn from_env(root: &Path) -> CoreResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(root, |key| env::var(key).ok())
    }

    pub fn from_lookup(root: &Path, lookup: impl Fn(&str) -> Option<String>) -> CoreResult<Self> {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let keep_checkout = match var("SYMBOLS_KEEP_CHECKOUT") {
            Some(v) => parse_flag("SYMBOLS_KEEP_CHECKOUT", &v)?,
            None => false,
        };

        Ok(Self {
            repository_url: var("SYMBOLS_REPOSITORY_URL")
                .unwrap_or_else(|| DEFAULT_REPOSITORY_URL.to_string()),
            checkout_dir: var("SYMBOLS_CHECKOUT_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| root.join(DEFAULT_CHECKOUT_DIR_NAME)),
            output_dir: var("SYMBOLS_OUTPUT_DIR")
                .map_or_else(|| root.to_path_buf(), PathBuf::from),
            keep_checkout,
            git_binary: var("SYMBOLS_GIT_BINARY")
                .unwrap_or_else(|| DEFAULT_GIT_BINARY.to_string()),
        })
    }

    pub fn checkout_layout(&self) -> CheckoutLayout {
        CheckoutLayout::new(&self.checkout_dir)
    }

    pub fn output_layout(&self) -> OutputLayout {
        OutputLayout::new(&self.output_dir)
    }

    pub fn git_repository(&self) -> GitRepository {
        GitRepository::new(
            &self.repository_url,
            self.checkout_layout(),
            &self.git_binary,
        )
    }
}

fn parse_flag(name: &str, value: &str) -> CoreResult<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(CoreError::Config(format!(
            "{name} must be a boolean (1/0, true/false, yes/no, on/off), got {other:?}"
        ))),
    }
}
