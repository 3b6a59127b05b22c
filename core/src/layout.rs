use std::path::{Path, PathBuf};

pub const UPSTREAM_MANIFEST_REL: &str = "src/symbol-icon-theme.json";
pub const UPSTREAM_FILE_ICONS_REL: &str = "src/icons/files";
pub const UPSTREAM_FOLDER_ICONS_REL: &str = "src/icons/folders";

pub const OUTPUT_MANIFEST_REL: &str = "icon_themes/symbols-icon-theme.json";
pub const OUTPUT_FILE_ICONS_REL: &str = "icons/files";
pub const OUTPUT_FOLDER_ICONS_REL: &str = "icons/folders";

/// Paths inside a checkout of the upstream repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutLayout {
    root: PathBuf,
}

impl CheckoutLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.root.join(UPSTREAM_MANIFEST_REL)
    }

    pub fn file_icons_dir(&self) -> PathBuf {
        self.root.join(UPSTREAM_FILE_ICONS_REL)
    }

    pub fn folder_icons_dir(&self) -> PathBuf {
        self.root.join(UPSTREAM_FOLDER_ICONS_REL)
    }
}

/// Paths of the generated extension output.
///
/// Manifest icon paths (`./icons/...`) are relative to `root`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLayout {
    root: PathBuf,
}

impl OutputLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.root.join(OUTPUT_MANIFEST_REL)
    }

    pub fn file_icons_dir(&self) -> PathBuf {
        self.root.join(OUTPUT_FILE_ICONS_REL)
    }

    pub fn folder_icons_dir(&self) -> PathBuf {
        self.root.join(OUTPUT_FOLDER_ICONS_REL)
    }

    /// Resolve a manifest icon path such as `./icons/files/rust.svg`.
    pub fn resolve_icon_path(&self, icon_path: &str) -> PathBuf {
        let rel = icon_path.trim_start_matches("./");
        self.root.join(rel)
    }
}
