use crate::config::BuildConfig;
use crate::error::CoreResult;
use crate::fetch::ManifestFetcher;
use crate::layout::OutputLayout;
use crate::materialize::{copy_tree, remove_checkout, write_manifest};
use crate::theme::{icon_theme_family, transform_manifest_text};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BuildReport {
    pub manifest_path: PathBuf,
    pub manifest_sha256: String,
    pub file_icons: usize,
    pub named_directory_icons: usize,
    pub file_suffixes: usize,
    pub file_stems: usize,
    pub copied_file_assets: usize,
    pub copied_folder_assets: usize,
    pub checkout_removed: bool,
}

#[derive(Debug, Clone)]
pub struct BuildOptions {
    pub output: OutputLayout,
    pub keep_checkout: bool,
}

impl From<&BuildConfig> for BuildOptions {
    fn from(cfg: &BuildConfig) -> Self {
        Self {
            output: cfg.output_layout(),
            keep_checkout: cfg.keep_checkout,
        }
    }
}

/// fetch → transform → copy assets → write manifest → remove checkout.
///
/// Strictly sequential. A parse failure aborts before anything is written,
/// and the manifest is written only after both asset trees are in place.
pub fn run_build(fetcher: &dyn ManifestFetcher, opts: &BuildOptions) -> CoreResult<BuildReport> {
    let checkout = fetcher.checkout().clone();

    let text = fetcher.fetch_latest_manifest_text()?;
    tracing::info!(bytes = text.len(), "upstream manifest fetched");

    let source_name = checkout.manifest_path().display().to_string();
    let theme = transform_manifest_text(&text, &source_name)?;
    let (file_icons, named_directory_icons, file_suffixes, file_stems) = (
        theme.file_icons.len(),
        theme.named_directory_icons.len(),
        theme.file_suffixes.len(),
        theme.file_stems.len(),
    );
    tracing::info!(
        file_icons,
        named_directory_icons,
        file_suffixes,
        file_stems,
        "icon theme transformed"
    );

    let copied_file_assets =
        copy_tree(&checkout.file_icons_dir(), &opts.output.file_icons_dir())?;
    let copied_folder_assets =
        copy_tree(&checkout.folder_icons_dir(), &opts.output.folder_icons_dir())?;
    tracing::info!(
        files = copied_file_assets,
        folders = copied_folder_assets,
        "icon assets copied"
    );

    let manifest_path = opts.output.manifest_path();
    let manifest_sha256 = write_manifest(&manifest_path, &icon_theme_family(theme))?;
    tracing::info!(
        path = %manifest_path.display(),
        sha256 = %manifest_sha256,
        "icon theme manifest written"
    );

    let checkout_removed = !opts.keep_checkout;
    if checkout_removed {
        remove_checkout(checkout.root())?;
        tracing::info!(dir = %checkout.root().display(), "upstream checkout removed");
    }

    Ok(BuildReport {
        manifest_path,
        manifest_sha256,
        file_icons,
        named_directory_icons,
        file_suffixes,
        file_stems,
        copied_file_assets,
        copied_folder_assets,
        checkout_removed,
    })
}
