pub mod git;

use crate::error::CoreResult;
use crate::layout::CheckoutLayout;

/// Source of the upstream manifest and its icon assets.
pub trait ManifestFetcher {
    /// Bring the checkout up to date and return the manifest text.
    fn fetch_latest_manifest_text(&self) -> CoreResult<String>;

    /// Checkout the manifest and asset directories are read from.
    fn checkout(&self) -> &CheckoutLayout;
}
