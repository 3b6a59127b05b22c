use super::model::{Appearance, DirectoryIcons};

pub const ICON_THEME_SCHEMA_URL: &str = "https://zed.dev/schema/icon_themes/v0.3.0.json";
pub const THEME_NAME: &str = "Symbols Icon Theme";
pub const THEME_AUTHOR: &str = "Zed Industries";
pub const THEME_APPEARANCE: Appearance = Appearance::Dark;

pub const DEFAULT_FOLDER_COLLAPSED: &str = "./icons/folders/folder.svg";
pub const DEFAULT_FOLDER_EXPANDED: &str = "./icons/folders/folder-open.svg";

/// Fixed generic folder glyphs. Never derived from upstream definitions.
pub fn default_directory_icons() -> DirectoryIcons {
    DirectoryIcons {
        collapsed: DEFAULT_FOLDER_COLLAPSED.to_string(),
        expanded: DEFAULT_FOLDER_EXPANDED.to_string(),
    }
}
