use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Appearance {
    Dark,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IconPath {
    pub path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DirectoryIcons {
    pub collapsed: String,
    pub expanded: String,
}

/// One Zed icon theme.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IconTheme {
    pub name: String,
    pub appearance: Appearance,
    pub file_icons: IndexMap<String, IconPath>,
    pub directory_icons: DirectoryIcons,
    pub named_directory_icons: IndexMap<String, DirectoryIcons>,
    pub file_suffixes: IndexMap<String, String>,
    pub file_stems: IndexMap<String, String>,
}

/// The document written to `icon_themes/`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IconThemeFamily {
    #[serde(rename = "$schema")]
    pub schema: String,
    pub name: String,
    pub author: String,
    pub themes: Vec<IconTheme>,
}
