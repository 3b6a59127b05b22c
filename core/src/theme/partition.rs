use crate::upstream::IconDefinition;
use indexmap::IndexMap;

pub const FOLDER_KEY_PREFIX: &str = "folder";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconKind {
    File,
    Folder,
}

pub fn classify_icon_key(key: &str) -> IconKind {
    if key.starts_with(FOLDER_KEY_PREFIX) {
        IconKind::Folder
    } else {
        IconKind::File
    }
}

/// `iconDefinitions` split by key prefix, both halves in upstream order.
#[derive(Debug, Default)]
pub struct PartitionedDefinitions<'a> {
    pub files: IndexMap<&'a str, &'a IconDefinition>,
    pub folders: IndexMap<&'a str, &'a IconDefinition>,
}

impl<'a> PartitionedDefinitions<'a> {
    /// Path of a folder-group definition, if the key resolves and has one.
    pub fn folder_icon_path(&self, key: &str) -> Option<&'a str> {
        self.folders
            .get(key)
            .copied()
            .and_then(|def| def.icon_path.as_deref())
    }
}

pub fn partition_icon_definitions(
    defs: &IndexMap<String, IconDefinition>,
) -> PartitionedDefinitions<'_> {
    let mut out = PartitionedDefinitions::default();
    for (key, def) in defs {
        match classify_icon_key(key) {
            IconKind::File => {
                out.files.insert(key.as_str(), def);
            }
            IconKind::Folder => {
                out.folders.insert(key.as_str(), def);
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_is_literal_and_case_sensitive() {
        assert_eq!(classify_icon_key("folder"), IconKind::Folder);
        assert_eq!(classify_icon_key("folderGitExpanded"), IconKind::Folder);
        assert_eq!(classify_icon_key("folders"), IconKind::Folder);
        assert_eq!(classify_icon_key("Folder"), IconKind::File);
        assert_eq!(classify_icon_key("subfolder"), IconKind::File);
        assert_eq!(classify_icon_key("fold"), IconKind::File);
    }

    #[test]
    fn groups_are_disjoint_and_ordered() {
        let mut defs = IndexMap::new();
        defs.insert("rust".to_string(), IconDefinition::with_icon_path("r.svg"));
        defs.insert("folder".to_string(), IconDefinition::with_icon_path("f.svg"));
        defs.insert("git".to_string(), IconDefinition::with_icon_path("g.svg"));
        defs.insert("folderGit".to_string(), IconDefinition::with_icon_path("fg.svg"));

        let parts = partition_icon_definitions(&defs);
        let files: Vec<&str> = parts.files.keys().copied().collect();
        let folders: Vec<&str> = parts.folders.keys().copied().collect();
        assert_eq!(files, vec!["rust", "git"]);
        assert_eq!(folders, vec!["folder", "folderGit"]);
        assert_eq!(parts.folder_icon_path("folderGit"), Some("fg.svg"));
        assert_eq!(parts.folder_icon_path("rust"), None);
    }
}
