use indexmap::IndexMap;
use std::collections::HashMap;

use super::model::DirectoryIcons;
use super::partition::PartitionedDefinitions;

/// The four spellings a folder name is matched under:
/// `name`, `.name`, `_name` and `__name__`.
pub fn folder_alias_variants(name: &str) -> [String; 4] {
    [
        name.to_string(),
        format!(".{name}"),
        format!("_{name}"),
        format!("__{name}__"),
    ]
}

/// Build `named_directory_icons` from `folderNames` / `folderNamesExpanded`.
///
/// Folder names whose collapsed key does not resolve in the folder group are
/// skipped. A missing or unresolvable expanded key falls back to the collapsed
/// path. Variant collisions between different folder names are last-write-wins
/// in upstream order and are logged.
pub fn build_named_directory_icons(
    folder_names: &IndexMap<String, String>,
    folder_names_expanded: &IndexMap<String, String>,
    parts: &PartitionedDefinitions<'_>,
) -> IndexMap<String, DirectoryIcons> {
    let mut out: IndexMap<String, DirectoryIcons> = IndexMap::new();
    let mut origin: HashMap<String, &str> = HashMap::new();

    for (folder_name, collapsed_key) in folder_names {
        let Some(collapsed) = parts.folder_icon_path(collapsed_key) else {
            tracing::debug!(
                folder = %folder_name,
                key = %collapsed_key,
                "folder icon key does not resolve; alias skipped"
            );
            continue;
        };
        let expanded = folder_names_expanded
            .get(folder_name)
            .and_then(|key| parts.folder_icon_path(key))
            .unwrap_or(collapsed);

        for variant in folder_alias_variants(folder_name) {
            if let Some(prev) = origin.insert(variant.clone(), folder_name.as_str()) {
                if prev != folder_name.as_str() {
                    tracing::debug!(
                        variant = %variant,
                        previous = prev,
                        current = %folder_name,
                        "folder alias collision; later folder name wins"
                    );
                }
            }
            out.insert(
                variant,
                DirectoryIcons {
                    collapsed: collapsed.to_string(),
                    expanded: expanded.to_string(),
                },
            );
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::partition::partition_icon_definitions;
    use crate::upstream::IconDefinition;

    fn defs(entries: &[(&str, &str)]) -> IndexMap<String, IconDefinition> {
        entries
            .iter()
            .map(|(k, p)| (k.to_string(), IconDefinition::with_icon_path(*p)))
            .collect()
    }

    fn names(entries: &[(&str, &str)]) -> IndexMap<String, String> {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn variants_cover_all_four_spellings() {
        assert_eq!(
            folder_alias_variants("src"),
            [
                "src".to_string(),
                ".src".to_string(),
                "_src".to_string(),
                "__src__".to_string()
            ]
        );
    }

    #[test]
    fn expanded_resolves_when_present() {
        let d = defs(&[("folderSrc", "s.svg"), ("folderSrcOpen", "so.svg")]);
        let parts = partition_icon_definitions(&d);
        let out = build_named_directory_icons(
            &names(&[("src", "folderSrc")]),
            &names(&[("src", "folderSrcOpen")]),
            &parts,
        );
        assert_eq!(out.len(), 4);
        for v in folder_alias_variants("src") {
            assert_eq!(out[&v].collapsed, "s.svg");
            assert_eq!(out[&v].expanded, "so.svg");
        }
    }

    #[test]
    fn unresolved_expanded_falls_back_to_collapsed() {
        let d = defs(&[("folderSrc", "s.svg")]);
        let parts = partition_icon_definitions(&d);
        let out = build_named_directory_icons(
            &names(&[("src", "folderSrc")]),
            &names(&[("src", "folderMissing")]),
            &parts,
        );
        assert_eq!(out["__src__"].expanded, "s.svg");
    }

    #[test]
    fn unresolved_collapsed_skips_every_variant() {
        let d = defs(&[("folderSrc", "s.svg")]);
        let parts = partition_icon_definitions(&d);
        let out = build_named_directory_icons(
            &names(&[("lib", "folderLib"), ("src", "folderSrc")]),
            &IndexMap::new(),
            &parts,
        );
        assert_eq!(out.len(), 4);
        assert!(!out.contains_key("lib"));
        assert!(!out.contains_key("_lib"));
    }

    #[test]
    fn file_group_keys_do_not_resolve_folders() {
        let d = defs(&[("git", "g.svg")]);
        let parts = partition_icon_definitions(&d);
        let out = build_named_directory_icons(&names(&[(".git", "git")]), &IndexMap::new(), &parts);
        assert!(out.is_empty());
    }

    #[test]
    fn colliding_variants_are_last_write_wins() {
        // "_a" is both a variant of "a" (underscore form) and a folder name itself.
        let d = defs(&[("folderA", "a.svg"), ("folderUnderA", "ua.svg")]);
        let parts = partition_icon_definitions(&d);
        let out = build_named_directory_icons(
            &names(&[("a", "folderA"), ("_a", "folderUnderA")]),
            &IndexMap::new(),
            &parts,
        );
        assert_eq!(out["_a"].collapsed, "ua.svg");
        assert_eq!(out["a"].collapsed, "a.svg");
        assert_eq!(out["__a__"].collapsed, "a.svg");
    }
}
