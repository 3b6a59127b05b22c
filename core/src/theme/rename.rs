use crate::upstream::IconDefinition;
use indexmap::IndexMap;

use super::model::IconPath;

/// Upstream semantic names whose Zed counterpart differs.
pub const ICON_KEY_RENAMES: &[(&str, &str)] = &[
    ("git", "vcs"),
    ("console", "terminal"),
    ("code", "json"),
    ("coffeescript", "coffee"),
    ("default", "file"),
    ("storage", "database"),
    ("template", "templ"),
];

/// Map an upstream icon key to its Zed key. Unlisted keys pass through.
pub fn rename_icon_key(key: &str) -> &str {
    ICON_KEY_RENAMES
        .iter()
        .find(|(from, _)| *from == key)
        .map(|(_, to)| *to)
        .unwrap_or(key)
}

/// Build `file_icons` from the file group.
///
/// Iterates in upstream order; when two keys rename to the same target the
/// later one overwrites the path but the entry keeps its first position.
/// Definitions without an `iconPath` (font-only glyphs) have nothing to point
/// at and are left out.
pub fn build_file_icons<'a>(
    files: impl IntoIterator<Item = (&'a str, &'a IconDefinition)>,
) -> IndexMap<String, IconPath> {
    let mut out = IndexMap::new();
    for (key, def) in files {
        let Some(path) = def.icon_path.as_deref() else {
            tracing::debug!(key, "icon definition has no iconPath; skipped");
            continue;
        };
        let target = rename_icon_key(key);
        if let Some(prev) = out.insert(
            target.to_string(),
            IconPath {
                path: path.to_string(),
            },
        ) {
            tracing::debug!(
                key,
                renamed = target,
                previous = %prev.path,
                "file icon key collision; later definition wins"
            );
        }
    }
    out
}
