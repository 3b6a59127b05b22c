use crate::error::CoreResult;
use crate::upstream::{parse_upstream_manifest, UpstreamManifest};

use super::file_stems::expand_file_stems;
use super::folder_alias::build_named_directory_icons;
use super::metadata::{
    default_directory_icons, ICON_THEME_SCHEMA_URL, THEME_APPEARANCE, THEME_AUTHOR, THEME_NAME,
};
use super::model::{IconTheme, IconThemeFamily};
use super::partition::partition_icon_definitions;
use super::rename::build_file_icons;

/// Map a parsed upstream manifest onto a Zed icon theme. Pure and deterministic.
pub fn transform_manifest(upstream: &UpstreamManifest) -> IconTheme {
    let parts = partition_icon_definitions(&upstream.icon_definitions);

    let file_icons = build_file_icons(parts.files.iter().map(|(k, v)| (*k, *v)));
    let named_directory_icons = build_named_directory_icons(
        &upstream.folder_names,
        &upstream.folder_names_expanded,
        &parts,
    );
    let file_stems = expand_file_stems(&upstream.file_names);

    tracing::debug!(
        file_icons = file_icons.len(),
        named_directory_icons = named_directory_icons.len(),
        file_suffixes = upstream.file_extensions.len(),
        file_stems = file_stems.len(),
        "icon theme assembled"
    );

    IconTheme {
        name: THEME_NAME.to_string(),
        appearance: THEME_APPEARANCE,
        file_icons,
        directory_icons: default_directory_icons(),
        named_directory_icons,
        file_suffixes: upstream.file_extensions.clone(),
        file_stems,
    }
}

/// Parse upstream text and transform it. Only fails on malformed input.
pub fn transform_manifest_text(text: &str, source_name: &str) -> CoreResult<IconTheme> {
    let upstream = parse_upstream_manifest(text, source_name)?;
    Ok(transform_manifest(&upstream))
}

pub fn icon_theme_family(theme: IconTheme) -> IconThemeFamily {
    IconThemeFamily {
        schema: ICON_THEME_SCHEMA_URL.to_string(),
        name: THEME_NAME.to_string(),
        author: THEME_AUTHOR.to_string(),
        themes: vec![theme],
    }
}
