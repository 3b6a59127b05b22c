use crate::error::{CoreError, CoreResult};
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};

/// Icon definition as authored in the upstream VS Code theme.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct IconDefinition {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_character: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<String>,
}

impl IconDefinition {
    pub fn with_icon_path(path: impl Into<String>) -> Self {
        Self {
            icon_path: Some(path.into()),
            ..Self::default()
        }
    }
}

/// Per-variant (light / high contrast) overrides. Carried, never used for output.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UpstreamVariant {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub folder: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub folder_expanded: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root_folder: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root_folder_expanded: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub file_names: IndexMap<String, String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub file_extensions: IndexMap<String, String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub folder_names: IndexMap<String, String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub folder_names_expanded: IndexMap<String, String>,
}

/// The upstream `symbol-icon-theme.json` document.
///
/// Every field is optional. A missing or `null` mapping is read as empty and
/// unknown fields are ignored. Maps keep document order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UpstreamManifest {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub icon_definitions: IndexMap<String, IconDefinition>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub folder: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub folder_expanded: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root_folder: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root_folder_expanded: Option<String>,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub file_names: IndexMap<String, String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub file_extensions: IndexMap<String, String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub folder_names: IndexMap<String, String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub folder_names_expanded: IndexMap<String, String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub light: Option<UpstreamVariant>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub high_contrast: Option<UpstreamVariant>,
}

/// Parse upstream manifest text. `source_name` only labels the error.
pub fn parse_upstream_manifest(text: &str, source_name: &str) -> CoreResult<UpstreamManifest> {
    // serde_json rejects a leading BOM.
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    serde_json::from_str(text).map_err(|source| CoreError::ManifestParse {
        source_name: source_name.to_string(),
        source,
    })
}

fn null_as_empty<'de, D, V>(deserializer: D) -> Result<IndexMap<String, V>, D::Error>
where
    D: Deserializer<'de>,
    V: Deserialize<'de>,
{
    Ok(Option::<IndexMap<String, V>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_defaults_every_mapping() {
        let m = parse_upstream_manifest("{}", "inline").unwrap();
        assert!(m.icon_definitions.is_empty());
        assert!(m.file_names.is_empty());
        assert!(m.file_extensions.is_empty());
        assert!(m.folder_names.is_empty());
        assert!(m.folder_names_expanded.is_empty());
        assert!(m.light.is_none());
    }

    #[test]
    fn null_mappings_read_as_empty() {
        let m = parse_upstream_manifest(
            r#"{"fileNames": null, "fileExtensions": null, "iconDefinitions": null}"#,
            "inline",
        )
        .unwrap();
        assert!(m.file_names.is_empty());
        assert!(m.file_extensions.is_empty());
        assert!(m.icon_definitions.is_empty());
    }

    #[test]
    fn keeps_document_order_and_font_fields() {
        let m = parse_upstream_manifest(
            r##"{
                "iconDefinitions": {
                    "zeta": {"iconPath": "./icons/files/zeta.svg"},
                    "alpha": {
                        "iconPath": "./icons/files/alpha.svg",
                        "fontCharacter": "\\E001",
                        "fontColor": "#fff"
                    }
                },
                "unknownField": [1, 2, 3]
            }"##,
            "inline",
        )
        .unwrap();
        let keys: Vec<&str> = m.icon_definitions.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["zeta", "alpha"]);
        let alpha = &m.icon_definitions["alpha"];
        assert_eq!(alpha.font_character.as_deref(), Some("\\E001"));
        assert_eq!(alpha.font_color.as_deref(), Some("#fff"));
        assert_eq!(alpha.font_size, None);
    }

    #[test]
    fn malformed_text_is_a_parse_error() {
        let err = parse_upstream_manifest("{\"iconDefinitions\": ", "broken.json").unwrap_err();
        match err {
            CoreError::ManifestParse { source_name, .. } => {
                assert_eq!(source_name, "broken.json")
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn bom_prefixed_text_parses() {
        let m =
            parse_upstream_manifest("\u{feff}{\"fileExtensions\": {\"rs\": \"rust\"}}", "bom")
                .unwrap();
        assert_eq!(m.file_extensions.get("rs").map(String::as_str), Some("rust"));
    }
}
