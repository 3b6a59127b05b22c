use crate::error::CoreResult;
use crate::layout::OutputLayout;
use crate::theme::metadata::ICON_THEME_SCHEMA_URL;
use crate::theme::IconThemeFamily;
use serde::{Deserialize, Serialize};
use std::fs;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckResult {
    pub check_id: String,
    pub severity: String, // BLOCKER|MAJOR
    pub result: String,   // PASS|FAIL
    pub message: String,
}

impl CheckResult {
    fn new(check_id: &str, severity: &str, missing: Vec<String>) -> Self {
        let (result, message) = if missing.is_empty() {
            ("PASS", "ok".to_string())
        } else {
            ("FAIL", summarize(&missing))
        };
        Self {
            check_id: check_id.to_string(),
            severity: severity.to_string(),
            result: result.to_string(),
            message,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckSummary {
    pub output_dir: String,
    pub overall: String, // PASS|FAIL
    pub checks: Vec<CheckResult>,
}

impl CheckSummary {
    pub fn result_for_check(&self, check_id: &str) -> Option<&CheckResult> {
        self.checks.iter().find(|c| c.check_id == check_id)
    }

    pub fn passed(&self) -> bool {
        self.overall == "PASS"
    }
}

/// Verifies a generated output directory: the manifest parses and every
/// icon path it references exists on disk.
pub struct ThemeChecker {
    layout: OutputLayout,
}

impl ThemeChecker {
    pub fn new(layout: OutputLayout) -> Self {
        Self { layout }
    }

    pub fn check(&self) -> CoreResult<CheckSummary> {
        let mut checks_out: Vec<CheckResult> = Vec::new();

        // CHK.MANIFEST.PARSE
        let manifest_path = self.layout.manifest_path();
        let family = match read_family(&manifest_path) {
            Ok(f) => {
                checks_out.push(CheckResult::new("CHK.MANIFEST.PARSE", "BLOCKER", vec![]));
                f
            }
            Err(e) => {
                checks_out.push(CheckResult::new(
                    "CHK.MANIFEST.PARSE",
                    "BLOCKER",
                    vec![format!("{}: {}", manifest_path.display(), e)],
                ));
                return Ok(self.summarize(checks_out));
            }
        };

        // CHK.MANIFEST.HEADER
        checks_out.push(check_header(&family));

        // CHK.ASSETS.*
        checks_out.push(self.check_directory_icons(&family));
        checks_out.push(self.check_file_icons(&family));
        checks_out.push(self.check_named_directory_icons(&family));

        Ok(self.summarize(checks_out))
    }

    fn summarize(&self, checks: Vec<CheckResult>) -> CheckSummary {
        let overall = if checks
            .iter()
            .any(|c| c.severity == "BLOCKER" && c.result != "PASS")
        {
            "FAIL"
        } else {
            "PASS"
        };
        CheckSummary {
            output_dir: self.layout.root().display().to_string(),
            overall: overall.to_string(),
            checks,
        }
    }

    fn missing_paths<'a>(&self, paths: impl IntoIterator<Item = &'a str>) -> Vec<String> {
        let mut missing: Vec<String> = paths
            .into_iter()
            .filter(|p| !self.layout.resolve_icon_path(p).is_file())
            .map(str::to_string)
            .collect();
        missing.sort();
        missing.dedup();
        missing
    }

    fn check_directory_icons(&self, family: &IconThemeFamily) -> CheckResult {
        let paths = family.themes.iter().flat_map(|t| {
            [
                t.directory_icons.collapsed.as_str(),
                t.directory_icons.expanded.as_str(),
            ]
        });
        CheckResult::new(
            "CHK.ASSETS.DIRECTORY_ICONS",
            "BLOCKER",
            self.missing_paths(paths),
        )
    }

    fn check_file_icons(&self, family: &IconThemeFamily) -> CheckResult {
        let paths = family
            .themes
            .iter()
            .flat_map(|t| t.file_icons.values().map(|i| i.path.as_str()));
        CheckResult::new(
            "CHK.ASSETS.FILE_ICONS",
            "BLOCKER",
            self.missing_paths(paths),
        )
    }

    fn check_named_directory_icons(&self, family: &IconThemeFamily) -> CheckResult {
        let paths = family.themes.iter().flat_map(|t| {
            t.named_directory_icons
                .values()
                .flat_map(|d| [d.collapsed.as_str(), d.expanded.as_str()])
        });
        CheckResult::new(
            "CHK.ASSETS.NAMED_DIRECTORY_ICONS",
            "BLOCKER",
            self.missing_paths(paths),
        )
    }
}

fn read_family(path: &std::path::Path) -> CoreResult<IconThemeFamily> {
    let bytes = fs::read(path)?;
    Ok(serde_json::from_slice(&bytes)?)
}

fn check_header(family: &IconThemeFamily) -> CheckResult {
    let mut missing = Vec::new();
    if family.schema != ICON_THEME_SCHEMA_URL {
        missing.push(format!("$schema={}", ICON_THEME_SCHEMA_URL));
    }
    if family.themes.is_empty() {
        missing.push("themes[0]".to_string());
    }
    CheckResult::new("CHK.MANIFEST.HEADER", "BLOCKER", missing)
}

fn summarize(missing: &[String]) -> String {
    const SHOWN: usize = 10;
    let head = missing
        .iter()
        .take(SHOWN)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    if missing.len() > SHOWN {
        format!("missing: {} (+{} more)", head, missing.len() - SHOWN)
    } else {
        format!("missing: {}", head)
    }
}
