//! Export configuration
//!
//! Workbook path, output directory and the ordered list of sheets to export.
//! Values come from built-in defaults, an optional YAML file, or the caller.

use crate::error::{CatalogError, CatalogResult};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_WORKBOOK: &str = "Catalogo_Normalizado.xlsx";
pub const DEFAULT_OUTPUT_DIR: &str = "datos";

/// The eight normalized catalog sheets, in export order
pub const DEFAULT_SHEETS: [&str; 8] = [
    "Metadata",
    "Schema",
    "Classes",
    "Subclasses",
    "Objects",
    "Attributes",
    "Link_Object_Attribute",
    "Domains",
];

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExportConfig {
    pub workbook: PathBuf,
    pub output_dir: PathBuf,
    /// Sheet names, matched case-sensitively
    pub sheets: Vec<String>,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            workbook: PathBuf::from(DEFAULT_WORKBOOK),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            sheets: DEFAULT_SHEETS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl ExportConfig {
    /// Config with the default sheet list
    pub fn new<W: AsRef<Path>, O: AsRef<Path>>(workbook: W, output_dir: O) -> Self {
        Self {
            workbook: workbook.as_ref().to_path_buf(),
            output_dir: output_dir.as_ref().to_path_buf(),
            ..Self::default()
        }
    }

    pub fn with_sheets<I, S>(mut self, sheets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sheets = sheets.into_iter().map(Into::into).collect();
        self
    }

    /// Load a YAML config file. Missing keys fall back to the defaults.
    pub fn from_yaml_file(path: &Path) -> CatalogResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| CatalogError::io(path, e))?;
        Self::from_yaml_str(&content)
            .map_err(|e| CatalogError::Config(format!("{}: {}", path.display(), e)))
    }

    pub fn from_yaml_str(content: &str) -> CatalogResult<Self> {
        // An empty document is a valid "all defaults" config
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self =
            serde_yaml::from_str(content).map_err(|e| CatalogError::Config(e.to_string()))?;
        if config.sheets.iter().any(|s| s.trim().is_empty()) {
            return Err(CatalogError::Config(
                "sheet names must not be empty".to_string(),
            ));
        }
        Ok(config)
    }

    /// `<output_dir>/<sheet lowercased>.json`
    pub fn output_path_for(&self, sheet: &str) -> PathBuf {
        self.output_dir.join(format!("{}.json", sheet.to_lowercase()))
    }
}
