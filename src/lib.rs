//! Catalog Export - workbook sheets to JSON files
//!
//! Reads a fixed, ordered list of sheets from a spreadsheet workbook and
//! writes each one as a JSON array of records, one file per sheet.
//!
//! # Features
//!
//! - Every cell exported as its literal text, empty cells as `""`
//! - Header and row order preserved
//! - Missing sheets are skipped with a warning
//! - `.xlsx`, `.xls`, `.xlsb` and `.ods` workbooks
//!
//! # Example
//!
//! ```no_run
//! use catalog_export::cli::export;
//! use catalog_export::config::ExportConfig;
//!
//! let config = ExportConfig::new("Catalogo_Normalizado.xlsx", "datos")
//!     .with_sheets(["Metadata", "Classes"]);
//! let report = export(&config, false)?;
//!
//! println!("Exported: {}", report.exported.len());
//! println!("Missing: {:?}", report.missing);
//! # Ok::<(), catalog_export::error::CatalogError>(())
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod excel;
pub mod types;
pub mod writer;

// Re-export commonly used types
pub use config::ExportConfig;
pub use error::{CatalogError, CatalogResult};
pub use types::{ExportReport, Record, SheetExport};
