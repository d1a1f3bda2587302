//! Workbook access for catalog exports
//!
//! Every cell is read as its literal text: numbers, booleans and dates are
//! rendered, never type-inferred, and empty cells become `""`.

mod reader;

pub use reader::{cell_text, header_names, range_to_records, CatalogReader};
