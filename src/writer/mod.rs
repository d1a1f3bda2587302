use crate::error::{CatalogError, CatalogResult};
use crate::types::Record;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;

const INDENT: &[u8] = b"    ";

/// Serialize records as a 4-space indented JSON array.
/// Non-ASCII text is written as UTF-8, never `\u` escaped.
pub fn records_to_json(records: &[Record]) -> CatalogResult<Vec<u8>> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(INDENT);
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    records.serialize(&mut serializer)?;
    Ok(buf)
}

/// Write records to `path`, replacing any existing file
pub fn write_records(path: &Path, records: &[Record]) -> CatalogResult<()> {
    let json = records_to_json(records)?;

    let file = fs::File::create(path).map_err(|e| CatalogError::io(path, e))?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(&json)
        .and_then(|_| writer.flush())
        .map_err(|e| CatalogError::io(path, e))?;

    Ok(())
}

/// Create the output directory (and parents). Existing directories are fine.
pub fn ensure_output_dir(dir: &Path) -> CatalogResult<()> {
    fs::create_dir_all(dir).map_err(|e| CatalogError::io(dir, e))
}
