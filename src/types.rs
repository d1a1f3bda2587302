//! Record and report types for catalog exports

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// One data row of a sheet: header → cell text, in column order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(IndexMap<String, String>);

impl Record {
    pub fn new() -> Self {
        Self(IndexMap::new())
    }

    /// Append a field. Re-inserting an existing header keeps its position.
    pub fn insert(&mut self, header: impl Into<String>, value: impl Into<String>) {
        self.0.insert(header.into(), value.into());
    }

    pub fn get(&self, header: &str) -> Option<&str> {
        self.0.get(header).map(String::as_str)
    }

    pub fn headers(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// A sheet that was found and written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetExport {
    pub sheet: String,
    pub path: PathBuf,
    pub records: usize,
}

/// Outcome of one export run, in configured sheet order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportReport {
    pub exported: Vec<SheetExport>,
    /// Configured sheets absent from the workbook
    pub missing: Vec<String>,
}

impl ExportReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_export(&mut self, export: SheetExport) {
        self.exported.push(export);
    }

    pub fn add_missing(&mut self, sheet: impl Into<String>) {
        self.missing.push(sheet.into());
    }

    pub fn total_records(&self) -> usize {
        self.exported.iter().map(|e| e.records).sum()
    }

    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_preserves_insertion_order() {
        let mut record = Record::new();
        record.insert("Zeta", "1");
        record.insert("Alpha", "2");
        record.insert("Mid", "");

        let headers: Vec<&str> = record.headers().collect();
        assert_eq!(headers, vec!["Zeta", "Alpha", "Mid"]);
        assert_eq!(record.get("Mid"), Some(""));
    }

    #[test]
    fn test_record_serializes_as_flat_object() {
        let record: Record = [("ID", "1"), ("Name", "Foo")].into_iter().collect();
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"ID":"1","Name":"Foo"}"#);
    }

    #[test]
    fn test_report_counts() {
        let mut report = ExportReport::new();
        report.add_export(SheetExport {
            sheet: "Metadata".to_string(),
            path: PathBuf::from("datos/metadata.json"),
            records: 2,
        });
        report.add_export(SheetExport {
            sheet: "Objects".to_string(),
            path: PathBuf::from("datos/objects.json"),
            records: 5,
        });
        assert!(report.is_complete());

        report.add_missing("Classes");
        assert_eq!(report.total_records(), 7);
        assert!(!report.is_complete());
        assert_eq!(report.missing, vec!["Classes"]);
    }
}
