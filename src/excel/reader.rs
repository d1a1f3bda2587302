//! Workbook reader - sheet (.xlsx/.xls/.ods) → ordered text records

use crate::error::{CatalogError, CatalogResult};
use crate::types::Record;
use calamine::{open_workbook_auto, Data, ExcelDateTime, Range, Reader, Sheets};
use chrono::{Duration, NaiveDateTime, Timelike};
use std::collections::HashSet;
use std::fs::File;
use std::io::BufReader;
use std::iter;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Read-only handle on one workbook, opened once per export run
pub struct CatalogReader {
    path: PathBuf,
    workbook: Sheets<BufReader<File>>,
    sheet_names: Vec<String>,
}

impl CatalogReader {
    /// Open a workbook, format detected from the extension
    pub fn open<P: AsRef<Path>>(path: P) -> CatalogResult<Self> {
        let path = path.as_ref().to_path_buf();
        if !path.is_file() {
            return Err(CatalogError::WorkbookNotFound(path));
        }

        let workbook = open_workbook_auto(&path)?;
        let sheet_names = workbook.sheet_names();
        debug!(path = %path.display(), sheets = ?sheet_names, "opened workbook");

        Ok(Self {
            path,
            workbook,
            sheet_names,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All sheet names in workbook order
    pub fn sheet_names(&self) -> &[String] {
        &self.sheet_names
    }

    /// Case-sensitive sheet lookup
    pub fn has_sheet(&self, name: &str) -> bool {
        self.sheet_names.iter().any(|s| s == name)
    }

    /// Read one sheet: first row is the header, every other row a record
    pub fn read_records(&mut self, sheet: &str) -> CatalogResult<Vec<Record>> {
        let range = self.workbook.worksheet_range(sheet)?;
        let (height, width) = range.get_size();
        debug!(sheet, height, width, "read sheet range");
        Ok(range_to_records(&range))
    }
}

/// Convert a cell range to records. Fully blank rows are dropped.
///
/// The range starts at the first used cell; empty columns left of it are
/// kept, so column numbering always counts from column A.
pub fn range_to_records(range: &Range<Data>) -> Vec<Record> {
    let lead_cols = range.start().map_or(0, |(_, col)| col as usize);
    let mut rows = range.rows();
    let Some(header_row) = rows.next() else {
        return Vec::new();
    };

    let padded_header: Vec<Data> = iter::repeat(Data::Empty)
        .take(lead_cols)
        .chain(header_row.iter().cloned())
        .collect();
    let headers = header_names(&padded_header);

    rows.filter_map(|row| {
        let values: Vec<String> = row.iter().map(cell_text).collect();
        if values.iter().all(|v| v.is_empty()) {
            return None;
        }
        let padded_values = iter::repeat(String::new()).take(lead_cols).chain(values);
        Some(headers.iter().cloned().zip(padded_values).collect::<Record>())
    })
    .collect()
}

/// Header names for each column. Blank headers become `Unnamed: <idx>`,
/// repeats get `.1`, `.2`, ... suffixes.
pub fn header_names(row: &[Data]) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut names = Vec::with_capacity(row.len());

    for (idx, cell) in row.iter().enumerate() {
        let text = cell_text(cell);
        let base = if text.is_empty() {
            format!("Unnamed: {}", idx)
        } else {
            text
        };

        let mut name = base.clone();
        let mut suffix = 1;
        while seen.contains(&name) {
            name = format!("{}.{}", base, suffix);
            suffix += 1;
        }
        seen.insert(name.clone());
        names.push(name);
    }

    names
}

/// Render a cell as its literal text. Never infers a type; empty is `""`.
pub fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) => format_float(*f),
        Data::Bool(true) => "True".to_string(),
        Data::Bool(false) => "False".to_string(),
        Data::DateTime(dt) => format_datetime(dt),
        Data::DateTimeIso(s) | Data::DurationIso(s) => s.clone(),
        Data::Error(e) => e.to_string(),
    }
}

/// Whole floats print without a decimal part (`7`, not `7.0`).
/// Very small or very large magnitudes use exponent form (`1e-05`).
fn format_float(f: f64) -> String {
    let magnitude = f.abs();
    if f.fract() == 0.0 && magnitude < 1e16 {
        format!("{}", f as i64)
    } else if f.is_finite() && (magnitude < 1e-4 || magnitude >= 1e16) {
        format_exponent(f)
    } else {
        format!("{}", f)
    }
}

/// `1e-5` → `1e-05`, `1.5e17` → `1.5e+17`
fn format_exponent(f: f64) -> String {
    let raw = format!("{:e}", f);
    match raw.split_once('e') {
        Some((mantissa, exp)) => match exp.parse::<i32>() {
            Ok(exp) => {
                let sign = if exp < 0 { '-' } else { '+' };
                format!("{}e{}{:02}", mantissa, sign, exp.unsigned_abs())
            }
            Err(_) => raw,
        },
        None => raw,
    }
}

fn format_datetime(dt: &ExcelDateTime) -> String {
    if dt.is_duration() {
        return match dt.as_duration() {
            Some(duration) => format_duration(duration),
            None => format_float(dt.as_f64()),
        };
    }

    match dt.as_datetime() {
        // Serial below 1 is a time of day with no date part
        Some(datetime) => format_naive_datetime(&datetime, dt.as_f64() < 1.0),
        None => format_float(dt.as_f64()),
    }
}

/// `2024-03-15 10:30:00`, or `10:30:00` when `time_only`.
/// Sub-second values add microseconds (`10:30:00.500000`).
fn format_naive_datetime(datetime: &NaiveDateTime, time_only: bool) -> String {
    let fmt = match (time_only, datetime.nanosecond() != 0) {
        (true, false) => "%H:%M:%S",
        (true, true) => "%H:%M:%S%.6f",
        (false, false) => "%Y-%m-%d %H:%M:%S",
        (false, true) => "%Y-%m-%d %H:%M:%S%.6f",
    };
    datetime.format(fmt).to_string()
}

fn format_duration(duration: Duration) -> String {
    format_hms(duration.num_seconds())
}

fn format_hms(total_seconds: i64) -> String {
    let sign = if total_seconds < 0 { "-" } else { "" };
    let secs = total_seconds.unsigned_abs();
    format!(
        "{}{:02}:{:02}:{:02}",
        sign,
        secs / 3600,
        (secs % 3600) / 60,
        secs % 60
    )
}
