use crate::config::ExportConfig;
use crate::error::CatalogResult;
use crate::excel::CatalogReader;
use crate::types::{ExportReport, SheetExport};
use crate::writer;
use colored::Colorize;
use tracing::{debug, info};

/// Execute the export: one JSON file per configured sheet found in the workbook.
///
/// Missing sheets are reported and skipped. The workbook is opened before the
/// output directory is created, so a missing or unreadable workbook leaves no
/// trace; later failures leave files already written in place.
pub fn export(config: &ExportConfig, verbose: bool) -> CatalogResult<ExportReport> {
    println!("{}", "📚 Catalog Export".bold().green());
    println!("   Workbook: {}", config.workbook.display());
    println!("   Output:   {}\n", config.output_dir.display());

    println!("Reading '{}'...", config.workbook.display());
    let mut reader = CatalogReader::open(&config.workbook)?;

    writer::ensure_output_dir(&config.output_dir)?;

    if verbose {
        println!(
            "   Workbook sheets: {}\n",
            reader.sheet_names().join(", ").bright_blue()
        );
    }

    let mut report = ExportReport::new();

    for sheet in &config.sheets {
        if !reader.has_sheet(sheet) {
            debug!(sheet = %sheet, "sheet not found in workbook");
            println!(
                "{}",
                format!("WARNING: Sheet '{}' not found in the workbook.", sheet).yellow()
            );
            report.add_missing(sheet.clone());
            continue;
        }

        println!("Processing sheet: '{}'...", sheet.cyan());
        let records = reader.read_records(sheet)?;

        let path = config.output_path_for(sheet);
        writer::write_records(&path, &records)?;
        debug!(sheet = %sheet, path = %path.display(), records = records.len(), "wrote sheet");

        if verbose {
            println!("   {} records → {}", records.len(), path.display());
        }

        report.add_export(SheetExport {
            sheet: sheet.clone(),
            path,
            records: records.len(),
        });
    }

    info!(
        exported = report.exported.len(),
        missing = report.missing.len(),
        records = report.total_records(),
        "export finished"
    );

    println!(
        "\n{}",
        format!(
            "✅ Success! JSON files saved in '{}'.",
            config.output_dir.display()
        )
        .bold()
        .green()
    );
    if verbose {
        println!(
            "   {} sheets exported, {} missing, {} records total\n",
            report.exported.len(),
            report.missing.len(),
            report.total_records()
        );
    }

    Ok(report)
}
