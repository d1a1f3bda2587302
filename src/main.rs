use anyhow::Context;
use catalog_export::cli;
use catalog_export::config::ExportConfig;
use catalog_export::error::CatalogError;
use catalog_export::types::ExportReport;
use clap::Parser;
use colored::Colorize;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "catalog-export")]
#[command(about = "Export the sheets of a catalog workbook to one JSON file per sheet")]
#[command(long_about = "Catalog Export - workbook sheets to JSON

Reads each configured sheet of the workbook and writes it to
<output-dir>/<sheet lowercased>.json as an array of records.
Every value is exported as text; empty cells become \"\".
Sheets missing from the workbook are skipped with a warning.

DEFAULT SHEETS:
  Metadata, Schema, Classes, Subclasses, Objects, Attributes,
  Link_Object_Attribute, Domains

CONFIG FILE (--config, YAML, every key optional):
  workbook: Catalogo_Normalizado.xlsx
  output_dir: datos
  sheets: [Metadata, Schema]

Command-line arguments and environment variables override the config file.

EXAMPLES:
  catalog-export                                  # Catalogo_Normalizado.xlsx → datos/
  catalog-export catalog.xlsx -o json
  catalog-export catalog.xlsx --sheet Metadata,Classes")]
#[command(version)]
struct Cli {
    /// Path to the workbook (.xlsx, .xls, .xlsb, .ods)
    #[arg(env = "CATALOG_WORKBOOK")]
    workbook: Option<PathBuf>,

    /// Directory for the JSON files (created if absent)
    #[arg(short, long, env = "CATALOG_OUTPUT_DIR")]
    output_dir: Option<PathBuf>,

    /// Sheet to export (repeatable or comma-separated); replaces the default list
    #[arg(short, long = "sheet", value_delimiter = ',')]
    sheets: Vec<String>,

    /// YAML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Show verbose output and debug logs
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "warn,catalog_export=debug"
    } else {
        "warn"
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .init();
}

fn resolve_config(cli: &Cli) -> anyhow::Result<ExportConfig> {
    let mut config = match &cli.config {
        Some(path) => ExportConfig::from_yaml_file(path).context("Invalid configuration")?,
        None => ExportConfig::default(),
    };

    if let Some(workbook) = &cli.workbook {
        config.workbook = workbook.clone();
    }
    if let Some(output_dir) = &cli.output_dir {
        config.output_dir = output_dir.clone();
    }
    if !cli.sheets.is_empty() {
        config.sheets = cli.sheets.clone();
    }

    Ok(config)
}

fn run(cli: &Cli) -> anyhow::Result<ExportReport> {
    let config = resolve_config(cli)?;
    let report = cli::export(&config, cli.verbose)?;
    Ok(report)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {:#}", "ERROR:".red().bold(), err);
            if let Some(CatalogError::WorkbookNotFound(_)) = err.downcast_ref::<CatalogError>() {
                eprintln!("Make sure the workbook path is correct (relative paths start from the current directory).");
            }
            ExitCode::FAILURE
        }
    }
}
