//! Output module for exporting gathered contact records
//!
//! This module handles:
//! - Selecting an export format
//! - Writing records as JSON, CSV or an Excel workbook
//! - Summarizing a run's coverage

mod csv_output;
mod json_output;
pub mod stats;
mod traits;
mod xlsx_output;

pub use csv_output::{write_csv, CsvExporter};
pub use json_output::{to_json_string, JsonExporter};
pub use stats::{log_statistics, RunStatistics};
pub use traits::{Exporter, OutputError, OutputResult};
pub use xlsx_output::{build_workbook, XlsxExporter, SHEET_NAME};

use crate::record::ContactRecord;
use std::path::Path;

/// Supported export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportFormat {
    /// Pretty-printed JSON array
    Json,
    /// Comma-separated values with a header row
    Csv,
    /// Excel workbook
    #[value(alias = "excel")]
    Xlsx,
}

impl ExportFormat {
    /// Returns the exporter for this format
    pub fn exporter(&self) -> Box<dyn Exporter> {
        match self {
            ExportFormat::Json => Box::new(JsonExporter),
            ExportFormat::Csv => Box::new(CsvExporter),
            ExportFormat::Xlsx => Box::new(XlsxExporter),
        }
    }
}

/// Exports records in the requested format
///
/// # Arguments
///
/// * `records` - The records to write
/// * `output_path` - Destination file
/// * `format` - Export format
///
/// # Returns
///
/// * `Ok(())` - Export finished (CSV and Excel skip empty input)
/// * `Err(OutputError)` - Failed to write the file
pub fn export_records(
    records: &[ContactRecord],
    output_path: &Path,
    format: ExportFormat,
) -> OutputResult<()> {
    let exporter = format.exporter();
    tracing::debug!(
        "Exporting {} records as {} to {}",
        records.len(),
        exporter.name(),
        output_path.display()
    );

    exporter.export(records, output_path).map_err(|e| {
        tracing::error!(
            "Failed to export {} to '{}': {}",
            exporter.name(),
            output_path.display(),
            e
        );
        e
    })
}
