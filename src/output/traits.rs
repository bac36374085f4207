//! Exporter trait and error types
//!
//! This module defines the trait interface implemented by every export
//! format and the errors they can raise.

use crate::record::ContactRecord;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur during output operations
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to write CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("Failed to write spreadsheet: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    #[error("Failed to write output: {0}")]
    Write(String),
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;

/// Trait for record exporters
///
/// Exporters write the complete, already assembled list of records in one
/// go at the end of a run.
pub trait Exporter {
    /// Short name of the format, used in log messages
    fn name(&self) -> &'static str;

    /// Writes the records to `output_path`
    ///
    /// # Arguments
    ///
    /// * `records` - Every record produced by the run, in input order
    /// * `output_path` - Destination file
    ///
    /// # Returns
    ///
    /// * `Ok(())` - The records were written, or there was nothing to write
    ///   for a format that skips empty input
    /// * `Err(OutputError)` - The file could not be written
    fn export(&self, records: &[ContactRecord], output_path: &Path) -> OutputResult<()>;
}
