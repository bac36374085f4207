//! CSV exporter
//!
//! The header row is the seven fixed field names followed by every extra key
//! found in any record, sorted. Missing values are written as empty cells.
//! Nothing is written for an empty record list.

use crate::output::traits::{Exporter, OutputResult};
use crate::record::{field_names, ContactRecord};
use std::io::Write;
use std::path::Path;

/// Writes records as CSV with a header row
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvExporter;

/// Writes the header and one row per record to any writer
pub fn write_csv<W: Write>(records: &[ContactRecord], writer: W) -> OutputResult<()> {
    let fields = field_names(records);
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer.write_record(&fields)?;
    for record in records {
        csv_writer.write_record(
            fields
                .iter()
                .map(|field| record.get(field).unwrap_or_default()),
        )?;
    }
    csv_writer.flush()?;

    Ok(())
}

impl Exporter for CsvExporter {
    fn name(&self) -> &'static str {
        "CSV"
    }

    fn export(&self, records: &[ContactRecord], output_path: &Path) -> OutputResult<()> {
        if records.is_empty() {
            tracing::warn!("No contacts provided for CSV export.");
            return Ok(());
        }

        let file = std::fs::File::create(output_path)?;
        write_csv(records, file)?;

        tracing::info!("CSV export completed: {}", output_path.display());
        Ok(())
    }
}
