//! Spreadsheet exporter
//!
//! Same header and row layout as the CSV exporter, written to a single
//! worksheet named "Contacts". Nothing is written for an empty record list.

use crate::output::traits::{Exporter, OutputResult};
use crate::record::{field_names, ContactRecord};
use rust_xlsxwriter::Workbook;
use std::path::Path;

/// Name of the only worksheet in the workbook
pub const SHEET_NAME: &str = "Contacts";

/// Writes records to an `.xlsx` workbook
#[derive(Debug, Clone, Copy, Default)]
pub struct XlsxExporter;

/// Builds the workbook in memory
pub fn build_workbook(records: &[ContactRecord]) -> OutputResult<Workbook> {
    let fields = field_names(records);
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    for (col, field) in fields.iter().enumerate() {
        worksheet.write_string(0, col as u16, field.as_str())?;
    }

    for (row, record) in records.iter().enumerate() {
        for (col, field) in fields.iter().enumerate() {
            let value = record.get(field).unwrap_or_default();
            worksheet.write_string(row as u32 + 1, col as u16, value)?;
        }
    }

    Ok(workbook)
}

impl Exporter for XlsxExporter {
    fn name(&self) -> &'static str {
        "Excel"
    }

    fn export(&self, records: &[ContactRecord], output_path: &Path) -> OutputResult<()> {
        if records.is_empty() {
            tracing::warn!("No contacts provided for Excel export.");
            return Ok(());
        }

        let mut workbook = build_workbook(records)?;
        workbook.save(output_path)?;

        tracing::info!("Excel export completed: {}", output_path.display());
        Ok(())
    }
}
