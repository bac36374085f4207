//! JSON exporter
//!
//! The full record list is written pretty-printed with a four-space indent.
//! Non-ASCII text is written as UTF-8, not escaped. An empty list is still
//! written (as `[]`).

use crate::output::traits::{Exporter, OutputError, OutputResult};
use crate::record::ContactRecord;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writes records as a JSON array
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonExporter;

/// Renders records exactly as [`JsonExporter`] writes them
pub fn to_json_string(records: &[ContactRecord]) -> OutputResult<String> {
    let mut buffer = Vec::new();
    write_json(records, &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| OutputError::Write(e.to_string()))
}

fn write_json<W: Write>(records: &[ContactRecord], writer: W) -> OutputResult<()> {
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(writer, formatter);
    records.serialize(&mut serializer)?;
    Ok(())
}

impl Exporter for JsonExporter {
    fn name(&self) -> &'static str {
        "JSON"
    }

    fn export(&self, records: &[ContactRecord], output_path: &Path) -> OutputResult<()> {
        let mut writer = BufWriter::new(File::create(output_path)?);
        write_json(records, &mut writer)?;
        writer.flush()?;

        tracing::info!("JSON export completed: {}", output_path.display());
        Ok(())
    }
}
