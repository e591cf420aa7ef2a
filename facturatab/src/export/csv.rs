use crate::error::{FacturaTabError, Result};
use crate::fields::types::FieldDescriptor;
use crate::format::PLACEHOLDER;
use crate::project::Row;
use std::path::Path;

/// Render rows as CSV text: one header record of field labels, then one
/// record per row in field order.
pub fn to_csv_string(fields: &[FieldDescriptor], rows: &[Row]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    write_records(&mut writer, fields, rows)?;
    let bytes = writer
        .into_inner()
        .map_err(|e| FacturaTabError::Export(format!("CSV buffer flush failed: {e}")))?;
    String::from_utf8(bytes)
        .map_err(|e| FacturaTabError::Export(format!("CSV output was not UTF-8: {e}")))
}

/// Write rows as a CSV file at the given path.
pub fn write_csv(path: &Path, fields: &[FieldDescriptor], rows: &[Row]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    write_records(&mut writer, fields, rows)?;
    writer.flush()?;
    Ok(())
}

fn write_records<W: std::io::Write>(
    writer: &mut csv::Writer<W>,
    fields: &[FieldDescriptor],
    rows: &[Row],
) -> Result<()> {
    writer.write_record(fields.iter().map(|f| f.label.as_str()))?;
    for row in rows {
        writer.write_record(
            fields
                .iter()
                .map(|f| row.get(&f.id).map(String::as_str).unwrap_or(PLACEHOLDER)),
        )?;
    }
    Ok(())
}
