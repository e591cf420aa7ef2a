use crate::error::Result;
use crate::fields::types::FieldDescriptor;
use crate::format::PLACEHOLDER;
use crate::project::Row;
use rust_xlsxwriter::{Format, Workbook};
use std::path::Path;

const SHEET_NAME: &str = "Facturas";

/// Write rows as an XLSX workbook at the given path: one sheet, bold
/// header row of field labels, one spreadsheet row per projected row.
pub fn write_xlsx(path: &Path, fields: &[FieldDescriptor], rows: &[Row]) -> Result<()> {
    let mut workbook = build_workbook(fields, rows)?;
    workbook.save(path)?;
    Ok(())
}

/// Same workbook, returned as in-memory bytes (for HTTP responses and
/// tests).
pub fn xlsx_bytes(fields: &[FieldDescriptor], rows: &[Row]) -> Result<Vec<u8>> {
    let mut workbook = build_workbook(fields, rows)?;
    Ok(workbook.save_to_buffer()?)
}

fn build_workbook(fields: &[FieldDescriptor], rows: &[Row]) -> Result<Workbook> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    let header = Format::new().set_bold();
    for (col, field) in fields.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, &field.label, &header)?;
    }

    for (i, row) in rows.iter().enumerate() {
        for (col, field) in fields.iter().enumerate() {
            let cell = row.get(&field.id).map(String::as_str).unwrap_or(PLACEHOLDER);
            worksheet.write_string((i + 1) as u32, col as u16, cell)?;
        }
    }

    worksheet.autofit();
    Ok(workbook)
}
