//! Styled XLSX writing with rust_xlsxwriter.

use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::Path;

use rust_xlsxwriter::{Format, FormatAlign, FormatBorder, Workbook, Worksheet, XlsxError};
use tracing::debug;

use sift_core::{CellValue, SheetTable};

use crate::error::{OutputError, Result};

/// Fixed margin added to the longest rendered value of each column.
const WIDTH_MARGIN: usize = 10;

/// Writes the result workbook: one worksheet per extracted sheet, metadata
/// at original coordinates, a bold centered header row, bordered data rows,
/// and per-column widths sized to the longest rendered value plus a margin.
///
/// # Errors
///
/// A destination held by another process or unwritable surfaces as
/// [`OutputError::FileLocked`]; other save failures as
/// [`OutputError::Save`].
pub fn write_workbook(path: &Path, sheets: &[(String, SheetTable)]) -> Result<()> {
    let mut workbook = Workbook::new();
    for (name, table) in sheets {
        let worksheet = workbook.add_worksheet();
        worksheet
            .set_name(name)
            .map_err(|error| write_error(name, &error))?;
        write_sheet(worksheet, name, table)?;
    }
    workbook.save(path).map_err(|error| match error {
        XlsxError::IoError(source) if source.kind() == ErrorKind::PermissionDenied => {
            OutputError::FileLocked {
                path: path.to_path_buf(),
                source,
            }
        }
        other => OutputError::Save {
            path: path.to_path_buf(),
            message: other.to_string(),
        },
    })
}

fn write_sheet(worksheet: &mut Worksheet, name: &str, table: &SheetTable) -> Result<()> {
    let metadata_date = Format::new().set_num_format("dd/mm/yy");
    let header = Format::new()
        .set_bold()
        .set_align(FormatAlign::Center)
        .set_align(FormatAlign::VerticalCenter)
        .set_border(FormatBorder::Thin);
    let data = Format::new().set_border(FormatBorder::Thin);
    let data_date = Format::new()
        .set_border(FormatBorder::Thin)
        .set_num_format("dd/mm/yy");

    // Longest rendered value per column; widths are applied at the end.
    let mut widths: BTreeMap<u16, usize> = BTreeMap::new();
    fn track(widths: &mut BTreeMap<u16, usize>, col: u16, text: &str) {
        let len = text.chars().count();
        let entry = widths.entry(col).or_default();
        *entry = (*entry).max(len);
    }

    for row in &table.metadata_rows {
        for cell in &row.cells {
            let Ok(col) = u16::try_from(cell.column) else {
                continue;
            };
            match &cell.value {
                // Blank metadata cells are not re-emitted.
                CellValue::Empty => continue,
                CellValue::Text(s) => {
                    worksheet
                        .write_string(row.index, col, s)
                        .map_err(|error| write_error(name, &error))?;
                }
                CellValue::Number(n) => {
                    worksheet
                        .write_number(row.index, col, *n)
                        .map_err(|error| write_error(name, &error))?;
                }
                CellValue::Bool(b) => {
                    worksheet
                        .write_boolean(row.index, col, *b)
                        .map_err(|error| write_error(name, &error))?;
                }
                // Datetime metadata is normalized to date-only formatting.
                CellValue::DateTime(dt) => {
                    worksheet
                        .write_datetime_with_format(row.index, col, &dt.date(), &metadata_date)
                        .map_err(|error| write_error(name, &error))?;
                }
            }
            track(&mut widths, col, &cell.value.render());
        }
    }

    // The header row lands directly below the metadata block.
    let header_row = table
        .metadata_rows
        .iter()
        .map(|row| row.index)
        .max()
        .map_or(0, |last| last + 1);

    for (j, column) in table.columns.iter().enumerate() {
        let col = j as u16;
        worksheet
            .write_string_with_format(header_row, col, column, &header)
            .map_err(|error| write_error(name, &error))?;
        track(&mut widths, col, column);
    }

    for (i, record) in table.records.iter().enumerate() {
        let row = header_row + 1 + i as u32;
        for (j, column) in table.columns.iter().enumerate() {
            let col = j as u16;
            let Some(cell) = record.get(column) else {
                // Wanted column absent from this record: bordered blank.
                worksheet
                    .write_blank(row, col, &data)
                    .map_err(|error| write_error(name, &error))?;
                continue;
            };
            match &cell.value {
                CellValue::Text(s) => {
                    worksheet
                        .write_string_with_format(row, col, s, &data)
                        .map_err(|error| write_error(name, &error))?;
                }
                CellValue::Number(n) => {
                    worksheet
                        .write_number_with_format(row, col, *n, &data)
                        .map_err(|error| write_error(name, &error))?;
                }
                CellValue::Bool(b) => {
                    worksheet
                        .write_boolean_with_format(row, col, *b, &data)
                        .map_err(|error| write_error(name, &error))?;
                }
                CellValue::DateTime(dt) => {
                    worksheet
                        .write_datetime_with_format(row, col, &dt.date(), &data_date)
                        .map_err(|error| write_error(name, &error))?;
                }
                CellValue::Empty => {
                    worksheet
                        .write_blank(row, col, &data)
                        .map_err(|error| write_error(name, &error))?;
                }
            }
            track(&mut widths, col, &cell.value.render());
        }
    }

    for (col, longest) in &widths {
        worksheet
            .set_column_width(*col, (longest + WIDTH_MARGIN) as f64)
            .map_err(|error| write_error(name, &error))?;
    }

    debug!(
        sheet = %name,
        header_row,
        records = table.records.len(),
        "worksheet written"
    );
    Ok(())
}

fn write_error(sheet: &str, error: &XlsxError) -> OutputError {
    OutputError::Write {
        sheet: sheet.to_string(),
        message: error.to_string(),
    }
}
