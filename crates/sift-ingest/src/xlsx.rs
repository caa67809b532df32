//! Values-only XLSX reading with calamine.

use std::fs::File;
use std::io::{BufReader, ErrorKind};
use std::path::Path;

use calamine::{Data, Range, Reader, Xlsx, open_workbook};
use tracing::debug;

use sift_core::{Cell, CellValue, Row};

use crate::error::{IngestError, Result};

/// One worksheet's rows, in sheet order.
#[derive(Debug, Clone)]
pub struct SheetRows {
    /// Worksheet name.
    pub name: String,
    /// Dense rows covering the sheet's used range, absolute coordinates.
    pub rows: Vec<Row>,
}

/// Opens the workbook at `path` and reads every worksheet's used range.
///
/// Access is values-only: formula cells arrive as their last computed
/// value. A locked or unreadable file is reported as
/// [`IngestError::FileLocked`] before anything else happens.
pub fn read_workbook(path: &Path) -> Result<Vec<SheetRows>> {
    probe_readable(path)?;

    let mut workbook: Xlsx<BufReader<File>> =
        open_workbook(path).map_err(|error: calamine::XlsxError| IngestError::Workbook {
            path: path.to_path_buf(),
            message: error.to_string(),
        })?;

    let mut sheets = Vec::new();
    for name in workbook.sheet_names() {
        let range = workbook
            .worksheet_range(&name)
            .map_err(|error| IngestError::SheetRead {
                sheet: name.clone(),
                message: error.to_string(),
            })?;
        let rows = range_to_rows(&range);
        debug!(sheet = %name, rows = rows.len(), "worksheet read");
        sheets.push(SheetRows { name, rows });
    }
    Ok(sheets)
}

/// Classifies open failures before handing the path to the workbook parser,
/// so a locked file is reported distinctly and before any output exists.
fn probe_readable(path: &Path) -> Result<()> {
    match File::open(path) {
        Ok(_) => Ok(()),
        Err(error) if error.kind() == ErrorKind::NotFound => Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        }),
        Err(error) if error.kind() == ErrorKind::PermissionDenied => {
            Err(IngestError::FileLocked {
                path: path.to_path_buf(),
                source: error,
            })
        }
        Err(error) => Err(IngestError::FileRead {
            path: path.to_path_buf(),
            source: error,
        }),
    }
}

fn range_to_rows(range: &Range<Data>) -> Vec<Row> {
    let Some((start_row, start_col)) = range.start() else {
        return Vec::new();
    };
    range
        .rows()
        .enumerate()
        .map(|(i, cells)| {
            let cells = cells
                .iter()
                .enumerate()
                .map(|(j, data)| Cell::new(start_col + j as u32, convert_cell(data)))
                .collect();
            Row::new(start_row + i as u32, cells)
        })
        .collect()
}

fn convert_cell(data: &Data) -> CellValue {
    match data {
        Data::Empty => CellValue::Empty,
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Float(f) => CellValue::Number(*f),
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Bool(b) => CellValue::Bool(*b),
        Data::DateTime(dt) => dt
            .as_datetime()
            .map_or(CellValue::Number(dt.as_f64()), CellValue::DateTime),
        // ISO datetime/duration strings and cell errors pass through as text
        Data::DateTimeIso(s) | Data::DurationIso(s) => CellValue::Text(s.clone()),
        Data::Error(e) => CellValue::Text(e.to_string()),
    }
}
