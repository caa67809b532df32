//! Cell, row, and value types shared by every pipeline stage.

use chrono::NaiveDateTime;

/// A typed cell value as read from a worksheet.
///
/// Formula cells arrive here already resolved to their last computed value;
/// the pipeline never sees formula text.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// A string cell.
    Text(String),
    /// A numeric cell. Spreadsheets store integers as floats, so `30` and
    /// `30.0` are the same value.
    Number(f64),
    /// A boolean cell.
    Bool(bool),
    /// A date or datetime cell.
    DateTime(NaiveDateTime),
    /// A blank cell.
    Empty,
}

impl CellValue {
    /// Returns the string content for text cells, `None` otherwise.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns true for blank cells.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Renders the value as the string used for filter comparison, column
    /// sizing, and header names.
    ///
    /// Numbers with no fractional part render without a trailing `.0`, so a
    /// numeric cell holding `30` compares equal to the target string `"30"`.
    /// Datetimes render date-only; blanks render as the empty string.
    pub fn render(&self) -> String {
        match self {
            Self::Text(s) => s.clone(),
            Self::Number(n) => render_number(*n),
            Self::Bool(b) => {
                if *b {
                    "TRUE".to_string()
                } else {
                    "FALSE".to_string()
                }
            }
            Self::DateTime(dt) => dt.date().format("%Y-%m-%d").to_string(),
            Self::Empty => String::new(),
        }
    }
}

fn render_number(n: f64) -> String {
    // i64 can represent every integral f64 in this range exactly
    if n.is_finite() && n.fract() == 0.0 && n.abs() < 9_007_199_254_740_992.0 {
        format!("{}", n as i64)
    } else {
        format!("{n}")
    }
}

/// A cell together with its 0-based column index in the source worksheet.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    /// 0-based column index.
    pub column: u32,
    /// The cell value.
    pub value: CellValue,
}

impl Cell {
    pub fn new(column: u32, value: CellValue) -> Self {
        Self { column, value }
    }
}

/// A worksheet row: its 0-based row index plus a dense, positional list of
/// cells starting at the sheet's first used column.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    /// 0-based row index in the source worksheet.
    pub index: u32,
    /// Cells in column order.
    pub cells: Vec<Cell>,
}

impl Row {
    pub fn new(index: u32, cells: Vec<Cell>) -> Self {
        Self { index, cells }
    }

    /// Builds a row from string values, columns starting at 0.
    pub fn from_strings(index: u32, values: &[&str]) -> Self {
        let cells = values
            .iter()
            .enumerate()
            .map(|(col, v)| Cell::new(col as u32, CellValue::Text((*v).to_string())))
            .collect();
        Self { index, cells }
    }
}
