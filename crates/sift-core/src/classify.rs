//! Row classification: metadata prefix vs. table suffix.

use crate::cell::Row;

/// Splits a worksheet's rows at the first row containing a string cell
/// exactly equal to one of the wanted column names.
///
/// Returns `(metadata_rows, table_rows)`. The boundary is one-way: once a
/// row marks the table, every following row belongs to the table even if it
/// contains none of the wanted names. If no row ever matches, the whole
/// sheet is metadata and `table_rows` is empty.
pub fn partition_rows(rows: Vec<Row>, wanted_columns: &[String]) -> (Vec<Row>, Vec<Row>) {
    let boundary = rows
        .iter()
        .position(|row| row_marks_table(row, wanted_columns))
        .unwrap_or(rows.len());

    let mut metadata = rows;
    let table = metadata.split_off(boundary);
    (metadata, table)
}

/// A row marks the table start when any of its cells holds a string that
/// exactly equals a wanted column name. Non-string cells never match.
fn row_marks_table(row: &Row, wanted_columns: &[String]) -> bool {
    row.cells.iter().any(|cell| {
        cell.value
            .as_text()
            .is_some_and(|text| wanted_columns.iter().any(|wanted| wanted == text))
    })
}
