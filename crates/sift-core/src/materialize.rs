//! Row materialization: header extraction and record construction.

use crate::cell::Row;
use crate::record::Record;

/// Extracts the column-name list from the table's header row.
///
/// Cell values are rendered in order; duplicates and blanks pass through
/// as-is. No deduplication or validation happens here.
pub fn header_columns(header: &Row) -> Vec<String> {
    header.cells.iter().map(|cell| cell.value.render()).collect()
}

/// Zips each data row positionally against the header columns to build
/// records.
///
/// A row shorter than the header simply lacks its trailing columns; cells
/// beyond the header width are dropped. Duplicate header names collapse to
/// one key per [`Record`] semantics.
pub fn materialize_records(columns: &[String], rows: &[Row]) -> Vec<Record> {
    rows.iter()
        .map(|row| {
            let mut record = Record::new();
            for (name, cell) in columns.iter().zip(row.cells.iter()) {
                record.insert(name.clone(), cell.clone());
            }
            record
        })
        .collect()
}
