//! Exact-match filtering of records on one named column.

use crate::record::Record;

/// Finds the header name whose lowercase form equals the lowercase form of
/// `requested`.
///
/// On duplicate case-insensitive header names the first occurrence wins;
/// returns `None` when nothing matches.
pub fn resolve_filter_column<'a>(columns: &'a [String], requested: &str) -> Option<&'a str> {
    let requested = requested.to_lowercase();
    columns
        .iter()
        .find(|name| name.to_lowercase() == requested)
        .map(String::as_str)
}

/// Retains the records whose stringified cell in `column` equals `target`
/// byte-for-byte.
///
/// The comparison is case-sensitive and not numeric-aware: a numeric cell
/// survives only if its rendered form matches `target` exactly. A record
/// that lacks the column (short source row) never matches.
pub fn filter_records(records: Vec<Record>, column: &str, target: &str) -> Vec<Record> {
    records
        .into_iter()
        .filter(|record| {
            record
                .get(column)
                .is_some_and(|cell| cell.value.render() == target)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::{Cell, CellValue};

    fn record(fields: &[(&str, CellValue)]) -> Record {
        let mut record = Record::new();
        for (col, (name, value)) in fields.iter().enumerate() {
            record.insert((*name).to_string(), Cell::new(col as u32, value.clone()));
        }
        record
    }

    #[test]
    fn test_resolve_is_case_insensitive_first_match() {
        let columns = vec![
            "Name".to_string(),
            "ROLE".to_string(),
            "role".to_string(),
        ];
        assert_eq!(resolve_filter_column(&columns, "Role"), Some("ROLE"));
        assert_eq!(resolve_filter_column(&columns, "salary"), None);
    }

    #[test]
    fn test_filter_exact_value_match() {
        let records = vec![
            record(&[("Role", CellValue::Text("Engineer".into()))]),
            record(&[("Role", CellValue::Text("Director".into()))]),
        ];
        let kept = filter_records(records, "Role", "Engineer");
        assert_eq!(kept.len(), 1);
    }

    #[test]
    fn test_filter_value_is_case_sensitive() {
        let records = vec![record(&[("Role", CellValue::Text("Engineer".into()))])];
        assert!(filter_records(records, "Role", "engineer").is_empty());
    }

    #[test]
    fn test_filter_numeric_cell_against_string_target() {
        let records = vec![
            record(&[("Age", CellValue::Number(30.0))]),
            record(&[("Age", CellValue::Number(40.0))]),
        ];
        let kept = filter_records(records, "Age", "30");
        assert_eq!(kept.len(), 1);
    }

    #[test]
    fn test_record_missing_column_is_excluded() {
        let records = vec![record(&[("Name", CellValue::Text("Ivanov".into()))])];
        assert!(filter_records(records, "Role", "Engineer").is_empty());
    }
}
