//! Projection of records and header columns onto the wanted-column set.

use crate::config::ExtractConfig;
use crate::record::Record;

/// Returns a new record containing exactly the fields whose names are in
/// the wanted-column set, in the record's original key order.
///
/// This is a pure function; the input record is left untouched. Wanted
/// columns absent from the record are simply absent from the output.
pub fn project_record(record: &Record, config: &ExtractConfig) -> Record {
    let mut projected = Record::new();
    for (name, cell) in record.iter() {
        if config.is_wanted(name) {
            projected.insert(name.to_string(), cell.clone());
        }
    }
    projected
}

/// Restricts the header column list to the wanted names that actually
/// occurred, preserving original header order (not wanted-list order).
pub fn projected_columns(columns: &[String], config: &ExtractConfig) -> Vec<String> {
    columns
        .iter()
        .filter(|name| config.is_wanted(name))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::{Cell, CellValue};
    use crate::config::FilterSpec;

    fn config(wanted: &[&str]) -> ExtractConfig {
        ExtractConfig::new(
            wanted.iter().map(|s| (*s).to_string()).collect(),
            FilterSpec::new("x", "y"),
        )
    }

    fn record(names: &[&str]) -> Record {
        let mut record = Record::new();
        for (col, name) in names.iter().enumerate() {
            record.insert(
                (*name).to_string(),
                Cell::new(col as u32, CellValue::Text("v".into())),
            );
        }
        record
    }

    #[test]
    fn test_project_drops_unwanted_keys() {
        let config = config(&["Name", "Role"]);
        let record = record(&["Name", "Age", "Role"]);
        let projected = project_record(&record, &config);
        assert_eq!(projected.keys().collect::<Vec<_>>(), vec!["Name", "Role"]);
        // source untouched
        assert_eq!(record.len(), 3);
    }

    #[test]
    fn test_project_keeps_record_order_not_wanted_order() {
        let config = config(&["Role", "Name"]);
        let record = record(&["Name", "Role"]);
        let projected = project_record(&record, &config);
        assert_eq!(projected.keys().collect::<Vec<_>>(), vec!["Name", "Role"]);
    }

    #[test]
    fn test_projected_columns_intersection_in_header_order() {
        let config = config(&["Role", "Name"]);
        let columns = vec!["Name".to_string(), "Age".to_string(), "Role".to_string()];
        assert_eq!(projected_columns(&columns, &config), vec!["Name", "Role"]);
    }
}
