//! Per-sheet extraction: the composed classify → materialize → filter →
//! project pipeline.

use tracing::debug;

use crate::cell::Row;
use crate::classify::partition_rows;
use crate::config::ExtractConfig;
use crate::error::{PipelineError, Result};
use crate::filter::{filter_records, resolve_filter_column};
use crate::materialize::{header_columns, materialize_records};
use crate::project::{project_record, projected_columns};
use crate::record::Record;

/// The extraction result for one worksheet.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetTable {
    /// Rows above the table, preserved verbatim with original coordinates.
    pub metadata_rows: Vec<Row>,
    /// Wanted header names that actually occurred, in header order.
    pub columns: Vec<String>,
    /// Filtered and projected records, in original row order.
    pub records: Vec<Record>,
}

/// Runs the full pipeline over one worksheet's rows.
///
/// # Errors
///
/// - [`PipelineError::TablesNotFound`] when no row contains any wanted
///   column name.
/// - [`PipelineError::FieldNotFound`] when the filter column has no
///   case-insensitive match among the headers.
/// - [`PipelineError::RowsNotFound`] when the predicate matches no rows.
pub fn extract_sheet(rows: Vec<Row>, config: &ExtractConfig) -> Result<SheetTable> {
    let total_rows = rows.len();
    let (metadata_rows, table_rows) = partition_rows(rows, &config.wanted_columns);

    let Some((header, data_rows)) = table_rows.split_first() else {
        return Err(PipelineError::TablesNotFound);
    };

    let columns = header_columns(header);
    debug!(
        total_rows,
        metadata_rows = metadata_rows.len(),
        columns = columns.len(),
        "table boundary found"
    );

    let column = resolve_filter_column(&columns, &config.filter.column)
        .ok_or_else(|| PipelineError::FieldNotFound {
            column: config.filter.column.clone(),
        })?
        .to_string();

    let records = materialize_records(&columns, data_rows);
    let kept = filter_records(records, &column, &config.filter.value);
    if kept.is_empty() {
        return Err(PipelineError::RowsNotFound {
            column,
            value: config.filter.value.clone(),
        });
    }

    let records = kept
        .iter()
        .map(|record| project_record(record, config))
        .collect();

    Ok(SheetTable {
        metadata_rows,
        columns: projected_columns(&columns, config),
        records,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FilterSpec;

    fn sample_rows() -> Vec<Row> {
        vec![
            Row::from_strings(0, &["Staff report", ""]),
            Row::from_strings(1, &["Q1 2024", ""]),
            Row::from_strings(2, &["Name", "Age", "Role"]),
            Row::from_strings(3, &["Ivanov", "30", "Engineer"]),
            Row::from_strings(4, &["Petrov", "40", "Engineer"]),
            Row::from_strings(5, &["Sidorov", "50", "Director"]),
        ]
    }

    fn config() -> ExtractConfig {
        ExtractConfig::new(
            vec!["Name".to_string(), "Role".to_string()],
            FilterSpec::new("role", "Engineer"),
        )
    }

    #[test]
    fn test_extract_filters_and_projects() {
        let table = extract_sheet(sample_rows(), &config()).unwrap();
        assert_eq!(table.metadata_rows.len(), 2);
        assert_eq!(table.columns, vec!["Name", "Role"]);
        assert_eq!(table.records.len(), 2);
        assert_eq!(
            table.records[0].get("Name").map(|c| c.value.render()),
            Some("Ivanov".to_string())
        );
        assert!(!table.records[0].contains("Age"));
    }

    #[test]
    fn test_extract_no_table() {
        let rows = vec![Row::from_strings(0, &["nothing", "here"])];
        let err = extract_sheet(rows, &config()).unwrap_err();
        assert!(matches!(err, PipelineError::TablesNotFound));
    }

    #[test]
    fn test_extract_unknown_field() {
        let mut config = config();
        config.filter = FilterSpec::new("Salary", "100");
        let err = extract_sheet(sample_rows(), &config).unwrap_err();
        assert!(matches!(err, PipelineError::FieldNotFound { column } if column == "Salary"));
    }

    #[test]
    fn test_extract_no_matching_rows() {
        let mut config = config();
        config.filter = FilterSpec::new("role", "Intern");
        let err = extract_sheet(sample_rows(), &config).unwrap_err();
        assert!(matches!(err, PipelineError::RowsNotFound { .. }));
    }

    #[test]
    fn test_header_without_data_rows_is_rows_not_found() {
        let rows = vec![Row::from_strings(0, &["Name", "Age", "Role"])];
        let err = extract_sheet(rows, &config()).unwrap_err();
        assert!(matches!(err, PipelineError::RowsNotFound { .. }));
    }
}
