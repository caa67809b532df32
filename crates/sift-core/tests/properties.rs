//! Property tests for the partition and projection stages.

use proptest::prelude::*;

use sift_core::{Cell, CellValue, ExtractConfig, FilterSpec, Record, Row, partition_rows,
    project_record};

fn wanted() -> Vec<String> {
    vec!["K1".to_string(), "K2".to_string()]
}

/// Rows built from a small vocabulary that sometimes contains the wanted
/// column names, so generated sheets hit every boundary position.
fn arb_rows() -> impl Strategy<Value = Vec<Row>> {
    let cell = prop_oneof![
        Just("K1".to_string()),
        Just("K2".to_string()),
        Just("noise".to_string()),
        Just(String::new()),
        Just("другое".to_string()),
    ];
    prop::collection::vec(prop::collection::vec(cell, 0..5), 0..10).prop_map(|grid| {
        grid.into_iter()
            .enumerate()
            .map(|(i, values)| {
                let refs: Vec<&str> = values.iter().map(String::as_str).collect();
                Row::from_strings(i as u32, &refs)
            })
            .collect()
    })
}

fn row_has_wanted(row: &Row, wanted: &[String]) -> bool {
    row.cells.iter().any(|cell| {
        cell.value
            .as_text()
            .is_some_and(|text| wanted.iter().any(|w| w == text))
    })
}

proptest! {
    #[test]
    fn partition_is_order_preserving_and_lossless(rows in arb_rows()) {
        let wanted = wanted();
        let (metadata, table) = partition_rows(rows.clone(), &wanted);
        let recombined: Vec<Row> = metadata.iter().cloned().chain(table.iter().cloned()).collect();
        prop_assert_eq!(recombined, rows);
    }

    #[test]
    fn metadata_prefix_never_contains_a_wanted_name(rows in arb_rows()) {
        let wanted = wanted();
        let (metadata, table) = partition_rows(rows, &wanted);
        for row in &metadata {
            prop_assert!(!row_has_wanted(row, &wanted));
        }
        if let Some(first) = table.first() {
            prop_assert!(row_has_wanted(first, &wanted));
        }
    }

    #[test]
    fn projection_yields_exactly_the_wanted_intersection(
        keys in prop::collection::vec("[a-d]", 0..6),
        wanted in prop::collection::vec("[a-d]", 0..4),
    ) {
        let config = ExtractConfig::new(wanted.clone(), FilterSpec::new("x", "y"));
        let mut record = Record::new();
        for (col, key) in keys.iter().enumerate() {
            record.insert(key.clone(), Cell::new(col as u32, CellValue::Empty));
        }
        let projected = project_record(&record, &config);
        let expected: Vec<&str> = record
            .keys()
            .filter(|key| wanted.iter().any(|w| w.as_str() == *key))
            .collect();
        prop_assert_eq!(projected.keys().collect::<Vec<_>>(), expected);
    }
}
