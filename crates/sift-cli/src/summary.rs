//! Run summary printed after a successful extraction.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::pipeline::RunResult;

pub fn print_summary(result: &RunResult) {
    println!("Output: {}", result.output_path.display());

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        header_cell("Sheet"),
        header_cell("Rows"),
        header_cell("Metadata"),
        header_cell("Kept"),
        header_cell("Columns"),
    ]);
    for idx in 1..5 {
        if let Some(column) = table.column_mut(idx) {
            column.set_cell_alignment(CellAlignment::Right);
        }
    }

    let mut total_rows = 0usize;
    let mut total_kept = 0usize;
    for summary in &result.sheets {
        total_rows += summary.rows_in;
        total_kept += summary.records_kept;
        table.add_row(vec![
            Cell::new(&summary.sheet),
            Cell::new(summary.rows_in),
            Cell::new(summary.metadata_rows),
            Cell::new(summary.records_kept),
            Cell::new(summary.columns_kept),
        ]);
    }
    if result.sheets.len() > 1 {
        table.add_row(vec![
            Cell::new("TOTAL")
                .fg(Color::Cyan)
                .add_attribute(Attribute::Bold),
            Cell::new(total_rows).add_attribute(Attribute::Bold),
            Cell::new("-"),
            Cell::new(total_kept).add_attribute(Attribute::Bold),
            Cell::new("-"),
        ]);
    }
    println!("{table}");
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}
