//! Multi-sheet orchestration.
//!
//! Stages, in order, per workbook:
//! 1. **Ingest**: read every worksheet's rows (values only).
//! 2. **Extract**: run the classify → materialize → filter → project
//!    pipeline independently per worksheet.
//! 3. **Write**: save the styled result workbook.
//!
//! Any per-worksheet failure aborts the whole run before anything is
//! written; the failure carries the worksheet name so multi-sheet batches
//! stay diagnosable.

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use sift_core::{ExtractConfig, extract_sheet};
use sift_ingest::read_workbook;
use sift_output::{resolve_output_path, write_workbook};

/// Inputs for one processing run.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Source workbook path.
    pub input: PathBuf,
    /// Explicit destination, if any.
    pub output: Option<PathBuf>,
    /// Wanted columns plus the filter predicate.
    pub config: ExtractConfig,
}

/// Per-worksheet result counts.
#[derive(Debug, Clone)]
pub struct SheetSummary {
    pub sheet: String,
    pub rows_in: usize,
    pub metadata_rows: usize,
    pub records_kept: usize,
    pub columns_kept: usize,
}

/// Result of a completed run.
#[derive(Debug, Clone)]
pub struct RunResult {
    /// Where the result workbook was saved.
    pub output_path: PathBuf,
    /// One summary per worksheet, in sheet order.
    pub sheets: Vec<SheetSummary>,
}

/// Processes every worksheet of the input workbook and saves the result.
pub fn run(options: &RunOptions) -> Result<RunResult> {
    let sheets = read_workbook(&options.input)?;

    let mut extracted = Vec::with_capacity(sheets.len());
    let mut summaries = Vec::with_capacity(sheets.len());
    for sheet in sheets {
        let span = info_span!("sheet", name = %sheet.name);
        let _guard = span.enter();

        let rows_in = sheet.rows.len();
        let table = extract_sheet(sheet.rows, &options.config)
            .with_context(|| format!("worksheet '{}'", sheet.name))?;
        info!(
            rows_in,
            metadata_rows = table.metadata_rows.len(),
            records_kept = table.records.len(),
            "worksheet extracted"
        );
        summaries.push(SheetSummary {
            sheet: sheet.name.clone(),
            rows_in,
            metadata_rows: table.metadata_rows.len(),
            records_kept: table.records.len(),
            columns_kept: table.columns.len(),
        });
        extracted.push((sheet.name, table));
    }

    let output_path = resolve_output_path(&options.input, options.output.as_deref());
    write_workbook(&output_path, &extracted)?;
    info!(path = %output_path.display(), "workbook saved");

    Ok(RunResult {
        output_path,
        sheets: summaries,
    })
}
