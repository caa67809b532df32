//! Styled workbook output for the extraction pipeline.
//!
//! Re-emits one worksheet per input worksheet: metadata rows verbatim at
//! their original coordinates, a bold centered header row for the retained
//! columns, bordered data rows, and column widths sized to the longest
//! rendered value. Also owns the output-path policy (extension defaulting
//! and collision-safe default naming).

mod error;
mod path;
mod writer;

// === Error Types ===
pub use error::{OutputError, Result};

// === Output Path Policy ===
pub use path::resolve_output_path;

// === Workbook Writing ===
pub use writer::write_workbook;
