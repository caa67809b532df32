//! Workbook ingestion for the extraction pipeline.
//!
//! Opens an `.xlsx` workbook read-only with values-only access (formula
//! cells resolve to their last computed value) and converts every worksheet
//! into the dense [`sift_core::Row`] representation the pipeline consumes.
//! Cells keep their absolute coordinates so metadata rows can later be
//! re-placed verbatim in the output workbook.

mod error;
mod xlsx;

// === Error Types ===
pub use error::{IngestError, Result};

// === Workbook Reading ===
pub use xlsx::{SheetRows, read_workbook};
