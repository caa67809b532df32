//! Table extraction pipeline for spreadsheet worksheets.
//!
//! A worksheet often carries free-form metadata rows above the actual table.
//! This crate splits the rows into a metadata prefix and a table suffix,
//! turns the table rows into named records, filters them by an exact-match
//! predicate on one column, and projects the survivors down to a configured
//! set of wanted columns.
//!
//! The pipeline is pure: it consumes in-memory rows and produces a
//! [`SheetTable`]. Reading workbooks and writing the styled result are the
//! concern of the `sift-ingest` and `sift-output` crates.
//!
//! # Example
//!
//! ```ignore
//! use sift_core::{ExtractConfig, FilterSpec, extract_sheet};
//!
//! let config = ExtractConfig::new(
//!     vec!["Name".into(), "Role".into()],
//!     FilterSpec::new("role", "Engineer"),
//! );
//! let table = extract_sheet(rows, &config)?;
//! ```

mod cell;
mod classify;
mod config;
mod error;
mod extract;
mod filter;
mod materialize;
mod project;
mod record;

// === Error Types ===
pub use error::{PipelineError, Result};

// === Cell and Row Types ===
pub use cell::{Cell, CellValue, Row};

// === Records ===
pub use record::Record;

// === Configuration ===
pub use config::{ExtractConfig, FilterSpec};

// === Pipeline Stages ===
pub use classify::partition_rows;
pub use extract::{SheetTable, extract_sheet};
pub use filter::{filter_records, resolve_filter_column};
pub use materialize::{header_columns, materialize_records};
pub use project::{project_record, projected_columns};
