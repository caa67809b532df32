//! Error types for the extraction pipeline.

use thiserror::Error;

/// Errors raised while extracting a table from a single worksheet.
///
/// All variants are terminal for the worksheet being processed; the caller
/// is expected to abort the whole run and surface the message to the user.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// No row contained any of the configured column names, so no table
    /// boundary was ever found.
    #[error("no table found: no row contains any of the configured column names")]
    TablesNotFound,

    /// The requested filter column has no case-insensitive match among the
    /// table's header names.
    #[error("field '{column}' not found among the table headers")]
    FieldNotFound { column: String },

    /// The filter predicate matched zero table rows.
    #[error("no rows found where '{column}' equals '{value}'")]
    RowsNotFound { column: String, value: String },
}

/// Result type for pipeline operations.
pub type Result<T> = std::result::Result<T, PipelineError>;
