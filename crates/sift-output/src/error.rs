//! Error types for workbook output.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while writing the result workbook.
#[derive(Debug, Error)]
pub enum OutputError {
    /// Destination file is held by another process or not writable.
    #[error(
        "the file {path} is in use by another process, or you do not have permission to write it"
    )]
    FileLocked {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to save the workbook.
    #[error("failed to save workbook {path}: {message}")]
    Save { path: PathBuf, message: String },

    /// Failed to write a cell or configure a worksheet.
    #[error("failed to write worksheet '{sheet}': {message}")]
    Write { sheet: String, message: String },
}

/// Result type for output operations.
pub type Result<T> = std::result::Result<T, OutputError>;
