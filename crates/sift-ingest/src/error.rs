//! Error types for workbook ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while opening and reading a source workbook.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Source file does not exist.
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Source file is held by another process or not readable.
    #[error(
        "the file {path} is in use by another process, or you do not have permission to read it"
    )]
    FileLocked {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to read the source file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The workbook could not be parsed.
    #[error("failed to open workbook {path}: {message}")]
    Workbook { path: PathBuf, message: String },

    /// A worksheet's cell range could not be read.
    #[error("failed to read worksheet '{sheet}': {message}")]
    SheetRead { sheet: String, message: String },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
