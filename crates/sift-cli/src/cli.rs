//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "tablesift",
    version,
    about = "Extract, filter, and project a table embedded in an XLSX worksheet",
    long_about = "Finds the table embedded in each worksheet of an XLSX file, keeps the \n\
                  rows whose filter column exactly equals the given value, drops every \n\
                  column outside the wanted set, and writes a styled workbook that \n\
                  preserves the metadata rows above the table."
)]
pub struct Cli {
    /// Path to the source .xlsx workbook.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Column to filter on (matched case-insensitively against the header).
    #[arg(long = "field", value_name = "NAME")]
    pub field: String,

    /// Exact value a row must have in the filter column to be kept.
    #[arg(long = "value", value_name = "VALUE")]
    pub value: String,

    /// Comma-separated column names kept in the output (also the table
    /// boundary signal).
    #[arg(
        long = "columns",
        value_name = "NAMES",
        value_delimiter = ',',
        required = true
    )]
    pub columns: Vec<String>,

    /// Destination path (default: next to the input, with a unique suffix).
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
