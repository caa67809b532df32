//! Extraction configuration: wanted columns and the filter predicate.

/// The filter predicate: one column name and one exact-match target value.
///
/// The column is matched case-insensitively against the table's header
/// names; the target value is compared byte-for-byte against the
/// stringified cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSpec {
    /// Column to filter on.
    pub column: String,
    /// Target value, compared as a string.
    pub value: String,
}

impl FilterSpec {
    pub fn new(column: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            value: value.into(),
        }
    }
}

/// Configuration for one extraction run.
///
/// `wanted_columns` doubles as the table boundary signal (a row containing
/// any of these names starts the table) and as the projection whitelist.
/// It is an injected value, not a compiled-in constant, so the pipeline is
/// reusable across table schemas.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractConfig {
    /// Column names retained in the output, matched exactly.
    pub wanted_columns: Vec<String>,
    /// The filter predicate.
    pub filter: FilterSpec,
}

impl ExtractConfig {
    pub fn new(wanted_columns: Vec<String>, filter: FilterSpec) -> Self {
        Self {
            wanted_columns,
            filter,
        }
    }

    /// Returns true if `name` is one of the wanted columns (exact match).
    pub fn is_wanted(&self, name: &str) -> bool {
        self.wanted_columns.iter().any(|wanted| wanted == name)
    }
}
