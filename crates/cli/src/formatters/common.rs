//! Common utilities for formatters.

/// String representation for missing values in tables.
pub const DEFAULT_MISSING_VALUE: &str = "N/A";

/// Render an optional cell, using the default missing value for `None` or empty.
pub fn format_missing(opt: Option<&str>) -> &str {
    match opt {
        Some(value) if !value.is_empty() => value,
        _ => DEFAULT_MISSING_VALUE,
    }
}

/// Keep a value on one table line: tabs and newlines become spaces.
pub fn table_cell(value: &str) -> String {
    value.replace(['\t', '\n', '\r'], " ")
}
