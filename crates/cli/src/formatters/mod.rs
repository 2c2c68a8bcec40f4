//! Output formatters for CLI commands.
//!
//! Responsibilities:
//! - Render role lists and single roles as JSON or as a table.
//!
//! Does NOT handle:
//! - Direct printing to stdout (returns formatted strings).
//! - Mutation results, which are always printed as `Result: <outcome>`.
//!
//! Invariants:
//! - JSON output is pretty-printed and passes server fields through unchanged.
//! - Tables use tab-separation for consistent alignment in standard terminals.
//! - Missing table values are rendered as `N/A`; an empty list is `No roles found.`

use anyhow::Result;
use clap::ValueEnum;
use roles_client::{ApiOutcome, RoleKind};

mod common;
mod json;
mod table;

/// Supported output formats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Json,
    Table,
}

/// Format a list of roles of kind `K`.
pub fn format_roles<K: RoleKind>(format: OutputFormat, roles: &[K::Record]) -> Result<String> {
    match format {
        OutputFormat::Json => json::format_roles(roles),
        OutputFormat::Table => Ok(table::format_roles::<K>(roles)),
    }
}

/// Format a single role as returned by the server.
///
/// A body that is not a role document is printed as-is in both formats.
pub fn format_role<K: RoleKind>(format: OutputFormat, outcome: &ApiOutcome) -> Result<String> {
    match format {
        OutputFormat::Json => json::format_outcome(outcome),
        OutputFormat::Table => table::format_role::<K>(outcome),
    }
}

#[cfg(test)]
mod tests;
