//! JSON formatter implementation.
//!
//! Responsibilities:
//! - Format role lists and single roles as pretty-printed JSON.
//!
//! Does NOT handle:
//! - Other output formats.

use anyhow::Result;
use roles_client::{ApiOutcome, RoleRecord};

pub fn format_roles<R: RoleRecord>(roles: &[R]) -> Result<String> {
    Ok(serde_json::to_string_pretty(roles)?)
}

/// Pretty-print a JSON body; a text body is returned unchanged.
pub fn format_outcome(outcome: &ApiOutcome) -> Result<String> {
    match outcome {
        ApiOutcome::Json(value) => Ok(serde_json::to_string_pretty(value)?),
        ApiOutcome::Text(text) => Ok(text.clone()),
    }
}
