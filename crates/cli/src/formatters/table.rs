//! Table formatter implementation.
//!
//! Responsibilities:
//! - Format roles as tab-separated tables with NAME, GUID, TYPE/STATUS and NOTE columns.
//!
//! Does NOT handle:
//! - Other output formats.

use anyhow::Result;
use roles_client::{ApiOutcome, RoleKind, RoleRecord};

use super::common::{format_missing, table_cell};

/// Header of the kind-specific column: `TYPE` for admin roles, `STATUS` for control roles.
fn detail_header<K: RoleKind>() -> String {
    K::FILTER_PARAM.to_uppercase()
}

pub fn format_roles<K: RoleKind>(roles: &[K::Record]) -> String {
    if roles.is_empty() {
        return "No roles found.".to_string();
    }

    let mut output = format!("NAME\tGUID\t{}\tNOTE\n", detail_header::<K>());
    for role in roles {
        let detail = role.kind_detail();
        output.push_str(&format!(
            "{}\t{}\t{}\t{}\n",
            table_cell(format_missing(role.name())),
            table_cell(format_missing(role.guid())),
            format_missing(detail.as_deref()),
            table_cell(format_missing(role.note())),
        ));
    }
    output.pop();
    output
}

/// Format one role document as a single-row table.
pub fn format_role<K: RoleKind>(outcome: &ApiOutcome) -> Result<String> {
    match outcome {
        ApiOutcome::Json(value) if value.is_object() => {
            let role: K::Record = serde_json::from_value(value.clone())?;
            Ok(format_roles::<K>(std::slice::from_ref(&role)))
        }
        other => Ok(other.to_string()),
    }
}
