//! CLI command implementations.
//!
//! Responsibilities:
//! - Shared helpers for the role commands: client construction, role
//!   selection by `--name`/`--guid`, list splitting and result printing.
//!
//! Invariants:
//! - Selector and required-field checks never touch the network.

pub mod admin_roles;
pub mod control_roles;

use anyhow::Result;
use clap::Args;
use roles_client::{ApiOutcome, ClientError, RoleKind, RoleRecord, RolesClient};
use roles_config::Config;

use crate::error::UsageError;

/// Build a client from the loaded configuration.
pub fn build_client_from_config(config: &Config) -> Result<RolesClient> {
    Ok(RolesClient::builder().from_config(config).build()?)
}

/// `--name` / `--guid` pair identifying one role.
#[derive(Debug, Clone, Default, Args)]
pub struct RoleSelector {
    /// Role name (resolved to a GUID by exact match)
    #[arg(long)]
    pub name: Option<String>,

    /// Role GUID
    #[arg(long)]
    pub guid: Option<String>,
}

/// A validated role identification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoleTarget {
    Name(String),
    Guid(String),
}

impl RoleSelector {
    /// Check that exactly one of `--name` and `--guid` was given.
    ///
    /// Empty values count as absent.
    pub fn target(&self, command: &str) -> Result<RoleTarget, UsageError> {
        let name = self.name.as_deref().filter(|s| !s.is_empty());
        let guid = self.guid.as_deref().filter(|s| !s.is_empty());
        match (name, guid) {
            (None, None) => Err(UsageError::new(format!(
                "--name or --guid is required for {command} command"
            ))),
            (Some(_), Some(_)) => Err(UsageError::new("Cannot specify both --name and --guid")),
            (Some(name), None) => Ok(RoleTarget::Name(name.to_string())),
            (None, Some(guid)) => Ok(RoleTarget::Guid(guid.to_string())),
        }
    }
}

impl RoleTarget {
    /// Turn the target into a GUID, looking the name up when needed.
    pub async fn resolve<K: RoleKind>(self, client: &RolesClient) -> Result<String> {
        match self {
            RoleTarget::Guid(guid) => Ok(guid),
            RoleTarget::Name(name) => Ok(client.resolve_guid::<K>(&name).await?),
        }
    }

    /// Fetch the role document to display.
    ///
    /// A GUID is fetched from the server. A name is answered with the
    /// matching record from the list lookup, without a second request.
    pub async fn fetch<K: RoleKind>(self, client: &RolesClient) -> Result<ApiOutcome> {
        match self {
            RoleTarget::Guid(guid) => Ok(client.get_role::<K>(&guid).await?),
            RoleTarget::Name(name) => match client.find_role_by_name::<K>(&name).await? {
                Some(role) => Ok(ApiOutcome::Json(role.as_value().clone())),
                None => Err(ClientError::NotFound {
                    kind: K::LABEL,
                    name,
                }
                .into()),
            },
        }
    }
}

/// Split a comma-separated list, trimming entries and dropping empty ones.
///
/// An absent or empty argument yields `None`.
pub fn split_list(raw: Option<&str>) -> Option<Vec<String>> {
    let raw = raw.filter(|s| !s.is_empty())?;
    Some(
        raw.split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect(),
    )
}

/// Parse `--user-guids`, which membership commands require.
pub fn require_user_guids(raw: Option<&str>, command: &str) -> Result<Vec<String>, UsageError> {
    match split_list(raw) {
        Some(guids) if !guids.is_empty() => Ok(guids),
        _ => Err(UsageError::new(format!(
            "--user-guids is required for {command} command"
        ))),
    }
}

/// Strict `true`/`false` parser for boolean option values.
pub fn parse_bool_flag(raw: &str) -> Result<bool, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" => Ok(true),
        "false" => Ok(false),
        other => Err(format!("expected true or false, got '{other}'")),
    }
}

/// Print a mutation outcome.
pub fn print_result(outcome: &ApiOutcome) {
    println!("Result: {outcome}");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selector(name: Option<&str>, guid: Option<&str>) -> RoleSelector {
        RoleSelector {
            name: name.map(str::to_string),
            guid: guid.map(str::to_string),
        }
    }

    #[test]
    fn test_selector_requires_one() {
        let err = selector(None, None).target("get").unwrap_err();
        assert_eq!(err.to_string(), "--name or --guid is required for get command");
    }

    #[test]
    fn test_selector_rejects_both() {
        let err = selector(Some("Ops"), Some("g1")).target("delete").unwrap_err();
        assert_eq!(err.to_string(), "Cannot specify both --name and --guid");
    }

    #[test]
    fn test_selector_ignores_empty_values() {
        assert_eq!(
            selector(Some(""), Some("g1")).target("get").unwrap(),
            RoleTarget::Guid("g1".to_string())
        );
        assert_eq!(
            selector(Some("Ops"), None).target("get").unwrap(),
            RoleTarget::Name("Ops".to_string())
        );
    }

    #[test]
    fn test_split_list() {
        assert_eq!(split_list(None), None);
        assert_eq!(split_list(Some("")), None);
        assert_eq!(
            split_list(Some(" a, b ,,c ")),
            Some(vec!["a".to_string(), "b".to_string(), "c".to_string()])
        );
        assert_eq!(split_list(Some(" , ")), Some(vec![]));
    }

    #[test]
    fn test_require_user_guids() {
        assert_eq!(
            require_user_guids(Some("u1,u2"), "add-users").unwrap(),
            vec!["u1".to_string(), "u2".to_string()]
        );
        let err = require_user_guids(None, "add-users").unwrap_err();
        assert_eq!(err.to_string(), "--user-guids is required for add-users command");
        assert!(require_user_guids(Some(","), "add-users").is_err());
    }

    #[test]
    fn test_parse_bool_flag() {
        assert_eq!(parse_bool_flag("TRUE"), Ok(true));
        assert_eq!(parse_bool_flag("false"), Ok(false));
        assert!(parse_bool_flag("yes").is_err());
    }
}
