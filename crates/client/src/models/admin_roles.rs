//! Admin role models for the admin role management API.
//!
//! This module contains types for listing and updating admin roles.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

use super::role_kind::{RoleKind, RoleRecord};

/// Admin role information.
///
/// The server's JSON is kept untouched, so null or empty fields and key
/// order survive being printed back out.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(transparent)]
pub struct AdminRole(Value);

impl AdminRole {
    /// The role's scope type, when the server reports a known code.
    pub fn role_type(&self) -> Option<AdminRoleType> {
        self.0
            .get("type")
            .and_then(Value::as_i64)
            .and_then(AdminRoleType::from_code)
    }
}

impl RoleRecord for AdminRole {
    fn as_value(&self) -> &Value {
        &self.0
    }

    fn kind_detail(&self) -> Option<String> {
        self.role_type().map(|t| t.to_string())
    }
}

/// Marker for the admin role collection.
#[derive(Debug, Clone, Copy)]
pub struct AdminRoles;

impl RoleKind for AdminRoles {
    type Record = AdminRole;

    const COLLECTION_PATH: &'static str = "/api/admin-roles";
    const FILTER_PARAM: &'static str = "type";
    const LABEL: &'static str = "Admin role";
}

/// Scope type of an admin role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AdminRoleType {
    Global,
    Individual,
    GroupScoped,
}

impl AdminRoleType {
    /// Numeric code used on the wire.
    pub fn code(self) -> u8 {
        match self {
            Self::Global => 1,
            Self::Individual => 2,
            Self::GroupScoped => 3,
        }
    }

    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            1 => Some(Self::Global),
            2 => Some(Self::Individual),
            3 => Some(Self::GroupScoped),
            _ => None,
        }
    }
}

impl fmt::Display for AdminRoleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Global => write!(f, "global"),
            Self::Individual => write!(f, "individual"),
            Self::GroupScoped => write!(f, "group-scoped"),
        }
    }
}

impl FromStr for AdminRoleType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "1" | "global" => Ok(Self::Global),
            "2" | "individual" => Ok(Self::Individual),
            "3" | "group-scoped" | "group_scoped" | "group" => Ok(Self::GroupScoped),
            other => Err(format!(
                "invalid admin role type '{other}' (expected 1/global, 2/individual or 3/group-scoped)"
            )),
        }
    }
}

/// Parameters for updating an admin role.
///
/// Fields left as `None` are omitted from the request body.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AdminRoleUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_groups: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_groups: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unassigned: Option<bool>,
}

impl AdminRoleUpdate {
    /// True when no field would be sent.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.note.is_none()
            && self.user_groups.is_none()
            && self.device_groups.is_none()
            && self.unassigned.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_admin_role_keeps_unknown_fields() {
        let raw = json!({
            "guid": "g1",
            "name": "Ops",
            "type": 3,
            "user_groups": ["u1"],
        });
        let role: AdminRole = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(role.guid(), Some("g1"));
        assert_eq!(role.name(), Some("Ops"));
        assert_eq!(role.note(), None);
        assert_eq!(role.role_type(), Some(AdminRoleType::GroupScoped));
        assert_eq!(serde_json::to_value(&role).unwrap(), raw);
    }

    #[test]
    fn test_admin_role_accepts_null_and_empty_fields() {
        let raw = json!({"guid": null, "name": "", "note": null, "type": "odd"});
        let role: AdminRole = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(role.guid(), None);
        assert_eq!(role.name(), Some(""));
        assert_eq!(role.kind_detail(), None);
        assert_eq!(serde_json::to_value(&role).unwrap(), raw);
    }

    #[test]
    fn test_admin_role_keeps_key_order() {
        let text = r#"{"name":"Ops","type":1,"guid":"g1","note":"n"}"#;
        let role: AdminRole = serde_json::from_str(text).unwrap();
        assert_eq!(serde_json::to_string(&role).unwrap(), text);
    }

    #[test]
    fn test_role_type_accepts_codes_and_names() {
        assert_eq!("1".parse::<AdminRoleType>().unwrap(), AdminRoleType::Global);
        assert_eq!(
            "Individual".parse::<AdminRoleType>().unwrap(),
            AdminRoleType::Individual
        );
        assert_eq!(
            "group-scoped".parse::<AdminRoleType>().unwrap(),
            AdminRoleType::GroupScoped
        );
        assert!("4".parse::<AdminRoleType>().is_err());
    }

    #[test]
    fn test_update_serializes_only_set_fields() {
        let update = AdminRoleUpdate {
            note: Some("n".to_string()),
            unassigned: Some(false),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&update).unwrap(),
            json!({"note": "n", "unassigned": false})
        );
    }

    #[test]
    fn test_update_is_empty() {
        assert!(AdminRoleUpdate::default().is_empty());
        let update = AdminRoleUpdate {
            user_groups: Some(vec![]),
            ..Default::default()
        };
        assert!(!update.is_empty());
    }
}
