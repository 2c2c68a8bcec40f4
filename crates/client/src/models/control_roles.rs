//! Control role models for the control role management API.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

use super::role_kind::{RoleKind, RoleRecord};

/// Control role information, kept as the server's raw JSON.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(transparent)]
pub struct ControlRole(Value);

impl ControlRole {
    pub fn status(&self) -> Option<ControlRoleStatus> {
        self.0
            .get("status")
            .and_then(Value::as_i64)
            .and_then(ControlRoleStatus::from_code)
    }
}

impl RoleRecord for ControlRole {
    fn as_value(&self) -> &Value {
        &self.0
    }

    fn kind_detail(&self) -> Option<String> {
        self.status().map(|s| s.to_string())
    }
}

/// Marker for the control role collection.
#[derive(Debug, Clone, Copy)]
pub struct ControlRoles;

impl RoleKind for ControlRoles {
    type Record = ControlRole;

    const COLLECTION_PATH: &'static str = "/api/control-roles";
    const FILTER_PARAM: &'static str = "status";
    const LABEL: &'static str = "Control role";
}

/// Enablement status of a control role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlRoleStatus {
    Disabled,
    Enabled,
}

impl ControlRoleStatus {
    pub fn code(self) -> u8 {
        match self {
            Self::Disabled => 0,
            Self::Enabled => 1,
        }
    }

    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(Self::Disabled),
            1 => Some(Self::Enabled),
            _ => None,
        }
    }
}

impl fmt::Display for ControlRoleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Disabled => write!(f, "disabled"),
            Self::Enabled => write!(f, "enabled"),
        }
    }
}

impl FromStr for ControlRoleStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "0" | "disabled" => Ok(Self::Disabled),
            "1" | "enabled" => Ok(Self::Enabled),
            other => Err(format!(
                "invalid control role status '{other}' (expected 0/disabled or 1/enabled)"
            )),
        }
    }
}

/// Wrapper for the encoded permission definition: `{"proto": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProtoInfo {
    pub proto: String,
}

/// Parameters for creating a control role.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ControlRoleCreate {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub info: Option<ProtoInfo>,
}

impl ControlRoleCreate {
    /// Build a create request. Empty note or proto values are dropped.
    pub fn new(name: impl Into<String>, note: Option<String>, proto: Option<String>) -> Self {
        Self {
            name: name.into(),
            note: note.filter(|n| !n.is_empty()),
            info: proto.filter(|p| !p.is_empty()).map(|proto| ProtoInfo { proto }),
        }
    }
}

/// Parameters for updating a control role.
///
/// Any field that is `Some` is sent, including empty strings.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ControlRoleUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub info: Option<ProtoInfo>,
}

impl ControlRoleUpdate {
    pub fn new(name: Option<String>, note: Option<String>, proto: Option<String>) -> Self {
        Self {
            name,
            note,
            info: proto.map(|proto| ProtoInfo { proto }),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.note.is_none() && self.info.is_none()
    }
}
