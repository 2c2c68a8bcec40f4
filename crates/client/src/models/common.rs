//! Common types shared across role API models.
//!
//! This module contains the response outcome, the paginated list envelope,
//! list filters and identifier lists. It does NOT contain role-specific models.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use crate::error::{ClientError, Result};

/// Placeholder returned when a successful response has an empty body.
pub const SUCCESS_MARKER: &str = "Success";

/// Outcome of a successful API call.
///
/// The admin server answers mutations with anything from a JSON document to
/// an empty body, so the body is kept as-is.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiOutcome {
    /// Body parsed as JSON.
    Json(Value),
    /// Body that was not JSON, or `"Success"` when the body was empty.
    Text(String),
}

impl ApiOutcome {
    /// Deserialize the JSON body into `T`.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::InvalidResponse` when the body was not JSON or
    /// does not match `T`.
    pub fn parse<T: DeserializeOwned>(self, context: &str) -> Result<T> {
        match self {
            Self::Json(value) => serde_json::from_value(value).map_err(|e| {
                ClientError::InvalidResponse(format!("Failed to parse {context}: {e}"))
            }),
            Self::Text(text) => Err(ClientError::InvalidResponse(format!(
                "Expected JSON for {context}, got: {text}"
            ))),
        }
    }
}

impl fmt::Display for ApiOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json(value) => write!(f, "{value}"),
            Self::Text(text) => f.write_str(text),
        }
    }
}

/// One page of a list response: `{"data": [...], "total": N}`.
#[derive(Debug, Deserialize)]
pub struct Page<T> {
    pub data: Option<Vec<T>>,
    pub total: Option<u64>,
}

/// Filters applied to a list request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListFilter {
    /// Name substring; wrapped as `%name%` unless it is `-` or already has `%`.
    pub name: Option<String>,
    /// Type (admin roles) or status (control roles) code, sent verbatim.
    pub status: Option<String>,
}

impl ListFilter {
    /// Filter by name only.
    pub fn by_name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            status: None,
        }
    }

    /// Query parameters for this filter, excluding pagination.
    ///
    /// Empty values are omitted. `status_key` is the server's parameter name
    /// for the type/status filter.
    pub fn query_params(&self, status_key: &str) -> Vec<(String, String)> {
        let mut params = Vec::new();
        if let Some(name) = self.name.as_deref().filter(|n| !n.is_empty()) {
            params.push(("name".to_string(), wildcard_name(name)));
        }
        if let Some(status) = self.status.as_deref().filter(|s| !s.is_empty()) {
            params.push((status_key.to_string(), status.to_string()));
        }
        params
    }
}

/// Wrap a name filter as a `%...%` substring match.
///
/// The literal `-` and any value already containing `%` pass through unchanged.
pub fn wildcard_name(name: &str) -> String {
    if name == "-" || name.contains('%') {
        name.to_string()
    } else {
        format!("%{name}%")
    }
}

/// A list of GUIDs for batch operations.
///
/// Built from a single id or any collection of ids; both forms produce the
/// same request body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct IdList(Vec<String>);

impl IdList {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Reject an empty list before it reaches the server.
    pub(crate) fn require_non_empty(self, what: &str) -> Result<Self> {
        if self.is_empty() {
            Err(ClientError::InvalidRequest(format!(
                "at least one {what} is required"
            )))
        } else {
            Ok(self)
        }
    }
}

impl From<&str> for IdList {
    fn from(id: &str) -> Self {
        Self(vec![id.to_string()])
    }
}

impl From<String> for IdList {
    fn from(id: String) -> Self {
        Self(vec![id])
    }
}

impl From<&String> for IdList {
    fn from(id: &String) -> Self {
        Self(vec![id.clone()])
    }
}

impl From<Vec<String>> for IdList {
    fn from(ids: Vec<String>) -> Self {
        Self(ids)
    }
}

impl From<Vec<&str>> for IdList {
    fn from(ids: Vec<&str>) -> Self {
        Self(ids.into_iter().map(str::to_string).collect())
    }
}

impl From<&[String]> for IdList {
    fn from(ids: &[String]) -> Self {
        Self(ids.to_vec())
    }
}

impl From<&[&str]> for IdList {
    fn from(ids: &[&str]) -> Self {
        Self(ids.iter().map(|s| s.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for IdList {
    fn from(ids: [&str; N]) -> Self {
        Self(ids.iter().map(|s| s.to_string()).collect())
    }
}
