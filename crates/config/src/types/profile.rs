//! Profile configuration types.
//!
//! Responsibilities:
//! - Define `ProfileConfig` for named connection profiles.
//! - Define `ProfilesFile`, the JSON document holding all profiles.
//!
//! Does NOT handle:
//! - Profile loading or merging (see `loader` module).
//!
//! Invariants:
//! - All profile fields are optional so profiles can be partial.
//! - Unknown top-level keys in the profile file are ignored.

use crate::types::auth::secret_string;
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Named connection profile.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileConfig {
    /// Base URL of the API server
    pub base_url: Option<String>,
    /// Bearer token
    #[serde(with = "secret_string::option")]
    pub api_token: Option<SecretString>,
    /// Whether to skip TLS verification
    pub skip_verify: Option<bool>,
    /// Request timeout in seconds
    pub timeout_seconds: Option<u64>,
    /// Records per page when listing roles
    pub page_size: Option<usize>,
}

/// On-disk profile file: `{"profiles": {"<name>": {...}}}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfilesFile {
    pub profiles: BTreeMap<String, ProfileConfig>,
}
