//! Centralized constants for the roles workspace.
//!
//! Default values and environment variable names shared by the config,
//! client and CLI crates.

// =============================================================================
// Connection & Timeout Defaults
// =============================================================================

/// Default HTTP request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Maximum allowed request timeout in seconds (1 hour).
pub const MAX_TIMEOUT_SECS: u64 = 3600;

// =============================================================================
// Pagination
// =============================================================================

/// Number of records requested per page by the list endpoints.
pub const DEFAULT_PAGE_SIZE: usize = 30;

/// Largest page size accepted from configuration.
pub const MAX_PAGE_SIZE: usize = 1000;

// =============================================================================
// Environment Variables
// =============================================================================

pub const ENV_BASE_URL: &str = "ROLES_BASE_URL";
pub const ENV_API_TOKEN: &str = "ROLES_API_TOKEN";
pub const ENV_TIMEOUT: &str = "ROLES_TIMEOUT";
pub const ENV_SKIP_VERIFY: &str = "ROLES_SKIP_VERIFY";
pub const ENV_PAGE_SIZE: &str = "ROLES_PAGE_SIZE";
pub const ENV_PROFILE: &str = "ROLES_PROFILE";
pub const ENV_CONFIG_PATH: &str = "ROLES_CONFIG_PATH";

/// Set to `1` or `true` to skip `.env` loading.
pub const ENV_DOTENV_DISABLED: &str = "DOTENV_DISABLED";
