//! Configuration management for the roles CLI.
//!
//! This crate provides types and loaders for the connection settings used by
//! the role administration client: base URL, bearer token, request timeout and
//! list page size, merged from `.env` files, environment variables, JSON
//! profile files and command-line overrides.

pub mod constants;
mod loader;
pub mod types;

pub use loader::{ConfigError, ConfigLoader, default_config_path, env_var_or_none};
pub use types::{AuthConfig, Config, ConnectionConfig, ProfileConfig, ProfilesFile};
