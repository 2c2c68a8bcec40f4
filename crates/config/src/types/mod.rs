//! Configuration type definitions.
//!
//! Responsibilities:
//! - Define the runtime `Config` (connection + auth) handed to the client crate.
//! - Define the on-disk profile file shape.
//!
//! Does NOT handle:
//! - Loading from files or environment variables (see `loader` module).
//! - Network connections (see client crate).
//!
//! Invariants:
//! - The bearer token is always held as `secrecy::SecretString`.

mod auth;
pub(crate) mod connection;
mod profile;

pub use auth::AuthConfig;
pub use connection::{Config, ConnectionConfig};
pub use profile::{ProfileConfig, ProfilesFile};
