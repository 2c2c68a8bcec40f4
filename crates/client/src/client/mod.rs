//! Main admin server client and API methods.
//!
//! This module provides the primary [`RolesClient`] for managing admin roles
//! and control roles on the admin server.
//!
//! # Submodules
//! - [`builder`]: Client construction and configuration
//! - `roles`: Methods shared by both role collections
//! - `admin_roles`: Admin role methods
//! - `control_roles`: Control role methods
//!
//! # What this module does NOT handle:
//! - Direct HTTP request implementation (delegated to [`crate::endpoints`])
//! - Configuration loading (handled by `roles-config`)
//!
//! # Invariants
//! - Every request carries `Authorization: Bearer <token>`
//! - Requests are issued one at a time; no call is retried

pub mod builder;

mod admin_roles;
mod control_roles;
mod roles;

use secrecy::{ExposeSecret, SecretString};

/// Admin server REST API client.
///
/// # Creating a Client
///
/// ```rust,ignore
/// use roles_client::RolesClient;
///
/// let client = RolesClient::builder()
///     .base_url("https://admin.example.com".to_string())
///     .api_token("token".to_string())
///     .build()?;
/// ```
#[derive(Debug)]
pub struct RolesClient {
    http: reqwest::Client,
    base_url: String,
    token: SecretString,
    page_size: usize,
}

impl RolesClient {
    /// Create a new client builder.
    pub fn builder() -> builder::RolesClientBuilder {
        builder::RolesClientBuilder::new()
    }

    /// Normalized base URL, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Page size used when listing.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    fn auth_token(&self) -> &str {
        self.token.expose_secret()
    }
}
