//! Client builder for constructing [`RolesClient`] instances.
//!
//! This module is responsible for:
//! - Providing a fluent builder API for client configuration
//! - Validating required configuration (base URL, API token)
//! - Normalizing the base URL (removing trailing slashes)
//! - Configuring the underlying HTTP client (timeout, TLS verification)
//!
//! # What this module does NOT handle:
//! - Actual API calls (handled by [`RolesClient`] methods)
//!
//! # Invariants
//! - `base_url` and `api_token` must be provided before calling `build()`
//! - `skip_verify` only affects HTTPS connections; HTTP connections log a warning

use secrecy::SecretString;
use std::time::Duration;

use crate::client::RolesClient;
use crate::error::{ClientError, Result};
use roles_config::Config;
use roles_config::constants::{DEFAULT_PAGE_SIZE, DEFAULT_TIMEOUT_SECS};

/// Builder for creating a new [`RolesClient`].
pub struct RolesClientBuilder {
    base_url: Option<String>,
    api_token: Option<SecretString>,
    skip_verify: bool,
    timeout: Duration,
    page_size: usize,
}

impl Default for RolesClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RolesClientBuilder {
    /// Create a new client builder with default settings.
    pub fn new() -> Self {
        Self {
            base_url: None,
            api_token: None,
            skip_verify: false,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Set the base URL of the admin server.
    pub fn base_url(mut self, url: String) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Set the bearer token.
    pub fn api_token(mut self, token: impl Into<String>) -> Self {
        self.api_token = Some(SecretString::new(token.into().into()));
        self
    }

    /// Set whether to skip TLS certificate verification.
    pub fn skip_verify(mut self, skip: bool) -> Self {
        self.skip_verify = skip;
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the number of records requested per list page.
    pub fn page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Configure the builder from a loaded [`Config`].
    pub fn from_config(mut self, config: &Config) -> Self {
        self.base_url = Some(config.connection.base_url.clone());
        self.api_token = Some(config.auth.token.clone());
        self.skip_verify = config.connection.skip_verify;
        self.timeout = config.connection.timeout;
        self.page_size = config.connection.page_size;
        self
    }

    /// Remove trailing slashes so endpoint paths join cleanly.
    fn normalize_base_url(url: String) -> String {
        url.trim_end_matches('/').to_string()
    }

    /// Build the [`RolesClient`].
    ///
    /// # Errors
    ///
    /// - `ClientError::InvalidUrl` if no base URL was provided
    /// - `ClientError::InvalidRequest` if no token was provided or the page size is 0
    /// - `ClientError::HttpError` if the HTTP client fails to build
    pub fn build(self) -> Result<RolesClient> {
        let base_url = self
            .base_url
            .ok_or_else(|| ClientError::InvalidUrl("base_url is required".to_string()))?;
        let base_url = Self::normalize_base_url(base_url);
        if base_url.is_empty() {
            return Err(ClientError::InvalidUrl("base_url is required".to_string()));
        }

        let token = self
            .api_token
            .ok_or_else(|| ClientError::InvalidRequest("api_token is required".to_string()))?;

        if self.page_size == 0 {
            return Err(ClientError::InvalidRequest(
                "page size must be at least 1".to_string(),
            ));
        }

        let mut http_builder = reqwest::Client::builder().timeout(self.timeout);

        if self.skip_verify {
            if base_url.starts_with("https://") {
                http_builder = http_builder.danger_accept_invalid_certs(true);
            } else {
                tracing::warn!(
                    "skip_verify=true has no effect on HTTP URLs. TLS verification only applies to HTTPS connections."
                );
            }
        }

        let http = http_builder.build()?;

        Ok(RolesClient {
            http,
            base_url,
            token,
            page_size: self.page_size,
        })
    }
}
