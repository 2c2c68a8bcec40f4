//! Methods shared by both role collections for [`RolesClient`].
//!
//! # What this module handles:
//! - Listing roles with filters
//! - Resolving a role name to a GUID
//! - Fetching and deleting roles
//!
//! # What this module does NOT handle:
//! - Low-level HTTP calls (in [`crate::endpoints`])

use crate::client::RolesClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{ApiOutcome, IdList, ListFilter, RoleKind};

impl RolesClient {
    /// List every role of kind `K` matching `filter`, across all pages.
    pub async fn list_roles<K: RoleKind>(&self, filter: &ListFilter) -> Result<Vec<K::Record>> {
        endpoints::list_roles::<K>(
            &self.http,
            &self.base_url,
            self.auth_token(),
            filter,
            self.page_size,
        )
        .await
    }

    /// Find the role of kind `K` named exactly `name`.
    pub async fn find_role_by_name<K: RoleKind>(&self, name: &str) -> Result<Option<K::Record>> {
        endpoints::find_role_by_name::<K>(
            &self.http,
            &self.base_url,
            self.auth_token(),
            name,
            self.page_size,
        )
        .await
    }

    /// Resolve a role name to its GUID, failing with `NotFound` when absent.
    pub async fn resolve_guid<K: RoleKind>(&self, name: &str) -> Result<String> {
        endpoints::resolve_guid::<K>(
            &self.http,
            &self.base_url,
            self.auth_token(),
            name,
            self.page_size,
        )
        .await
    }

    /// Fetch one role by GUID.
    pub async fn get_role<K: RoleKind>(&self, guid: &str) -> Result<ApiOutcome> {
        endpoints::get_role::<K>(&self.http, &self.base_url, self.auth_token(), guid).await
    }

    /// Delete one or more roles by GUID.
    pub async fn delete_roles<K: RoleKind>(&self, guids: impl Into<IdList>) -> Result<ApiOutcome> {
        endpoints::delete_roles::<K>(&self.http, &self.base_url, self.auth_token(), guids.into())
            .await
    }
}
