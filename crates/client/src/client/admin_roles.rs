//! Admin role API methods for [`RolesClient`].

use crate::client::RolesClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{AdminRoleUpdate, ApiOutcome, IdList};

impl RolesClient {
    /// Update an admin role.
    pub async fn update_admin_role(
        &self,
        guid: &str,
        params: &AdminRoleUpdate,
    ) -> Result<ApiOutcome> {
        endpoints::update_admin_role(&self.http, &self.base_url, self.auth_token(), guid, params)
            .await
    }

    /// Add users to an admin role.
    pub async fn add_admin_role_users(
        &self,
        guid: &str,
        users: impl Into<IdList>,
    ) -> Result<ApiOutcome> {
        endpoints::add_admin_role_users(
            &self.http,
            &self.base_url,
            self.auth_token(),
            guid,
            users.into(),
        )
        .await
    }

    /// Remove users from an admin role.
    pub async fn remove_admin_role_users(
        &self,
        guid: &str,
        users: impl Into<IdList>,
    ) -> Result<ApiOutcome> {
        endpoints::remove_admin_role_users(
            &self.http,
            &self.base_url,
            self.auth_token(),
            guid,
            users.into(),
        )
        .await
    }
}
