//! Control role API methods for [`RolesClient`].
//!
//! # What this module handles:
//! - Creating and updating control roles
//! - Enabling and disabling control roles
//! - Assigning users to and removing users from control roles

use crate::client::RolesClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{ApiOutcome, ControlRoleCreate, ControlRoleUpdate, IdList};

impl RolesClient {
    /// Create a control role.
    pub async fn create_control_role(&self, params: &ControlRoleCreate) -> Result<ApiOutcome> {
        endpoints::create_control_role(&self.http, &self.base_url, self.auth_token(), params).await
    }

    /// Update a control role.
    pub async fn update_control_role(
        &self,
        guid: &str,
        params: &ControlRoleUpdate,
    ) -> Result<ApiOutcome> {
        endpoints::update_control_role(&self.http, &self.base_url, self.auth_token(), guid, params)
            .await
    }

    /// Enable one or more control roles.
    pub async fn enable_control_roles(&self, guids: impl Into<IdList>) -> Result<ApiOutcome> {
        endpoints::set_control_roles_enabled(
            &self.http,
            &self.base_url,
            self.auth_token(),
            guids.into(),
            true,
        )
        .await
    }

    /// Disable one or more control roles.
    pub async fn disable_control_roles(&self, guids: impl Into<IdList>) -> Result<ApiOutcome> {
        endpoints::set_control_roles_enabled(
            &self.http,
            &self.base_url,
            self.auth_token(),
            guids.into(),
            false,
        )
        .await
    }

    /// Assign users to a control role.
    pub async fn assign_control_role_users(
        &self,
        guid: &str,
        user_guids: impl Into<IdList>,
    ) -> Result<ApiOutcome> {
        endpoints::assign_control_role_users(
            &self.http,
            &self.base_url,
            self.auth_token(),
            guid,
            user_guids.into(),
        )
        .await
    }

    /// Remove users from their control roles.
    pub async fn remove_control_role_users(
        &self,
        user_guids: impl Into<IdList>,
    ) -> Result<ApiOutcome> {
        endpoints::remove_control_role_users(
            &self.http,
            &self.base_url,
            self.auth_token(),
            user_guids.into(),
        )
        .await
    }
}
