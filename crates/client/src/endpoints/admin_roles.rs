//! Admin role endpoints that have no control role counterpart.

use reqwest::Client;
use serde_json::json;
use tracing::debug;

use crate::endpoints::request::{authorized, send_request};
use crate::endpoints::roles::role_url;
use crate::error::{ClientError, Result};
use crate::models::{AdminRoleUpdate, AdminRoles, ApiOutcome, IdList, RoleKind};

/// Update an admin role. Only the fields set in `params` are sent.
///
/// # Errors
///
/// Returns `ClientError::NothingToUpdate` without contacting the server when
/// `params` is empty.
pub async fn update_admin_role(
    client: &Client,
    base_url: &str,
    auth_token: &str,
    guid: &str,
    params: &AdminRoleUpdate,
) -> Result<ApiOutcome> {
    if params.is_empty() {
        return Err(ClientError::NothingToUpdate);
    }
    debug!(guid, "Updating admin role");
    let url = role_url::<AdminRoles>(base_url, guid);
    let builder = authorized(client.put(&url), auth_token).json(params);
    send_request(builder, "PUT", AdminRoles::COLLECTION_PATH).await
}

/// Add users to an admin role.
pub async fn add_admin_role_users(
    client: &Client,
    base_url: &str,
    auth_token: &str,
    guid: &str,
    users: IdList,
) -> Result<ApiOutcome> {
    let users = users.require_non_empty("user GUID")?;
    let url = format!("{}/users", role_url::<AdminRoles>(base_url, guid));
    let builder = authorized(client.post(&url), auth_token).json(&json!({ "users": users }));
    send_request(builder, "POST", AdminRoles::COLLECTION_PATH).await
}

/// Remove users from an admin role.
pub async fn remove_admin_role_users(
    client: &Client,
    base_url: &str,
    auth_token: &str,
    guid: &str,
    users: IdList,
) -> Result<ApiOutcome> {
    let users = users.require_non_empty("user GUID")?;
    let url = format!("{}/users", role_url::<AdminRoles>(base_url, guid));
    let builder = authorized(client.delete(&url), auth_token).json(&json!({ "users": users }));
    send_request(builder, "DELETE", AdminRoles::COLLECTION_PATH).await
}
