//! Control role endpoints that have no admin role counterpart.

use reqwest::Client;
use serde_json::json;
use tracing::debug;

use crate::endpoints::request::{authorized, send_request};
use crate::endpoints::roles::{collection_url, role_url};
use crate::error::{ClientError, Result};
use crate::models::{
    ApiOutcome, ControlRoleCreate, ControlRoleUpdate, ControlRoles, IdList, RoleKind,
};

/// Create a control role.
pub async fn create_control_role(
    client: &Client,
    base_url: &str,
    auth_token: &str,
    params: &ControlRoleCreate,
) -> Result<ApiOutcome> {
    if params.name.is_empty() {
        return Err(ClientError::InvalidRequest(
            "control role name must not be empty".to_string(),
        ));
    }
    debug!(name = %params.name, "Creating control role");
    let url = collection_url::<ControlRoles>(base_url);
    let builder = authorized(client.post(&url), auth_token).json(params);
    send_request(builder, "POST", ControlRoles::COLLECTION_PATH).await
}

/// Update a control role. Only the fields set in `params` are sent.
///
/// # Errors
///
/// Returns `ClientError::NothingToUpdate` without contacting the server when
/// `params` is empty.
pub async fn update_control_role(
    client: &Client,
    base_url: &str,
    auth_token: &str,
    guid: &str,
    params: &ControlRoleUpdate,
) -> Result<ApiOutcome> {
    if params.is_empty() {
        return Err(ClientError::NothingToUpdate);
    }
    debug!(guid, "Updating control role");
    let url = role_url::<ControlRoles>(base_url, guid);
    let builder = authorized(client.put(&url), auth_token).json(params);
    send_request(builder, "PUT", ControlRoles::COLLECTION_PATH).await
}

/// Enable or disable one or more control roles.
pub async fn set_control_roles_enabled(
    client: &Client,
    base_url: &str,
    auth_token: &str,
    guids: IdList,
    enabled: bool,
) -> Result<ApiOutcome> {
    let guids = guids.require_non_empty("GUID")?;
    let url = format!("{}/enable", collection_url::<ControlRoles>(base_url));
    let body = json!({ "guids": guids, "disable": !enabled });
    let builder = authorized(client.post(&url), auth_token).json(&body);
    send_request(builder, "POST", ControlRoles::COLLECTION_PATH).await
}

/// Assign users to a control role.
pub async fn assign_control_role_users(
    client: &Client,
    base_url: &str,
    auth_token: &str,
    guid: &str,
    user_guids: IdList,
) -> Result<ApiOutcome> {
    let user_guids = user_guids.require_non_empty("user GUID")?;
    let url = format!("{}/users", role_url::<ControlRoles>(base_url, guid));
    let body = json!({ "user_guids": user_guids });
    let builder = authorized(client.post(&url), auth_token).json(&body);
    send_request(builder, "POST", ControlRoles::COLLECTION_PATH).await
}

/// Remove users from whatever control roles they hold.
///
/// Not scoped to a role.
pub async fn remove_control_role_users(
    client: &Client,
    base_url: &str,
    auth_token: &str,
    user_guids: IdList,
) -> Result<ApiOutcome> {
    let user_guids = user_guids.require_non_empty("user GUID")?;
    let url = format!("{}/users", collection_url::<ControlRoles>(base_url));
    let body = json!({ "user_guids": user_guids });
    let builder = authorized(client.delete(&url), auth_token).json(&body);
    send_request(builder, "DELETE", ControlRoles::COLLECTION_PATH).await
}
