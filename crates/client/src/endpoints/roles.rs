//! Operations shared by both role collections.
//!
//! Responsibilities:
//! - Collect every page of a filtered list.
//! - Resolve a role name to its record by exact match.
//! - Fetch one role by GUID and batch-delete roles.
//!
//! Invariants:
//! - Pages are requested one at a time starting at `current=1`.
//! - Paging stops on a short page or once `total` records have been collected.
//! - Name filters are wrapped as `%name%`; the type/status filter never is.

use reqwest::Client;
use serde_json::json;
use tracing::debug;

use crate::endpoints::request::{authorized, send_request};
use crate::endpoints::url_encoding::encode_path_segment;
use crate::error::{ClientError, Result};
use crate::models::{ApiOutcome, IdList, ListFilter, Page, RoleKind, RoleRecord};

/// Collection URL for a role kind.
pub(crate) fn collection_url<K: RoleKind>(base_url: &str) -> String {
    format!("{}{}", base_url, K::COLLECTION_PATH)
}

/// URL of one role.
pub(crate) fn role_url<K: RoleKind>(base_url: &str, guid: &str) -> String {
    format!(
        "{}{}/{}",
        base_url,
        K::COLLECTION_PATH,
        encode_path_segment(guid)
    )
}

/// List every role matching `filter`, following pagination.
///
/// Records are returned in server order with pages concatenated.
pub async fn list_roles<K: RoleKind>(
    client: &Client,
    base_url: &str,
    auth_token: &str,
    filter: &ListFilter,
    page_size: usize,
) -> Result<Vec<K::Record>> {
    if page_size == 0 {
        return Err(ClientError::InvalidRequest(
            "page size must be at least 1".to_string(),
        ));
    }

    let url = collection_url::<K>(base_url);
    let filter_params = filter.query_params(K::FILTER_PARAM);
    let mut records: Vec<K::Record> = Vec::new();
    let mut current: usize = 0;

    loop {
        current += 1;
        let mut query = filter_params.clone();
        query.push(("pageSize".to_string(), page_size.to_string()));
        query.push(("current".to_string(), current.to_string()));

        let builder = authorized(client.get(&url), auth_token).query(&query);
        let page: Page<K::Record> = send_request(builder, "GET", K::COLLECTION_PATH)
            .await?
            .parse(K::COLLECTION_PATH)?;

        let data = page.data.unwrap_or_default();
        let fetched = data.len();
        let total = page.total.unwrap_or(0);
        records.extend(data);

        debug!(
            endpoint = K::COLLECTION_PATH,
            page = current,
            fetched,
            total,
            collected = records.len(),
            "Fetched page"
        );

        if fetched < page_size || records.len() as u64 >= total {
            break;
        }
    }

    Ok(records)
}

/// Find the role whose name equals `name` exactly.
///
/// The server-side search is a substring match, so candidates are filtered
/// locally. The first exact match in server order wins.
pub async fn find_role_by_name<K: RoleKind>(
    client: &Client,
    base_url: &str,
    auth_token: &str,
    name: &str,
    page_size: usize,
) -> Result<Option<K::Record>> {
    let candidates = list_roles::<K>(
        client,
        base_url,
        auth_token,
        &ListFilter::by_name(name),
        page_size,
    )
    .await?;

    Ok(candidates.into_iter().find(|role| role.name() == Some(name)))
}

/// Resolve a role name to its GUID.
///
/// # Errors
///
/// Returns `ClientError::NotFound` when no role has exactly this name, and
/// `ClientError::InvalidResponse` when the matching record carries no GUID.
pub async fn resolve_guid<K: RoleKind>(
    client: &Client,
    base_url: &str,
    auth_token: &str,
    name: &str,
    page_size: usize,
) -> Result<String> {
    let role = find_role_by_name::<K>(client, base_url, auth_token, name, page_size)
        .await?
        .ok_or_else(|| ClientError::NotFound {
            kind: K::LABEL,
            name: name.to_string(),
        })?;

    role.guid()
        .filter(|guid| !guid.is_empty())
        .map(str::to_string)
        .ok_or_else(|| ClientError::InvalidResponse(format!("{} '{name}' has no guid", K::LABEL)))
}

/// Fetch one role by GUID. The body is returned as received.
pub async fn get_role<K: RoleKind>(
    client: &Client,
    base_url: &str,
    auth_token: &str,
    guid: &str,
) -> Result<ApiOutcome> {
    let url = role_url::<K>(base_url, guid);
    let builder = authorized(client.get(&url), auth_token);
    send_request(builder, "GET", K::COLLECTION_PATH).await
}

/// Delete one or more roles by GUID.
pub async fn delete_roles<K: RoleKind>(
    client: &Client,
    base_url: &str,
    auth_token: &str,
    guids: IdList,
) -> Result<ApiOutcome> {
    let guids = guids.require_non_empty("GUID")?;
    let url = collection_url::<K>(base_url);
    let builder = authorized(client.delete(&url), auth_token).json(&json!({ "guids": guids }));
    send_request(builder, "DELETE", K::COLLECTION_PATH).await
}
