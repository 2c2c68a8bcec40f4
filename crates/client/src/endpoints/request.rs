//! Request sending and response validation.
//!
//! Every call to the admin server goes through [`send_request`]. A response is
//! accepted only when the status is exactly 200 and the body is not a JSON
//! object carrying an `error` key.

use reqwest::{RequestBuilder, Response};
use serde_json::Value;
use tracing::debug;

use crate::error::{ClientError, Result};
use crate::models::{ApiOutcome, SUCCESS_MARKER};

/// Attach the bearer token to a request.
pub(crate) fn authorized(builder: RequestBuilder, auth_token: &str) -> RequestBuilder {
    builder.header("Authorization", format!("Bearer {auth_token}"))
}

/// Send a request and validate its response.
///
/// # Errors
///
/// - `ClientError::HttpError` when the request could not be sent or the body
///   could not be read
/// - `ClientError::ApiError` for any status other than 200
/// - `ClientError::ApplicationError` when the body carries an `error` key
pub async fn send_request(
    builder: RequestBuilder,
    method: &str,
    endpoint: &str,
) -> Result<ApiOutcome> {
    debug!(method, endpoint, "Sending request");
    let response = builder.send().await?;
    check_response(response).await
}

/// Read a response body and validate it.
pub async fn check_response(response: Response) -> Result<ApiOutcome> {
    let status = response.status().as_u16();
    let url = response.url().to_string();
    let body = response.text().await?;
    debug!(status, url = %url, bytes = body.len(), "Received response");
    validate_body(status, &url, body)
}

/// Classify a status and body into an outcome or an error.
pub fn validate_body(status: u16, url: &str, body: String) -> Result<ApiOutcome> {
    if status != 200 {
        return Err(ClientError::ApiError {
            status,
            url: url.to_string(),
            message: body,
        });
    }

    let value: Value = match serde_json::from_str(&body) {
        Ok(value) => value,
        Err(_) if body.is_empty() => return Ok(ApiOutcome::Text(SUCCESS_MARKER.to_string())),
        Err(_) => return Ok(ApiOutcome::Text(body)),
    };

    if let Value::Object(map) = &value
        && let Some(error) = map.get("error")
    {
        let message = match error {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        return Err(ClientError::ApplicationError(message));
    }

    Ok(ApiOutcome::Json(value))
}
