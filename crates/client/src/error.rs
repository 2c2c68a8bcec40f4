//! Error types for the roles client.

use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Message returned when an update carries no fields.
pub const NOTHING_TO_UPDATE: &str = "At least one parameter must be specified for update";

/// Errors that can occur during roles client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    /// HTTP transport error (connect, timeout, TLS, body read).
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// The server answered with a status other than 200.
    #[error("HTTP {status} - {message}")]
    ApiError {
        status: u16,
        url: String,
        message: String,
    },

    /// The server answered 200 with a JSON object carrying an `error` key.
    #[error("{0}")]
    ApplicationError(String),

    /// A response body did not have the expected shape.
    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// A request was rejected before being sent.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// No role matched a name exactly.
    #[error("{kind} '{name}' not found")]
    NotFound { kind: &'static str, name: String },

    /// An update was requested without any field to change.
    #[error("{}", NOTHING_TO_UPDATE)]
    NothingToUpdate,
}

impl ClientError {
    /// HTTP status carried by this error, if the server produced one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::ApiError { status, .. } => Some(*status),
            Self::HttpError(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display_matches_wire_format() {
        let err = ClientError::ApiError {
            status: 500,
            url: "https://admin.example.com/api/admin-roles".to_string(),
            message: "boom".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP 500 - boom");
        assert_eq!(err.status(), Some(500));
    }

    #[test]
    fn test_application_error_is_verbatim() {
        let err = ClientError::ApplicationError("role in use".to_string());
        assert_eq!(err.to_string(), "role in use");
        assert_eq!(err.status(), None);
    }

    #[test]
    fn test_not_found_display() {
        let err = ClientError::NotFound {
            kind: "Admin role",
            name: "Ops".to_string(),
        };
        assert_eq!(err.to_string(), "Admin role 'Ops' not found");
    }

    #[test]
    fn test_nothing_to_update_display() {
        assert_eq!(ClientError::NothingToUpdate.to_string(), NOTHING_TO_UPDATE);
    }
}
