//! Client error types.

use thiserror::Error;

/// Result type for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Errors that can occur in client operations.
///
/// `Validation`, `Auth` and `NotPersisted` are precondition failures raised
/// before any request is made; the rest come back from the wire.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("validation failed: {0}")]
    Validation(String),

    #[error("authentication required: {0}")]
    Auth(String),

    #[error("object not persisted: {0}")]
    NotPersisted(String),

    #[error("API error (status {status}): {message}")]
    Api {
        status: u16,
        /// Service error code from the response body, when one was sent.
        code: Option<i64>,
        message: String,
    },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ClientError {
    /// Returns the HTTP status code when this error carries one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            ClientError::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Returns true for failures raised before any request went out.
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            ClientError::Validation(_) | ClientError::Auth(_) | ClientError::NotPersisted(_)
        )
    }
}
