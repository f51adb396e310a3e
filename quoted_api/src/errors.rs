//! Error types for the API client.

use crate::types::ErrorDetail;

/// Errors that can occur when making API requests.
#[derive(thiserror::Error, Debug, Clone)]
pub enum Error {
    /// An HTTP request failed (network error, timeout, or unreadable response).
    #[error("Request failed")]
    RequestFailed,
    /// The API returned a non-success status. `detail` holds the error payload
    /// when the body was JSON, already converted to application key case.
    #[error("Request failed with status {status}")]
    HttpStatus {
        status: u16,
        detail: Option<ErrorDetail>,
        body: String,
    },
    /// The query was rejected before any request was sent.
    #[error("Invalid query: {0}")]
    InvalidQuery(String),
}

impl Error {
    /// The server-provided error message, if the API returned one.
    pub fn message(&self) -> Option<&str> {
        match self {
            Error::HttpStatus {
                detail: Some(detail),
                ..
            } => detail.message.as_deref(),
            _ => None,
        }
    }
}
