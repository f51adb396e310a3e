//! Error types for the library layer.

use std::fmt;

use crate::pagination::PaginationError;

/// Errors produced by the library layer, wrapping upstream API errors and
/// adding pagination, configuration and input failures.
#[derive(Debug)]
pub enum QuotedError {
    /// An error from the underlying API client.
    Api(quoted_api::Error),
    /// A cursor mutation was out of range.
    Pagination(PaginationError),
    /// Configuration could not be loaded.
    Config(String),
    /// User-provided input failed validation.
    InvalidInput(String),
}

impl fmt::Display for QuotedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Api(e) => match e.message() {
                Some(message) => write!(f, "API error: {} ({})", e, message),
                None => write!(f, "API error: {}", e),
            },
            Self::Pagination(e) => write!(f, "Pagination error: {}", e),
            Self::Config(msg) => write!(f, "Configuration error: {}", msg),
            Self::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
        }
    }
}

impl std::error::Error for QuotedError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Api(e) => Some(e),
            Self::Pagination(e) => Some(e),
            _ => None,
        }
    }
}

impl From<quoted_api::Error> for QuotedError {
    fn from(e: quoted_api::Error) -> Self {
        match e {
            quoted_api::Error::InvalidQuery(msg) => Self::InvalidInput(msg),
            other => Self::Api(other),
        }
    }
}

impl From<PaginationError> for QuotedError {
    fn from(e: PaginationError) -> Self {
        Self::Pagination(e)
    }
}

#[cfg(test)]
mod tests {
    use quoted_api::types::ErrorDetail;

    use super::*;

    #[test]
    fn invalid_query_becomes_invalid_input() {
        let err: QuotedError = quoted_api::Error::InvalidQuery("bad".into()).into();
        assert!(matches!(err, QuotedError::InvalidInput(ref m) if m == "bad"));
    }

    #[test]
    fn display_includes_server_message() {
        let err: QuotedError = quoted_api::Error::HttpStatus {
            status: 400,
            detail: Some(ErrorDetail {
                message: Some("Quote not found".into()),
                key: None,
            }),
            body: String::new(),
        }
        .into();
        assert_eq!(
            err.to_string(),
            "API error: Request failed with status 400 (Quote not found)"
        );
    }

    #[test]
    fn pagination_errors_convert() {
        let err: QuotedError = PaginationError::BeforeFirstPage.into();
        assert_eq!(err.to_string(), "Pagination error: already on the first page");
    }

    #[test]
    fn only_api_and_pagination_have_sources() {
        use std::error::Error;
        assert!(QuotedError::Config("x".into()).source().is_none());
        assert!(QuotedError::InvalidInput("x".into()).source().is_none());
        let err: QuotedError = PaginationError::InvalidLimit.into();
        assert!(err.source().is_some());
    }
}
