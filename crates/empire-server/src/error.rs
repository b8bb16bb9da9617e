//! Errors surfaced to API clients

use hyper::StatusCode;
use thiserror::Error;

/// Errors a request can fail with.
///
/// Storage messages are passed through to the client verbatim; this is a
/// trusted internal game backend, not a security-sensitive API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// No user identifier in the request body or query parameters.
    #[error("User ID required")]
    MissingUserId,

    /// Malformed request body or parameter.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Backend storage failure.
    #[error("{0}")]
    Storage(#[from] empire_db::Error),
}

impl ApiError {
    /// HTTP status code this error maps to.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingUserId | ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Result type for request handling.
pub type Result<T> = std::result::Result<T, ApiError>;
