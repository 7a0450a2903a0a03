//! Store error types.

use thiserror::Error;

/// Result type alias using `StoreError`.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors returned by store operations.
///
/// Every remote failure is tagged with its cause so callers can branch on it;
/// a UI that wants the old "one generic message" behavior can still match all
/// variants the same way.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The requested document or file does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// A document or file with the same identifier already exists.
    #[error("conflict: {0}")]
    Conflict(String),

    /// The backend rejected the request credentials.
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// The request failed in transit or the backend returned a server error.
    #[error("transport error: {0}")]
    Transport(String),

    /// The backend returned a payload that could not be decoded.
    #[error("invalid response: {0}")]
    InvalidResponse(String),

    /// The client was built from invalid settings.
    #[error("configuration error: {0}")]
    Configuration(String),
}

impl StoreError {
    /// Create a not found error.
    #[must_use]
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound(what.into())
    }

    /// Create a conflict error.
    #[must_use]
    pub fn conflict(what: impl Into<String>) -> Self {
        Self::Conflict(what.into())
    }

    /// Create a transport error.
    #[must_use]
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    /// Create an invalid response error.
    #[must_use]
    pub fn invalid_response(msg: impl Into<String>) -> Self {
        Self::InvalidResponse(msg.into())
    }

    /// Create a configuration error.
    #[must_use]
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Maps a non-success HTTP status to the matching error variant.
    #[must_use]
    pub fn from_status(status: reqwest::StatusCode, context: &str) -> Self {
        match status.as_u16() {
            404 => Self::NotFound(context.to_string()),
            409 => Self::Conflict(context.to_string()),
            401 | 403 => Self::Unauthorized(context.to_string()),
            _ => Self::Transport(format!("{context}: HTTP {status}")),
        }
    }
}

impl From<reqwest::Error> for StoreError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::InvalidResponse(err.to_string())
        } else {
            Self::Transport(err.to_string())
        }
    }
}
