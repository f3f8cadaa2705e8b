/// Error types for calls against the REST backend
use thiserror::Error;

/// Errors that can occur while talking to the entity backend
#[derive(Debug, Error)]
pub enum ApiError {
    /// Connection, TLS or timeout failures
    #[error("Network error: {0}")]
    Network(String),

    /// Backend answered with a non-success status
    #[error("HTTP {status}: {body}")]
    Status {
        status: u16,
        body: String,
    },

    /// Response body was not the expected JSON shape
    #[error("Failed to parse response: {0}")]
    Decode(String),

    /// No token exists with the requested id
    #[error("Token {0} not found")]
    NotFound(i64),

    /// Update requested for a token that has no id yet
    #[error("Token has no id")]
    MissingId,
}
