//! Error types for the client

use thiserror::Error;

/// Result type alias for the client
pub type Result<T> = std::result::Result<T, ClientError>;

/// Main error type for the client
#[derive(Error, Debug)]
pub enum ClientError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// HTTP transport errors (connect, timeout, body read)
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// 400 from the API
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// 401 from the API that survived the renewal attempt
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// 403 from the API
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// 404 from the API
    #[error("Not found: {0}")]
    NotFound(String),

    /// 409 from the API
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Payload rejected, either locally before sending or by the API (422)
    #[error("Validation error: {0}")]
    Validation(String),

    /// 5xx from the API
    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },

    /// Any other non-success status
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Renewal failed; all credentials were cleared
    #[error("Session expired: {0}")]
    SessionExpired(String),

    /// No credentials are stored
    #[error("No active session: {0}")]
    NoSession(String),

    /// Session store failures
    #[error("Session storage error: {0}")]
    Storage(String),

    /// Route gating refused the navigation
    #[error("Access denied: {0}")]
    AccessDenied(String),
}
