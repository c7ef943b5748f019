//! Error types for the appointment webhook service.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while handling a webhook request.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Shared secret missing or mismatched
    #[error("Unauthorized")]
    Unauthorized,

    /// Request body is not a tool-calls message
    #[error("Invalid payload: expected tool-calls")]
    InvalidPayload,

    /// Missing required tool arguments
    #[error("{0}")]
    Validation(String),

    /// Calendar provider rejected a request
    #[error("Calendar API error: {0}")]
    Calendar(String),

    /// HTTP transport error
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Get HTTP status code for this error.
    ///
    /// Validation failures fall through to 500: they abort the whole batch
    /// the same way a calendar failure does.
    pub fn status_code(&self) -> u16 {
        match self {
            Error::InvalidPayload => 400,
            Error::Unauthorized => 401,
            _ => 500,
        }
    }
}
