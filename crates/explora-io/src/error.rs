//! Errors from backend reads.

use thiserror::Error;

/// Result type for backend reads.
pub type BackendResult<T> = std::result::Result<T, BackendError>;

/// Failures while reading pages from a backend.
#[derive(Debug, Error)]
pub enum BackendError {
    /// The server answered with a non-success status.
    #[error("backend returned status {status} for {url}")]
    Http { status: u16, url: String },

    /// Connection, DNS, TLS or timeout failure.
    #[error("transport error: {0}")]
    Transport(String),

    /// The response body did not match the page schema.
    #[error("malformed response: {0}")]
    Decode(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The blocking read task panicked or was cancelled.
    #[error("read task failed: {0}")]
    TaskJoin(String),
}

impl From<serde_json::Error> for BackendError {
    fn from(e: serde_json::Error) -> Self {
        BackendError::Decode(e.to_string())
    }
}

impl From<tokio::task::JoinError> for BackendError {
    fn from(e: tokio::task::JoinError) -> Self {
        BackendError::TaskJoin(e.to_string())
    }
}
