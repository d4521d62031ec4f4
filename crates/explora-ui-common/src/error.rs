//! Error types for exploration services.

use std::path::PathBuf;

use explora_core::ExplorationId;
use explora_io::BackendError;
use thiserror::Error;

/// Result type for exploration service operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors from exploration service operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Reading the pages of an exploration failed.
    #[error("failed to fetch pages for exploration {exploration}: {source}")]
    Fetch {
        exploration: ExplorationId,
        #[source]
        source: BackendError,
    },

    /// Resolving a route slug failed.
    #[error("failed to resolve exploration slug `{slug}`: {source}")]
    Resolve {
        slug: String,
        #[source]
        source: BackendError,
    },

    /// No backend is configured.
    #[error("no backend configured (set [backend].url in {0})")]
    NoBackend(PathBuf),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(e: toml::ser::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}
