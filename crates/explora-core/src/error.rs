//! Error types for the exploration data model.

use thiserror::Error;

/// Errors raised while interpreting page records.
#[derive(Error, Debug)]
pub enum CoreError {
    /// A page's `config` payload does not match what its renderer expects.
    #[error("invalid config for page type `{page_type}`: {reason}")]
    InvalidConfig { page_type: String, reason: String },
}

/// Convenience type alias for Results using CoreError.
pub type CoreResult<T> = Result<T, CoreError>;
