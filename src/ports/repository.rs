//! Shared persistence error type.

use thiserror::Error;

/// Errors surfaced by the persistence ports.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// A uniqueness constraint was violated (e.g. registering an existing email).
    #[error("duplicate record: {0}")]
    Duplicate(String),

    /// The requested record does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// The backing store failed.
    #[error("storage backend error: {0}")]
    Backend(String),
}

impl RepositoryError {
    /// Creates a backend error from any display-able cause.
    pub fn backend(cause: impl std::fmt::Display) -> Self {
        Self::Backend(cause.to_string())
    }
}
