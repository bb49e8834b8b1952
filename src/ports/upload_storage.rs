//! Upload storage port - persisted document uploads.

use async_trait::async_trait;
use thiserror::Error;

/// Port for storing and reading uploaded documents.
#[async_trait]
pub trait UploadStorage: Send + Sync {
    /// Stores an upload under a sanitized version of `filename` and returns
    /// the name it was stored as.
    async fn save(&self, filename: &str, data: &[u8]) -> Result<String, StorageError>;

    /// Reads a previously stored upload.
    async fn read(&self, filename: &str) -> Result<Vec<u8>, StorageError>;
}

/// Upload storage errors.
#[derive(Debug, Error)]
pub enum StorageError {
    /// No stored file with that name.
    #[error("file not found: {0}")]
    NotFound(String),

    /// Upload exceeds the configured size limit.
    #[error("file too large: {size} bytes exceeds {max} limit")]
    FileTooLarge {
        /// Actual size.
        size: u64,
        /// Maximum allowed.
        max: u64,
    },

    /// The supplied filename had no usable final component.
    #[error("invalid filename: {0}")]
    InvalidFilename(String),

    /// Filesystem permission failure.
    #[error("permission denied: {0}")]
    PermissionDenied(String),

    /// Other I/O failure.
    #[error("io error: {0}")]
    Io(String),
}

impl StorageError {
    /// Creates a not-found error.
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound(name.into())
    }

    /// Creates a file-too-large error.
    pub fn file_too_large(size: u64, max: u64) -> Self {
        Self::FileTooLarge { size, max }
    }

    /// Creates a permission-denied error.
    pub fn permission_denied(path: impl Into<String>) -> Self {
        Self::PermissionDenied(path.into())
    }

    /// Creates an I/O error.
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io(message.into())
    }
}
