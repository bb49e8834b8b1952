//! Upload storage configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Configuration for uploaded-document storage
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Directory uploaded documents are written to
    #[serde(default = "default_upload_dir")]
    pub upload_dir: PathBuf,

    /// Maximum accepted upload size in bytes
    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: u64,
}

impl StorageConfig {
    /// Validate storage configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.upload_dir.as_os_str().is_empty() {
            return Err(ValidationError::EmptyUploadDir);
        }
        if self.max_upload_bytes == 0 {
            return Err(ValidationError::InvalidUploadLimit);
        }
        Ok(())
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            upload_dir: default_upload_dir(),
            max_upload_bytes: default_max_upload_bytes(),
        }
    }
}

fn default_upload_dir() -> PathBuf {
    PathBuf::from("uploads")
}

fn default_max_upload_bytes() -> u64 {
    20 * 1024 * 1024
}
