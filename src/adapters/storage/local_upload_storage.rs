//! Local Filesystem Storage Adapter - Implementation of UploadStorage.
//!
//! Stores uploaded documents in a flat directory. Client-supplied filenames
//! are reduced to their final path component before any filesystem access,
//! and writes go through a write-to-temp-then-rename sequence.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::ports::{StorageError, UploadStorage};

/// Local filesystem storage for uploaded documents.
///
/// # Directory Structure
///
/// ```text
/// {base_dir}/
/// ├── report.pdf
/// └── notes.docx
/// ```
#[derive(Debug, Clone)]
pub struct LocalUploadStorage {
    /// Directory all uploads are written to.
    base_dir: PathBuf,
    /// Maximum accepted upload size in bytes.
    max_bytes: u64,
}

impl LocalUploadStorage {
    /// Creates storage rooted at `base_dir` with the given size cap.
    pub fn new(base_dir: impl Into<PathBuf>, max_bytes: u64) -> Self {
        Self {
            base_dir: base_dir.into(),
            max_bytes,
        }
    }

    /// Reduces a client-supplied name to its final path component.
    ///
    /// `../../etc/passwd` becomes `passwd`; names with no usable component
    /// are rejected.
    fn sanitize(filename: &str) -> Result<String, StorageError> {
        Path::new(filename)
            .file_name()
            .and_then(|n| n.to_str())
            .filter(|n| !n.is_empty() && *n != "." && *n != "..")
            .map(|n| n.to_string())
            .ok_or_else(|| StorageError::InvalidFilename(filename.to_string()))
    }

    fn stored_path(&self, safe_name: &str) -> PathBuf {
        self.base_dir.join(safe_name)
    }
}

#[async_trait]
impl UploadStorage for LocalUploadStorage {
    async fn save(&self, filename: &str, data: &[u8]) -> Result<String, StorageError> {
        let size = data.len() as u64;
        if size > self.max_bytes {
            return Err(StorageError::file_too_large(size, self.max_bytes));
        }

        let safe_name = Self::sanitize(filename)?;

        fs::create_dir_all(&self.base_dir).await.map_err(|e| {
            StorageError::io(format!(
                "Failed to create upload directory {}: {}",
                self.base_dir.display(),
                e
            ))
        })?;

        let final_path = self.stored_path(&safe_name);
        let temp_path = self.base_dir.join(format!("{}.tmp", safe_name));

        let mut file = fs::File::create(&temp_path).await.map_err(|e| {
            StorageError::io(format!(
                "Failed to create temp file {}: {}",
                temp_path.display(),
                e
            ))
        })?;

        file.write_all(data).await.map_err(|e| {
            StorageError::io(format!(
                "Failed to write temp file {}: {}",
                temp_path.display(),
                e
            ))
        })?;

        file.sync_all().await.map_err(|e| {
            StorageError::io(format!(
                "Failed to sync temp file {}: {}",
                temp_path.display(),
                e
            ))
        })?;

        fs::rename(&temp_path, &final_path).await.map_err(|e| {
            StorageError::io(format!(
                "Failed to rename {} to {}: {}",
                temp_path.display(),
                final_path.display(),
                e
            ))
        })?;

        Ok(safe_name)
    }

    async fn read(&self, filename: &str) -> Result<Vec<u8>, StorageError> {
        let safe_name = Self::sanitize(filename)?;
        let path = self.stored_path(&safe_name);

        fs::read(&path).await.map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => StorageError::not_found(safe_name.clone()),
            std::io::ErrorKind::PermissionDenied => {
                StorageError::permission_denied(path.display().to_string())
            }
            _ => StorageError::io(format!("Failed to read {}: {}", path.display(), e)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_storage() -> (LocalUploadStorage, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalUploadStorage::new(temp_dir.path(), 1024);
        (storage, temp_dir)
    }

    #[tokio::test]
    async fn save_and_read_round_trip() {
        let (storage, _temp) = create_storage();

        let stored = storage.save("report.pdf", b"pdf bytes").await.unwrap();
        assert_eq!(stored, "report.pdf");

        let data = storage.read("report.pdf").await.unwrap();
        assert_eq!(data, b"pdf bytes");
    }

    #[tokio::test]
    async fn save_strips_path_components() {
        let (storage, temp) = create_storage();

        let stored = storage
            .save("../../../etc/passwd.docx", b"content")
            .await
            .unwrap();

        assert_eq!(stored, "passwd.docx");
        assert!(temp.path().join("passwd.docx").exists());
        assert!(!temp.path().join("etc").exists());
    }

    #[tokio::test]
    async fn save_rejects_oversized_content() {
        let (storage, _temp) = create_storage();
        let big = vec![0u8; 2048];

        let result = storage.save("big.pdf", &big).await;
        assert!(matches!(result, Err(StorageError::FileTooLarge { .. })));
    }

    #[tokio::test]
    async fn save_rejects_unusable_names() {
        let (storage, _temp) = create_storage();

        for name in ["", ".", ".."] {
            let result = storage.save(name, b"x").await;
            assert!(
                matches!(result, Err(StorageError::InvalidFilename(_))),
                "should reject {:?}",
                name
            );
        }
    }

    #[tokio::test]
    async fn save_overwrites_existing() {
        let (storage, _temp) = create_storage();

        storage.save("doc.pdf", b"v1").await.unwrap();
        storage.save("doc.pdf", b"v2").await.unwrap();

        assert_eq!(storage.read("doc.pdf").await.unwrap(), b"v2");
    }

    #[tokio::test]
    async fn read_missing_is_not_found() {
        let (storage, _temp) = create_storage();

        let result = storage.read("missing.pdf").await;
        assert!(matches!(result, Err(StorageError::NotFound(_))));
    }
}
