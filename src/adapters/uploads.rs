//! Uploaded-file store
//!
//! Cohort-assignment files are uploaded by course staff before the job is
//! queued; the job reads them back by name. Files are administrative-scale
//! CSVs, so reads return the whole content at once.

use crate::domain::result::Result;
use crate::domain::RegistrarError;
use async_trait::async_trait;
use std::path::PathBuf;

/// Read access to staff-uploaded files
#[async_trait]
pub trait UploadStore: Send + Sync {
    /// Reads the named upload as UTF-8 text
    async fn read(&self, file_name: &str) -> Result<String>;
}

/// Filesystem-backed implementation of [`UploadStore`]
pub struct LocalUploadStore {
    root: PathBuf,
}

impl LocalUploadStore {
    /// Creates a store rooted at `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[async_trait]
impl UploadStore for LocalUploadStore {
    async fn read(&self, file_name: &str) -> Result<String> {
        let path = self.root.join(file_name);
        tokio::fs::read_to_string(&path).await.map_err(|e| {
            RegistrarError::UploadStore(format!(
                "Failed to read uploaded file {}: {}",
                path.display(),
                e
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_read_existing_upload() {
        let dir = TempDir::new().unwrap();
        tokio::fs::write(dir.path().join("cohorts.csv"), "email,cohort\nu1@x.com,A\n")
            .await
            .unwrap();

        let store = LocalUploadStore::new(dir.path());
        let content = store.read("cohorts.csv").await.unwrap();
        assert!(content.starts_with("email,cohort"));
    }

    #[tokio::test]
    async fn test_read_missing_upload_is_upload_store_error() {
        let dir = TempDir::new().unwrap();
        let store = LocalUploadStore::new(dir.path());

        let err = store.read("absent.csv").await.unwrap_err();
        assert!(matches!(err, RegistrarError::UploadStore(_)));
    }
}
