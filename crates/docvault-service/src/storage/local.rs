//! Local filesystem document store.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use bytes::Bytes;
use tokio::fs;
use tracing::debug;
use uuid::Uuid;

use docvault_core::error::{AppError, ErrorKind};
use docvault_core::result::AppResult;

use super::DocumentStore;

/// Stores documents as flat files under a root directory.
///
/// Keys are freshly generated UUIDs with the upload's extension appended,
/// so concurrent uploads of the same file name never collide.
#[derive(Debug, Clone)]
pub struct LocalDocumentStore {
    root: PathBuf,
}

impl LocalDocumentStore {
    /// Create a local store rooted at the given path, creating it if needed.
    pub async fn new(root_path: &str) -> AppResult<Self> {
        let root = PathBuf::from(root_path);
        fs::create_dir_all(&root).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to create storage root: {}", root.display()),
                e,
            )
        })?;
        Ok(Self { root })
    }

    fn resolve(&self, key: &str) -> PathBuf {
        // Keys are generated here and contain no separators, but strip any
        // leading slash just in case one is ever persisted.
        self.root.join(key.trim_start_matches('/'))
    }

    fn generate_key(original_file_name: &str) -> String {
        match Path::new(original_file_name)
            .extension()
            .and_then(|ext| ext.to_str())
        {
            Some(ext) => format!("{}.{}", Uuid::new_v4(), ext.to_ascii_lowercase()),
            None => Uuid::new_v4().to_string(),
        }
    }
}

#[async_trait]
impl DocumentStore for LocalDocumentStore {
    async fn store(&self, original_file_name: &str, data: Bytes) -> AppResult<String> {
        let key = Self::generate_key(original_file_name);
        let full_path = self.resolve(&key);

        fs::write(&full_path, &data).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to write file: {key}"),
                e,
            )
        })?;

        debug!(%key, bytes = data.len(), "Stored document file");
        Ok(key)
    }

    async fn read(&self, key: &str) -> AppResult<Bytes> {
        let full_path = self.resolve(key);
        let data = fs::read(&full_path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                AppError::not_found("File not found")
            } else {
                AppError::with_source(
                    ErrorKind::Storage,
                    format!("Failed to read file: {key}"),
                    e,
                )
            }
        })?;
        Ok(Bytes::from(data))
    }

    async fn delete(&self, key: &str) -> AppResult<()> {
        let full_path = self.resolve(key);
        match fs::remove_file(&full_path).await {
            Ok(()) => {
                debug!(%key, "Deleted document file");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to delete file: {key}"),
                e,
            )),
        }
    }
}
