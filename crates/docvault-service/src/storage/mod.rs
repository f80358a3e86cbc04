//! Document blob storage.

pub mod local;

use async_trait::async_trait;
use bytes::Bytes;

use docvault_core::result::AppResult;

pub use local::LocalDocumentStore;

/// Backend for storing uploaded document files.
///
/// Stored paths are opaque keys chosen by the backend. Callers persist the
/// returned key alongside the document metadata and hand it back for reads
/// and deletes.
#[async_trait]
pub trait DocumentStore: Send + Sync + std::fmt::Debug + 'static {
    /// Write an uploaded file, returning its storage key.
    ///
    /// The original file name contributes only its extension; the key is
    /// generated so that uploads never collide or overwrite.
    async fn store(&self, original_file_name: &str, data: Bytes) -> AppResult<String>;

    /// Read a stored file back into memory.
    async fn read(&self, key: &str) -> AppResult<Bytes>;

    /// Delete a stored file. Deleting a missing key is not an error.
    async fn delete(&self, key: &str) -> AppResult<()>;
}
