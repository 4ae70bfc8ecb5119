//! Storage abstraction trait
//!
//! This module defines the Storage trait that all storage backends must implement.

use crate::keys::StorageKey;
use crate::StorageBackend;
use async_trait::async_trait;
use bytes::Bytes;
use imgdrop_core::IngestError;
use thiserror::Error;

/// Storage operation errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Upload failed: {0}")]
    UploadFailed(String),

    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

impl From<StorageError> for IngestError {
    fn from(err: StorageError) -> Self {
        IngestError::Upload(err.to_string())
    }
}

/// Storage abstraction trait
///
/// The ingestion pipeline holds one `Arc<dyn Storage>` built at startup and hands every
/// normalized image to it. Backends must not retry on their own.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Store `data` under `key` with the given content type (single put-object).
    ///
    /// Returns the location of the stored object, e.g. its public URL. An existing object
    /// under the same key is overwritten.
    async fn put(&self, key: &StorageKey, data: Bytes, content_type: &str)
        -> StorageResult<String>;

    /// Get the storage backend type
    fn backend_type(&self) -> StorageBackend;
}
