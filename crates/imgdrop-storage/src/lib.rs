//! imgdrop Storage Library
//!
//! This crate provides the storage abstraction the ingestion pipeline uploads through,
//! with implementations for S3 (and S3-compatible providers) and the local filesystem.
//!
//! # Storage key format
//!
//! Normalized images are stored under a date-partitioned key:
//!
//! - `{year}/{month}/{basename}.jpg`, month zero-padded to two digits
//!
//! Keys are not content-addressed: the same file name uploaded twice in one month
//! overwrites the earlier object. Key derivation lives in the `keys` module so every
//! backend sees the same layout.

pub mod factory;
pub mod keys;
#[cfg(feature = "storage-local")]
pub mod local;
#[cfg(feature = "storage-s3")]
pub mod s3;
pub mod traits;

// Re-export commonly used types
pub use factory::create_storage;
pub use imgdrop_core::StorageBackend;
pub use keys::{derive_storage_key, StorageKey};
#[cfg(feature = "storage-local")]
pub use local::LocalStorage;
#[cfg(feature = "storage-s3")]
pub use s3::S3Storage;
pub use traits::{Storage, StorageError, StorageResult};
