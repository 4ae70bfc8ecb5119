//! imgdrop core library
//!
//! Error taxonomy, configuration and constants shared by every imgdrop crate.

pub mod config;
pub mod constants;
pub mod error;
pub mod storage_types;

// Re-export commonly used types
pub use config::{Config, LogFormat};
pub use error::{ErrorMetadata, IngestError, IngestResult, LogLevel};
pub use storage_types::StorageBackend;
