//! Application state shared by all handlers.

use imgdrop_core::StorageBackend;
use imgdrop_processing::IngestPipeline;

/// Built once at startup and shared behind an `Arc`. Nothing in it changes per request.
#[derive(Clone)]
pub struct AppState {
    pub pipeline: IngestPipeline,
}

impl AppState {
    pub fn new(pipeline: IngestPipeline) -> Self {
        Self { pipeline }
    }

    pub fn storage_backend(&self) -> StorageBackend {
        self.pipeline.storage().backend_type()
    }
}
