//! Ingestion pipeline: decode → validate → normalize → store.

pub mod pipeline;
pub mod types;

pub use pipeline::{IngestPipeline, PipelineConfig};
pub use types::{IngestOutcome, UploadRequest};
