//! Test helpers for pipeline unit tests
//!
//! This module provides an in-memory Storage that records every put, plus fixtures
//! for building images and multipart bodies without touching the filesystem.

pub mod fixtures;
pub mod mock_storage;

pub use fixtures::*;
pub use mock_storage::*;

use crate::upload::{IngestPipeline, PipelineConfig};
use std::sync::Arc;

/// Create a pipeline wired to the given mock storage with default settings
pub fn create_test_pipeline(storage: Arc<MockStorage>) -> IngestPipeline {
    IngestPipeline::new(storage, PipelineConfig::default())
}
