//! Ingestion pipeline: decode → validate → normalize → store.
//!
//! Stages run one after another for a single request. Image work is CPU-bound and runs
//! on the blocking pool; the upload is bounded by `PipelineConfig::upload_timeout`.
//! Any stage failure aborts the request, and nothing reaches storage unless every
//! earlier stage succeeded.

use chrono::{DateTime, Utc};
use std::sync::Arc;
use std::time::{Duration, Instant};

use imgdrop_core::{IngestError, IngestResult};
use imgdrop_storage::{derive_storage_key, Storage};

use super::types::{IngestOutcome, UploadRequest};
use crate::image::ImageTransformer;
use crate::multipart::{decode_multipart, AttachmentPart};
use crate::validator::{select_first_part, validate_attachment};

/// Default bound on a single storage put.
pub const DEFAULT_UPLOAD_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Clone, Debug)]
pub struct PipelineConfig {
    pub upload_timeout: Duration,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            upload_timeout: DEFAULT_UPLOAD_TIMEOUT,
        }
    }
}

/// Single-request image ingestion. Holds only the injected storage and immutable config,
/// so one instance is shared across all requests.
#[derive(Clone)]
pub struct IngestPipeline {
    storage: Arc<dyn Storage>,
    config: PipelineConfig,
}

impl IngestPipeline {
    pub fn new(storage: Arc<dyn Storage>, config: PipelineConfig) -> Self {
        Self { storage, config }
    }

    pub fn storage(&self) -> &Arc<dyn Storage> {
        &self.storage
    }

    /// Run the pipeline, deriving the storage key from the current UTC date.
    pub async fn ingest(&self, request: UploadRequest) -> IngestResult<IngestOutcome> {
        self.ingest_at(request, Utc::now()).await
    }

    /// Run the pipeline with an explicit clock.
    #[tracing::instrument(skip(self, request), fields(body_size = request.body.len()))]
    pub async fn ingest_at(
        &self,
        request: UploadRequest,
        now: DateTime<Utc>,
    ) -> IngestResult<IngestOutcome> {
        let parts = decode_multipart(request.body, request.content_type.as_deref()).await;
        self.ingest_parts(parts, now).await
    }

    /// Run the pipeline on attachments that were already decoded.
    pub async fn ingest_parts(
        &self,
        parts: Vec<AttachmentPart>,
        now: DateTime<Utc>,
    ) -> IngestResult<IngestOutcome> {
        let part = select_first_part(parts)?;
        let attachment = validate_attachment(&part.filename)?;

        let start = Instant::now();
        let data = part.data;
        let normalized = tokio::task::spawn_blocking(move || ImageTransformer::normalize(&data))
            .await
            .map_err(|e| IngestError::Processing(format!("normalize task failed: {}", e)))??;

        tracing::info!(
            filename = %attachment.filename,
            original_width = normalized.original.width,
            original_height = normalized.original.height,
            width = normalized.dimensions.width,
            height = normalized.dimensions.height,
            duration_ms = start.elapsed().as_millis() as u64,
            "Image normalized"
        );

        let key = derive_storage_key(&now, &attachment.filename);
        let size_bytes = normalized.data.len();
        let start = Instant::now();

        let put = self
            .storage
            .put(&key, normalized.data, normalized.content_type);
        let location = match tokio::time::timeout(self.config.upload_timeout, put).await {
            Ok(Ok(location)) => location,
            Ok(Err(e)) => {
                tracing::error!(
                    error = %e,
                    key = %key,
                    size_bytes,
                    "Failed to store normalized image"
                );
                return Err(e.into());
            }
            Err(_) => {
                tracing::error!(
                    key = %key,
                    size_bytes,
                    timeout_ms = self.config.upload_timeout.as_millis() as u64,
                    "Storage upload timed out"
                );
                return Err(IngestError::Upload(format!(
                    "upload timed out after {:?}",
                    self.config.upload_timeout
                )));
            }
        };

        tracing::info!(
            key = %key,
            location = %location,
            size_bytes,
            duration_ms = start.elapsed().as_millis() as u64,
            "Image stored"
        );

        Ok(IngestOutcome::success(location))
    }
}
