use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, HeaderMap},
    Json,
};
use bytes::Bytes;
use imgdrop_processing::{IngestOutcome, UploadRequest};

use crate::envelope::InvocationEnvelope;
use crate::error::{HttpAppError, ValidatedJson};
use crate::state::AppState;

/// Upload image handler (raw multipart body)
///
/// The multipart boundary comes from the request's own `Content-Type` header. Only the
/// first attachment is processed.
///
/// # Errors
/// - `NoFileSelected` - body has no file part
/// - `UnsupportedImageType` - extension is not jpg, jpeg or png
/// - `ImageDecode` - bytes are not a readable image
/// - `Upload` - storage rejected the object or timed out
#[tracing::instrument(skip(state, headers, body), fields(body_size = body.len(), operation = "upload_image"))]
pub async fn upload_image(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<IngestOutcome>, HttpAppError> {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);

    let outcome = state
        .pipeline
        .ingest(UploadRequest::new(body, content_type))
        .await?;
    Ok(Json(outcome))
}

/// Envelope handler
///
/// Same pipeline as `upload_image`, with the body base64-encoded inside a JSON envelope
/// and the content type forwarded under `params.header`.
#[tracing::instrument(skip(state, envelope), fields(operation = "invoke"))]
pub async fn invoke(
    State(state): State<Arc<AppState>>,
    ValidatedJson(envelope): ValidatedJson<InvocationEnvelope>,
) -> Result<Json<IngestOutcome>, HttpAppError> {
    let request = envelope.into_upload_request()?;
    let outcome = state.pipeline.ingest(request).await?;
    Ok(Json(outcome))
}
