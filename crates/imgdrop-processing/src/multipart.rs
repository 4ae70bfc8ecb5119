//! Multipart payload decoding.
//!
//! The body arrives fully buffered, so it is fed to `multer` as a single-chunk stream.
//! Decoding never fails: a missing boundary or a malformed body yields whatever parts
//! were decoded before the fault, which for a broken body is none.

use bytes::Bytes;
use futures::stream;

/// One file entry of a decoded multipart payload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AttachmentPart {
    pub filename: String,
    pub data: Bytes,
}

/// Decode the file parts of a `multipart/form-data` body, in order.
///
/// Fields without a filename are form values, not attachments, and are skipped.
pub async fn decode_multipart(body: Bytes, content_type: Option<&str>) -> Vec<AttachmentPart> {
    let Some(content_type) = content_type else {
        tracing::warn!("Request has no content-type header, no attachments decoded");
        return Vec::new();
    };

    let boundary = match multer::parse_boundary(content_type) {
        Ok(boundary) => boundary,
        Err(e) => {
            tracing::warn!(
                error = %e,
                content_type = %content_type,
                "No multipart boundary in content-type, no attachments decoded"
            );
            return Vec::new();
        }
    };

    let body_size = body.len();
    let body_stream = stream::once(async move { Ok::<Bytes, std::io::Error>(body) });
    let mut multipart = multer::Multipart::new(body_stream, boundary);
    let mut parts = Vec::new();

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    body_size,
                    decoded_parts = parts.len(),
                    "Malformed multipart body, keeping parts decoded so far"
                );
                break;
            }
        };

        let Some(filename) = field.file_name().map(str::to_string) else {
            tracing::debug!(field = ?field.name(), "Skipping multipart field without filename");
            continue;
        };

        match field.bytes().await {
            Ok(data) => parts.push(AttachmentPart { filename, data }),
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    filename = %filename,
                    "Failed to read multipart field, keeping parts decoded so far"
                );
                break;
            }
        }
    }

    tracing::debug!(body_size, parts = parts.len(), "Decoded multipart body");
    parts
}
