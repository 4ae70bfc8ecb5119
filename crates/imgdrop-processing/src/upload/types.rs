//! Types for the ingestion pipeline.

use bytes::Bytes;
use imgdrop_core::constants::RESULT_SUCCESS;
use serde::{Deserialize, Serialize};

/// Raw upload as received from the caller.
#[derive(Clone, Debug)]
pub struct UploadRequest {
    /// Full multipart body
    pub body: Bytes,
    /// Value of the `Content-Type` header, carrying the multipart boundary
    pub content_type: Option<String>,
}

impl UploadRequest {
    pub fn new(body: impl Into<Bytes>, content_type: Option<String>) -> Self {
        Self {
            body: body.into(),
            content_type,
        }
    }
}

/// Result reported to the caller on success.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngestOutcome {
    pub result: String,
    /// Location of the stored object as returned by the storage backend
    pub files: String,
}

impl IngestOutcome {
    pub fn success(location: impl Into<String>) -> Self {
        Self {
            result: RESULT_SUCCESS.to_string(),
            files: location.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_wire_shape() {
        let outcome = IngestOutcome::success("https://bucket.s3.amazonaws.com/2024/03/cat.jpg");
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "result": "SUCCESS",
                "files": "https://bucket.s3.amazonaws.com/2024/03/cat.jpg"
            })
        );
    }
}
