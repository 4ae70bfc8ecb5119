//! Invocation envelope.
//!
//! Function-style callers wrap the upload in JSON instead of sending it raw:
//!
//! ```json
//! { "body-json": "<base64 multipart body>",
//!   "params": { "header": { "content-type": "multipart/form-data; boundary=..." } } }
//! ```

use base64::{
    alphabet,
    engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig},
    Engine as _,
};
use imgdrop_core::{IngestError, IngestResult};
use imgdrop_processing::UploadRequest;
use serde::Deserialize;
use std::collections::HashMap;

/// Standard alphabet; trailing `=` padding is optional on decode.
const BODY_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

#[derive(Debug, Clone, Deserialize)]
pub struct InvocationEnvelope {
    #[serde(rename = "body-json")]
    pub body_json: String,
    #[serde(default)]
    pub params: EnvelopeParams,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EnvelopeParams {
    #[serde(default)]
    pub header: HashMap<String, String>,
}

impl InvocationEnvelope {
    /// Look up a forwarded header, ignoring case.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.params
            .header
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Decode the body and pair it with the forwarded content type.
    pub fn into_upload_request(self) -> IngestResult<UploadRequest> {
        let content_type = self.header("content-type").map(str::to_string);
        let body = BODY_ENGINE
            .decode(self.body_json.trim())
            .map_err(|e| IngestError::InvalidRequest(format!("body-json is not base64: {}", e)))?;
        Ok(UploadRequest::new(body, content_type))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::engine::general_purpose::{STANDARD, STANDARD_NO_PAD};
    use serde_json::json;

    fn envelope(value: serde_json::Value) -> InvocationEnvelope {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_decodes_body_and_content_type() {
        let env = envelope(json!({
            "body-json": STANDARD.encode(b"--b\r\n"),
            "params": { "header": { "content-type": "multipart/form-data; boundary=b" } }
        }));

        let request = env.into_upload_request().unwrap();
        assert_eq!(&request.body[..], b"--b\r\n");
        assert_eq!(
            request.content_type.as_deref(),
            Some("multipart/form-data; boundary=b")
        );
    }

    #[test]
    fn test_header_lookup_ignores_case() {
        let env = envelope(json!({
            "body-json": "",
            "params": { "header": { "Content-Type": "multipart/form-data; boundary=x" } }
        }));
        assert_eq!(
            env.header("content-type"),
            Some("multipart/form-data; boundary=x")
        );
    }

    #[test]
    fn test_missing_params_means_no_content_type() {
        let env = envelope(json!({ "body-json": "" }));
        let request = env.into_upload_request().unwrap();
        assert!(request.body.is_empty());
        assert_eq!(request.content_type, None);
    }

    #[test]
    fn test_invalid_base64_is_invalid_request() {
        let env = envelope(json!({ "body-json": "***not base64***" }));
        assert!(matches!(
            env.into_upload_request(),
            Err(IngestError::InvalidRequest(_))
        ));
    }

    #[test]
    fn test_unpadded_body_is_accepted() {
        let raw = b"--boundary\r\n\r";
        let unpadded = STANDARD_NO_PAD.encode(raw);
        assert!(!unpadded.ends_with('='));

        let env = envelope(json!({ "body-json": unpadded }));
        let request = env.into_upload_request().unwrap();
        assert_eq!(&request.body[..], raw);
    }
}
