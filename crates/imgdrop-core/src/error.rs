//! Error types module
//!
//! Every failure of an ingestion is an `IngestError`. The first three variants are
//! detected before any expensive work; `Processing` and `Upload` abort the pipeline with
//! nothing stored. Each variant describes its own presentation through `ErrorMetadata`.

/// Log level for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Debug level - for expected errors like validation failures
    Debug,
    /// Warning level - for bad input that got past validation
    Warn,
    /// Error level - for unexpected failures
    Error,
}

/// Metadata for error responses - defines how an error should be presented
pub trait ErrorMetadata {
    /// HTTP status code to return
    fn http_status_code(&self) -> u16;

    /// Machine-readable error code (e.g., "UPLOAD_ERROR")
    fn error_code(&self) -> &'static str;

    /// Whether the same request could succeed if sent again
    fn is_recoverable(&self) -> bool;

    /// Suggested action for the client
    fn suggested_action(&self) -> Option<&'static str>;

    /// Client-facing message (may differ from internal error message)
    fn client_message(&self) -> String;

    /// Whether details should be hidden from clients
    fn is_sensitive(&self) -> bool;

    /// Log level for this error
    fn log_level(&self) -> LogLevel;
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IngestError {
    #[error("No file selected")]
    NoFileSelected,

    #[error("Unsupported image type: {0}")]
    UnsupportedImageType(String),

    #[error("Image decode error: {0}")]
    ImageDecode(String),

    #[error("Image processing error: {0}")]
    Processing(String),

    #[error("Upload error: {0}")]
    Upload(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type for ingestion operations
pub type IngestResult<T> = Result<T, IngestError>;

/// Static metadata for each variant: (http_status, error_code, recoverable, suggested_action, sensitive, log_level).
fn ingest_error_static_metadata(
    err: &IngestError,
) -> (
    u16,
    &'static str,
    bool,
    Option<&'static str>,
    bool,
    LogLevel,
) {
    match err {
        IngestError::NoFileSelected => (
            400,
            "NO_FILE_SELECTED",
            false,
            Some("Attach an image file to the multipart body"),
            false,
            LogLevel::Debug,
        ),
        IngestError::UnsupportedImageType(_) => (
            415,
            "UNSUPPORTED_IMAGE_TYPE",
            false,
            Some("Upload a .jpg, .jpeg or .png file"),
            false,
            LogLevel::Debug,
        ),
        IngestError::ImageDecode(_) => (
            422,
            "IMAGE_DECODE_ERROR",
            false,
            Some("Check image format and try a different file"),
            false,
            LogLevel::Warn,
        ),
        IngestError::Processing(_) => (
            500,
            "PROCESSING_ERROR",
            false,
            Some("Contact support if this error persists"),
            true,
            LogLevel::Error,
        ),
        IngestError::Upload(_) => (
            502,
            "UPLOAD_ERROR",
            true,
            Some("Retry after a short delay"),
            true,
            LogLevel::Error,
        ),
        IngestError::InvalidRequest(_) => (
            400,
            "INVALID_REQUEST",
            false,
            Some("Check request format and parameters"),
            false,
            LogLevel::Debug,
        ),
        IngestError::Internal(_) => (
            500,
            "INTERNAL_ERROR",
            true,
            Some("Retry after a short delay"),
            true,
            LogLevel::Error,
        ),
    }
}

impl IngestError {
    /// Get the error type name for detailed error responses
    pub fn error_type(&self) -> &'static str {
        match self {
            IngestError::NoFileSelected => "NoFileSelected",
            IngestError::UnsupportedImageType(_) => "UnsupportedImageType",
            IngestError::ImageDecode(_) => "ImageDecode",
            IngestError::Processing(_) => "Processing",
            IngestError::Upload(_) => "Upload",
            IngestError::InvalidRequest(_) => "InvalidRequest",
            IngestError::Internal(_) => "Internal",
        }
    }

    /// Full internal message, including the underlying cause.
    pub fn detailed_message(&self) -> String {
        self.to_string()
    }
}

impl ErrorMetadata for IngestError {
    fn http_status_code(&self) -> u16 {
        ingest_error_static_metadata(self).0
    }

    fn error_code(&self) -> &'static str {
        ingest_error_static_metadata(self).1
    }

    fn is_recoverable(&self) -> bool {
        ingest_error_static_metadata(self).2
    }

    fn suggested_action(&self) -> Option<&'static str> {
        ingest_error_static_metadata(self).3
    }

    fn is_sensitive(&self) -> bool {
        ingest_error_static_metadata(self).4
    }

    fn log_level(&self) -> LogLevel {
        ingest_error_static_metadata(self).5
    }

    fn client_message(&self) -> String {
        match self {
            IngestError::NoFileSelected => "No file selected".to_string(),
            IngestError::UnsupportedImageType(ref ext) => {
                format!("Unsupported image type: {}", ext)
            }
            IngestError::ImageDecode(_) => "Uploaded file is not a valid image".to_string(),
            IngestError::Processing(_) => "Failed to process image".to_string(),
            IngestError::Upload(_) => "Failed to store image".to_string(),
            IngestError::InvalidRequest(ref msg) => msg.clone(),
            IngestError::Internal(_) => "Internal server error".to_string(),
        }
    }
}

impl From<anyhow::Error> for IngestError {
    fn from(err: anyhow::Error) -> Self {
        IngestError::Internal(format!("{:#}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_metadata_no_file_selected() {
        let err = IngestError::NoFileSelected;
        assert_eq!(err.http_status_code(), 400);
        assert_eq!(err.error_code(), "NO_FILE_SELECTED");
        assert!(!err.is_recoverable());
        assert_eq!(err.client_message(), "No file selected");
        assert!(!err.is_sensitive());
        assert_eq!(err.log_level(), LogLevel::Debug);
    }

    #[test]
    fn test_error_metadata_unsupported_type_names_extension() {
        let err = IngestError::UnsupportedImageType("gif".to_string());
        assert_eq!(err.to_string(), "Unsupported image type: gif");
        assert_eq!(err.client_message(), "Unsupported image type: gif");
        assert_eq!(err.http_status_code(), 415);
        assert_eq!(err.error_code(), "UNSUPPORTED_IMAGE_TYPE");
    }

    #[test]
    fn test_error_metadata_upload_is_distinct_failure() {
        let err = IngestError::Upload("connection reset".to_string());
        assert_eq!(err.http_status_code(), 502);
        assert_eq!(err.error_code(), "UPLOAD_ERROR");
        assert!(err.is_recoverable());
        assert!(err.is_sensitive());
        assert_eq!(err.client_message(), "Failed to store image");
        assert!(err.detailed_message().contains("connection reset"));
        assert_eq!(err.log_level(), LogLevel::Error);
    }

    #[test]
    fn test_error_metadata_decode_is_client_error() {
        let err = IngestError::ImageDecode("bad magic".to_string());
        assert_eq!(err.http_status_code(), 422);
        assert!(!err.is_sensitive());
        assert_eq!(err.log_level(), LogLevel::Warn);
    }

    #[test]
    fn test_from_anyhow_keeps_context_chain() {
        let err: IngestError = anyhow::anyhow!("disk full")
            .context("writing object")
            .into();
        assert_eq!(err.error_type(), "Internal");
        assert!(err.detailed_message().contains("writing object"));
        assert!(err.detailed_message().contains("disk full"));
    }
}
