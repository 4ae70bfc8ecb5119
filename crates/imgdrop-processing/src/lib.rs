//! imgdrop processing library
//!
//! The ingestion pipeline and everything it runs: attachment intake and validation,
//! the image normalizer (size inference, scaling factor, resize and JPEG re-encode) and
//! the upload step.

pub mod image;
pub mod multipart;
pub mod upload;
pub mod validator;

// Test helpers (fixtures and a recording storage)
#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers;

pub use self::image::{
    ImageDimensions, ImageProcessor, ImageResize, ImageTransformer, NormalizedImage,
};
pub use multipart::{decode_multipart, AttachmentPart};
pub use upload::{IngestOutcome, IngestPipeline, PipelineConfig, UploadRequest};
pub use validator::{select_first_part, validate_attachment, ValidatedAttachment};
