//! Fixed normalization constants.
//!
//! Target dimensions and encoding are not configurable; every accepted image goes
//! through the same bounds.

/// Maximum output width in pixels.
pub const MAX_WIDTH: u32 = 500;

/// Maximum output height in pixels.
pub const MAX_HEIGHT: u32 = 500;

/// Upper bound on the scaling factor. Images are always shrunk by at least this much,
/// even when they already fit inside `MAX_WIDTH` x `MAX_HEIGHT`.
pub const DEFAULT_SCALING_FACTOR: f64 = 0.8;

/// JPEG quality used for every re-encoded image.
pub const DEFAULT_QUALITY: u8 = 90;

/// Content type of every normalized image.
pub const OUTPUT_CONTENT_TYPE: &str = "image/jpeg";

/// File extension of every normalized image.
pub const OUTPUT_EXTENSION: &str = "jpg";

/// Extensions accepted on the uploaded attachment (compared lower-cased).
pub const ALLOWED_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

/// Value of the `result` field on a successful ingestion.
pub const RESULT_SUCCESS: &str = "SUCCESS";
