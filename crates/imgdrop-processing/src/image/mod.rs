//! Image normalization
//!
//! - Size inference from the raw bytes (processor)
//! - Scaling-factor computation and resizing (resize)
//! - Resize + JPEG re-encode of a whole upload (transformer)

pub mod processor;
pub mod resize;
pub mod transformer;

pub use processor::{ImageDimensions, ImageProcessor};
pub use resize::ImageResize;
pub use transformer::{ImageTransformer, NormalizedImage};
