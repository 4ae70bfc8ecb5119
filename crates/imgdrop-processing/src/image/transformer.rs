//! Image transformer - the resize + re-encode step of normalization
//!
//! Every accepted upload, whatever its source format, leaves here as a JPEG at
//! `DEFAULT_QUALITY` sized by `ImageResize::target_dimensions`.

use crate::image::processor::{ImageDimensions, ImageProcessor};
use crate::image::resize::ImageResize;
use bytes::Bytes;
use image::codecs::jpeg::JpegEncoder;
use image::ExtendedColorType;
use imgdrop_core::constants::{DEFAULT_QUALITY, OUTPUT_CONTENT_TYPE};
use imgdrop_core::{IngestError, IngestResult};

/// A resized, re-encoded image ready for upload. Never mutated after creation.
#[derive(Debug, Clone)]
pub struct NormalizedImage {
    pub data: Bytes,
    pub content_type: &'static str,
    pub original: ImageDimensions,
    pub dimensions: ImageDimensions,
    pub scaling_factor: f64,
}

/// Main image transformer
pub struct ImageTransformer;

impl ImageTransformer {
    /// Normalize raw image bytes: infer size, compute the factor, resize, encode JPEG.
    ///
    /// Synchronous and CPU-bound. Decode failures are `ImageDecode`; resize or encode
    /// failures are `Processing`. No partial buffer is ever returned.
    pub fn normalize(data: &[u8]) -> IngestResult<NormalizedImage> {
        let original = ImageProcessor::infer_dimensions(data)?;
        let scaling_factor = ImageResize::scaling_factor(original);
        let target = ImageResize::calculate_dimensions(original, scaling_factor);

        let img = ImageProcessor::decode(data)?;
        let resized = ImageResize::resize_image(&img, target);

        // JPEG has no alpha channel
        let rgb = resized.to_rgb8();
        if rgb.width() != target.width || rgb.height() != target.height {
            return Err(IngestError::Processing(format!(
                "resize produced {}x{}, expected {}x{}",
                rgb.width(),
                rgb.height(),
                target.width,
                target.height
            )));
        }

        let estimated_size = (target.width * target.height) as usize / 4;
        let mut buffer = Vec::with_capacity(estimated_size);
        let mut encoder = JpegEncoder::new_with_quality(&mut buffer, DEFAULT_QUALITY);
        encoder
            .encode(
                rgb.as_raw(),
                rgb.width(),
                rgb.height(),
                ExtendedColorType::Rgb8,
            )
            .map_err(|e| IngestError::Processing(format!("JPEG encode failed: {}", e)))?;

        tracing::debug!(
            original_width = original.width,
            original_height = original.height,
            width = target.width,
            height = target.height,
            scaling_factor,
            size_bytes = buffer.len(),
            "Image normalized"
        );

        Ok(NormalizedImage {
            data: Bytes::from(buffer),
            content_type: OUTPUT_CONTENT_TYPE,
            original,
            dimensions: target,
            scaling_factor,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{create_test_jpeg, create_test_png, create_test_png_rgba};
    use image::{GenericImageView, ImageFormat};

    fn output_format(data: &[u8]) -> ImageFormat {
        image::guess_format(data).unwrap()
    }

    #[test]
    fn test_normalize_large_jpeg() {
        let normalized = ImageTransformer::normalize(&create_test_jpeg(1000, 800)).unwrap();

        assert_eq!(normalized.original, ImageDimensions::new(1000, 800));
        assert_eq!(normalized.dimensions, ImageDimensions::new(500, 400));
        assert_eq!(normalized.scaling_factor, 0.5);
        assert_eq!(normalized.content_type, "image/jpeg");

        let decoded = image::load_from_memory(&normalized.data).unwrap();
        assert_eq!(decoded.dimensions(), (500, 400));
        assert_eq!(output_format(&normalized.data), ImageFormat::Jpeg);
    }

    #[test]
    fn test_normalize_small_png_becomes_jpeg() {
        let normalized = ImageTransformer::normalize(&create_test_png(100, 100)).unwrap();

        assert_eq!(normalized.dimensions, ImageDimensions::new(80, 80));
        assert_eq!(normalized.content_type, "image/jpeg");
        assert_eq!(output_format(&normalized.data), ImageFormat::Jpeg);
    }

    #[test]
    fn test_normalize_png_with_alpha() {
        let normalized = ImageTransformer::normalize(&create_test_png_rgba(50, 20)).unwrap();

        assert_eq!(normalized.dimensions, ImageDimensions::new(40, 16));
        let decoded = image::load_from_memory(&normalized.data).unwrap();
        assert_eq!(decoded.dimensions(), (40, 16));
    }

    #[test]
    fn test_normalize_invalid_bytes() {
        let result = ImageTransformer::normalize(b"GIF89a but not really");
        assert!(matches!(result, Err(IngestError::ImageDecode(_))));
    }

    #[test]
    fn test_normalize_rounding_boundary() {
        let normalized = ImageTransformer::normalize(&create_test_png(1000, 801)).unwrap();
        assert_eq!(normalized.dimensions, ImageDimensions::new(500, 401));
    }
}
