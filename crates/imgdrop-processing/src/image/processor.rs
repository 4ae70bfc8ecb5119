//! Image processor - size inference and decoding

use image::{DynamicImage, GenericImageView, ImageReader};
use imgdrop_core::{IngestError, IngestResult};
use std::io::Cursor;

/// Width and height of an image in pixels, both positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageDimensions {
    pub width: u32,
    pub height: u32,
}

impl ImageDimensions {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

pub struct ImageProcessor;

impl ImageProcessor {
    fn reader(data: &[u8]) -> IngestResult<ImageReader<Cursor<&[u8]>>> {
        ImageReader::new(Cursor::new(data))
            .with_guessed_format()
            .map_err(|e| IngestError::ImageDecode(e.to_string()))
    }

    fn checked(width: u32, height: u32) -> IngestResult<ImageDimensions> {
        if width == 0 || height == 0 {
            return Err(IngestError::ImageDecode(format!(
                "image has empty dimensions {}x{}",
                width, height
            )));
        }
        Ok(ImageDimensions::new(width, height))
    }

    /// Read the image dimensions from the header only, without decoding pixel data.
    pub fn infer_dimensions(data: &[u8]) -> IngestResult<ImageDimensions> {
        let (width, height) = Self::reader(data)?
            .into_dimensions()
            .map_err(|e| IngestError::ImageDecode(e.to_string()))?;
        Self::checked(width, height)
    }

    /// Fully decode the image.
    pub fn decode(data: &[u8]) -> IngestResult<DynamicImage> {
        let img = Self::reader(data)?
            .decode()
            .map_err(|e| IngestError::ImageDecode(e.to_string()))?;
        let (width, height) = img.dimensions();
        Self::checked(width, height)?;
        Ok(img)
    }
}
