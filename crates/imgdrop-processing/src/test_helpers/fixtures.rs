//! Test fixtures and helper functions for creating test data

use bytes::{BufMut, Bytes, BytesMut};
use image::{DynamicImage, ImageFormat, Rgb, RgbImage, Rgba, RgbaImage};
use std::io::Cursor;

/// Boundary used by `multipart_body`
pub const TEST_BOUNDARY: &str = "imgdrop-test-boundary";

fn gradient(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| {
        Rgb([
            (x * 255 / width.max(1)) as u8,
            (y * 255 / height.max(1)) as u8,
            ((x + y) % 256) as u8,
        ])
    })
}

fn encode(img: DynamicImage, format: ImageFormat) -> Vec<u8> {
    let mut buffer = Cursor::new(Vec::new());
    img.write_to(&mut buffer, format)
        .expect("failed to encode test image");
    buffer.into_inner()
}

/// Create a gradient JPEG of the given size
pub fn create_test_jpeg(width: u32, height: u32) -> Vec<u8> {
    encode(DynamicImage::ImageRgb8(gradient(width, height)), ImageFormat::Jpeg)
}

/// Create a gradient PNG of the given size
pub fn create_test_png(width: u32, height: u32) -> Vec<u8> {
    encode(DynamicImage::ImageRgb8(gradient(width, height)), ImageFormat::Png)
}

/// Create a half-transparent PNG of the given size
pub fn create_test_png_rgba(width: u32, height: u32) -> Vec<u8> {
    let img = RgbaImage::from_fn(width, height, |x, y| {
        Rgba([(x % 256) as u8, (y % 256) as u8, 128, if x % 2 == 0 { 255 } else { 0 }])
    });
    encode(DynamicImage::ImageRgba8(img), ImageFormat::Png)
}

/// One field of a test multipart body
#[derive(Debug, Clone)]
pub struct MultipartFile {
    pub name: String,
    pub filename: Option<String>,
    pub content_type: Option<String>,
    pub data: Vec<u8>,
}

impl MultipartFile {
    /// A file field
    pub fn new(name: &str, filename: &str, data: &[u8]) -> Self {
        let content_type = if filename.to_lowercase().ends_with(".png") {
            "image/png"
        } else {
            "application/octet-stream"
        };
        Self {
            name: name.to_string(),
            filename: Some(filename.to_string()),
            content_type: Some(content_type.to_string()),
            data: data.to_vec(),
        }
    }

    /// A plain form value without a filename
    pub fn text(name: &str, data: &[u8]) -> Self {
        Self {
            name: name.to_string(),
            filename: None,
            content_type: None,
            data: data.to_vec(),
        }
    }
}

/// Build a `multipart/form-data` body delimited by `TEST_BOUNDARY`
pub fn multipart_body(files: &[MultipartFile]) -> Bytes {
    let mut body = BytesMut::new();
    for file in files {
        body.put_slice(format!("--{}\r\n", TEST_BOUNDARY).as_bytes());
        match &file.filename {
            Some(filename) => body.put_slice(
                format!(
                    "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n",
                    file.name, filename
                )
                .as_bytes(),
            ),
            None => body.put_slice(
                format!("Content-Disposition: form-data; name=\"{}\"\r\n", file.name).as_bytes(),
            ),
        }
        if let Some(content_type) = &file.content_type {
            body.put_slice(format!("Content-Type: {}\r\n", content_type).as_bytes());
        }
        body.put_slice(b"\r\n");
        body.put_slice(&file.data);
        body.put_slice(b"\r\n");
    }
    body.put_slice(format!("--{}--\r\n", TEST_BOUNDARY).as_bytes());
    body.freeze()
}

/// Content-Type header value matching `multipart_body`
pub fn multipart_content_type() -> String {
    format!("multipart/form-data; boundary={}", TEST_BOUNDARY)
}
