use image::{imageops::FilterType, DynamicImage, GenericImageView};
use imgdrop_core::constants::{DEFAULT_SCALING_FACTOR, MAX_HEIGHT, MAX_WIDTH};

use super::processor::ImageDimensions;

/// Image resize operations
pub struct ImageResize;

impl ImageResize {
    /// Compute the scaling factor for an image of the given size.
    ///
    /// `min(MAX_WIDTH / width, MAX_HEIGHT / height, DEFAULT_SCALING_FACTOR)`: the largest
    /// factor keeping both sides in bounds, capped at the default. Images already inside
    /// the bounds are still shrunk by `DEFAULT_SCALING_FACTOR`.
    pub fn scaling_factor(dims: ImageDimensions) -> f64 {
        let width_fit = MAX_WIDTH as f64 / dims.width as f64;
        let height_fit = MAX_HEIGHT as f64 / dims.height as f64;
        width_fit.min(height_fit).min(DEFAULT_SCALING_FACTOR)
    }

    /// Scale one side, rounding half away from zero and keeping at least one pixel.
    fn scale_side(side: u32, factor: f64, max: u32) -> u32 {
        let scaled = (side as f64 * factor).round() as u32;
        scaled.clamp(1, max)
    }

    /// Calculate target dimensions for the given original size and factor.
    pub fn calculate_dimensions(dims: ImageDimensions, factor: f64) -> ImageDimensions {
        ImageDimensions::new(
            Self::scale_side(dims.width, factor, MAX_WIDTH),
            Self::scale_side(dims.height, factor, MAX_HEIGHT),
        )
    }

    /// Target dimensions for an image of the given size.
    pub fn target_dimensions(dims: ImageDimensions) -> ImageDimensions {
        Self::calculate_dimensions(dims, Self::scaling_factor(dims))
    }

    /// Select appropriate filter type based on resize ratio
    pub fn select_filter(
        orig_width: u32,
        orig_height: u32,
        new_width: u32,
        new_height: u32,
    ) -> FilterType {
        let width_ratio = orig_width as f32 / new_width as f32;
        let height_ratio = orig_height as f32 / new_height as f32;
        let max_ratio = width_ratio.max(height_ratio);

        if max_ratio > 2.0 {
            FilterType::Triangle
        } else if max_ratio > 1.5 {
            FilterType::CatmullRom
        } else {
            FilterType::Lanczos3
        }
    }

    /// Resize image to exact dimensions
    pub fn resize_image(img: &DynamicImage, target: ImageDimensions) -> DynamicImage {
        let (orig_width, orig_height) = img.dimensions();
        let filter = Self::select_filter(orig_width, orig_height, target.width, target.height);
        img.resize_exact(target.width, target.height, filter)
    }
}
