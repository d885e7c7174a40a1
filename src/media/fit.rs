// SPDX-License-Identifier: MPL-2.0
//! Downscaling images to fit a bounding box.
//!
//! Images are only ever shrunk: anything that already fits is decoded and
//! returned at its native size. Resizing happens on premultiplied alpha so
//! transparent edges do not bleed dark fringes into the result.

use crate::error::Result;
use image_rs::codecs::png::{CompressionType, FilterType as PngFilter, PngEncoder};
use image_rs::imageops::FilterType;
use image_rs::{DynamicImage, ExtendedColorType, GenericImageView, ImageEncoder, RgbaImage};
use std::fmt;

/// Largest width handed to the renderer.
pub const MAX_WIDTH: u32 = 1920;

/// Largest height handed to the renderer.
pub const MAX_HEIGHT: u32 = 1080;

/// A decoded image that fits inside the requested bounds.
#[derive(Clone, PartialEq, Eq)]
pub struct FittedImage {
    /// RGBA8 pixels, row-major.
    pub pixels: Vec<u8>,
    pub width: u32,
    pub height: u32,
    pub source_width: u32,
    pub source_height: u32,
}

impl FittedImage {
    /// Returns true if the image had to be scaled down.
    #[must_use]
    pub fn was_resized(&self) -> bool {
        (self.width, self.height) != (self.source_width, self.source_height)
    }

    /// Encodes the pixels as a PNG, favouring speed over size.
    pub fn to_png(&self) -> Result<Vec<u8>> {
        let mut buffer = Vec::new();
        PngEncoder::new_with_quality(&mut buffer, CompressionType::Fast, PngFilter::NoFilter)
            .write_image(&self.pixels, self.width, self.height, ExtendedColorType::Rgba8)?;
        Ok(buffer)
    }
}

impl fmt::Debug for FittedImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FittedImage")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("source_width", &self.source_width)
            .field("source_height", &self.source_height)
            .finish_non_exhaustive()
    }
}

/// Computes the size an image must be shrunk to so it fits `max_width` x
/// `max_height` with its aspect ratio kept.
///
/// Returns `None` when it already fits. Each side is at least 1px.
#[must_use]
pub fn fit_dimensions(
    width: u32,
    height: u32,
    max_width: u32,
    max_height: u32,
) -> Option<(u32, u32)> {
    let width_ratio = f64::from(max_width) / f64::from(width.max(1));
    let height_ratio = f64::from(max_height) / f64::from(height.max(1));
    let scale = width_ratio.min(height_ratio);

    if scale >= 1.0 {
        return None;
    }

    let scaled = |side: u32| ((f64::from(side) * scale) as u32).max(1);
    Some((scaled(width), scaled(height)))
}

/// Decodes `bytes` and shrinks the image to fit the given bounds.
pub fn fit_to_bounds(bytes: &[u8], max_width: u32, max_height: u32) -> Result<FittedImage> {
    let image = image_rs::load_from_memory(bytes)?;
    let (source_width, source_height) = image.dimensions();

    let rgba = match fit_dimensions(source_width, source_height, max_width, max_height) {
        None => image.to_rgba8(),
        Some((width, height)) => {
            let mut premultiplied = image.to_rgba8();
            premultiply_alpha(&mut premultiplied);
            let mut resized = resize(&DynamicImage::ImageRgba8(premultiplied), width, height)
                .to_rgba8();
            unpremultiply_alpha(&mut resized);
            resized
        }
    };

    let (width, height) = rgba.dimensions();
    Ok(FittedImage {
        pixels: rgba.into_raw(),
        width,
        height,
        source_width,
        source_height,
    })
}

/// Resize the image to the provided dimensions using a high-quality filter.
pub fn resize(image: &DynamicImage, width: u32, height: u32) -> DynamicImage {
    let width = width.max(1);
    let height = height.max(1);
    image.resize_exact(width, height, FilterType::Lanczos3)
}

fn premultiply_alpha(image: &mut RgbaImage) {
    for pixel in image.pixels_mut() {
        let alpha = u16::from(pixel[3]);
        for channel in &mut pixel.0[..3] {
            *channel = ((u16::from(*channel) * alpha + 127) / 255) as u8;
        }
    }
}

fn unpremultiply_alpha(image: &mut RgbaImage) {
    for pixel in image.pixels_mut() {
        let alpha = u16::from(pixel[3]);
        for channel in &mut pixel.0[..3] {
            *channel = if alpha == 0 {
                0
            } else {
                ((u16::from(*channel) * 255 + alpha / 2) / alpha).min(255) as u8
            };
        }
    }
}
