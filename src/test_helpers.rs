//! Shared test utilities for the square-pad test suite.
//!
//! Fixture images are generated in code so tests never depend on binary
//! files in the repository.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = tempfile::TempDir::new().unwrap();
//! create_test_jpeg(&tmp.path().join("wide.jpg"), 1001, 500);
//! create_test_png(&tmp.path().join("tall.png"), 300, 900);
//! ```

use image::{ExtendedColorType, ImageEncoder, RgbImage, RgbaImage};
use std::path::Path;

/// Gradient pattern so misplaced pixels show up in comparisons.
pub fn gradient_rgb(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| {
        image::Rgb([(x % 256) as u8, (y % 256) as u8, 128])
    })
}

/// Gradient with a fully transparent right half.
pub fn gradient_rgba(width: u32, height: u32) -> RgbaImage {
    RgbaImage::from_fn(width, height, |x, y| {
        let alpha = if x < width / 2 { 255 } else { 0 };
        image::Rgba([(x % 256) as u8, (y % 256) as u8, 64, alpha])
    })
}

/// Create a valid JPEG file with the given dimensions.
pub fn create_test_jpeg(path: &Path, width: u32, height: u32) {
    let img = gradient_rgb(width, height);
    let file = std::fs::File::create(path).unwrap();
    let writer = std::io::BufWriter::new(file);
    image::codecs::jpeg::JpegEncoder::new(writer)
        .write_image(img.as_raw(), width, height, ExtendedColorType::Rgb8)
        .unwrap();
}

/// Create a valid RGBA PNG file with the given dimensions.
pub fn create_test_png(path: &Path, width: u32, height: u32) {
    let img = gradient_rgba(width, height);
    let file = std::fs::File::create(path).unwrap();
    let writer = std::io::BufWriter::new(file);
    image::codecs::png::PngEncoder::new(writer)
        .write_image(img.as_raw(), width, height, ExtendedColorType::Rgba8)
        .unwrap();
}
