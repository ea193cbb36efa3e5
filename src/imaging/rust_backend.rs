//! Pure Rust codec backend with no system dependencies.
//!
//! ## Crate mapping
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Format detection | `image::ImageReader::with_guessed_format` (magic bytes, not extension) |
//! | Decode (JPEG, PNG) | `image` crate decoders |
//! | Encode → JPEG | `image::codecs::jpeg::JpegEncoder` (fixed quality, alpha dropped) |
//! | Encode → PNG | `image::codecs::png::PngEncoder` (default compression and filter) |

use super::backend::{BackendError, DecodedImage, ImageBackend};
use super::params::{ImageDescriptor, Quality, SourceFormat};
use image::buffer::ConvertBuffer;
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, ImageError, ImageReader, RgbImage, RgbaImage};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Pure Rust backend using the `image` crate ecosystem.
///
/// See the [module docs](self) for the crate-to-operation mapping.
pub struct RustBackend;

impl RustBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RustBackend {
    fn default() -> Self {
        Self::new()
    }
}

fn unsupported(path: &Path, reason: impl Into<String>) -> BackendError {
    BackendError::UnsupportedFormat {
        path: path.to_path_buf(),
        reason: reason.into(),
    }
}

/// Read failures and memory limits are failures; anything else the decoder
/// rejects means the file is not a usable JPEG or PNG.
fn decode_error(path: &Path, err: ImageError) -> BackendError {
    match err {
        ImageError::IoError(err) => BackendError::Io(err),
        ImageError::Limits(err) => BackendError::TooLarge {
            path: path.to_path_buf(),
            reason: err.to_string(),
        },
        other => unsupported(path, other.to_string()),
    }
}

impl ImageBackend for RustBackend {
    fn decode(&self, path: &Path) -> Result<DecodedImage, BackendError> {
        // The handle is dropped on every return below, including the skips
        let file = File::open(path)?;
        let reader = ImageReader::new(BufReader::new(file)).with_guessed_format()?;

        let format = reader
            .format()
            .and_then(SourceFormat::from_image_format)
            .ok_or_else(|| unsupported(path, "not a JPEG or PNG file"))?;
        let pixels = reader
            .decode()
            .map_err(|e| decode_error(path, e))?;

        if pixels.width() == 0 || pixels.height() == 0 {
            return Err(unsupported(path, "image has no pixels"));
        }

        Ok(DecodedImage {
            descriptor: ImageDescriptor {
                width: pixels.width(),
                height: pixels.height(),
                format,
            },
            color: pixels.color(),
            pixels,
        })
    }

    fn encode(
        &self,
        canvas: &RgbaImage,
        format: SourceFormat,
        quality: Quality,
    ) -> Result<Vec<u8>, BackendError> {
        let (width, height) = canvas.dimensions();
        let mut bytes = Vec::new();

        let result = match format {
            SourceFormat::Jpeg => {
                let rgb: RgbImage = canvas.convert();
                JpegEncoder::new_with_quality(&mut bytes, quality.value()).write_image(
                    rgb.as_raw(),
                    width,
                    height,
                    ExtendedColorType::Rgb8,
                )
            }
            SourceFormat::Png => PngEncoder::new(&mut bytes).write_image(
                canvas.as_raw(),
                width,
                height,
                ExtendedColorType::Rgba8,
            ),
        };

        result.map_err(|e| BackendError::Encode {
            format,
            reason: e.to_string(),
        })?;
        Ok(bytes)
    }
}
