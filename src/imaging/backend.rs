//! Image backend trait and shared types.
//!
//! The [`ImageBackend`] trait defines the two codec operations the pipeline
//! needs: decode a source file, and encode a composed canvas back to bytes.
//! Everything in between (ratio math, canvas composition) is pure and lives
//! outside the backend.
//!
//! The production implementation is
//! [`RustBackend`](super::rust_backend::RustBackend), built on the `image`
//! crate's pure Rust JPEG and PNG codecs.

use super::params::{ImageDescriptor, Quality, SourceFormat};
use image::{ColorType, DynamicImage, RgbaImage};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Unsupported image format: {}: {reason}", .path.display())]
    UnsupportedFormat { path: PathBuf, reason: String },
    #[error("Image too large to decode: {}: {reason}", .path.display())]
    TooLarge { path: PathBuf, reason: String },
    #[error("Encoding {format} failed: {reason}")]
    Encode {
        format: SourceFormat,
        reason: String,
    },
}

/// A fully decoded source image.
///
/// Descriptor and pixels come out of a single decode, so the source never
/// has to be read twice.
#[derive(Debug, Clone)]
pub struct DecodedImage {
    pub descriptor: ImageDescriptor,
    /// Color type as stored in the file (e.g. `Rgb8`, `Rgba8`, `L8`).
    pub color: ColorType,
    pub pixels: DynamicImage,
}

/// Trait for image codec backends.
///
/// Keeps the per-file pipeline independent of the codec implementation so
/// it can be exercised with a mock.
pub trait ImageBackend {
    /// Decode a JPEG or PNG file. Any other content is
    /// [`BackendError::UnsupportedFormat`].
    fn decode(&self, path: &Path) -> Result<DecodedImage, BackendError>;

    /// Serialize a canvas in the given format. `quality` only applies to JPEG.
    fn encode(
        &self,
        canvas: &RgbaImage,
        format: SourceFormat,
        quality: Quality,
    ) -> Result<Vec<u8>, BackendError>;
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// Mock backend that serves synthetic images by path and records calls.
    #[derive(Default)]
    pub struct MockBackend {
        pub images: HashMap<String, ImageDescriptor>,
        pub fail_encode: bool,
        pub fail_decode_io: bool,
        pub operations: Mutex<Vec<RecordedOp>>,
    }

    #[derive(Debug, Clone, PartialEq)]
    pub enum RecordedOp {
        Decode(String),
        Encode {
            format: SourceFormat,
            width: u32,
            height: u32,
            quality: u8,
        },
    }

    impl MockBackend {
        pub fn new() -> Self {
            Self::default()
        }

        /// Serve an image of the given size for `path`.
        pub fn with_image(
            mut self,
            path: impl Into<String>,
            width: u32,
            height: u32,
            format: SourceFormat,
        ) -> Self {
            self.images.insert(
                path.into(),
                ImageDescriptor {
                    width,
                    height,
                    format,
                },
            );
            self
        }

        pub fn failing_encode(mut self) -> Self {
            self.fail_encode = true;
            self
        }

        /// Every decode fails as if the file could not be read.
        pub fn failing_decode_io(mut self) -> Self {
            self.fail_decode_io = true;
            self
        }

        pub fn get_operations(&self) -> Vec<RecordedOp> {
            self.operations.lock().unwrap().clone()
        }
    }

    impl ImageBackend for MockBackend {
        fn decode(&self, path: &Path) -> Result<DecodedImage, BackendError> {
            let key = path.to_string_lossy().to_string();
            self.operations
                .lock()
                .unwrap()
                .push(RecordedOp::Decode(key.clone()));

            if self.fail_decode_io {
                return Err(std::io::Error::new(
                    std::io::ErrorKind::PermissionDenied,
                    "mock read failure",
                )
                .into());
            }

            let descriptor =
                self.images
                    .get(&key)
                    .copied()
                    .ok_or_else(|| BackendError::UnsupportedFormat {
                        path: path.to_path_buf(),
                        reason: "no mock image".to_string(),
                    })?;
            let pixels = match descriptor.format {
                SourceFormat::Jpeg => DynamicImage::ImageRgb8(image::RgbImage::from_pixel(
                    descriptor.width,
                    descriptor.height,
                    image::Rgb([200, 40, 40]),
                )),
                SourceFormat::Png => DynamicImage::ImageRgba8(RgbaImage::from_pixel(
                    descriptor.width,
                    descriptor.height,
                    image::Rgba([40, 40, 200, 255]),
                )),
            };

            Ok(DecodedImage {
                descriptor,
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
            self.operations.lock().unwrap().push(RecordedOp::Encode {
                format,
                width: canvas.width(),
                height: canvas.height(),
                quality: quality.value(),
            });

            if self.fail_encode {
                return Err(BackendError::Encode {
                    format,
                    reason: "mock encoder failure".to_string(),
                });
            }
            Ok(format.encoder_name().as_bytes().to_vec())
        }
    }

    #[test]
    fn mock_serves_known_paths() {
        let backend = MockBackend::new().with_image("/test/wide.png", 1001, 500, SourceFormat::Png);

        let decoded = backend.decode(Path::new("/test/wide.png")).unwrap();
        assert_eq!(decoded.descriptor.width, 1001);
        assert_eq!(decoded.descriptor.height, 500);
        assert_eq!(decoded.color, ColorType::Rgba8);

        let ops = backend.get_operations();
        assert_eq!(ops.len(), 1);
        assert!(matches!(&ops[0], RecordedOp::Decode(p) if p == "/test/wide.png"));
    }

    #[test]
    fn mock_rejects_unknown_paths() {
        let backend = MockBackend::new();
        let result = backend.decode(Path::new("/test/notes.png"));
        assert!(matches!(
            result,
            Err(BackendError::UnsupportedFormat { .. })
        ));
    }

    #[test]
    fn mock_records_encode() {
        let backend = MockBackend::new();
        let canvas = RgbaImage::new(16, 16);

        backend
            .encode(&canvas, SourceFormat::Jpeg, Quality::new(90))
            .unwrap();

        assert_eq!(
            backend.get_operations(),
            vec![RecordedOp::Encode {
                format: SourceFormat::Jpeg,
                width: 16,
                height: 16,
                quality: 90,
            }]
        );
    }
}
