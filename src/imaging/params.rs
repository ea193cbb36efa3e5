//! Parameter types for image operations.
//!
//! These types describe *what* an image is and *how* it should be written,
//! not how the pixels are moved. They are the interface between the
//! [`process`](crate::process) stage (which decides what to do with a file)
//! and the [`backend`](super::backend) (which decodes and encodes).
//!
//! ## Types
//!
//! - [`SourceFormat`]: The two formats the tool reads and writes back (JPEG, PNG).
//! - [`ImageDescriptor`]: Width, height and detected format of one decoded file.
//! - [`Quality`]: Lossy encoding quality (1–100, default 90). Clamped on construction.

use std::fmt;

/// Image format detected from file content.
///
/// The output of a squared image always uses the same format as its source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Jpeg,
    Png,
}

impl SourceFormat {
    /// Map a format reported by the `image` crate. Anything but JPEG/PNG is `None`.
    pub fn from_image_format(format: image::ImageFormat) -> Option<Self> {
        match format {
            image::ImageFormat::Jpeg => Some(Self::Jpeg),
            image::ImageFormat::Png => Some(Self::Png),
            _ => None,
        }
    }

    /// File extension used for squared outputs (without the dot).
    pub fn extension(self) -> &'static str {
        match self {
            Self::Jpeg => "jpg",
            Self::Png => "png",
        }
    }

    /// Encoder name shown in the per-file output.
    pub fn encoder_name(self) -> &'static str {
        match self {
            Self::Jpeg => "jpeg",
            Self::Png => "png",
        }
    }
}

impl fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.encoder_name())
    }
}

/// Dimensions and format of a decoded source image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageDescriptor {
    pub width: u32,
    pub height: u32,
    pub format: SourceFormat,
}

/// Quality setting for lossy image encoding (1-100).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quality(pub u8);

impl Quality {
    pub fn new(value: u8) -> Self {
        Self(value.clamp(1, 100))
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl Default for Quality {
    fn default() -> Self {
        Self(90)
    }
}
