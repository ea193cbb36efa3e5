//! Image processing in pure Rust, with no system dependencies.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Decode** | `image::ImageReader` (JPEG, PNG; format sniffed from content) |
//! | **Ratio check** | [`evaluate_ratio`] (pure) |
//! | **Square canvas** | `RgbaImage::from_pixel` + `imageops::replace` |
//! | **Encode** | `JpegEncoder` (quality 90) / `PngEncoder` (defaults) |
//!
//! The module is split into:
//! - **Calculations**: Pure functions for ratio and placement math (unit testable)
//! - **Parameters**: Formats, descriptors and quality settings
//! - **Backend**: [`ImageBackend`] trait + [`RustBackend`]
//! - **Operations**: Canvas composition on decoded pixels

pub mod backend;
mod calculations;
pub mod operations;
mod params;
pub mod rust_backend;

pub use backend::{BackendError, DecodedImage, ImageBackend};
pub use calculations::{
    PaddedAxis, Padding, PlacementOffset, RatioDecision, evaluate_ratio, placement_offset,
};
pub use operations::{
    BACKGROUND, CanvasTooLarge, SquareCanvas, canvas_bytes, compose_square,
    default_max_canvas_bytes,
};
pub use params::{ImageDescriptor, Quality, SourceFormat};
pub use rust_backend::RustBackend;
