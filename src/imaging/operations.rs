//! High-level image operations.
//!
//! These functions combine the pure calculations with pixel work on decoded
//! buffers. No I/O happens here.

use super::calculations::{Padding, PlacementOffset, placement_offset};
use image::{DynamicImage, Rgba, RgbaImage, imageops};
use thiserror::Error;

/// Fill color of the padding bars: opaque white.
pub const BACKGROUND: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// The square canvas would need more memory than allowed.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Square canvas of {side}x{side} needs {bytes} bytes, limit is {limit}")]
pub struct CanvasTooLarge {
    pub side: u32,
    pub bytes: u64,
    pub limit: u64,
}

/// Default canvas cap: the same allocation limit the decoder works under.
pub fn default_max_canvas_bytes() -> u64 {
    image::Limits::default().max_alloc.unwrap_or(u64::MAX)
}

/// Bytes of an RGBA square with the given side.
pub fn canvas_bytes(side: u32) -> u64 {
    let side = u64::from(side);
    (side * side).saturating_mul(4)
}

/// A composed square canvas, ready for encoding.
#[derive(Debug, Clone, PartialEq)]
pub struct SquareCanvas {
    pub pixels: RgbaImage,
    /// Where the source landed inside `pixels`.
    pub offset: PlacementOffset,
}

/// Center `source` on a white square of side `padding.target_size`.
///
/// Source pixels replace the canvas pixels outright (no alpha blending), so
/// a transparent source pixel stays transparent instead of turning white.
/// The source buffer is left untouched.
///
/// A canvas larger than `max_bytes` is refused before anything is allocated.
pub fn compose_square(
    source: &DynamicImage,
    padding: &Padding,
    max_bytes: u64,
) -> Result<SquareCanvas, CanvasTooLarge> {
    let side = padding.target_size;
    let bytes = canvas_bytes(side);
    if bytes > max_bytes {
        return Err(CanvasTooLarge {
            side,
            bytes,
            limit: max_bytes,
        });
    }

    let source = source.to_rgba8();
    let offset = placement_offset(padding, source.width(), source.height());

    let mut pixels = RgbaImage::from_pixel(side, side, BACKGROUND);
    imageops::replace(&mut pixels, &source, i64::from(offset.x), i64::from(offset.y));

    Ok(SquareCanvas { pixels, offset })
}
