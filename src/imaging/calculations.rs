//! Pure calculation functions for aspect ratios and canvas placement.
//!
//! All functions here are pure and testable without any I/O or images.

/// Axis along which padding bars are added.
///
/// `X` adds bars left and right (tall source), `Y` adds bars top and bottom
/// (wide source).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddedAxis {
    X,
    Y,
}

/// How a triggered image is padded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Padding {
    pub axis: PaddedAxis,
    /// Side of the square canvas. Always the longer source edge.
    pub target_size: u32,
}

/// Outcome of comparing an image's aspect ratio against the limit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatioDecision {
    /// `width / height`.
    pub ratio: f64,
    /// `Some` when the ratio is outside `(1/limit, limit)`.
    pub padding: Option<Padding>,
}

impl RatioDecision {
    pub fn is_triggered(&self) -> bool {
        self.padding.is_some()
    }
}

/// Top-left corner where the source is copied into the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacementOffset {
    pub x: u32,
    pub y: u32,
}

/// Decide whether an image needs padding.
///
/// Padding triggers when `width / height > limit` (too wide) or
/// `width / height < 1 / limit` (too tall). Both comparisons are strict: a
/// ratio exactly at the limit is left alone.
///
/// The limit is not validated. With `limit <= 1` nearly every image triggers;
/// the axis is then picked from the orientation, so the canvas side is always
/// `max(width, height)`.
///
/// # Examples
/// ```
/// # use square_pad::imaging::{evaluate_ratio, PaddedAxis};
/// // 1001x500 is just over 2:1 → bars on top and bottom
/// let padding = evaluate_ratio(1001, 500, 2.0).padding.unwrap();
/// assert_eq!(padding.axis, PaddedAxis::Y);
/// assert_eq!(padding.target_size, 1001);
///
/// // Exactly 2:1 is not over the limit
/// assert!(!evaluate_ratio(1000, 500, 2.0).is_triggered());
/// ```
pub fn evaluate_ratio(width: u32, height: u32, limit: f64) -> RatioDecision {
    let ratio = width as f64 / height as f64;
    let exceeds = ratio > limit || ratio < 1.0 / limit;

    let padding = exceeds.then(|| {
        if width >= height {
            Padding {
                axis: PaddedAxis::Y,
                target_size: width,
            }
        } else {
            Padding {
                axis: PaddedAxis::X,
                target_size: height,
            }
        }
    });

    RatioDecision { ratio, padding }
}

/// Offset that centers a `width` x `height` source on the padded axis.
///
/// Uses integer halves, so an odd leftover pixel ends up on the right or
/// bottom bar.
pub fn placement_offset(padding: &Padding, width: u32, height: u32) -> PlacementOffset {
    let half = padding.target_size / 2;
    match padding.axis {
        PaddedAxis::X => PlacementOffset {
            x: half - width / 2,
            y: 0,
        },
        PaddedAxis::Y => PlacementOffset {
            x: 0,
            y: half - height / 2,
        },
    }
}
