//! # Square Pad
//!
//! Finds JPEG and PNG images that are too wide or too tall and writes a
//! square copy of each, with the original centered on a white canvas.
//!
//! # Architecture: Two-Stage Pipeline
//!
//! ```text
//! 1. Scan      root/     →  candidate files   (directory walk, lexical order)
//! 2. Process   files     →  *_squared.{jpg,png} next to each padded source
//! ```
//!
//! The scan stage produces a plain list of paths and the process stage
//! consumes it. Nothing is accumulated in module state, and each file is
//! processed on its own: decode, evaluate the ratio, compose, encode, write.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Stage 1: walks the root directory and lists candidate files |
//! | [`process`] | Stage 2: per-file state machine, progress events, run summary |
//! | [`imaging`] | Ratio math, canvas composition, JPEG/PNG decode and encode |
//! | [`naming`] | `<stem>_squared.<ext>` output naming |
//! | [`output`] | CLI output formatting for banners, per-file events and summary |
//!
//! # Design Decisions
//!
//! ## Strict Limits
//!
//! An image is padded only when `width / height` is strictly above the limit
//! or strictly below its inverse. A 2000x1000 image at the default limit of
//! `2.0` is left alone; 2001x1000 is padded.
//!
//! ## Content Decides the Format
//!
//! Every file under the root is tried, whatever its extension. The decoder
//! sniffs the magic bytes, and the squared copy is written in the detected
//! format. Files that are not JPEG or PNG are skipped with a message.
//!
//! ## Originals Are Never Touched
//!
//! Output goes to a sibling file. Padding bars are opaque white; source
//! pixels are copied as-is, including any transparency they carry.
//!
//! ## One Decode Per File
//!
//! Dimensions, format and pixels come out of a single decode. The source
//! file handle is scoped to that call and closed on every path, including
//! skips.

pub mod imaging;
pub mod naming;
pub mod output;
pub mod process;
pub mod scan;

#[cfg(test)]
pub(crate) mod test_helpers;
