//! Output filename convention for squared images.
//!
//! A squared image is written next to its source as
//! `<stem>_squared.<ext>`, where `<ext>` follows the *detected* format
//! rather than the source's extension:
//!
//! - `photos/pano.jpeg` (JPEG) → `photos/pano_squared.jpg`
//! - `photos/tower.PNG` (PNG) → `photos/tower_squared.png`
//! - `photos/misnamed.png` (JPEG content) → `photos/misnamed_squared.jpg`

use crate::imaging::SourceFormat;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Suffix appended to the source stem.
pub const SQUARED_SUFFIX: &str = "_squared";

/// Path of the squared output for `source`.
pub fn squared_output_path(source: &Path, format: SourceFormat) -> PathBuf {
    let mut name = source
        .file_stem()
        .map(OsString::from)
        .unwrap_or_default();
    name.push(SQUARED_SUFFIX);
    name.push(".");
    name.push(format.extension());
    source.with_file_name(name)
}
