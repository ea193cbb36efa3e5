//! CLI output formatting.
//!
//! # Output Format
//!
//! ```text
//! Squaring images beyond 2.00:1 (or 1:2.00)
//! Root: .
//!
//! photos/pano.jpg
//!     Format: jpeg (Rgb8)
//!     Size: 1001x500
//!     Ratio: 2.00
//!     >>> Over the limit: padding top and bottom to 1001x1001
//!     Encoder: jpeg
//!     Output: photos/pano_squared.jpg
//! photos/square.png
//!     Format: png (Rgba8)
//!     Size: 800x800
//!     Ratio: 1.00
//!
//! Done: 1 squared, 1 unchanged, 0 skipped, 0 failed
//! ```
//!
//! Skips and failures are written to stderr with the same layout:
//!
//! ```text
//! photos/notes.png
//!     Skipped: Unsupported image format: photos/notes.png: not a JPEG or PNG file
//! ```
//!
//! # Architecture
//!
//! Each `format_*` function returns lines for testability; the `print_*`
//! wrappers write them out. Format functions are pure: no I/O, no side
//! effects.

use crate::imaging::{PaddedAxis, Padding};
use crate::process::{ProcessEvent, ProcessSummary, SquareConfig};
use std::path::Path;

/// Indentation for context lines under a file path.
const INDENT: &str = "    ";

fn bars(axis: PaddedAxis) -> &'static str {
    match axis {
        PaddedAxis::X => "left and right",
        PaddedAxis::Y => "top and bottom",
    }
}

/// Marker line for an image that gets padded.
fn padding_marker(padding: &Padding) -> String {
    format!(
        "{INDENT}>>> Over the limit: padding {} to {}x{}",
        bars(padding.axis),
        padding.target_size,
        padding.target_size
    )
}

/// Startup banner: the limit in effect and where the scan starts.
pub fn format_banner(config: &SquareConfig, root: &Path) -> Vec<String> {
    vec![
        format!(
            "Squaring images beyond {limit:.2}:1 (or 1:{limit:.2})",
            limit = config.ratio_limit
        ),
        format!("Root: {}", root.display()),
        String::new(),
    ]
}

pub fn print_banner(config: &SquareConfig, root: &Path) {
    for line in format_banner(config, root) {
        println!("{}", line);
    }
}

/// Format a directory entry the scan could not read.
pub fn format_unreadable(err: &walkdir::Error) -> String {
    format!("Skipped unreadable entry: {err}")
}

/// Format a single process progress event as display lines.
///
/// Information-first: a file leads with its path, details follow indented.
pub fn format_process_event(event: &ProcessEvent) -> Vec<String> {
    match event {
        ProcessEvent::Inspected {
            path,
            format,
            color,
            width,
            height,
            ratio,
            padding,
        } => {
            let mut lines = vec![
                path.display().to_string(),
                format!("{INDENT}Format: {format} ({color:?})"),
                format!("{INDENT}Size: {width}x{height}"),
                format!("{INDENT}Ratio: {ratio:.2}"),
            ];
            if let Some(padding) = padding {
                lines.push(padding_marker(padding));
            }
            lines
        }
        ProcessEvent::Squared { output, format, .. } => vec![
            format!("{INDENT}Encoder: {}", format.encoder_name()),
            format!("{INDENT}Output: {}", output.display()),
        ],
        ProcessEvent::Skipped { path, reason } => vec![
            path.display().to_string(),
            format!("{INDENT}Skipped: {reason}"),
        ],
        ProcessEvent::Failed { path, error } => vec![
            path.display().to_string(),
            format!("{INDENT}Error: {error}"),
        ],
    }
}

/// Print an event: skips and failures to stderr, everything else to stdout.
pub fn print_process_event(event: &ProcessEvent) {
    let lines = format_process_event(event);
    if event.is_problem() {
        for line in lines {
            eprintln!("{}", line);
        }
    } else {
        for line in lines {
            println!("{}", line);
        }
    }
}

/// Closing line with per-outcome counts.
pub fn format_summary(summary: &ProcessSummary) -> String {
    format!("Done: {}", summary)
}

pub fn print_summary(summary: &ProcessSummary) {
    println!();
    println!("{}", format_summary(summary));
}
