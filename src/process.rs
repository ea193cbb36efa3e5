//! Per-file squaring pipeline.
//!
//! Stage 2 of the pipeline. Takes the candidate list from the scan stage and
//! runs every file through the same steps, one file at a time:
//!
//! ```text
//! decode ──unsupported──▶ skipped
//!   │
//!   ▼
//! evaluate ratio ──within limit──▶ unchanged
//!   │
//!   ▼
//! compose square ─▶ encode ─▶ write ──error──▶ failed
//!                               │
//!                               ▼
//!                            squared
//! ```
//!
//! Every per-file problem ends up in a [`FileOutcome`] and a
//! [`ProcessEvent`]; nothing here aborts the run. Files share no state, and
//! the source file handle never outlives the decode step.
//!
//! ## Progress
//!
//! Callers that want live output pass a channel sender. Events are formatted
//! by [`output::format_process_event`](crate::output::format_process_event).

use crate::imaging::{
    BackendError, CanvasTooLarge, DecodedImage, ImageBackend, Padding, Quality, RustBackend,
    SourceFormat, compose_square, default_max_canvas_bytes, evaluate_ratio,
};
use crate::naming::squared_output_path;
use image::{ColorType, DynamicImage};
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::mpsc::Sender;
use thiserror::Error;

/// Ratio limit used when none is given on the command line.
pub const DEFAULT_RATIO_LIMIT: f64 = 2.0;

#[derive(Error, Debug)]
pub enum ProcessError {
    #[error("Image processing failed: {0}")]
    Imaging(#[from] BackendError),
    #[error("Cannot pad image: {0}")]
    Canvas(#[from] CanvasTooLarge),
    #[error("Cannot write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Settings for a squaring run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SquareConfig {
    /// Images with `width / height` above this, or below its inverse, are padded.
    pub ratio_limit: f64,
    pub jpeg_quality: Quality,
    /// Largest square canvas, in RGBA bytes, a file may need.
    pub max_canvas_bytes: u64,
}

impl Default for SquareConfig {
    fn default() -> Self {
        Self {
            ratio_limit: DEFAULT_RATIO_LIMIT,
            jpeg_quality: Quality::default(),
            max_canvas_bytes: default_max_canvas_bytes(),
        }
    }
}

/// Progress event emitted while processing.
#[derive(Debug, Clone, PartialEq)]
pub enum ProcessEvent {
    /// A file decoded and its ratio was evaluated.
    Inspected {
        path: PathBuf,
        format: SourceFormat,
        color: ColorType,
        width: u32,
        height: u32,
        ratio: f64,
        padding: Option<Padding>,
    },
    /// The squared image was written.
    Squared {
        path: PathBuf,
        output: PathBuf,
        format: SourceFormat,
    },
    /// Not a JPEG or PNG; left alone.
    Skipped { path: PathBuf, reason: String },
    /// Reading, composing, encoding or writing failed.
    Failed { path: PathBuf, error: String },
}

impl ProcessEvent {
    /// Whether the event reports a skip or a failure.
    pub fn is_problem(&self) -> bool {
        matches!(self, Self::Skipped { .. } | Self::Failed { .. })
    }
}

/// Terminal state of one file.
#[derive(Debug)]
pub enum FileOutcome {
    Squared { output: PathBuf },
    /// Ratio within the limit, nothing written.
    Unchanged,
    Skipped(BackendError),
    Failed(ProcessError),
}

/// Per-run counters, one per [`FileOutcome`] variant.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ProcessSummary {
    pub squared: u32,
    pub unchanged: u32,
    pub skipped: u32,
    pub failed: u32,
}

impl ProcessSummary {
    fn record(&mut self, outcome: &FileOutcome) {
        match outcome {
            FileOutcome::Squared { .. } => self.squared += 1,
            FileOutcome::Unchanged => self.unchanged += 1,
            FileOutcome::Skipped(_) => self.skipped += 1,
            FileOutcome::Failed(_) => self.failed += 1,
        }
    }

    pub fn total(&self) -> u32 {
        self.squared + self.unchanged + self.skipped + self.failed
    }
}

impl fmt::Display for ProcessSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} squared, {} unchanged, {} skipped, {} failed",
            self.squared, self.unchanged, self.skipped, self.failed
        )
    }
}

/// Square every file in `files` with the pure Rust backend.
pub fn process(
    files: &[PathBuf],
    config: &SquareConfig,
    progress: Option<Sender<ProcessEvent>>,
) -> ProcessSummary {
    process_with_backend(&RustBackend::new(), files, config, progress)
}

/// Process files using a specific backend (allows testing with mock).
pub fn process_with_backend(
    backend: &impl ImageBackend,
    files: &[PathBuf],
    config: &SquareConfig,
    progress: Option<Sender<ProcessEvent>>,
) -> ProcessSummary {
    let mut summary = ProcessSummary::default();
    for path in files {
        let outcome = process_file(backend, path, config, progress.as_ref());
        summary.record(&outcome);
    }
    summary
}

/// Run a single file through decode → evaluate → compose → encode → write.
pub fn process_file(
    backend: &impl ImageBackend,
    path: &Path,
    config: &SquareConfig,
    progress: Option<&Sender<ProcessEvent>>,
) -> FileOutcome {
    let emit = |event: ProcessEvent| {
        if let Some(tx) = progress {
            // A dropped receiver only means nobody is watching
            let _ = tx.send(event);
        }
    };

    let DecodedImage {
        descriptor,
        color,
        pixels,
    } = match backend.decode(path) {
        Ok(decoded) => decoded,
        Err(err @ BackendError::UnsupportedFormat { .. }) => {
            emit(ProcessEvent::Skipped {
                path: path.to_path_buf(),
                reason: err.to_string(),
            });
            return FileOutcome::Skipped(err);
        }
        Err(err) => {
            emit(ProcessEvent::Failed {
                path: path.to_path_buf(),
                error: err.to_string(),
            });
            return FileOutcome::Failed(err.into());
        }
    };

    let decision = evaluate_ratio(descriptor.width, descriptor.height, config.ratio_limit);
    emit(ProcessEvent::Inspected {
        path: path.to_path_buf(),
        format: descriptor.format,
        color,
        width: descriptor.width,
        height: descriptor.height,
        ratio: decision.ratio,
        padding: decision.padding,
    });

    let Some(padding) = decision.padding else {
        return FileOutcome::Unchanged;
    };

    match write_squared(backend, path, &pixels, descriptor.format, &padding, config) {
        Ok(output) => {
            emit(ProcessEvent::Squared {
                path: path.to_path_buf(),
                output: output.clone(),
                format: descriptor.format,
            });
            FileOutcome::Squared { output }
        }
        Err(err) => {
            emit(ProcessEvent::Failed {
                path: path.to_path_buf(),
                error: err.to_string(),
            });
            FileOutcome::Failed(err)
        }
    }
}

/// Compose, encode and write the squared image. Returns the output path.
///
/// Encoding finishes before the output file is created, so a failed encode
/// leaves nothing on disk.
fn write_squared(
    backend: &impl ImageBackend,
    source: &Path,
    pixels: &DynamicImage,
    format: SourceFormat,
    padding: &Padding,
    config: &SquareConfig,
) -> Result<PathBuf, ProcessError> {
    let canvas = compose_square(pixels, padding, config.max_canvas_bytes)?;
    let bytes = backend.encode(&canvas.pixels, format, config.jpeg_quality)?;

    let output = squared_output_path(source, format);
    std::fs::write(&output, bytes).map_err(|err| ProcessError::Write {
        path: output.clone(),
        source: err,
    })?;
    Ok(output)
}
