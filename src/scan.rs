//! Directory traversal: which files get a chance to be squared.
//!
//! Stage 1 of the pipeline. Walks the root recursively in lexical order and
//! collects every entry that is not a directory or a link to one. Links are
//! not followed into. Extensions are ignored on purpose:
//! whether a file is an image is decided by the decoder from its content.
//!
//! The result is a plain list that is handed to
//! [`process`](crate::process::process). Collecting up front means squared
//! outputs written during the run are never picked up as new inputs.
//!
//! ## Errors
//!
//! - The root itself cannot be read → [`ScanError::Traversal`], fatal.
//! - Something below the root cannot be read → recorded in
//!   [`Candidates::unreadable`], the walk continues.

use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Cannot traverse {}: {source}", .path.display())]
    Traversal {
        path: PathBuf,
        source: walkdir::Error,
    },
}

/// Files found under the root, in traversal order.
#[derive(Debug, Default)]
pub struct Candidates {
    pub files: Vec<PathBuf>,
    /// Entries below the root that could not be read.
    pub unreadable: Vec<walkdir::Error>,
}

/// Collect candidate files under `root`.
pub fn scan(root: &Path) -> Result<Candidates, ScanError> {
    let mut candidates = Candidates::default();

    for entry in WalkDir::new(root).sort_by_file_name() {
        match entry {
            // `path().is_dir()` follows symlinks, so links to directories go too
            Ok(entry) if entry.path().is_dir() => {}
            Ok(entry) => candidates.files.push(entry.into_path()),
            Err(err) if err.depth() == 0 => {
                return Err(ScanError::Traversal {
                    path: root.to_path_buf(),
                    source: err,
                });
            }
            Err(err) => candidates.unreadable.push(err),
        }
    }

    Ok(candidates)
}
