//! Media file selection.
//!
//! Turns whatever the user pointed at (files, folders, or a mix) into the
//! ordered list of media files a gallery is built from. Only the extensions
//! in [`MEDIA_EXTENSIONS`] are kept, compared case-insensitively.
//!
//! - Files keep the order they were given in.
//! - Folders contribute their media files sorted by name, one level deep
//!   unless `recursive` is set.
//! - A path that does not exist is an error: a typo should not silently
//!   produce a smaller gallery.

use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

/// Extensions offered by the selection filter.
pub const MEDIA_EXTENSIONS: [&str; 4] = ["mp3", "mp4", "wav", "webm"];

#[derive(Error, Debug)]
pub enum SelectError {
    #[error("No such file or directory: {}", .0.display())]
    NotFound(PathBuf),
    #[error("Directory walk failed: {0}")]
    Walk(#[from] walkdir::Error),
}

/// Whether a path carries one of the media extensions.
pub fn is_media_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| MEDIA_EXTENSIONS.iter().any(|m| ext.eq_ignore_ascii_case(m)))
}

/// Expand `inputs` into an ordered list of media files.
pub fn select_files(inputs: &[PathBuf], recursive: bool) -> Result<Vec<PathBuf>, SelectError> {
    let mut selected = Vec::new();
    for input in inputs {
        if input.is_dir() {
            selected.extend(media_in_dir(input, recursive)?);
        } else if input.is_file() {
            if is_media_file(input) {
                selected.push(input.clone());
            }
        } else {
            return Err(SelectError::NotFound(input.clone()));
        }
    }
    Ok(selected)
}

fn media_in_dir(dir: &Path, recursive: bool) -> Result<Vec<PathBuf>, SelectError> {
    let mut walker = WalkDir::new(dir).min_depth(1).sort_by_file_name();
    if !recursive {
        walker = walker.max_depth(1);
    }
    let mut files = Vec::new();
    for entry in walker {
        let entry = entry?;
        if entry.file_type().is_file() && is_media_file(entry.path()) {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}
