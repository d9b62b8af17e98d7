//! Input directory listing.
//!
//! Every regular file directly inside the images directory is offered for
//! selection. There is no extension filter: anything the decoder cannot read
//! surfaces later as a processing error. Subdirectories are skipped and the
//! walk does not recurse.
//!
//! Entries are sorted by file name so the numbered menu is stable between
//! runs.

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Input folder '{}' not found", .0.display())]
    MissingDir(PathBuf),
}

/// List the files (not directories) directly inside `dir`, sorted by name.
pub fn list_images(dir: &Path) -> Result<Vec<PathBuf>, ScanError> {
    if !dir.is_dir() {
        return Err(ScanError::MissingDir(dir.to_path_buf()));
    }

    let mut files: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.is_file())
        .collect();

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

/// Display name of a listed file.
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
