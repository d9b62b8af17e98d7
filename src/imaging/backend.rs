//! Image processing backend trait and shared types.
//!
//! The [`ImageBackend`] trait defines the two operations every backend must
//! support: identify and resize.
//!
//! The production implementation is
//! [`RustBackend`](super::rust_backend::RustBackend), built on the `image`
//! crate. Unit tests use a recording mock instead.
//!
//! ## Error taxonomy
//!
//! Every failure a resize can hit is flattened into one of three
//! [`ResizeError`] variants so the caller can report a one-line message:
//!
//! | Variant | Cause |
//! |---|---|
//! | `NotFound` | the input path does not exist |
//! | `Processing` | decode, resample or encode failed; unsupported format; zero dimensions |
//! | `Unexpected` | any other I/O fault (permissions, disk full, ...) |

use super::params::ResizeParams;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResizeError {
    #[error("input image not found at '{}'", .0.display())]
    NotFound(PathBuf),
    #[error("{0}")]
    Processing(String),
    #[error("{0}")]
    Unexpected(#[from] std::io::Error),
}

impl ResizeError {
    /// Classify an `image` crate error. I/O faults surfacing through the
    /// codec stay `Unexpected`; everything else is a processing failure.
    pub fn from_image(context: &str, err: image::ImageError) -> Self {
        match err {
            image::ImageError::IoError(io) => ResizeError::Unexpected(io),
            other => ResizeError::Processing(format!("{context}: {other}")),
        }
    }
}

/// Result of an identify operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

/// Trait for image processing backends.
pub trait ImageBackend {
    /// Get image dimensions.
    fn identify(&self, path: &Path) -> Result<Dimensions, ResizeError>;

    /// Decode `params.source`, resample to exactly `width × height`, and write
    /// the result to `params.output`, creating its parent directory if needed.
    fn resize(&self, params: &ResizeParams) -> Result<(), ResizeError>;
}
