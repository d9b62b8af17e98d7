//! High-level image operations.
//!
//! These functions turn a [`ResizeRequest`] into backend parameters and run
//! them. The request says *which* image and *how big*; [`ResizeOptions`] carry
//! the configured naming suffix, filter and quality.

use super::backend::{ImageBackend, ResizeError};
use super::params::{Quality, ResampleFilter, ResizeParams};
use crate::naming;
use std::path::{Path, PathBuf};
use tracing::info;

/// Result type for image operations.
pub type Result<T> = std::result::Result<T, ResizeError>;

/// One resize invocation: built once, consumed immediately, never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResizeRequest {
    pub input: PathBuf,
    pub output_dir: PathBuf,
    pub width: u32,
    pub height: u32,
}

/// Settings that apply to every request.
#[derive(Debug, Clone)]
pub struct ResizeOptions {
    pub suffix: String,
    pub filter: ResampleFilter,
    pub quality: Quality,
}

impl Default for ResizeOptions {
    fn default() -> Self {
        Self {
            suffix: naming::DEFAULT_SUFFIX.to_string(),
            filter: ResampleFilter::default(),
            quality: Quality::default(),
        }
    }
}

/// What a successful resize produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResizeOutcome {
    /// Base name of the input, as shown to the user.
    pub file_name: String,
    pub output: PathBuf,
    pub width: u32,
    pub height: u32,
}

/// Get image dimensions using the backend.
pub fn get_dimensions(backend: &impl ImageBackend, path: &Path) -> Result<(u32, u32)> {
    let dims = backend.identify(path)?;
    Ok((dims.width, dims.height))
}

/// Plan a resize without executing it.
///
/// Fails only when the input path has no file name to derive the output from.
pub fn plan_resize(request: &ResizeRequest, options: &ResizeOptions) -> Result<ResizeParams> {
    let output = naming::output_path(&request.input, &request.output_dir, &options.suffix)
        .ok_or_else(|| {
            ResizeError::Processing(format!(
                "cannot derive an output name from '{}'",
                request.input.display()
            ))
        })?;

    Ok(ResizeParams {
        source: request.input.clone(),
        output,
        width: request.width,
        height: request.height,
        filter: options.filter,
        quality: options.quality,
    })
}

/// Resize the requested image to exactly `width × height` and save it as
/// `<output_dir>/<stem><suffix><ext>`.
///
/// An existing output file is overwritten. The output directory is created
/// on demand by the backend, after the input has decoded successfully.
pub fn resize_image(
    backend: &impl ImageBackend,
    request: &ResizeRequest,
    options: &ResizeOptions,
) -> Result<ResizeOutcome> {
    let params = plan_resize(request, options)?;
    backend.resize(&params)?;

    let file_name = request
        .input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    info!(
        input = %request.input.display(),
        output = %params.output.display(),
        width = params.width,
        height = params.height,
        "resized image"
    );

    Ok(ResizeOutcome {
        file_name,
        output: params.output,
        width: params.width,
        height: params.height,
    })
}
