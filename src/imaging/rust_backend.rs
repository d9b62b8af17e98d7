//! Pure Rust image processing backend built on the `image` crate.
//!
//! Everything is statically linked into the binary.
//!
//! ## Crate mapping
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Decode (BMP, GIF, JPEG, PNG, TIFF, WebP) | `image::ImageReader` with content sniffing |
//! | Identify | `image::ImageReader::into_dimensions` with content sniffing |
//! | Resize | `image::DynamicImage::resize_exact` (Lanczos3 by default) |
//! | Encode → JPEG | `image::codecs::jpeg::JpegEncoder` with configured quality |
//! | Encode → other | `image::DynamicImage::write_to`, format from the output extension |

use super::backend::{Dimensions, ImageBackend, ResizeError};
use super::params::{Quality, ResizeParams};
use image::codecs::jpeg::JpegEncoder;
use image::{ColorType, DynamicImage, ImageFormat, ImageReader};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::Instant;
use tracing::debug;

/// Pure Rust backend using the `image` crate ecosystem.
///
/// See the [module docs](self) for the crate-to-operation mapping.
pub struct RustBackend;

impl RustBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RustBackend {
    fn default() -> Self {
        Self::new()
    }
}

/// Map an I/O error on the input path, keeping "missing" distinguishable.
fn input_io_error(path: &Path, err: std::io::Error) -> ResizeError {
    if err.kind() == std::io::ErrorKind::NotFound {
        ResizeError::NotFound(path.to_path_buf())
    } else {
        ResizeError::Unexpected(err)
    }
}

/// Load and decode an image from disk.
///
/// The format is sniffed from the file contents first and the extension is
/// only a fallback, so mislabelled files still decode.
fn load_image(path: &Path) -> Result<DynamicImage, ResizeError> {
    let reader = ImageReader::open(path)
        .map_err(|e| input_io_error(path, e))?
        .with_guessed_format()?;
    reader
        .decode()
        .map_err(|e| ResizeError::from_image(&format!("failed to decode {}", path.display()), e))
}

/// Pick the encoder from the output extension.
fn output_format(path: &Path) -> Result<ImageFormat, ResizeError> {
    let format = ImageFormat::from_path(path).map_err(|e| {
        ResizeError::from_image(
            &format!("cannot choose an encoder for {}", path.display()),
            e,
        )
    })?;
    if !format.writing_enabled() {
        return Err(ResizeError::Processing(format!(
            "no {format:?} encoder available for {}",
            path.display()
        )));
    }
    Ok(format)
}

/// JPEG has no alpha channel and only 8-bit samples.
fn jpeg_compatible(img: &DynamicImage) -> std::borrow::Cow<'_, DynamicImage> {
    match img.color() {
        ColorType::L8 | ColorType::Rgb8 => std::borrow::Cow::Borrowed(img),
        _ => std::borrow::Cow::Owned(DynamicImage::ImageRgb8(img.to_rgb8())),
    }
}

/// Encode `img` to `path` in `format`, creating the parent directory first.
///
/// `File::create` truncates an existing file, so repeated runs overwrite.
fn save_image(
    img: &DynamicImage,
    path: &Path,
    format: ImageFormat,
    quality: Quality,
) -> Result<(), ResizeError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    let encode_context = format!("failed to encode {}", path.display());

    match format {
        ImageFormat::Jpeg => {
            let encoder = JpegEncoder::new_with_quality(&mut writer, quality.value() as u8);
            jpeg_compatible(img)
                .write_with_encoder(encoder)
                .map_err(|e| ResizeError::from_image(&encode_context, e))?;
        }
        _ => img
            .write_to(&mut writer, format)
            .map_err(|e| ResizeError::from_image(&encode_context, e))?,
    }

    // Dropping the writer would flush too, but silently.
    writer.flush()?;
    Ok(())
}

impl ImageBackend for RustBackend {
    fn identify(&self, path: &Path) -> Result<Dimensions, ResizeError> {
        let (width, height) = ImageReader::open(path)
            .map_err(|e| input_io_error(path, e))?
            .with_guessed_format()?
            .into_dimensions()
            .map_err(|e| {
                ResizeError::from_image(
                    &format!("failed to read dimensions of {}", path.display()),
                    e,
                )
            })?;
        Ok(Dimensions { width, height })
    }

    fn resize(&self, params: &ResizeParams) -> Result<(), ResizeError> {
        let started = Instant::now();
        let img = load_image(&params.source)?;
        debug!(
            source = %params.source.display(),
            width = img.width(),
            height = img.height(),
            color = ?img.color(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "decoded source image"
        );

        if params.width == 0 || params.height == 0 {
            return Err(ResizeError::Processing(format!(
                "invalid target dimensions {}x{}: width and height must be positive",
                params.width, params.height
            )));
        }
        let format = output_format(&params.output)?;

        let resized = img.resize_exact(params.width, params.height, params.filter.filter_type());
        drop(img);
        debug!(
            filter = %params.filter,
            width = params.width,
            height = params.height,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "resampled"
        );

        save_image(&resized, &params.output, format, params.quality)?;
        debug!(
            output = %params.output.display(),
            format = ?format,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "encoded output image"
        );
        Ok(())
    }
}
