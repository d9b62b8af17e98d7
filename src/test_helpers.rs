//! Shared test utilities for the image-resizer test suite.
//!
//! Synthesizes small images on disk so tests never depend on checked-in
//! binary fixtures.
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::test_helpers::*;
//!
//! let tmp = tempfile::TempDir::new().unwrap();
//! let base = setup_base_dir(&tmp, &[("beach.jpg", 400, 300)]);
//! assert!(base.join("images/beach.jpg").exists());
//! ```

use image::{ImageEncoder, RgbImage, RgbaImage};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

// =========================================================================
// Image synthesis
// =========================================================================

/// Create a small valid JPEG file with the given dimensions.
pub fn create_test_jpeg(path: &Path, width: u32, height: u32) {
    let img = RgbImage::from_fn(width, height, |x, y| {
        image::Rgb([(x % 256) as u8, (y % 256) as u8, 128])
    });
    let file = std::fs::File::create(path).unwrap();
    let writer = std::io::BufWriter::new(file);
    image::codecs::jpeg::JpegEncoder::new(writer)
        .write_image(img.as_raw(), width, height, image::ExtendedColorType::Rgb8)
        .unwrap();
}

/// Create a PNG with an alpha gradient.
pub fn create_test_png_rgba(path: &Path, width: u32, height: u32) {
    let img = RgbaImage::from_fn(width, height, |x, y| {
        image::Rgba([(x % 256) as u8, 64, (y % 256) as u8, ((x + y) % 256) as u8])
    });
    img.save(path).unwrap();
}

// =========================================================================
// Directory layout
// =========================================================================

/// Lay out `<tmp>/images/` with the given JPEGs and return the base dir.
///
/// Each entry is `(file name, width, height)`. The output directory is left
/// absent so tests can check it gets created on demand.
pub fn setup_base_dir(tmp: &TempDir, images: &[(&str, u32, u32)]) -> PathBuf {
    let base = tmp.path().to_path_buf();
    let images_dir = base.join("images");
    std::fs::create_dir_all(&images_dir).unwrap();
    for (name, width, height) in images {
        create_test_jpeg(&images_dir.join(name), *width, *height);
    }
    base
}
