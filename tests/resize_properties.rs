//! End-to-end checks of the resize contract against real files.
//!
//! Every test synthesizes its input with the `image` crate inside a fresh
//! temp directory, runs the production backend, and decodes the result.

use image::{ImageEncoder, RgbImage};
use image_resizer::imaging::{
    ResizeError, ResizeOptions, ResizeRequest, RustBackend, resize_image,
};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn create_jpeg(path: &Path, width: u32, height: u32) {
    let img = RgbImage::from_fn(width, height, |x, y| {
        image::Rgb([(x % 256) as u8, (y % 256) as u8, ((x * y) % 256) as u8])
    });
    let file = std::fs::File::create(path).unwrap();
    let writer = std::io::BufWriter::new(file);
    image::codecs::jpeg::JpegEncoder::new(writer)
        .write_image(img.as_raw(), width, height, image::ExtendedColorType::Rgb8)
        .unwrap();
}

fn create_png(path: &Path, width: u32, height: u32) {
    RgbImage::from_fn(width, height, |x, y| image::Rgb([x as u8, y as u8, 0]))
        .save(path)
        .unwrap();
}

fn request(input: &Path, output_dir: &Path, width: u32, height: u32) -> ResizeRequest {
    ResizeRequest {
        input: input.to_path_buf(),
        output_dir: output_dir.to_path_buf(),
        width,
        height,
    }
}

fn resize(req: &ResizeRequest) -> Result<PathBuf, ResizeError> {
    resize_image(&RustBackend::new(), req, &ResizeOptions::default()).map(|o| o.output)
}

#[test]
fn beach_photo_downscaled_to_requested_size() {
    let tmp = TempDir::new().unwrap();
    let input = tmp.path().join("beach.jpg");
    create_jpeg(&input, 400, 300);
    let output_dir = tmp.path().join("resized_images");

    let output = resize(&request(&input, &output_dir, 80, 60)).unwrap();

    assert_eq!(output, output_dir.join("beach_resized.jpg"));
    assert_eq!(image::image_dimensions(&output).unwrap(), (80, 60));
}

#[test]
fn output_has_exact_dimensions_even_when_distorting() {
    let tmp = TempDir::new().unwrap();
    let input = tmp.path().join("wide.png");
    create_png(&input, 200, 50);
    let output_dir = tmp.path().join("out");

    for (w, h) in [(50, 200), (1, 1), (300, 75), (13, 7)] {
        let output = resize(&request(&input, &output_dir, w, h)).unwrap();
        assert_eq!(image::image_dimensions(&output).unwrap(), (w, h));
    }
}

#[test]
fn output_format_follows_input_extension() {
    let tmp = TempDir::new().unwrap();
    let input = tmp.path().join("chart.png");
    create_png(&input, 64, 64);
    let output_dir = tmp.path().join("out");

    let output = resize(&request(&input, &output_dir, 32, 32)).unwrap();

    assert_eq!(output.file_name().unwrap(), "chart_resized.png");
    assert_eq!(
        image::ImageReader::open(&output)
            .unwrap()
            .with_guessed_format()
            .unwrap()
            .format(),
        Some(image::ImageFormat::Png)
    );
}

#[test]
fn repeated_resize_overwrites_same_path() {
    let tmp = TempDir::new().unwrap();
    let input = tmp.path().join("beach.jpg");
    create_jpeg(&input, 120, 90);
    let output_dir = tmp.path().join("out");
    let req = request(&input, &output_dir, 60, 45);

    let first = resize(&req).unwrap();
    let second = resize(&req).unwrap();

    assert_eq!(first, second);
    assert_eq!(image::image_dimensions(&second).unwrap(), (60, 45));
    assert_eq!(std::fs::read_dir(&output_dir).unwrap().count(), 1);
}

#[test]
fn missing_output_dir_tree_is_created() {
    let tmp = TempDir::new().unwrap();
    let input = tmp.path().join("beach.jpg");
    create_jpeg(&input, 40, 30);
    let output_dir = tmp.path().join("deep/nested/out");

    let output = resize(&request(&input, &output_dir, 20, 15)).unwrap();

    assert!(output_dir.is_dir());
    assert!(output.exists());
}

#[test]
fn nonexistent_input_is_not_found_and_writes_nothing() {
    let tmp = TempDir::new().unwrap();
    let input = tmp.path().join("nope.jpg");
    let output_dir = tmp.path().join("out");

    let result = resize(&request(&input, &output_dir, 10, 10));

    assert!(matches!(result, Err(ResizeError::NotFound(p)) if p == input));
    assert!(!output_dir.join("nope_resized.jpg").exists());
}

#[test]
fn zero_dimension_is_processing_error_and_writes_nothing() {
    let tmp = TempDir::new().unwrap();
    let input = tmp.path().join("beach.jpg");
    create_jpeg(&input, 40, 30);
    let output_dir = tmp.path().join("out");

    for (w, h) in [(0, 30), (40, 0)] {
        let result = resize(&request(&input, &output_dir, w, h));
        assert!(matches!(result, Err(ResizeError::Processing(_))));
        assert!(!output_dir.join("beach_resized.jpg").exists());
    }
}

#[test]
fn resizing_to_original_dimensions_keeps_them() {
    let tmp = TempDir::new().unwrap();
    let input = tmp.path().join("same.png");
    create_png(&input, 37, 23);
    let output_dir = tmp.path().join("out");

    let output = resize(&request(&input, &output_dir, 37, 23)).unwrap();

    assert_eq!(image::image_dimensions(&output).unwrap(), (37, 23));
}

#[test]
fn output_dir_equal_to_input_dir_is_allowed() {
    let tmp = TempDir::new().unwrap();
    let input = tmp.path().join("beach.jpg");
    create_jpeg(&input, 40, 30);

    let output = resize(&request(&input, tmp.path(), 20, 15)).unwrap();

    assert_eq!(output, tmp.path().join("beach_resized.jpg"));
    assert_eq!(image::image_dimensions(&input).unwrap(), (40, 30));
}

#[test]
fn output_dir_that_is_a_file_is_unexpected_error() {
    let tmp = TempDir::new().unwrap();
    let input = tmp.path().join("beach.jpg");
    create_jpeg(&input, 40, 30);
    let taken = tmp.path().join("taken");
    std::fs::write(&taken, b"not a directory").unwrap();

    let result = resize(&request(&input, &taken, 20, 15));

    assert!(matches!(result, Err(ResizeError::Unexpected(_))));
    assert!(taken.is_file());
    assert!(!taken.join("beach_resized.jpg").exists());
}
