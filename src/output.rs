//! CLI output formatting.
//!
//! Every user-visible line the tool prints is built here. Each piece has a
//! `format_*` function (returns `String` or `Vec<String>`) for testability;
//! the `print_*` wrappers write to stdout. Format functions are pure: no
//! I/O, no side effects.
//!
//! # Output Format
//!
//! ## Interactive session
//!
//! ```text
//! --- Image Resizer Tool ---
//! Input images expected in: /opt/resizer/images
//! Resized images will be saved in: /opt/resizer/resized_images
//!
//! Available images:
//! 1. beach.jpg
//! 2. mountains.png
//!
//! Enter the number of the image to resize: 1
//! Enter new width (pixels): 800
//! Enter new height (pixels): 600
//! Image 'beach.jpg' resized successfully to 800x600 and saved at '/opt/resizer/resized_images/beach_resized.jpg'
//! ```
//!
//! ## `list`
//!
//! ```text
//! 1. beach.jpg (4000x3000)
//! 2. notes.txt (unreadable)
//! ```

use crate::imaging::{ResizeError, ResizeOutcome};
use std::path::Path;

pub const IMAGE_CHOICE_PROMPT: &str = "\nEnter the number of the image to resize: ";
pub const WIDTH_PROMPT: &str = "Enter new width (pixels): ";
pub const HEIGHT_PROMPT: &str = "Enter new height (pixels): ";

/// Banner printed when the interactive shell starts. Ends with a blank line.
pub fn format_banner(images_dir: &Path, output_dir: &Path) -> Vec<String> {
    vec![
        "--- Image Resizer Tool ---".to_string(),
        format!("Input images expected in: {}", images_dir.display()),
        format!("Resized images will be saved in: {}", output_dir.display()),
        String::new(),
    ]
}

pub fn format_missing_images_dir(images_dir: &Path) -> String {
    format!(
        "Error: Input folder '{}' not found. Please create it and add images.",
        images_dir.display()
    )
}

/// `folder` is the configured directory name, e.g. `images`.
pub fn format_no_images(folder: &Path) -> String {
    format!(
        "No images found in the '{}' folder. Please add some images to resize.",
        folder.display()
    )
}

/// Numbered, 1-based menu of selectable files.
pub fn format_image_menu(names: &[String]) -> Vec<String> {
    let mut lines = Vec::with_capacity(names.len() + 1);
    lines.push("Available images:".to_string());
    lines.extend(
        names
            .iter()
            .enumerate()
            .map(|(i, name)| format!("{}. {}", i + 1, name)),
    );
    lines
}

/// Numbered listing with dimensions, for the `list` subcommand.
///
/// `None` dimensions mean the file could not be identified as an image.
pub fn format_image_listing(entries: &[(String, Option<(u32, u32)>)]) -> Vec<String> {
    entries
        .iter()
        .enumerate()
        .map(|(i, (name, dims))| match dims {
            Some((w, h)) => format!("{}. {} ({}x{})", i + 1, name, w, h),
            None => format!("{}. {} (unreadable)", i + 1, name),
        })
        .collect()
}

/// One line describing how a resize ended.
pub fn format_resize_result(result: &Result<ResizeOutcome, ResizeError>) -> String {
    match result {
        Ok(outcome) => format!(
            "Image '{}' resized successfully to {}x{} and saved at '{}'",
            outcome.file_name,
            outcome.width,
            outcome.height,
            outcome.output.display()
        ),
        Err(ResizeError::NotFound(path)) => {
            format!("Error: Input image not found at '{}'", path.display())
        }
        Err(ResizeError::Processing(cause)) => {
            format!("Error processing image: {cause}. Check image format or dimensions.")
        }
        Err(ResizeError::Unexpected(cause)) => {
            format!("An unexpected error occurred: {cause}")
        }
    }
}

pub fn print_lines(lines: &[String]) {
    for line in lines {
        println!("{}", line);
    }
}

pub fn print_image_listing(entries: &[(String, Option<(u32, u32)>)]) {
    print_lines(&format_image_listing(entries));
}

pub fn print_resize_result(result: &Result<ResizeOutcome, ResizeError>) {
    println!("{}", format_resize_result(result));
}
