//! Interactive prompt loop.
//!
//! One session resizes at most one image:
//!
//! 1. print the banner and the numbered list of files in the images directory
//! 2. read the menu number, then the width, then the height
//! 3. run the resize and print one result line
//!
//! Any invalid entry prints a single message and ends the session. The session
//! itself never fails on bad input; only a broken stdout/stdin surfaces as an
//! `io::Error`.
//!
//! The loop is written against `BufRead` + `Write` so tests can drive it with
//! in-memory buffers.

use crate::imaging::{self, ImageBackend, ResizeOptions, ResizeRequest};
use crate::output;
use crate::scan::{self, ScanError};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Ways a session can end before a resize is attempted.
#[derive(Error, Debug)]
pub enum ShellError {
    #[error("Invalid input. Please enter numbers for image choice, width, and height.")]
    InvalidInput,
    #[error("Invalid image number.")]
    InvalidChoice,
    #[error("Width and height must be positive integers.")]
    NonPositiveDimensions,
    #[error("An error occurred: EOF when reading a line")]
    EndOfInput,
    #[error("An error occurred: {0}")]
    Io(#[from] io::Error),
}

/// Resolved directories and options for one session.
#[derive(Debug, Clone)]
pub struct ShellContext {
    pub images_dir: PathBuf,
    pub output_dir: PathBuf,
    /// Configured images folder name, used in the "no images" message.
    pub images_folder: PathBuf,
    pub options: ResizeOptions,
}

fn absolute(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}

fn write_lines<W: Write>(out: &mut W, lines: &[String]) -> io::Result<()> {
    for line in lines {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

/// Run one interactive session.
pub fn run<B, R, W>(backend: &B, ctx: &ShellContext, input: &mut R, out: &mut W) -> io::Result<()>
where
    B: ImageBackend,
    R: BufRead,
    W: Write,
{
    write_lines(
        out,
        &output::format_banner(&absolute(&ctx.images_dir), &absolute(&ctx.output_dir)),
    )?;

    let files = match scan::list_images(&ctx.images_dir) {
        Ok(files) => files,
        Err(ScanError::MissingDir(dir)) => {
            writeln!(out, "{}", output::format_missing_images_dir(&dir))?;
            return Ok(());
        }
        Err(ScanError::Io(e)) => {
            writeln!(out, "{}", ShellError::Io(e))?;
            return Ok(());
        }
    };
    if files.is_empty() {
        writeln!(out, "{}", output::format_no_images(&ctx.images_folder))?;
        return Ok(());
    }

    let names: Vec<String> = files.iter().map(|p| scan::display_name(p)).collect();
    write_lines(out, &output::format_image_menu(&names))?;

    let request = match read_request(&files, &ctx.output_dir, input, out) {
        Ok(request) => request,
        Err(ShellError::Io(e)) => return Err(e),
        Err(e) => {
            writeln!(out, "{}", e)?;
            return Ok(());
        }
    };
    debug!(?request, "resize requested");

    let result = imaging::resize_image(backend, &request, &ctx.options);
    writeln!(out, "{}", output::format_resize_result(&result))?;
    out.flush()
}

/// Ask for the image number and target dimensions.
fn read_request<R: BufRead, W: Write>(
    files: &[PathBuf],
    output_dir: &Path,
    input: &mut R,
    out: &mut W,
) -> Result<ResizeRequest, ShellError> {
    let choice = prompt_int(input, out, output::IMAGE_CHOICE_PROMPT)?;
    let index = usize::try_from(choice)
        .ok()
        .filter(|n| (1..=files.len()).contains(n))
        .ok_or(ShellError::InvalidChoice)?;

    let width = prompt_int(input, out, output::WIDTH_PROMPT)?;
    let height = prompt_int(input, out, output::HEIGHT_PROMPT)?;
    if width <= 0 || height <= 0 {
        return Err(ShellError::NonPositiveDimensions);
    }

    Ok(ResizeRequest {
        input: files[index - 1].clone(),
        output_dir: output_dir.to_path_buf(),
        width: u32::try_from(width).map_err(|_| ShellError::InvalidInput)?,
        height: u32::try_from(height).map_err(|_| ShellError::InvalidInput)?,
    })
}

/// Print `prompt`, read one line, and parse it as a signed integer.
///
/// Surrounding whitespace is ignored.
fn prompt_int<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    prompt: &str,
) -> Result<i64, ShellError> {
    write!(out, "{}", prompt)?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(ShellError::EndOfInput);
    }
    line.trim().parse().map_err(|_| ShellError::InvalidInput)
}
