//! Output file naming.
//!
//! A resized image keeps its input's name with a marker inserted between the
//! stem and the extension, and lands in the output directory:
//!
//! ```text
//! images/beach.jpg        →  resized_images/beach_resized.jpg
//! images/archive.tar.png  →  resized_images/archive.tar_resized.png
//! images/README           →  resized_images/README_resized
//! ```
//!
//! The extension is reused verbatim (case included) because it picks the
//! encoder. Only the last extension counts. Names are built as `OsString` so
//! non-UTF-8 file names survive untouched.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Default marker inserted before the extension.
pub const DEFAULT_SUFFIX: &str = "_resized";

/// Build `<stem><suffix><ext>` from the file name of `input`.
///
/// Returns `None` when `input` has no file name (e.g. `/` or `..`).
pub fn output_file_name(input: &Path, suffix: &str) -> Option<OsString> {
    let stem = input.file_stem()?;
    let mut name = stem.to_os_string();
    name.push(suffix);
    if let Some(ext) = input.extension() {
        name.push(".");
        name.push(ext);
    }
    Some(name)
}

/// Join [`output_file_name`] onto `output_dir`.
pub fn output_path(input: &Path, output_dir: &Path, suffix: &str) -> Option<PathBuf> {
    output_file_name(input, suffix).map(|name| output_dir.join(name))
}
