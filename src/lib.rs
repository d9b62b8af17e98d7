//! # Image Resizer
//!
//! A small interactive tool: pick an image from a directory, type a width and
//! a height, get a resized copy next to it.
//!
//! # Architecture
//!
//! ```text
//! images/beach.jpg ──scan──▶ menu ──shell──▶ ResizeRequest ──imaging──▶ resized_images/beach_resized.jpg
//! ```
//!
//! The resize itself is a single linear transform: decode the whole file into
//! memory, resample to exactly the requested dimensions, encode with the format
//! implied by the unchanged extension. It either succeeds or returns one of
//! three error kinds (see [`imaging::ResizeError`]); nothing is retried and no
//! state survives between runs.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`imaging`] | Resize pipeline: backend trait, `image`-crate backend, planning and error taxonomy |
//! | [`naming`] | `<stem>_resized<ext>` output naming |
//! | [`scan`] | Lists selectable files in the images directory |
//! | [`shell`] | Interactive prompt loop, generic over reader/writer |
//! | [`config`] | Optional `config.toml` loading, merging over stock defaults, validation |
//! | [`output`] | Every user-visible line, as pure format functions |
//!
//! # Design Decisions
//!
//! ## Exact Dimensions, No Aspect Preservation
//!
//! The requested width and height are applied as given, even when that
//! distorts the image. `resize_exact` with Lanczos3 handles both upsampling and
//! downsampling well enough that one default filter serves every request.
//!
//! ## Overwrite Without Asking
//!
//! Output names are deterministic, so running the same request twice rewrites
//! the same file. Nothing prevents configuring the images and output
//! directories to be the same folder; resized copies then show up in the next
//! menu.
//!
//! ## Testable Shell
//!
//! The prompt loop takes any `BufRead` and `Write`, and the pixel work sits
//! behind [`imaging::ImageBackend`], so the whole interaction can be tested
//! with in-memory buffers and a recording mock.

pub mod config;
pub mod imaging;
pub mod naming;
pub mod output;
pub mod scan;
pub mod shell;

#[cfg(test)]
pub(crate) mod test_helpers;
