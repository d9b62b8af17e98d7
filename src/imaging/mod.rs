//! Image processing: pure Rust, no system libraries.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Identify** | `ImageReader::into_dimensions`, format sniffed from content |
//! | **Resize** | `resize_exact` with Lanczos3 (configurable) |
//! | **Encode** | format picked from the output extension |
//!
//! The module is split into:
//! - **Parameters**: Data structures describing image operations
//! - **Backend**: [`ImageBackend`] trait + [`RustBackend`], and the [`ResizeError`] taxonomy
//! - **Operations**: High-level functions that plan output paths and call the backend

pub mod backend;
pub mod operations;
mod params;
pub mod rust_backend;

pub use backend::{Dimensions, ImageBackend, ResizeError};
pub use rust_backend::RustBackend;
pub use operations::{
    ResizeOptions, ResizeOutcome, ResizeRequest, get_dimensions, plan_resize, resize_image,
};
pub use params::{Quality, ResampleFilter, ResizeParams};
