//! Tool configuration module.
//!
//! Handles loading, validating, and merging an optional `config.toml`. Stock
//! defaults reproduce the tool's fixed layout; a config file overrides only
//! the values it names.
//!
//! ## Config File Location
//!
//! By default the file is looked up next to the `images/` directory, i.e. in
//! the base directory (the directory holding the executable unless
//! `--base-dir` says otherwise). `--config` points somewhere else.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! images_dir = "images"          # Where to look for images (relative to base dir)
//! output_dir = "resized_images"  # Where resized images go (created on demand)
//! suffix = "_resized"            # Inserted between file stem and extension
//!
//! [resize]
//! filter = "lanczos3"            # lanczos3 | catmull-rom | gaussian | triangle | nearest
//! jpeg_quality = 75              # JPEG encoding quality (1-100)
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use crate::imaging::{Quality, ResampleFilter, ResizeOptions};
use crate::naming;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File name looked up in the base directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Tool configuration loaded from `config.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ResizerConfig {
    /// Directory listed for selectable images. Relative paths resolve against the base dir.
    pub images_dir: PathBuf,
    /// Directory resized images are written to. Relative paths resolve against the base dir.
    pub output_dir: PathBuf,
    /// Marker inserted between the input stem and its extension.
    pub suffix: String,
    /// Resampling and encoding settings.
    pub resize: ResizeConfig,
}

impl Default for ResizerConfig {
    fn default() -> Self {
        Self {
            images_dir: PathBuf::from("images"),
            output_dir: PathBuf::from("resized_images"),
            suffix: naming::DEFAULT_SUFFIX.to_string(),
            resize: ResizeConfig::default(),
        }
    }
}

/// Resampling and encoding settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ResizeConfig {
    /// Resampling kernel.
    pub filter: ResampleFilter,
    /// JPEG encoding quality (1 = worst, 100 = best).
    pub jpeg_quality: u32,
}

impl Default for ResizeConfig {
    fn default() -> Self {
        Self {
            filter: ResampleFilter::default(),
            jpeg_quality: Quality::default().value(),
        }
    }
}

impl ResizerConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.images_dir.as_os_str().is_empty() {
            return Err(ConfigError::Validation(
                "images_dir must not be empty".into(),
            ));
        }
        if self.output_dir.as_os_str().is_empty() {
            return Err(ConfigError::Validation(
                "output_dir must not be empty".into(),
            ));
        }
        if self.suffix.is_empty() {
            return Err(ConfigError::Validation(
                "suffix must not be empty (outputs would overwrite their inputs)".into(),
            ));
        }
        if self.suffix.contains(['/', '\\']) {
            return Err(ConfigError::Validation(
                "suffix must not contain path separators".into(),
            ));
        }
        if !(1..=100).contains(&self.resize.jpeg_quality) {
            return Err(ConfigError::Validation(
                "resize.jpeg_quality must be 1-100".into(),
            ));
        }
        Ok(())
    }

    /// Absolute-or-base-relative images directory.
    pub fn images_dir_in(&self, base: &Path) -> PathBuf {
        base.join(&self.images_dir)
    }

    /// Absolute-or-base-relative output directory.
    pub fn output_dir_in(&self, base: &Path) -> PathBuf {
        base.join(&self.output_dir)
    }

    /// Per-request options handed to the resizer.
    pub fn resize_options(&self) -> ResizeOptions {
        ResizeOptions {
            suffix: self.suffix.clone(),
            filter: self.resize.filter,
            quality: Quality::new(self.resize.jpeg_quality),
        }
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
///
/// This is the canonical representation of all default values, used as the
/// base layer for merging user overrides on top.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(ResizerConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load a config file as a raw TOML value.
///
/// Returns `Ok(None)` if the file does not exist.
/// Returns `Err` if the file exists but contains invalid TOML.
pub fn load_raw_config(config_path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<ResizerConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: ResizerConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `config_path`, merged over stock defaults.
///
/// A missing file yields the stock defaults.
pub fn load_config(config_path: &Path) -> Result<ResizerConfig, ConfigError> {
    let base = stock_defaults_value();
    let overlay = load_raw_config(config_path)?;
    resolve_config(base, overlay)
}

/// Returns a fully-commented stock `config.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Image Resizer Configuration
# ===========================
#
# Place this file next to the images/ directory (or pass --config).
# All options are optional; uncomment and change only what you need.

# Directory listed for images to resize. Relative to the base directory.
# images_dir = "images"

# Directory resized images are written to. Created if missing.
# Relative to the base directory.
# output_dir = "resized_images"

# Marker inserted between the file stem and extension:
# beach.jpg -> beach_resized.jpg
# suffix = "_resized"

[resize]
# Resampling filter: lanczos3 | catmull-rom | gaussian | triangle | nearest
# filter = "lanczos3"

# JPEG encoding quality, 1 (worst) to 100 (best).
# Other formats are written losslessly.
# jpeg_quality = 75
"##
}
