//! PNG output and resampling for composed icons.

use std::fs;
use std::path::Path;

use image::imageops::{self, FilterType};
use image::ImageFormat;

use crate::error::{IconError, Result};

use super::Canvas;

/// Write a canvas to a PNG file, creating parent directories as needed.
pub fn write_png(canvas: &Canvas, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| IconError::Io {
            path: parent.to_path_buf(),
            message: format!("Failed to create output directory: {}", e),
        })?;
    }

    canvas
        .as_image()
        .save_with_format(path, ImageFormat::Png)
        .map_err(|e| IconError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to write PNG: {}", e),
        })?;

    Ok(())
}

/// Resize a canvas with a Lanczos filter.
///
/// Returns a copy when the size already matches.
pub fn resample(canvas: &Canvas, size: u32) -> Result<Canvas> {
    if size == 0 {
        return Err(IconError::UnsupportedSize {
            message: "Cannot resample to 0px".to_string(),
            help: None,
        });
    }
    if size == canvas.size() {
        return Ok(canvas.clone());
    }
    Canvas::from_image(imageops::resize(
        canvas.as_image(),
        size,
        size,
        FilterType::Lanczos3,
    ))
}
