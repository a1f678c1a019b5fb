//! Rounded-corner alpha masking for flat launcher icons.

use image::{GrayImage, Luma};

use crate::error::{IconError, Result};
use crate::types::BBox;

use super::primitives::rounded_rect_contains;
use super::Canvas;

/// Render a single-channel mask: 255 for pixels lying wholly inside a
/// canvas-sized rounded rectangle, 0 otherwise.
///
/// Any radius of at least 1 clears the four corner pixels.
pub fn rounded_mask(size: u32, radius: i32) -> Result<GrayImage> {
    if size == 0 {
        return Err(IconError::UnsupportedSize {
            message: "Mask size must be positive".to_string(),
            help: None,
        });
    }
    if radius < 0 {
        return Err(IconError::geometry(format!(
            "Corner radius {} is negative",
            radius
        )));
    }

    let bbox = BBox::canvas(size);
    Ok(GrayImage::from_fn(size, size, |x, y| {
        if rounded_rect_contains(bbox, radius, x as i32, y as i32) {
            Luma([255])
        } else {
            Luma([0])
        }
    }))
}

/// Copy `source` through a rounded-rectangle mask.
///
/// Pixels under the mask keep their exact colour; everything else becomes
/// fully transparent.
pub fn round_corners(source: &Canvas, radius: i32) -> Result<Canvas> {
    let size = source.size();
    let mask = rounded_mask(size, radius)?;
    let mut out = Canvas::new(size)?;

    for (x, y, coverage) in mask.enumerate_pixels() {
        if coverage.0[0] == 0 {
            continue;
        }
        if let Some(colour) = source.get(x, y) {
            out.put(x as i32, y as i32, colour, super::Blend::Replace);
        }
    }

    Ok(out)
}
