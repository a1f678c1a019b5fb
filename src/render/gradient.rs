//! Vertical two-colour gradients.
//!
//! Row `y` of a `size` canvas uses `ratio = y / size`, so the last row stops
//! one step short of the end colour. Existing exported assets depend on this.

use crate::error::Result;
use crate::types::{Colour, Gradient};

use super::Canvas;

impl Gradient {
    pub const fn new(start: Colour, end: Colour) -> Self {
        Self { start, end }
    }

    /// Colour of row `y` on a canvas of `size` rows.
    pub fn colour_at(&self, y: u32, size: u32) -> Colour {
        let ratio = if size == 0 { 0.0 } else { y as f64 / size as f64 };
        self.start.lerp(self.end, ratio)
    }

    /// Render a fully opaque `size x size` gradient canvas.
    pub fn render(&self, size: u32) -> Result<Canvas> {
        let mut canvas = Canvas::new(size)?;
        for y in 0..size {
            canvas.fill_row(y, self.colour_at(y, size));
        }
        Ok(canvas)
    }
}

/// Render a vertical gradient from `start` (top) to `end` (bottom).
pub fn vertical_gradient(size: u32, start: Colour, end: Colour) -> Result<Canvas> {
    Gradient::new(start, end).render(size)
}
