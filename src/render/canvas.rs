//! Square RGBA pixel buffer with shape drawing.

use image::{Rgba, RgbaImage};

use crate::error::{IconError, Result};
use crate::types::{BBox, Colour, ShapeSpec};

use super::primitives;

/// How painted pixels combine with what is already on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Blend {
    /// Source-over compositing.
    #[default]
    Over,
    /// Overwrite the destination pixel, alpha included.
    Replace,
}

/// A square RGBA canvas, origin top-left.
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    image: RgbaImage,
}

impl Canvas {
    /// Create a fully transparent canvas.
    pub fn new(size: u32) -> Result<Self> {
        Self::filled(size, Colour::TRANSPARENT)
    }

    /// Create a canvas filled with a single colour.
    pub fn filled(size: u32, colour: Colour) -> Result<Self> {
        if size == 0 {
            return Err(IconError::UnsupportedSize {
                message: "Canvas size must be positive".to_string(),
                help: None,
            });
        }
        Ok(Self {
            image: RgbaImage::from_pixel(size, size, Rgba(colour.to_rgba())),
        })
    }

    /// Wrap an existing image. The image must be square and non-empty.
    pub fn from_image(image: RgbaImage) -> Result<Self> {
        if image.width() != image.height() || image.width() == 0 {
            return Err(IconError::UnsupportedSize {
                message: format!("{}x{} is not a square canvas", image.width(), image.height()),
                help: None,
            });
        }
        Ok(Self { image })
    }

    /// Edge length in pixels.
    pub fn size(&self) -> u32 {
        self.image.width()
    }

    /// Get a pixel, or `None` outside the canvas.
    pub fn get(&self, x: u32, y: u32) -> Option<Colour> {
        self.image.get_pixel_checked(x, y).map(|p| Colour::from(p.0))
    }

    /// Paint one pixel. Coordinates outside the canvas are ignored.
    pub fn put(&mut self, x: i32, y: i32, colour: Colour, blend: Blend) {
        if x < 0 || y < 0 {
            return;
        }
        let Some(pixel) = self.image.get_pixel_mut_checked(x as u32, y as u32) else {
            return;
        };
        let painted = match blend {
            Blend::Over => colour.over(Colour::from(pixel.0)),
            Blend::Replace => colour,
        };
        *pixel = Rgba(painted.to_rgba());
    }

    /// Overwrite an entire row with one colour.
    pub fn fill_row(&mut self, y: u32, colour: Colour) {
        if y >= self.size() {
            return;
        }
        let rgba = Rgba(colour.to_rgba());
        for x in 0..self.size() {
            self.image.put_pixel(x, y, rgba);
        }
    }

    /// Draw a shape with source-over blending.
    pub fn draw(&mut self, shape: &ShapeSpec) -> Result<()> {
        self.draw_with(shape, Blend::Over)
    }

    /// Draw a shape. Pixels outside the canvas are clipped silently.
    pub fn draw_with(&mut self, shape: &ShapeSpec, blend: Blend) -> Result<()> {
        shape.validate()?;

        let Some(area) = self.clip(shape.bounds()) else {
            return Ok(());
        };
        let colour = shape.colour();

        for y in area.y0..=area.y1 {
            for x in area.x0..=area.x1 {
                if primitives::covers(shape, x, y) {
                    self.put(x, y, colour, blend);
                }
            }
        }

        Ok(())
    }

    /// Draw several shapes in order.
    pub fn draw_all<'a>(
        &mut self,
        shapes: impl IntoIterator<Item = &'a ShapeSpec>,
        blend: Blend,
    ) -> Result<()> {
        for shape in shapes {
            self.draw_with(shape, blend)?;
        }
        Ok(())
    }

    /// Intersect a box with the canvas.
    fn clip(&self, bbox: BBox) -> Option<BBox> {
        let last = self.size() as i32 - 1;
        let clipped = BBox::new(
            bbox.x0.max(0),
            bbox.y0.max(0),
            bbox.x1.min(last),
            bbox.y1.min(last),
        );
        (clipped.x0 <= clipped.x1 && clipped.y0 <= clipped.y1).then_some(clipped)
    }

    /// Borrow the underlying image.
    pub fn as_image(&self) -> &RgbaImage {
        &self.image
    }
}
