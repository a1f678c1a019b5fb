//! Shape specifications for the raster primitives.
//!
//! All coordinates are integer pixel positions on a square canvas with the
//! origin at the top-left. Bounding boxes are inclusive on both ends, so
//! `BBox::new(0, 0, 3, 3)` covers a 4x4 block of pixels.

use crate::error::{IconError, Result};

use super::Colour;

/// An integer pixel position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// An inclusive pixel bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BBox {
    pub x0: i32,
    pub y0: i32,
    pub x1: i32,
    pub y1: i32,
}

impl BBox {
    pub const fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// A box covering a whole `size x size` canvas.
    pub fn canvas(size: u32) -> Self {
        let last = size as i32 - 1;
        Self::new(0, 0, last, last)
    }

    /// Shift the box by an offset.
    pub fn translate(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x0 + dx, self.y0 + dy, self.x1 + dx, self.y1 + dy)
    }

    fn validate(&self, what: &str) -> Result<()> {
        if self.x1 < self.x0 || self.y1 < self.y0 {
            return Err(IconError::InvalidGeometry {
                message: format!(
                    "{} box [{}, {}, {}, {}] is inverted",
                    what, self.x0, self.y0, self.x1, self.y1
                ),
                help: Some("Bounding boxes need x0 <= x1 and y0 <= y1".to_string()),
            });
        }
        Ok(())
    }
}

/// How an ellipse is painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Paint {
    /// Fill the interior.
    Fill(Colour),
    /// Outline only, `width` pixels thick measured inwards.
    Stroke { colour: Colour, width: u32 },
}

impl Paint {
    pub fn colour(&self) -> Colour {
        match *self {
            Paint::Fill(colour) => colour,
            Paint::Stroke { colour, .. } => colour,
        }
    }
}

/// A shape to draw onto a canvas.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShapeSpec {
    /// A filled rectangle with circular corners.
    RoundedRect {
        bbox: BBox,
        radius: i32,
        fill: Colour,
    },
    /// An axis-aligned ellipse inscribed in `bbox`.
    Ellipse { bbox: BBox, paint: Paint },
    /// A filled polygon through the given vertices (pixel centres).
    Polygon { points: Vec<Point>, fill: Colour },
}

impl ShapeSpec {
    pub fn rounded_rect(bbox: BBox, radius: i32, fill: Colour) -> Self {
        ShapeSpec::RoundedRect { bbox, radius, fill }
    }

    pub fn filled_ellipse(bbox: BBox, fill: Colour) -> Self {
        ShapeSpec::Ellipse {
            bbox,
            paint: Paint::Fill(fill),
        }
    }

    pub fn stroked_ellipse(bbox: BBox, colour: Colour, width: u32) -> Self {
        ShapeSpec::Ellipse {
            bbox,
            paint: Paint::Stroke { colour, width },
        }
    }

    pub fn polygon(points: Vec<Point>, fill: Colour) -> Self {
        ShapeSpec::Polygon { points, fill }
    }

    /// The colour this shape paints with.
    pub fn colour(&self) -> Colour {
        match self {
            ShapeSpec::RoundedRect { fill, .. } => *fill,
            ShapeSpec::Ellipse { paint, .. } => paint.colour(),
            ShapeSpec::Polygon { fill, .. } => *fill,
        }
    }

    /// The same shape painted in a different colour.
    pub fn recolour(&self, colour: Colour) -> Self {
        match self {
            ShapeSpec::RoundedRect { bbox, radius, .. } => ShapeSpec::RoundedRect {
                bbox: *bbox,
                radius: *radius,
                fill: colour,
            },
            ShapeSpec::Ellipse { bbox, paint } => ShapeSpec::Ellipse {
                bbox: *bbox,
                paint: match *paint {
                    Paint::Fill(_) => Paint::Fill(colour),
                    Paint::Stroke { width, .. } => Paint::Stroke { colour, width },
                },
            },
            ShapeSpec::Polygon { points, .. } => ShapeSpec::Polygon {
                points: points.clone(),
                fill: colour,
            },
        }
    }

    /// The same shape shifted by an offset.
    pub fn translate(&self, dx: i32, dy: i32) -> Self {
        match self {
            ShapeSpec::RoundedRect { bbox, radius, fill } => ShapeSpec::RoundedRect {
                bbox: bbox.translate(dx, dy),
                radius: *radius,
                fill: *fill,
            },
            ShapeSpec::Ellipse { bbox, paint } => ShapeSpec::Ellipse {
                bbox: bbox.translate(dx, dy),
                paint: *paint,
            },
            ShapeSpec::Polygon { points, fill } => ShapeSpec::Polygon {
                points: points
                    .iter()
                    .map(|p| Point::new(p.x + dx, p.y + dy))
                    .collect(),
                fill: *fill,
            },
        }
    }

    /// Smallest box containing every pixel the shape may touch.
    pub fn bounds(&self) -> BBox {
        match self {
            ShapeSpec::RoundedRect { bbox, .. } | ShapeSpec::Ellipse { bbox, .. } => *bbox,
            ShapeSpec::Polygon { points, .. } => {
                let mut bounds = BBox::new(i32::MAX, i32::MAX, i32::MIN, i32::MIN);
                for p in points {
                    bounds.x0 = bounds.x0.min(p.x);
                    bounds.y0 = bounds.y0.min(p.y);
                    bounds.x1 = bounds.x1.max(p.x);
                    bounds.y1 = bounds.y1.max(p.y);
                }
                bounds
            }
        }
    }

    /// Reject degenerate specs before any pixel is touched.
    pub fn validate(&self) -> Result<()> {
        match self {
            ShapeSpec::RoundedRect { bbox, radius, .. } => {
                bbox.validate("Rounded rectangle")?;
                if *radius < 0 {
                    return Err(IconError::InvalidGeometry {
                        message: format!("Corner radius {} is negative", radius),
                        help: None,
                    });
                }
            }
            ShapeSpec::Ellipse { bbox, paint } => {
                bbox.validate("Ellipse")?;
                if let Paint::Stroke { width: 0, .. } = paint {
                    return Err(IconError::InvalidGeometry {
                        message: "Ellipse stroke width is zero".to_string(),
                        help: Some("Stroke widths must be at least 1 pixel".to_string()),
                    });
                }
            }
            ShapeSpec::Polygon { points, .. } => {
                if points.len() < 3 {
                    return Err(IconError::geometry(format!(
                        "Polygon needs at least 3 vertices, got {}",
                        points.len()
                    )));
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canvas_bbox() {
        assert_eq!(BBox::canvas(48), BBox::new(0, 0, 47, 47));
    }

    #[test]
    fn test_translate_polygon() {
        let tri = ShapeSpec::polygon(
            vec![Point::new(5, 0), Point::new(0, 5), Point::new(10, 5)],
            Colour::WHITE,
        );
        let moved = tri.translate(2, 3);
        assert_eq!(moved.bounds(), BBox::new(2, 3, 12, 8));
    }

    #[test]
    fn test_recolour_keeps_stroke_width() {
        let ring = ShapeSpec::stroked_ellipse(BBox::new(0, 0, 9, 9), Colour::WHITE, 3);
        let shadow = ring.recolour(Colour::BLACK);
        assert_eq!(
            shadow,
            ShapeSpec::stroked_ellipse(BBox::new(0, 0, 9, 9), Colour::BLACK, 3)
        );
    }

    #[test]
    fn test_validate_negative_radius() {
        let rect = ShapeSpec::rounded_rect(BBox::new(0, 0, 9, 9), -1, Colour::WHITE);
        assert!(matches!(
            rect.validate(),
            Err(IconError::InvalidGeometry { .. })
        ));
    }

    #[test]
    fn test_validate_zero_stroke() {
        let ring = ShapeSpec::stroked_ellipse(BBox::new(0, 0, 9, 9), Colour::WHITE, 0);
        assert!(ring.validate().is_err());
    }

    #[test]
    fn test_validate_inverted_box() {
        let ellipse = ShapeSpec::filled_ellipse(BBox::new(9, 0, 0, 9), Colour::WHITE);
        assert!(ellipse.validate().is_err());
    }

    #[test]
    fn test_validate_short_polygon() {
        let line = ShapeSpec::polygon(vec![Point::new(0, 0), Point::new(5, 5)], Colour::WHITE);
        assert!(line.validate().is_err());
    }

    #[test]
    fn test_validate_ok() {
        let rect = ShapeSpec::rounded_rect(BBox::new(0, 0, 9, 9), 2, Colour::WHITE);
        assert!(rect.validate().is_ok());
    }
}
