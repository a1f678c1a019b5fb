//! Coverage tests for the shape primitives.
//!
//! A pixel `(x, y)` occupies the unit square `[x, x+1) x [y, y+1)` and is
//! covered when its centre lies inside the shape. Inclusive bounding boxes
//! therefore span `[x0, x1 + 1]` in continuous coordinates.

use crate::types::{BBox, Paint, Point, ShapeSpec};

/// Continuous extents of an inclusive pixel box.
#[derive(Debug, Clone, Copy)]
struct Extents {
    left: f64,
    top: f64,
    right: f64,
    bottom: f64,
}

impl From<BBox> for Extents {
    fn from(bbox: BBox) -> Self {
        Self {
            left: bbox.x0 as f64,
            top: bbox.y0 as f64,
            right: (bbox.x1 + 1) as f64,
            bottom: (bbox.y1 + 1) as f64,
        }
    }
}

fn centre(x: i32, y: i32) -> (f64, f64) {
    (x as f64 + 0.5, y as f64 + 0.5)
}

/// Whether a shape covers the pixel at `(x, y)`.
pub fn covers(shape: &ShapeSpec, x: i32, y: i32) -> bool {
    match shape {
        ShapeSpec::RoundedRect { bbox, radius, .. } => rounded_rect_covers(*bbox, *radius, x, y),
        ShapeSpec::Ellipse { bbox, paint } => match paint {
            Paint::Fill(_) => ellipse_covers(*bbox, 0.0, x, y),
            Paint::Stroke { width, .. } => {
                ellipse_covers(*bbox, 0.0, x, y) && !ellipse_covers(*bbox, *width as f64, x, y)
            }
        },
        ShapeSpec::Polygon { points, .. } => polygon_covers(points, x, y),
    }
}

/// Rounded rectangle: the corner arcs have radius `radius`, clamped to half
/// the shorter side.
pub fn rounded_rect_covers(bbox: BBox, radius: i32, x: i32, y: i32) -> bool {
    if !bbox_contains(bbox, x, y) {
        return false;
    }

    let (ext, r) = rounded_extents(bbox, radius);
    let (px, py) = centre(x, y);
    inside_rounded(ext, r, px, py)
}

/// Whether the whole pixel square at `(x, y)` lies inside the rounded
/// rectangle, not just its centre.
pub fn rounded_rect_contains(bbox: BBox, radius: i32, x: i32, y: i32) -> bool {
    if !bbox_contains(bbox, x, y) {
        return false;
    }

    let (ext, r) = rounded_extents(bbox, radius);
    let (left, top) = (x as f64, y as f64);
    [(0.0, 0.0), (1.0, 0.0), (0.0, 1.0), (1.0, 1.0)]
        .iter()
        .all(|&(dx, dy)| inside_rounded(ext, r, left + dx, top + dy))
}

fn bbox_contains(bbox: BBox, x: i32, y: i32) -> bool {
    x >= bbox.x0 && x <= bbox.x1 && y >= bbox.y0 && y <= bbox.y1
}

fn rounded_extents(bbox: BBox, radius: i32) -> (Extents, f64) {
    let ext = Extents::from(bbox);
    let r = (radius.max(0) as f64)
        .min((ext.right - ext.left) / 2.0)
        .min((ext.bottom - ext.top) / 2.0);
    (ext, r)
}

fn inside_rounded(ext: Extents, r: f64, px: f64, py: f64) -> bool {
    // Nearest point on the inner rectangle whose r-neighbourhood is the shape
    let nx = px.clamp(ext.left + r, ext.right - r);
    let ny = py.clamp(ext.top + r, ext.bottom - r);
    let (dx, dy) = (px - nx, py - ny);

    dx * dx + dy * dy <= r * r
}

/// Ellipse inscribed in `bbox`, shrunk by `inset` on every side.
///
/// Returns false when the inset consumes the whole ellipse.
pub fn ellipse_covers(bbox: BBox, inset: f64, x: i32, y: i32) -> bool {
    let ext = Extents::from(bbox);
    let a = (ext.right - ext.left) / 2.0 - inset;
    let b = (ext.bottom - ext.top) / 2.0 - inset;
    if a <= 0.0 || b <= 0.0 {
        return false;
    }

    let cx = (ext.left + ext.right) / 2.0;
    let cy = (ext.top + ext.bottom) / 2.0;
    let (px, py) = centre(x, y);
    let (nx, ny) = ((px - cx) / a, (py - cy) / b);

    nx * nx + ny * ny <= 1.0
}

/// Polygon fill with the even-odd rule. Vertices sit on pixel centres.
pub fn polygon_covers(points: &[Point], x: i32, y: i32) -> bool {
    if points.len() < 3 {
        return false;
    }

    let (px, py) = (x as f64, y as f64);
    let mut inside = false;
    let mut j = points.len() - 1;

    for i in 0..points.len() {
        let (xi, yi) = (points[i].x as f64, points[i].y as f64);
        let (xj, yj) = (points[j].x as f64, points[j].y as f64);

        if on_segment(px, py, xi, yi, xj, yj) {
            return true;
        }

        if (yi > py) != (yj > py) {
            let cross_x = xi + (py - yi) * (xj - xi) / (yj - yi);
            if px < cross_x {
                inside = !inside;
            }
        }
        j = i;
    }

    inside
}

fn on_segment(px: f64, py: f64, ax: f64, ay: f64, bx: f64, by: f64) -> bool {
    let cross = (bx - ax) * (py - ay) - (by - ay) * (px - ax);
    if cross.abs() > f64::EPSILON {
        return false;
    }
    px >= ax.min(bx) && px <= ax.max(bx) && py >= ay.min(by) && py <= ay.max(by)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rounded_rect_square_corners() {
        let bbox = BBox::new(0, 0, 9, 9);
        assert!(rounded_rect_covers(bbox, 0, 0, 0));
        assert!(rounded_rect_covers(bbox, 0, 9, 9));
        assert!(!rounded_rect_covers(bbox, 0, 10, 9));
    }

    #[test]
    fn test_rounded_rect_cuts_corners() {
        let bbox = BBox::new(0, 0, 47, 47);
        for (x, y) in [(0, 0), (47, 0), (0, 47), (47, 47)] {
            assert!(!rounded_rect_covers(bbox, 8, x, y), "corner ({x}, {y})");
        }
        assert!(rounded_rect_covers(bbox, 8, 24, 24));
        // Straight edges stay covered
        assert!(rounded_rect_covers(bbox, 8, 24, 0));
        assert!(rounded_rect_covers(bbox, 8, 0, 24));
    }

    #[test]
    fn test_rounded_rect_contains_whole_pixels() {
        let bbox = BBox::new(0, 0, 5, 5);
        // The corner centre sits inside a radius-1 arc but the pixel does not
        assert!(rounded_rect_covers(bbox, 1, 0, 0));
        assert!(!rounded_rect_contains(bbox, 1, 0, 0));
        assert!(!rounded_rect_contains(bbox, 1, 5, 5));
        // Neighbours along the edges touch the arc and stay inside
        assert!(rounded_rect_contains(bbox, 1, 1, 0));
        assert!(rounded_rect_contains(bbox, 1, 0, 1));
        assert!(rounded_rect_contains(bbox, 1, 3, 3));
        assert!(!rounded_rect_contains(bbox, 1, 6, 3));
    }

    #[test]
    fn test_rounded_rect_contains_square_corners() {
        let bbox = BBox::new(0, 0, 9, 9);
        assert!(rounded_rect_contains(bbox, 0, 0, 0));
        assert!(rounded_rect_contains(bbox, 0, 9, 9));
    }

    #[test]
    fn test_rounded_rect_radius_clamped() {
        // Radius larger than the box degrades to an ellipse
        let bbox = BBox::new(0, 0, 9, 9);
        assert!(rounded_rect_covers(bbox, 100, 5, 5));
        assert!(!rounded_rect_covers(bbox, 100, 0, 0));
    }

    #[test]
    fn test_ellipse_fill() {
        let bbox = BBox::new(0, 0, 9, 9);
        assert!(ellipse_covers(bbox, 0.0, 5, 5));
        assert!(ellipse_covers(bbox, 0.0, 0, 5));
        assert!(!ellipse_covers(bbox, 0.0, 0, 0));
    }

    #[test]
    fn test_ellipse_ring() {
        let ring = ShapeSpec::stroked_ellipse(BBox::new(0, 0, 19, 19), crate::types::Colour::WHITE, 2);
        assert!(covers(&ring, 0, 10));
        assert!(covers(&ring, 1, 10));
        assert!(!covers(&ring, 10, 10));
    }

    #[test]
    fn test_thick_ring_fills_small_ellipse() {
        let ring = ShapeSpec::stroked_ellipse(BBox::new(0, 0, 2, 5), crate::types::Colour::WHITE, 2);
        assert!(covers(&ring, 1, 2));
    }

    #[test]
    fn test_polygon_triangle() {
        let tri = [Point::new(5, 0), Point::new(0, 5), Point::new(10, 5)];
        assert!(polygon_covers(&tri, 5, 3));
        assert!(polygon_covers(&tri, 5, 0));
        assert!(polygon_covers(&tri, 0, 5));
        assert!(!polygon_covers(&tri, 0, 0));
        assert!(!polygon_covers(&tri, 5, 6));
    }

    #[test]
    fn test_polygon_degenerate() {
        assert!(!polygon_covers(&[Point::new(0, 0), Point::new(1, 1)], 0, 0));
    }
}
