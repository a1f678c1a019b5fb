//! Rendering module for iconsmith.
//!
//! This module handles rasterising shapes, gradients and corner masks onto
//! square canvases, composing full icon layers, and writing them as PNG.

mod canvas;
mod compose;
mod gradient;
mod mask;
mod png;
pub mod primitives;

pub use canvas::{Blend, Canvas};
pub use compose::{arrow_shapes, bag_shapes, compose, draw_artwork, render_background};
pub use gradient::vertical_gradient;
pub use mask::{round_corners, rounded_mask};
pub use png::{resample, write_png};
