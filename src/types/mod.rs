//! Core domain types for iconsmith.
//!
//! This module contains the fundamental types used throughout the pipeline:
//! - `Colour` - RGBA colour values
//! - `ShapeSpec` - Rounded rectangles, ellipses and polygons
//! - `DensityTable` - Bucket to export size mappings
//! - `DesignSpec` - Immutable per-design colours and proportions

mod colour;
mod density;
mod design;
mod geometry;

pub use colour::Colour;
pub use density::{
    output_path, Density, DensityTable, Extent, FileRole, ADAPTIVE_BASE_SIZE, DEFAULT_OUTPUT_DIR,
    SAFE_AREA_SIZE,
};
pub use design::{
    ArrowStyle, Artwork, Background, BagStyle, Design, DesignSpec, Gradient, IconKind, Layer,
    Ratio, ShadowLayering, GRADIENT_CYAN, GRADIENT_GREEN, MARKETPLACE_PURPLE, PIN_YELLOW,
};
pub use geometry::{BBox, Paint, Point, ShapeSpec};
