//! iconsmith - Procedural launcher icon generator
//!
//! A library for composing launcher icons from parametric shapes and
//! gradients, and exporting them into density-bucketed mipmap directories.

pub mod cli;
pub mod error;
pub mod export;
pub mod manifest;
pub mod output;
pub mod render;
pub mod types;

pub use error::{IconError, Result};
pub use export::{BucketFailure, ExportMode, ExportReport, ExportedFile, Exporter};
pub use manifest::Manifest;
pub use render::{compose, round_corners, vertical_gradient, Blend, Canvas};
pub use types::{
    output_path, BBox, Colour, Density, DensityTable, Design, DesignSpec, Extent, FileRole,
    IconKind, Layer, Point, ShadowLayering, ShapeSpec,
};
