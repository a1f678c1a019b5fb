//! Density buckets, export size tables and output paths.
//!
//! Flat launcher icons use absolute pixel sizes per bucket. Adaptive icon
//! layers scale a 108px base canvas by the bucket multiplier.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::{IconError, Result};

/// Logical size of an adaptive icon layer at mdpi.
pub const ADAPTIVE_BASE_SIZE: u32 = 108;

/// Logical size of the adaptive safe area at mdpi.
pub const SAFE_AREA_SIZE: u32 = 72;

/// Default resource directory of the mobile build.
pub const DEFAULT_OUTPUT_DIR: &str = "android/app/src/main/res";

/// A named screen density tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Density {
    Mdpi,
    Hdpi,
    Xhdpi,
    Xxhdpi,
    Xxxhdpi,
}

impl Density {
    /// Every bucket, lowest density first.
    pub const ALL: [Density; 5] = [
        Density::Mdpi,
        Density::Hdpi,
        Density::Xhdpi,
        Density::Xxhdpi,
        Density::Xxxhdpi,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Density::Mdpi => "mdpi",
            Density::Hdpi => "hdpi",
            Density::Xhdpi => "xhdpi",
            Density::Xxhdpi => "xxhdpi",
            Density::Xxxhdpi => "xxxhdpi",
        }
    }

    /// Resource directory name, e.g. `mipmap-hdpi`.
    pub fn dir_name(self) -> String {
        format!("mipmap-{}", self.name())
    }
}

impl fmt::Display for Density {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Which file of a bucket an image is written to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FileRole {
    Launcher,
    LauncherBackground,
    LauncherForeground,
}

impl FileRole {
    /// File stem without extension.
    pub fn stem(self) -> &'static str {
        match self {
            FileRole::Launcher => "ic_launcher",
            FileRole::LauncherBackground => "ic_launcher_background",
            FileRole::LauncherForeground => "ic_launcher_foreground",
        }
    }

    pub fn file_name(self) -> String {
        format!("{}.png", self.stem())
    }
}

impl fmt::Display for FileRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.stem())
    }
}

/// Resolve the path an icon file is written to.
///
/// `<base>/mipmap-<density>/<role>.png`
pub fn output_path(base: &Path, density: Density, role: FileRole) -> PathBuf {
    base.join(density.dir_name()).join(role.file_name())
}

/// How a bucket's pixel size is derived.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Extent {
    /// An absolute pixel size.
    Pixels(u32),
    /// A multiplier on the table's base size.
    Scale(f32),
}

/// An ordered mapping from density bucket to export size.
#[derive(Debug, Clone, PartialEq)]
pub struct DensityTable {
    base: u32,
    entries: Vec<(Density, Extent)>,
}

impl DensityTable {
    pub fn new(base: u32, entries: Vec<(Density, Extent)>) -> Self {
        Self { base, entries }
    }

    /// Absolute sizes for flat launcher icons.
    pub fn flat() -> Self {
        Self::new(
            48,
            vec![
                (Density::Mdpi, Extent::Pixels(48)),
                (Density::Hdpi, Extent::Pixels(72)),
                (Density::Xhdpi, Extent::Pixels(96)),
                (Density::Xxhdpi, Extent::Pixels(144)),
                (Density::Xxxhdpi, Extent::Pixels(192)),
            ],
        )
    }

    /// Scale factors on the adaptive base size.
    pub fn adaptive() -> Self {
        Self::new(
            ADAPTIVE_BASE_SIZE,
            vec![
                (Density::Mdpi, Extent::Scale(1.0)),
                (Density::Hdpi, Extent::Scale(1.5)),
                (Density::Xhdpi, Extent::Scale(2.0)),
                (Density::Xxhdpi, Extent::Scale(3.0)),
                (Density::Xxxhdpi, Extent::Scale(4.0)),
            ],
        )
    }

    pub fn base(&self) -> u32 {
        self.base
    }

    pub fn entries(&self) -> &[(Density, Extent)] {
        &self.entries
    }

    /// Resolve an extent to a pixel size.
    pub fn target_size(&self, extent: Extent) -> Result<u32> {
        let size = match extent {
            Extent::Pixels(px) => px as i64,
            Extent::Scale(scale) if scale.is_finite() => (self.base as f32 * scale) as i64,
            Extent::Scale(scale) => {
                return Err(IconError::UnsupportedSize {
                    message: format!("Scale factor {} is not a number", scale),
                    help: None,
                })
            }
        };

        if size <= 0 {
            return Err(IconError::UnsupportedSize {
                message: format!("{:?} resolves to {}px", extent, size),
                help: Some("Export sizes must be at least 1px".to_string()),
            });
        }

        Ok(size as u32)
    }

    /// Largest resolvable size in the table.
    pub fn max_size(&self) -> Result<u32> {
        let mut max = None;
        for (_, extent) in &self.entries {
            let size = self.target_size(*extent)?;
            max = Some(max.map_or(size, |m: u32| m.max(size)));
        }
        max.ok_or_else(|| IconError::UnsupportedSize {
            message: "Density table is empty".to_string(),
            help: None,
        })
    }
}
