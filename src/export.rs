//! Multi-resolution export into density buckets.
//!
//! For each bucket of a density table the exporter composes the icon,
//! persists it under `<base>/mipmap-<density>/`, and moves on. A failing
//! bucket never stops the others; every failure is collected in the
//! [`ExportReport`].

use std::collections::HashMap;
use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{IconError, Result};
use crate::render::{compose, resample, write_png, Canvas};
use crate::types::{output_path, Density, DensityTable, DesignSpec, FileRole, IconKind, Layer};

/// How bucket images are produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportMode {
    /// Recompose the geometry at every target size.
    #[default]
    Native,
    /// Compose one master per layer and Lanczos-resize it to each size.
    Resample,
}

/// Layers written for an icon kind, with their file roles.
pub fn layers_of(kind: IconKind) -> &'static [(Layer, FileRole)] {
    match kind {
        IconKind::Flat => &[(Layer::Flat, FileRole::Launcher)],
        IconKind::Adaptive => &[
            (Layer::Background, FileRole::LauncherBackground),
            (Layer::Foreground, FileRole::LauncherForeground),
        ],
    }
}

/// Density table used for an icon kind.
pub fn table_of(kind: IconKind) -> DensityTable {
    match kind {
        IconKind::Flat => DensityTable::flat(),
        IconKind::Adaptive => DensityTable::adaptive(),
    }
}

/// A file the exporter wrote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportedFile {
    pub density: Density,
    pub role: FileRole,
    pub path: PathBuf,
    pub size: u32,
}

/// A bucket that could not be exported.
#[derive(Debug)]
pub struct BucketFailure {
    pub density: Density,
    pub role: FileRole,
    pub path: PathBuf,
    pub error: IconError,
}

impl fmt::Display for BucketFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} ({}): {}",
            self.density,
            self.role,
            self.path.display(),
            self.error
        )
    }
}

/// Outcome of exporting one design.
#[derive(Debug)]
pub struct ExportReport {
    pub design: &'static str,
    pub kind: IconKind,
    pub written: Vec<ExportedFile>,
    pub failures: Vec<BucketFailure>,
}

impl ExportReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    /// Machine-readable summary.
    pub fn to_json(&self) -> serde_json::Value {
        let failures: Vec<serde_json::Value> = self
            .failures
            .iter()
            .map(|f| {
                serde_json::json!({
                    "density": f.density,
                    "role": f.role,
                    "path": f.path,
                    "error": f.error.to_string(),
                })
            })
            .collect();

        serde_json::json!({
            "design": self.design,
            "kind": self.kind,
            "written": self.written,
            "failures": failures,
        })
    }

    /// The written files, or an aggregate error listing every failed bucket.
    pub fn into_result(self) -> Result<Vec<ExportedFile>> {
        if self.is_success() {
            return Ok(self.written);
        }

        Err(IconError::export_failures(
            self.failures.iter().map(|f| f.to_string()).collect(),
        ))
    }
}

/// Writes composed icons into a density-bucketed directory tree.
#[derive(Debug, Clone)]
pub struct Exporter {
    base: PathBuf,
    mode: ExportMode,
}

impl Exporter {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self {
            base: base.into(),
            mode: ExportMode::default(),
        }
    }

    pub fn with_mode(mut self, mode: ExportMode) -> Self {
        self.mode = mode;
        self
    }

    /// Export a design with the standard table for its kind.
    pub fn export(&self, design: &DesignSpec, kind: IconKind) -> ExportReport {
        self.export_table(design, kind, &table_of(kind))
    }

    /// Export a design over an explicit density table.
    pub fn export_table(
        &self,
        design: &DesignSpec,
        kind: IconKind,
        table: &DensityTable,
    ) -> ExportReport {
        let mut report = ExportReport {
            design: design.name,
            kind,
            written: Vec::new(),
            failures: Vec::new(),
        };
        let mut masters: HashMap<Layer, Canvas> = HashMap::new();

        for &(density, extent) in table.entries() {
            for &(layer, role) in layers_of(kind) {
                let path = output_path(&self.base, density, role);

                let outcome = table.target_size(extent).and_then(|size| {
                    let canvas = self.render(design, layer, size, kind, table, &mut masters)?;
                    write_png(&canvas, &path)?;
                    Ok(size)
                });

                match outcome {
                    Ok(size) => report.written.push(ExportedFile {
                        density,
                        role,
                        path,
                        size,
                    }),
                    Err(error) => {
                        report.failures.push(BucketFailure {
                            density,
                            role,
                            path,
                            error,
                        });
                        // The rest of this bucket is abandoned
                        break;
                    }
                }
            }
        }

        report
    }

    fn render(
        &self,
        design: &DesignSpec,
        layer: Layer,
        size: u32,
        kind: IconKind,
        table: &DensityTable,
        masters: &mut HashMap<Layer, Canvas>,
    ) -> Result<Canvas> {
        match self.mode {
            ExportMode::Native => compose(design, layer, size),
            ExportMode::Resample => {
                if !masters.contains_key(&layer) {
                    let master_size = match kind {
                        IconKind::Flat => table.max_size()?,
                        IconKind::Adaptive => table.base(),
                    };
                    masters.insert(layer, compose(design, layer, master_size)?);
                }
                match masters.get(&layer) {
                    Some(master) => resample(master, size),
                    None => compose(design, layer, size),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Extent;
    use tempfile::tempdir;

    #[test]
    fn test_flat_export_writes_five_files() {
        let dir = tempdir().unwrap();
        let report = Exporter::new(dir.path()).export(&DesignSpec::marketplace(), IconKind::Flat);

        assert!(report.is_success());
        assert_eq!(report.written.len(), 5);
        for file in &report.written {
            assert_eq!(file.role, FileRole::Launcher);
            let img = image::open(&file.path).unwrap();
            assert_eq!(img.width(), file.size);
            assert_eq!(img.height(), file.size);
        }
    }

    #[test]
    fn test_adaptive_export_writes_ten_files() {
        let dir = tempdir().unwrap();
        let report = Exporter::new(dir.path()).export(&DesignSpec::arrow(), IconKind::Adaptive);

        assert!(report.is_success());
        assert_eq!(report.written.len(), 10);
        assert!(dir
            .path()
            .join("mipmap-xxxhdpi/ic_launcher_background.png")
            .exists());
        assert!(dir
            .path()
            .join("mipmap-mdpi/ic_launcher_foreground.png")
            .exists());
    }

    #[test]
    fn test_bad_bucket_does_not_abort_others() {
        let dir = tempdir().unwrap();
        let table = DensityTable::new(
            108,
            vec![
                (Density::Mdpi, Extent::Scale(1.0)),
                (Density::Hdpi, Extent::Pixels(0)),
                (Density::Xhdpi, Extent::Scale(2.0)),
            ],
        );

        let report = Exporter::new(dir.path()).export_table(
            &DesignSpec::marketplace(),
            IconKind::Adaptive,
            &table,
        );

        assert_eq!(report.written.len(), 4);
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].density, Density::Hdpi);
        assert!(matches!(
            report.failures[0].error,
            IconError::UnsupportedSize { .. }
        ));
        assert!(!dir.path().join("mipmap-hdpi").exists());
    }

    #[test]
    fn test_io_failure_isolated_per_bucket() {
        let dir = tempdir().unwrap();
        // A file where the hdpi directory should go
        std::fs::write(dir.path().join("mipmap-hdpi"), b"").unwrap();

        let report = Exporter::new(dir.path()).export(&DesignSpec::arrow(), IconKind::Flat);

        assert_eq!(report.written.len(), 4);
        assert_eq!(report.failures.len(), 1);
        let failure = &report.failures[0];
        assert_eq!(failure.density, Density::Hdpi);
        assert!(matches!(failure.error, IconError::Io { .. }));
        assert!(failure.to_string().contains("hdpi"));

        match report.into_result() {
            Err(IconError::Export { failed, help }) => {
                assert_eq!(failed, 1);
                assert!(help.unwrap().contains("mipmap-hdpi"));
            }
            other => panic!("expected export error, got {:?}", other),
        }
    }

    #[test]
    fn test_resample_mode_sizes() {
        let dir = tempdir().unwrap();
        let report = Exporter::new(dir.path())
            .with_mode(ExportMode::Resample)
            .export(&DesignSpec::marketplace(), IconKind::Adaptive);

        assert!(report.is_success());
        for file in &report.written {
            let img = image::open(&file.path).unwrap();
            assert_eq!(img.width(), file.size);
        }
        let sizes: Vec<u32> = report.written.iter().map(|f| f.size).collect();
        assert_eq!(sizes, vec![108, 108, 162, 162, 216, 216, 324, 324, 432, 432]);
    }

    #[test]
    fn test_report_json() {
        let dir = tempdir().unwrap();
        let report = Exporter::new(dir.path()).export(&DesignSpec::marketplace(), IconKind::Flat);
        let json = report.to_json();

        assert_eq!(json["design"], "marketplace");
        assert_eq!(json["kind"], "flat");
        assert_eq!(json["written"].as_array().unwrap().len(), 5);
        assert_eq!(json["written"][0]["density"], "mdpi");
        assert_eq!(json["written"][0]["role"], "launcher");
        assert_eq!(json["written"][0]["size"], 48);
        assert!(json["failures"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_layers_of() {
        assert_eq!(layers_of(IconKind::Flat).len(), 1);
        assert_eq!(layers_of(IconKind::Adaptive).len(), 2);
    }
}
