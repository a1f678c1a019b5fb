//! Project manifest (iconsmith.yaml) parsing.
//!
//! The manifest only controls where and how icons are exported. Colours,
//! proportions and density tables are fixed per design.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{IconError, Result};
use crate::export::ExportMode;
use crate::types::{ShadowLayering, DEFAULT_OUTPUT_DIR};

/// Manifest file looked up in the working directory.
pub const MANIFEST_FILENAME: &str = "iconsmith.yaml";

/// Project manifest loaded from iconsmith.yaml.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Manifest {
    /// Resource directory that receives the `mipmap-*` folders.
    pub output: PathBuf,

    /// Native recomposition or master resampling.
    pub mode: ExportMode,

    /// Arrow shadow layering.
    pub shadow: ShadowLayering,
}

impl Default for Manifest {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_OUTPUT_DIR),
            mode: ExportMode::default(),
            shadow: ShadowLayering::default(),
        }
    }
}

impl Manifest {
    /// Load manifest from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| IconError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read manifest: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Load an explicit manifest, or `iconsmith.yaml` in `dir` if present,
    /// falling back to defaults.
    pub fn resolve(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let implicit = dir.join(MANIFEST_FILENAME);
        if implicit.is_file() {
            Self::load(&implicit)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse manifest from YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(content).map_err(|e| IconError::Parse {
            message: format!("Invalid manifest: {}", e),
            help: Some(format!("Check {} syntax", MANIFEST_FILENAME)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn test_parse_minimal_manifest() {
        let manifest = Manifest::parse("output: build/res").unwrap();

        assert_eq!(manifest.output, PathBuf::from("build/res"));
        assert_eq!(manifest.mode, ExportMode::Native);
        assert_eq!(manifest.shadow, ShadowLayering::Beneath);
    }

    #[test]
    fn test_parse_full_manifest() {
        let yaml = r#"
output: app/res
mode: resample
shadow: legacy
"#;
        let manifest = Manifest::parse(yaml).unwrap();

        assert_eq!(
            manifest,
            Manifest {
                output: PathBuf::from("app/res"),
                mode: ExportMode::Resample,
                shadow: ShadowLayering::Legacy,
            }
        );
    }

    #[test]
    fn test_parse_empty_manifest() {
        assert_eq!(Manifest::parse("").unwrap(), Manifest::default());
        assert_eq!(
            Manifest::default().output,
            PathBuf::from("android/app/src/main/res")
        );
    }

    #[test]
    fn test_parse_rejects_unknown_keys() {
        assert!(matches!(
            Manifest::parse("colour: red"),
            Err(IconError::Parse { .. })
        ));
    }

    #[test]
    fn test_parse_rejects_unknown_mode() {
        assert!(Manifest::parse("mode: vector").is_err());
    }

    #[test]
    fn test_resolve_implicit_file() {
        let dir = tempdir().unwrap();
        assert_eq!(
            Manifest::resolve(None, dir.path()).unwrap(),
            Manifest::default()
        );

        std::fs::write(dir.path().join(MANIFEST_FILENAME), "mode: resample\n").unwrap();
        let manifest = Manifest::resolve(None, dir.path()).unwrap();
        assert_eq!(manifest.mode, ExportMode::Resample);
    }

    #[test]
    fn test_resolve_missing_explicit_file() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("nope.yaml");
        assert!(matches!(
            Manifest::resolve(Some(&missing), dir.path()),
            Err(IconError::Io { .. })
        ));
    }
}
