//! Export command implementation.
//!
//! Renders one or more designs into the mipmap resource tree.

use std::fmt;
use std::path::PathBuf;

use clap::Args;

use crate::error::{IconError, Result};
use crate::export::{ExportMode, Exporter};
use crate::manifest::Manifest;
use crate::output::{display_path, plural, Printer};
use crate::types::{Design, IconKind, ShadowLayering};

/// Options shared by every export command
#[derive(Args, Debug, Clone, Default)]
pub struct ExportArgs {
    /// Resource directory receiving the mipmap-* folders
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Manifest to read instead of ./iconsmith.yaml
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Compose one master per layer and resize it to each bucket
    #[arg(long)]
    pub resample: bool,

    /// Paint the arrow shadow over the arrow, matching older assets
    #[arg(long)]
    pub legacy_shadow: bool,

    /// Print a JSON report to stdout
    #[arg(long)]
    pub json: bool,
}

/// Effective export settings after merging flags over the manifest.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub output: PathBuf,
    pub mode: ExportMode,
    pub shadow: ShadowLayering,
}

impl Settings {
    pub fn resolve(args: &ExportArgs, manifest: Manifest) -> Self {
        Self {
            output: args.output.clone().unwrap_or(manifest.output),
            mode: if args.resample {
                ExportMode::Resample
            } else {
                manifest.mode
            },
            shadow: if args.legacy_shadow {
                ShadowLayering::Legacy
            } else {
                manifest.shadow
            },
        }
    }
}

/// One design rendered as one icon kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Job {
    pub design: Design,
    pub kind: IconKind,
}

impl Job {
    pub const fn new(design: Design, kind: IconKind) -> Self {
        Self { design, kind }
    }

    /// Every design in both kinds.
    pub const ALL: [Job; 4] = [
        Job::new(Design::Marketplace, IconKind::Flat),
        Job::new(Design::Arrow, IconKind::Flat),
        Job::new(Design::Marketplace, IconKind::Adaptive),
        Job::new(Design::Arrow, IconKind::Adaptive),
    ];
}

impl fmt::Display for Job {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            IconKind::Flat => write!(f, "{} (flat)", self.design),
            IconKind::Adaptive => write!(f, "{} (adaptive)", self.design),
        }
    }
}

pub fn run(jobs: &[Job], args: ExportArgs, printer: &Printer) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let manifest = Manifest::resolve(args.config.as_deref(), &cwd)?;
    let settings = Settings::resolve(&args, manifest);

    let exporter = Exporter::new(&settings.output).with_mode(settings.mode);

    let mut written = 0;
    let mut failures = Vec::new();
    let mut reports = Vec::new();

    for job in jobs {
        printer.status("Rendering", &printer.bold(&job.to_string()));

        let spec = job.design.spec().with_shadow_layering(settings.shadow);
        let report = exporter.export(&spec, job.kind);

        for file in &report.written {
            let dims = format!("{0}x{0}", file.size);
            printer.info(
                "Wrote",
                &format!("{} {}", display_path(&file.path), printer.dim(&dims)),
            );
        }
        for failure in &report.failures {
            printer.error("Failed", &failure.to_string());
            failures.push(format!("{}: {}", job, failure));
        }

        written += report.written.len();
        if args.json {
            reports.push(report.to_json());
        }
    }

    if args.json {
        println!("{:#}", serde_json::Value::Array(reports));
    }

    if !failures.is_empty() {
        return Err(IconError::export_failures(failures));
    }

    printer.status(
        "Finished",
        &format!(
            "{} in {}",
            plural(written, "icon", "icons"),
            display_path(&settings.output)
        ),
    );

    Ok(())
}
