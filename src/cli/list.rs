//! List command implementation.
//!
//! Prints the built-in designs and every file an export would write.

use std::path::PathBuf;

use clap::Args;

use crate::error::Result;
use crate::export::{layers_of, table_of};
use crate::manifest::Manifest;
use crate::output::{display_path, Printer};
use crate::types::{output_path, Design, IconKind};

/// List designs, density buckets and output paths
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Resource directory receiving the mipmap-* folders
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Manifest to read instead of ./iconsmith.yaml
    #[arg(long)]
    pub config: Option<PathBuf>,
}

pub fn run(args: ListArgs, printer: &Printer) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let manifest = Manifest::resolve(args.config.as_deref(), &cwd)?;
    let base = args.output.unwrap_or(manifest.output);

    let designs: Vec<String> = Design::ALL.iter().map(|d| d.to_string()).collect();
    printer.info("Designs", &designs.join(", "));

    for kind in [IconKind::Flat, IconKind::Adaptive] {
        let table = table_of(kind);
        let label = match kind {
            IconKind::Flat => "Flat",
            IconKind::Adaptive => "Adaptive",
        };

        for &(density, extent) in table.entries() {
            let size = table.target_size(extent)?;
            for &(_, role) in layers_of(kind) {
                let path = output_path(&base, density, role);
                let dims = format!("{0}x{0}", size);
                printer.info(
                    label,
                    &format!("{} {}", display_path(&path), printer.dim(&dims)),
                );
            }
        }
    }

    Ok(())
}
