pub mod build;
pub mod completions;
pub mod list;

use clap::{Parser, Subcommand};

/// iconsmith - Procedural launcher icon generator
#[derive(Parser, Debug)]
#[command(name = "iconsmith")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Disable coloured status output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render the flat shopping bag launcher icon
    Marketplace(build::ExportArgs),

    /// Render the flat gradient arrow launcher icon
    Arrow(build::ExportArgs),

    /// Render adaptive background and foreground layers for the shopping bag
    AdaptiveMarketplace(build::ExportArgs),

    /// Render adaptive background and foreground layers for the arrow
    AdaptiveArrow(build::ExportArgs),

    /// Render every design, flat and adaptive
    All(build::ExportArgs),

    /// List designs, density buckets and output paths
    List(list::ListArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}
