use clap::Parser;
use iconsmith::cli::build::{self, Job};
use iconsmith::cli::{Cli, Commands};
use iconsmith::output::Printer;
use iconsmith::types::{Design, IconKind};
use miette::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = if cli.no_color {
        Printer::plain()
    } else {
        Printer::new()
    };

    match cli.command {
        Commands::Marketplace(args) => build::run(
            &[Job::new(Design::Marketplace, IconKind::Flat)],
            args,
            &printer,
        )?,
        Commands::Arrow(args) => {
            build::run(&[Job::new(Design::Arrow, IconKind::Flat)], args, &printer)?
        }
        Commands::AdaptiveMarketplace(args) => build::run(
            &[Job::new(Design::Marketplace, IconKind::Adaptive)],
            args,
            &printer,
        )?,
        Commands::AdaptiveArrow(args) => build::run(
            &[Job::new(Design::Arrow, IconKind::Adaptive)],
            args,
            &printer,
        )?,
        Commands::All(args) => build::run(&Job::ALL, args, &printer)?,
        Commands::List(args) => iconsmith::cli::list::run(args, &printer)?,
        Commands::Completions(args) => iconsmith::cli::completions::run(args)?,
    }

    Ok(())
}
