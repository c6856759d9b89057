use std::path::PathBuf;

use clap::Parser;
use miette::{Context, IntoDiagnostic};

/// Count the trees in each garden of an ASCII garden map.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// File containing the map of the garden complex to be parsed
    path: PathBuf,
}

#[tracing::instrument]
fn main() -> miette::Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let input = std::fs::read_to_string(&args.path)
        .into_diagnostic()
        .context(format!("failed to read map file {}", args.path.display()))?;

    let result = garden_tally::process(&input).context("process garden map")?;
    println!("{}", result);
    Ok(())
}
