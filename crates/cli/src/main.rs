//! Step Feature Extraction - Main Entry Point

use clap::Parser;
use cli::{init_logging, run, Args};
use tracing::info;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose)?;

    info!("=== Step Features v{} ===", env!("CARGO_PKG_VERSION"));
    run(&args)
}
