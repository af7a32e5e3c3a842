//! CLI entry point for the level generation pipeline

use clap::Parser;
use mapweave::io::cli::{BatchProcessor, Cli};

fn main() -> mapweave::Result<()> {
    let cli = Cli::parse();
    let mut processor = BatchProcessor::new(cli);
    processor.process()
}
