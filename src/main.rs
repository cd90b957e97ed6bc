//! CLI entry point for the wave function collapse tile map generator

use clap::Parser;
use collapsetile::io::cli::{Cli, GenerationRun};

fn main() -> collapsetile::Result<()> {
    let cli = Cli::parse();
    let mut run = GenerationRun::new(cli);
    run.execute()
}
