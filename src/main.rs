//! CLI entry point for the gradient-compatibility mosaic solver

use clap::Parser;
use jigsolve::io::cli::{Cli, SolveProcessor};

fn main() -> jigsolve::Result<()> {
    let cli = Cli::parse();
    let processor = SolveProcessor::new(cli);
    processor.process()
}
