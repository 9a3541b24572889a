//! CLI entry point for the painterly rendering tool

use clap::Parser;
use impasto::io::cli::{Cli, FileProcessor};

fn main() -> impasto::Result<()> {
    let cli = Cli::parse();
    let mut processor = FileProcessor::new(cli);
    processor.process()
}
