//! CLI entry point for the gallery tile arrangement tool

use clap::Parser;
use tilemason::io::cli::{Cli, ManifestProcessor};

fn main() -> tilemason::Result<()> {
    let cli = Cli::parse();
    let mut processor = ManifestProcessor::new(cli);
    processor.process()
}
