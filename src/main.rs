//! CLI entry point for tile coverage estimation and pattern fill export

use clap::Parser;
use tileplan::io::cli::{Cli, run};

fn main() -> tileplan::Result<()> {
    let cli = Cli::parse();
    run(&cli)
}
