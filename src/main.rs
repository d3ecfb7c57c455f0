//! sift - search files for a pattern and project the matches
//!
//! sift scans a file or directory tree for regex matches and renders them
//! one of three ways:
//! - inline highlighting (default)
//! - literal substitution or deletion
//! - aligned table extraction, with an optional delimiter mode

use anyhow::Result;
use clap::Parser;

mod cli;
mod core;
mod scan;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli::run(cli)
}
