//! Dungeon generator
//!
//! Main entry point: prints one dungeon to stdout.

use std::io::{self, Write};

use anyhow::Result;
use clap::Parser;

use dm_cli::{Args, run};

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(args.log_level())
        .parse_default_env()
        .init();

    let output = run(&args)?;
    io::stdout().lock().write_all(output.as_bytes())?;
    Ok(())
}
