//! badcat - concatenate and print files
//!
//! Usage: badcat FILE [FILE...]
//!
//! Prints each FILE to stdout in order. Files that can't be read are
//! reported on stderr and skipped; the exit status stays 0.

use std::io;

use anyhow::Result;
use badcat::Config;
use clap::Parser;
use tracing::Level;

fn main() -> Result<()> {
    let config = Config::parse();

    // Logs go to stderr so stdout carries file bytes only
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(Level::WARN)
        .with_target(false)
        .init();

    badcat::run(&config)?;
    Ok(())
}
