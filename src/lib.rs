//! badcat - print files to standard output
//!
//! The library half of the `badcat` binary: [`dump::Dumper`] does the work,
//! [`cli::Config`] is the parsed command line and [`run`] ties them to the
//! process's standard streams.

use std::io;

use anyhow::{Context, Result};
use tracing::{debug, info};

pub mod cli;
pub mod dump;
pub mod error;

pub use cli::Config;
pub use dump::{Dumper, Summary};
pub use error::DumpError;

/// Dump every path in `config` to standard output.
///
/// Unreadable paths are reported on standard error and skipped. A reader
/// closing the pipe ends the run early without an error; any other write
/// failure is returned.
pub fn run(config: &Config) -> Result<Summary> {
    let mut dumper = Dumper::new(io::stdout().lock());
    let outcome = dumper
        .dump_all_with(&config.paths, |e| eprintln!("badcat: {}", e))
        .map(|_| ());
    let (_, summary) = dumper.into_parts();

    match outcome {
        Ok(()) => {}
        Err(e) if e.is_broken_pipe() => debug!("output closed, stopping early"),
        Err(e) => return Err(e).context("Failed to write to stdout"),
    }

    info!(
        files = summary.files,
        bytes = summary.bytes,
        skipped = summary.failures.len(),
        "done"
    );
    Ok(summary)
}
