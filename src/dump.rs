//! dump - copy whole files to an output sink
//!
//! Each path is opened, read to the end and written out as one contiguous
//! `write_all`. The file handle lives only inside [`Dumper::dump_path`], so it
//! is closed before the next path is opened, whichever way that call returns.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use tracing::{debug, info};

use crate::error::DumpError;

/// Tally of one run over a list of paths.
#[derive(Debug, Default)]
pub struct Summary {
    /// Files written in full
    pub files: usize,
    /// Bytes written across all files
    pub bytes: u64,
    /// Per-file errors, in argument order
    pub failures: Vec<DumpError>,
}

impl Summary {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Writes the contents of files, in order, to `W`.
pub struct Dumper<W: Write> {
    out: W,
    summary: Summary,
}

impl<W: Write> Dumper<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            summary: Summary::default(),
        }
    }

    /// Dump a single file, returning the number of bytes written.
    pub fn dump_path(&mut self, path: &Path) -> Result<u64, DumpError> {
        let contents = {
            let mut file = File::open(path).map_err(|e| DumpError::from_read(path, e))?;
            let mut contents = Vec::new();
            file.read_to_end(&mut contents)
                .map_err(|e| DumpError::from_read(path, e))?;
            contents
        };

        self.out
            .write_all(&contents)
            .map_err(|source| DumpError::Write { source })?;

        let len = contents.len() as u64;
        debug!(path = %path.display(), bytes = len, "dumped file");
        Ok(len)
    }

    /// Dump every path in order.
    ///
    /// Per-file errors are recorded in the summary and skipped. A write
    /// error stops the run, since every later file would hit the same sink.
    pub fn dump_all<I, P>(&mut self, paths: I) -> Result<&Summary, DumpError>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        self.dump_all_with(paths, |_| {})
    }

    /// Like [`Dumper::dump_all`], calling `report` for each skipped file as
    /// soon as it fails.
    pub fn dump_all_with<I, P, F>(
        &mut self,
        paths: I,
        mut report: F,
    ) -> Result<&Summary, DumpError>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
        F: FnMut(&DumpError),
    {
        for path in paths {
            let path = path.as_ref();
            match self.dump_path(path) {
                Ok(len) => {
                    self.summary.files += 1;
                    self.summary.bytes += len;
                }
                Err(e) if e.is_fatal() => return Err(e),
                Err(e) => {
                    info!(path = %path.display(), error = %e, "skipping file");
                    report(&e);
                    self.summary.failures.push(e);
                }
            }
        }

        self.out
            .flush()
            .map_err(|source| DumpError::Write { source })?;
        Ok(&self.summary)
    }

    pub fn summary(&self) -> &Summary {
        &self.summary
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub(crate) fn into_parts(self) -> (W, Summary) {
        (self.out, self.summary)
    }
}
