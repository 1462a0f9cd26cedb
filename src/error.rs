use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors returned while dumping files.
///
/// Everything except [`DumpError::Write`] is scoped to a single path and is
/// recoverable: the dumper reports it and moves on to the next argument.
#[derive(Error, Debug)]
pub enum DumpError {
    #[error("{}: No such file or directory", path.display())]
    PathNotFound { path: PathBuf },

    #[error("{}: Permission denied", path.display())]
    PermissionDenied { path: PathBuf },

    #[error("{}: {source}", path.display())]
    Read {
        #[source]
        source: io::Error,
        path: PathBuf,
    },

    #[error("writing to output")]
    Write {
        #[source]
        source: io::Error,
    },
}

impl DumpError {
    /// Classify an error raised while opening or reading `path`.
    pub fn from_read(path: &Path, source: io::Error) -> Self {
        let path = path.to_path_buf();
        match source.kind() {
            io::ErrorKind::NotFound => DumpError::PathNotFound { path },
            io::ErrorKind::PermissionDenied => DumpError::PermissionDenied { path },
            _ => DumpError::Read { source, path },
        }
    }

    /// True when the output sink itself failed and no further path can be
    /// written.
    pub fn is_fatal(&self) -> bool {
        matches!(self, DumpError::Write { .. })
    }

    /// The path this error is about, if it is a per-file error.
    pub fn path(&self) -> Option<&Path> {
        match self {
            DumpError::PathNotFound { path }
            | DumpError::PermissionDenied { path }
            | DumpError::Read { path, .. } => Some(path),
            DumpError::Write { .. } => None,
        }
    }

    /// True when the downstream reader went away (e.g. `badcat f | head`).
    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, DumpError::Write { source } if source.kind() == io::ErrorKind::BrokenPipe)
    }
}
