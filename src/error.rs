//! Error taxonomy for directory scans.
//!
//! All raw `std::io::Error` values coming out of directory reads are
//! classified into [`ScanError`] exactly once, at the read site, so the
//! silent-mode policy can be decided by a single predicate
//! ([`ScanError::is_missing`]) instead of string-matching error codes at
//! every call site.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while scanning a dependency directory.
#[derive(Error, Debug)]
pub enum ScanError {
    /// The directory does not exist.
    #[error("directory not found: '{path}'")]
    NotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The path exists but is not a directory.
    #[error("not a directory: '{path}'")]
    NotADirectory {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Any other I/O failure (permissions, hardware, ...). Never suppressed.
    #[error("failed to read directory '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ScanError {
    /// Classifies a raw I/O error raised while reading `path`.
    pub fn from_io(path: &Path, source: io::Error) -> Self {
        let path = path.to_path_buf();
        match source.kind() {
            io::ErrorKind::NotFound => Self::NotFound { path, source },
            io::ErrorKind::NotADirectory => Self::NotADirectory { path, source },
            _ => Self::Io { path, source },
        }
    }

    /// Returns `true` for the "missing directory" errors that silent mode
    /// converts into empty results. Everything else always propagates.
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::NotFound { .. } | Self::NotADirectory { .. })
    }

    /// The path the failed read was attempted on.
    pub fn path(&self) -> &Path {
        match self {
            Self::NotFound { path, .. }
            | Self::NotADirectory { path, .. }
            | Self::Io { path, .. } => path,
        }
    }
}
