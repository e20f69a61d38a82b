//! Directory-listing collaborator.
//!
//! The scanner never touches the filesystem directly; it goes through the
//! [`DirectoryLister`] trait so tests can substitute an in-memory
//! implementation. [`TokioLister`] is the production implementation backed
//! by `tokio::fs`.

use std::path::Path;

use async_trait::async_trait;
use tracing::warn;

use crate::error::ScanError;

/// Lists the entry names of a single directory.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync`; the scanner fans out one listing
/// task per scope and awaits them concurrently.
#[async_trait]
pub trait DirectoryLister: Send + Sync {
    /// Returns the names of the direct entries of `path`, in no particular
    /// order.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::NotFound`] / [`ScanError::NotADirectory`] when
    /// `path` is absent or not a directory, and [`ScanError::Io`] for any
    /// other failure.
    async fn list_entries(&self, path: &Path) -> Result<Vec<String>, ScanError>;
}

/// `tokio::fs` backed [`DirectoryLister`].
///
/// Entry names that are not valid UTF-8 are skipped with a warning;
/// package names are UTF-8 by definition, so such entries cannot be
/// packages.
#[derive(Debug, Default, Clone, Copy)]
pub struct TokioLister;

#[async_trait]
impl DirectoryLister for TokioLister {
    async fn list_entries(&self, path: &Path) -> Result<Vec<String>, ScanError> {
        let mut dir = tokio::fs::read_dir(path)
            .await
            .map_err(|e| ScanError::from_io(path, e))?;

        let mut names = Vec::new();
        while let Some(entry) = dir
            .next_entry()
            .await
            .map_err(|e| ScanError::from_io(path, e))?
        {
            match entry.file_name().into_string() {
                Ok(name) => names.push(name),
                Err(raw) => {
                    warn!(path = %path.display(), name = ?raw, "skipping non-UTF-8 entry");
                }
            }
        }
        Ok(names)
    }
}
