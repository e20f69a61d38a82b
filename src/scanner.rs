//! Package-name scanning over a dependency directory.
//!
//! This module provides the core algorithm:
//! - [`split_entries`] classifies raw directory entries into plain package
//!   names and scope names
//! - [`PackageScanner`] orchestrates the root listing, concurrent scope
//!   expansion and merging, generic over the [`DirectoryLister`] seam
//! - [`filter_by_prefix`] post-filters the merged names
//! - [`read_package_names`] is the public convenience entry point on the
//!   real filesystem
//!
//! Result order is unspecified (scoped packages land before plain ones,
//! scopes grouped arbitrarily); callers needing determinism must sort.

use std::path::Path;

use futures_util::future::try_join_all;
use tracing::{debug, instrument};

use crate::error::ScanError;
use crate::junk::not_junk;
use crate::lister::{DirectoryLister, TokioLister};
use crate::options::ScanOptions;

// ============================================================================
// Pure steps
// ============================================================================

/// Splits raw directory entries into plain package names and scope names,
/// dropping junk entries.
///
/// # Examples
///
/// ```
/// use package_roster::split_entries;
///
/// let entries = vec!["lodash".into(), "@babel".into(), ".DS_Store".into()];
/// let (packages, scopes) = split_entries(entries);
/// assert_eq!(packages, vec!["lodash"]);
/// assert_eq!(scopes, vec!["@babel"]);
/// ```
pub fn split_entries(entries: Vec<String>) -> (Vec<String>, Vec<String>) {
    let mut packages = Vec::new();
    let mut scopes = Vec::new();
    for entry in entries.into_iter().filter(|e| not_junk(e)) {
        if entry.starts_with('@') {
            scopes.push(entry);
        } else {
            packages.push(entry);
        }
    }
    (packages, scopes)
}

/// Keeps only the names whose basename (the part after the scope, or the
/// whole name when unscoped) starts with at least one of `prefixes`.
pub fn filter_by_prefix(names: Vec<String>, prefixes: &[String]) -> Vec<String> {
    names
        .into_iter()
        .filter(|name| {
            let base = basename(name);
            prefixes.iter().any(|prefix| base.starts_with(prefix.as_str()))
        })
        .collect()
}

/// `"@scope/rest"` → `"rest"`; unscoped names are their own basename.
fn basename(name: &str) -> &str {
    name.rsplit_once('/').map_or(name, |(_, base)| base)
}

// ============================================================================
// Scanner
// ============================================================================

/// Scans a dependency directory for installed package names.
///
/// Generic over the [`DirectoryLister`] collaborator so tests can run
/// against an in-memory directory tree. Production code normally goes
/// through [`read_package_names`] instead of constructing a scanner.
///
/// # Thread Safety
///
/// `PackageScanner` is `Send + Sync` whenever its lister is; it holds no
/// mutable state, so one instance can serve concurrent scans.
pub struct PackageScanner<L: DirectoryLister> {
    lister: L,
}

impl Default for PackageScanner<TokioLister> {
    fn default() -> Self {
        Self::new(TokioLister)
    }
}

impl<L: DirectoryLister> PackageScanner<L> {
    /// Creates a scanner over the given directory lister.
    pub fn new(lister: L) -> Self {
        Self { lister }
    }

    /// Reads package names under `cwd` according to `options`.
    ///
    /// With no scope restriction the root directory is listed, scope
    /// entries are discovered and expanded tolerantly (a discovered scope
    /// whose directory cannot be listed as one contributes nothing,
    /// whatever `options.silent` says). With a restriction only the
    /// requested scopes are read, honoring `options.silent`.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::NotFound`] / [`ScanError::NotADirectory`] for a
    /// missing root or, when not silent, a missing requested scope.
    /// [`ScanError::Io`] (permissions and the like) always propagates.
    #[instrument(skip_all, fields(cwd = %cwd.as_ref().display()))]
    pub async fn scan(
        &self,
        cwd: impl AsRef<Path>,
        options: &ScanOptions,
    ) -> Result<Vec<String>, ScanError> {
        let cwd = cwd.as_ref();

        let mut names = if options.restricts_scope() {
            self.expand_scopes(cwd, &options.normalized_scopes(), options.silent)
                .await?
        } else {
            self.scan_all(cwd).await?
        };

        if !options.prefix.is_empty() {
            names = filter_by_prefix(names, &options.prefix);
        }

        debug!(count = names.len(), "scan finished");
        Ok(names)
    }

    /// Lists the root, then expands every discovered scope.
    async fn scan_all(&self, cwd: &Path) -> Result<Vec<String>, ScanError> {
        let (packages, scopes) = split_entries(self.lister.list_entries(cwd).await?);
        // Discovery is always tolerant: a scope-looking entry that vanished
        // or turned out to be a file contributes zero packages.
        let mut names = self.expand_scopes(cwd, &scopes, true).await?;
        names.extend(packages);
        Ok(names)
    }

    /// Expands each scope concurrently and flattens the results.
    ///
    /// One listing task per scope; the reads touch disjoint subdirectories,
    /// so they run with no ordering guarantee among themselves. When not
    /// silent, the first failing scope fails the whole expansion.
    async fn expand_scopes(
        &self,
        root: &Path,
        scopes: &[String],
        silent: bool,
    ) -> Result<Vec<String>, ScanError> {
        let reads = scopes
            .iter()
            .map(|scope| self.expand_scope(root, scope, silent));
        let per_scope = try_join_all(reads).await?;
        Ok(per_scope.into_iter().flatten().collect())
    }

    /// Lists one scope directory and joins its entries with the scope name.
    async fn expand_scope(
        &self,
        root: &Path,
        scope: &str,
        silent: bool,
    ) -> Result<Vec<String>, ScanError> {
        let dir = root.join(scope);
        match self.lister.list_entries(&dir).await {
            Ok(entries) => Ok(entries
                .into_iter()
                .filter(|e| not_junk(e))
                .map(|name| format!("{scope}/{name}"))
                .collect()),
            Err(err) if silent && err.is_missing() => {
                debug!(scope, path = %dir.display(), "missing scope directory suppressed");
                Ok(Vec::new())
            }
            Err(err) => Err(err),
        }
    }
}

/// Reads all package names under `cwd`, scoped packages included.
///
/// Scoped names come back fully qualified (`"@scope/name"`). The return
/// order is unspecified; sort before comparing.
///
/// # Examples
///
/// ```ignore
/// use package_roster::{read_package_names, ScanOptions};
///
/// let all = read_package_names("node_modules", &ScanOptions::default()).await?;
/// // ["pg-structure", "@babel/runtime", ...]
///
/// let babel = read_package_names("node_modules", &ScanOptions::new().scope("babel")).await?;
/// // ["@babel/runtime", "@babel/template", ...]
/// ```
///
/// # Errors
///
/// Fails with the classified I/O error whenever the silent policy does not
/// suppress it; see [`PackageScanner::scan`].
pub async fn read_package_names(
    cwd: impl AsRef<Path>,
    options: &ScanOptions,
) -> Result<Vec<String>, ScanError> {
    PackageScanner::new(TokioLister).scan(cwd, options).await
}

// ============================================================================
// Tests
// ============================================================================
