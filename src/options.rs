//! Scan configuration.

use serde::{Deserialize, Serialize};

/// Options for a single [`read_package_names`](crate::read_package_names)
/// call.
///
/// All fields have lenient defaults: no scope restriction, no prefix
/// filter, silent mode on. Builder methods accept either a single value or
/// a collection; both shapes are normalized into the canonical `Vec`
/// immediately, so the scanner only ever sees sequences.
///
/// # Examples
///
/// ```
/// use package_roster::ScanOptions;
///
/// let opts = ScanOptions::default().scope("babel").prefix(["plugin-", "preset-"]);
/// assert_eq!(opts.normalized_scopes(), vec!["@babel"]);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanOptions {
    /// Scope tokens restricting the scan; empty means "scan everything,
    /// discovering all scopes present". Tokens may or may not carry the
    /// leading `@`.
    pub scope: Vec<String>,

    /// Literal prefixes; a package is kept only if the non-scope portion
    /// of its name starts with at least one of them. Empty means no
    /// filtering.
    pub prefix: Vec<String>,

    /// When `true` (the default), a requested scope whose directory is
    /// absent or not a directory yields zero results instead of an error.
    #[serde(default = "default_silent")]
    pub silent: bool,
}

fn default_silent() -> bool {
    true
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl ScanOptions {
    /// Creates options with defaults (no restriction, no filter, silent).
    pub fn new() -> Self {
        Self {
            scope: Vec::new(),
            prefix: Vec::new(),
            silent: true,
        }
    }

    /// Adds a single scope token (with or without the leading `@`).
    pub fn scope(mut self, scope: impl Into<String>) -> Self {
        self.scope.push(scope.into());
        self
    }

    /// Adds several scope tokens.
    pub fn scopes<I, S>(mut self, scopes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.scope.extend(scopes.into_iter().map(Into::into));
        self
    }

    /// Adds a single prefix, or several when given a collection.
    pub fn prefix<I>(mut self, prefix: I) -> Self
    where
        I: IntoPrefixes,
    {
        prefix.append_to(&mut self.prefix);
        self
    }

    /// Sets silent mode. Silent mode only covers "directory not found" and
    /// "not a directory"; other I/O errors propagate regardless.
    pub fn silent(mut self, silent: bool) -> Self {
        self.silent = silent;
        self
    }

    /// `true` when the caller restricted the scan to specific scopes.
    pub fn restricts_scope(&self) -> bool {
        !self.scope.is_empty()
    }

    /// Scope tokens with the leading `@` guaranteed, deduplicated in
    /// first-seen order.
    pub fn normalized_scopes(&self) -> Vec<String> {
        let mut seen = Vec::with_capacity(self.scope.len());
        for token in &self.scope {
            let scope = if token.starts_with('@') {
                token.clone()
            } else {
                format!("@{token}")
            };
            if !seen.contains(&scope) {
                seen.push(scope);
            }
        }
        seen
    }
}

/// A prefix argument: a single string or a collection of them.
pub trait IntoPrefixes {
    fn append_to(self, prefixes: &mut Vec<String>);
}

impl IntoPrefixes for &str {
    fn append_to(self, prefixes: &mut Vec<String>) {
        prefixes.push(self.to_string());
    }
}

impl IntoPrefixes for String {
    fn append_to(self, prefixes: &mut Vec<String>) {
        prefixes.push(self);
    }
}

impl<S: Into<String>, const N: usize> IntoPrefixes for [S; N] {
    fn append_to(self, prefixes: &mut Vec<String>) {
        prefixes.extend(self.into_iter().map(Into::into));
    }
}

impl<S: Into<String>> IntoPrefixes for Vec<S> {
    fn append_to(self, prefixes: &mut Vec<String>) {
        prefixes.extend(self.into_iter().map(Into::into));
    }
}
