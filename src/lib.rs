//! Async enumeration of installed package names in a dependency directory.
//!
//! Scoped packages (`@org/name`) are discovered and flattened into fully
//! qualified names; the scan can be restricted to specific scopes,
//! filtered by name prefix, and configured to tolerate missing scope
//! directories ([`ScanOptions`]).
//!
//! ```ignore
//! use package_roster::{read_package_names, ScanOptions};
//!
//! let names = read_package_names("node_modules", &ScanOptions::default()).await?;
//! ```

pub mod error;
pub mod junk;
pub mod lister;
pub mod options;
pub mod scanner;

// Re-export common types for convenience
pub use error::*;
pub use lister::*;
pub use options::*;
pub use scanner::*;
