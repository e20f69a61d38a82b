//! Filter for filesystem entries that are OS or tooling artifacts rather
//! than real packages.
//!
//! The membership list covers the usual macOS, Windows and Linux desktop
//! droppings plus a few editor/tooling leftovers. It is a policy list, not
//! an exhaustive one; anything not recognized here is treated as a real
//! entry.

/// Returns `true` if `name` is a known OS/editor artifact.
pub fn is_junk(name: &str) -> bool {
    // macOS
    if matches!(
        name,
        ".DS_Store" | ".AppleDouble" | ".LSOverride" | "Icon\r" | "__MACOSX"
    ) {
        return true;
    }
    // AppleDouble resource forks and Spotlight/Trash metadata
    if name.starts_with("._")
        || name.starts_with(".Spotlight-V100")
        || name.ends_with(".Trashes")
    {
        return true;
    }
    // Windows
    if matches!(name, "Thumbs.db" | "ehthumbs.db" | "Desktop.ini") || name.starts_with("$RECYCLE.BIN")
    {
        return true;
    }
    // Linux desktop
    if name == ".directory" {
        return true;
    }
    // Editor/tooling leftovers
    if name == "npm-debug.log"
        || name.ends_with('~')
        || (name.starts_with('.') && name.ends_with(".swp"))
    {
        return true;
    }
    false
}

/// Complement of [`is_junk`], convenient in filter chains.
pub fn not_junk(name: &str) -> bool {
    !is_junk(name)
}
