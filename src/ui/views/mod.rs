//! Per-command rendering.

pub mod analysis;
pub mod build;
pub mod clean;
pub mod config;
pub mod headers;
pub mod layout;
pub mod sources;

use std::path::Path;

/// `path` relative to the project root when it lies inside it.
pub fn display_rel(root: &Path, path: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .display()
        .to_string()
}
