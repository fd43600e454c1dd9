//! Naive mtime-based staleness check

use std::path::{Path, PathBuf};

use crate::domain::ports::FileSystem;

/// An output must be rebuilt when it is missing or any input is newer.
///
/// Inputs without a readable mtime count as newer; the tool invocation will
/// report the real problem.
pub fn needs_rebuild<F>(fs: &F, output: &Path, inputs: &[PathBuf]) -> bool
where
    F: FileSystem + ?Sized,
{
    let Some(built_at) = fs.modified(output) else {
        return true;
    };

    inputs.iter().any(|input| match fs.modified(input) {
        Some(changed_at) => changed_at > built_at,
        None => true,
    })
}
