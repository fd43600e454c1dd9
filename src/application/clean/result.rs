//! Clean result types

use std::path::PathBuf;

/// Result of a clean operation
#[derive(Debug, Clone, Default)]
pub struct CleanResult {
    /// Files and directories removed (or that would be, in a dry run)
    pub removed: Vec<PathBuf>,
    /// Generated manifests among `removed`
    pub manifests: usize,
    /// Compiled test executables among `removed`
    pub test_binaries: usize,
    /// Directories removed by a full clean
    pub directories: Vec<PathBuf>,
}

impl CleanResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total_count(&self) -> usize {
        self.removed.len() + self.directories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total_count() == 0
    }
}
