//! Build report

use std::path::PathBuf;

use crate::domain::entities::LinkSet;
use crate::domain::value_objects::BuildMode;

use super::options::BuildVariant;

/// Result of a successful build
#[derive(Debug, Clone)]
pub struct BuildReport {
    pub mode: BuildMode,
    pub variant: BuildVariant,
    pub binary: PathBuf,
    pub source_count: usize,
    pub category_count: usize,
    pub manifest_count: usize,
    /// Objects assembled by this run
    pub compiled: Vec<PathBuf>,
    /// Objects skipped because they were newer than their inputs
    pub up_to_date: Vec<PathBuf>,
    /// False when the binary was already newer than every object
    pub linked: bool,
    pub link_set: LinkSet,
}

impl BuildReport {
    pub fn has_changes(&self) -> bool {
        !self.compiled.is_empty() || self.linked
    }
}
