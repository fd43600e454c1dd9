//! Build options

use crate::domain::value_objects::BuildMode;

/// Release or debug artifacts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BuildVariant {
    #[default]
    Release,
    /// Debug symbols, separate object directory, unstripped `<name>_debug`
    Debug,
}

/// Options for a build
#[derive(Debug, Clone, Default)]
pub struct BuildOptions {
    pub mode: BuildMode,
    pub variant: BuildVariant,
}

impl BuildOptions {
    pub fn new(mode: BuildMode) -> Self {
        Self {
            mode,
            variant: BuildVariant::Release,
        }
    }

    pub fn with_variant(mut self, variant: BuildVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn is_debug(&self) -> bool {
        self.variant == BuildVariant::Debug
    }
}
