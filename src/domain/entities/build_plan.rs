//! Build plan entity - compile decisions plus the link set

use std::path::{Path, PathBuf};

use crate::domain::value_objects::{BuildMode, SourceFile};

/// What to do with one discovered source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompileAction {
    /// Assemble the file into its own object
    Compile,
    /// Pulled in through the manifest while assembling the entry point
    Skip,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileStep {
    pub source: SourceFile,
    pub object: PathBuf,
    pub action: CompileAction,
}

/// Ordered object files handed to the linker.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkSet {
    objects: Vec<PathBuf>,
}

impl LinkSet {
    pub fn new(entry: impl Into<PathBuf>) -> Self {
        Self {
            objects: vec![entry.into()],
        }
    }

    pub fn push(&mut self, object: impl Into<PathBuf>) {
        self.objects.push(object.into());
    }

    /// The entry-point object, always first.
    pub fn entry(&self) -> Option<&Path> {
        self.objects.first().map(PathBuf::as_path)
    }

    pub fn objects(&self) -> &[PathBuf] {
        &self.objects
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn contains(&self, object: &Path) -> bool {
        self.objects.iter().any(|o| o == object)
    }
}

/// Result of build-mode selection for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildPlan {
    pub mode: BuildMode,
    pub entry_object: PathBuf,
    pub steps: Vec<CompileStep>,
    pub link_set: LinkSet,
}

impl BuildPlan {
    /// Steps the orchestrator must hand to the assembler.
    pub fn compile_steps(&self) -> impl Iterator<Item = &CompileStep> {
        self.steps
            .iter()
            .filter(|s| s.action == CompileAction::Compile)
    }

    pub fn skipped_count(&self) -> usize {
        self.steps
            .iter()
            .filter(|s| s.action == CompileAction::Skip)
            .count()
    }
}
