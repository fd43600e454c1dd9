//! Discovery entity - sources found per category for one invocation

use crate::domain::value_objects::{ModuleCategory, SourceFile};

/// Discovered sources, grouped by category in configuration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Discovery {
    groups: Vec<(ModuleCategory, Vec<SourceFile>)>,
}

impl Discovery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a category with its (already ordered) sources.
    pub fn push(&mut self, category: ModuleCategory, sources: Vec<SourceFile>) {
        self.groups.push((category, sources));
    }

    pub fn categories(&self) -> impl Iterator<Item = &ModuleCategory> {
        self.groups.iter().map(|(c, _)| c)
    }

    pub fn sources_for(&self, category: &ModuleCategory) -> &[SourceFile] {
        self.groups
            .iter()
            .find(|(c, _)| c == category)
            .map(|(_, s)| s.as_slice())
            .unwrap_or(&[])
    }

    /// Category/sources pairs in configuration order.
    pub fn iter(&self) -> impl Iterator<Item = (&ModuleCategory, &[SourceFile])> {
        self.groups.iter().map(|(c, s)| (c, s.as_slice()))
    }

    /// Every source, category order then file order.
    pub fn all_sources(&self) -> impl Iterator<Item = &SourceFile> {
        self.groups.iter().flat_map(|(_, s)| s.iter())
    }

    pub fn total_sources(&self) -> usize {
        self.groups.iter().map(|(_, s)| s.len()).sum()
    }

    pub fn category_count(&self) -> usize {
        self.groups.len()
    }
}
