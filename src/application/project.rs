//! Project context shared by every use case

use std::path::PathBuf;

use crate::config::{Config, ProjectPaths};
use crate::domain::value_objects::{BuildMode, ModuleCategory};

/// Effective configuration plus the paths derived from it.
///
/// Built once per invocation, after file, environment and CLI layers have
/// been folded into `config`.
#[derive(Debug, Clone)]
pub struct Project {
    pub config: Config,
    pub paths: ProjectPaths,
}

impl Project {
    pub fn new(root: impl Into<PathBuf>, config: Config) -> Self {
        let paths = ProjectPaths::new(root, &config);
        Self { config, paths }
    }

    pub fn mode(&self) -> BuildMode {
        self.config.build.mode
    }

    pub fn categories(&self) -> &[ModuleCategory] {
        &self.config.project.categories
    }

    pub fn extension(&self) -> &str {
        &self.config.project.extension
    }
}
