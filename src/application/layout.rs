//! Layout Use Case
//!
//! Idempotent create-if-missing of the project directory tree.

use std::path::PathBuf;

use crate::domain::ports::{FileSystem, FsResult};

use super::project::Project;

/// Content of `include/auto/.gitignore`.
pub const MANIFEST_GITIGNORE: &str = "*\n";

/// Directories making up a project layout, in creation order.
pub fn layout_dirs(project: &Project) -> Vec<PathBuf> {
    let paths = &project.paths;
    let mut dirs = vec![paths.src_dir().to_path_buf()];
    dirs.extend(
        project
            .categories()
            .iter()
            .map(|c| paths.src_dir().join(c.as_str())),
    );
    dirs.push(paths.include_dir().to_path_buf());
    dirs.push(paths.manifest_dir());
    dirs.push(paths.build_dir().to_path_buf());
    dirs.push(paths.obj_dir());
    dirs.extend(
        project
            .categories()
            .iter()
            .map(|c| paths.obj_dir().join(c.as_str())),
    );
    dirs.push(paths.tests_dir().to_path_buf());
    dirs
}

/// Create every missing layout directory; returns the ones created.
pub fn ensure_layout<F>(fs: &F, project: &Project) -> FsResult<Vec<PathBuf>>
where
    F: FileSystem + ?Sized,
{
    let mut created = Vec::new();
    for dir in layout_dirs(project) {
        if !fs.is_dir(&dir) {
            fs.create_dir_all(&dir)?;
            created.push(dir);
        }
    }
    Ok(created)
}

/// Result of `setup-layout`
#[derive(Debug, Clone, Default)]
pub struct LayoutResult {
    pub created: Vec<PathBuf>,
    /// `include/auto/.gitignore`, when it was written by this run
    pub gitignore: Option<PathBuf>,
}

pub struct LayoutUseCase<FS: FileSystem> {
    fs: FS,
}

impl<FS: FileSystem> LayoutUseCase<FS> {
    pub fn new(fs: FS) -> Self {
        Self { fs }
    }

    /// Create the layout plus the manifest `.gitignore`.
    pub fn execute(&self, project: &Project) -> FsResult<LayoutResult> {
        let created = ensure_layout(&self.fs, project)?;

        let gitignore = project.paths.manifest_dir().join(".gitignore");
        let gitignore = if self.fs.exists(&gitignore) {
            None
        } else {
            self.fs.write(&gitignore, MANIFEST_GITIGNORE.as_bytes())?;
            Some(gitignore)
        };

        Ok(LayoutResult { created, gitignore })
    }
}
