//! Clean Use Case
//!
//! Orchestrates artifact removal.

use std::path::{Path, PathBuf};

use crate::application::project::Project;
use crate::domain::ports::{FileSystem, FsResult};

use super::options::CleanOptions;
use super::result::CleanResult;

/// Extension of generated manifests inside `include/auto`.
const MANIFEST_EXTENSION: &str = "inc";

/// Clean use case - removes build output and generated manifests
pub struct CleanUseCase<FS>
where
    FS: FileSystem,
{
    fs: FS,
}

impl<FS> CleanUseCase<FS>
where
    FS: FileSystem,
{
    /// Create a new clean use case
    pub fn new(fs: FS) -> Self {
        Self { fs }
    }

    pub fn execute(&self, project: &Project, options: &CleanOptions) -> FsResult<CleanResult> {
        let paths = &project.paths;
        let mut result = CleanResult::new();

        self.empty_build_dir(paths.build_dir(), &mut result)?;
        self.remove_manifests(&paths.manifest_dir(), &mut result)?;
        self.remove_test_binaries(paths.tests_dir(), &mut result)?;

        if options.full {
            for dir in [paths.build_dir().to_path_buf(), paths.manifest_dir()] {
                if self.fs.is_dir(&dir) {
                    self.fs.remove_dir_all(&dir)?;
                    result.directories.push(dir);
                }
            }
        }

        tracing::debug!(
            removed = result.removed.len(),
            directories = result.directories.len(),
            "clean finished"
        );
        Ok(result)
    }

    fn empty_build_dir(&self, build_dir: &Path, result: &mut CleanResult) -> FsResult<()> {
        if !self.fs.is_dir(build_dir) {
            return Ok(());
        }
        for entry in self.fs.list_entries(build_dir)? {
            if self.fs.is_dir(&entry) {
                self.fs.remove_dir_all(&entry)?;
            } else {
                self.fs.remove_file(&entry)?;
            }
            result.removed.push(entry);
        }
        Ok(())
    }

    fn remove_manifests(&self, manifest_dir: &Path, result: &mut CleanResult) -> FsResult<()> {
        if !self.fs.is_dir(manifest_dir) {
            return Ok(());
        }
        for file in self.fs.list_files(manifest_dir)? {
            if file.extension().is_some_and(|e| e == MANIFEST_EXTENSION) {
                self.fs.remove_file(&file)?;
                result.removed.push(file);
                result.manifests += 1;
            }
        }
        Ok(())
    }

    /// `tests/<group>/t.c` compiles to `tests/<group>/t`. Files directly in
    /// the tests root are never compiled, so their siblings are left alone.
    fn remove_test_binaries(&self, tests_dir: &Path, result: &mut CleanResult) -> FsResult<()> {
        if !self.fs.is_dir(tests_dir) {
            return Ok(());
        }
        let mut pending = vec![tests_dir.to_path_buf()];
        while let Some(dir) = pending.pop() {
            let grouped = dir.as_path() != tests_dir;
            for entry in self.fs.list_entries(&dir)? {
                if self.fs.is_dir(&entry) {
                    pending.push(entry);
                } else if grouped && entry.extension().is_some_and(|e| e == "c") {
                    let binary: PathBuf = entry.with_extension("");
                    if self.fs.exists(&binary) && !self.fs.is_dir(&binary) {
                        self.fs.remove_file(&binary)?;
                        result.removed.push(binary);
                        result.test_binaries += 1;
                    }
                }
            }
        }
        Ok(())
    }
}
