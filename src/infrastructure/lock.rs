//! Project build lock
//!
//! Two invocations against the same tree would race on `include/auto` and
//! `build/`, so mutating commands hold an exclusive advisory lock.

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use fs2::FileExt;

use crate::error::{ForgeError, ForgeResult};

/// Held for the lifetime of the value; released on drop.
#[derive(Debug)]
pub struct BuildLock {
    file: File,
    path: PathBuf,
}

impl BuildLock {
    /// Take the lock without waiting.
    ///
    /// Fails with `BuildLocked` when another process holds it.
    pub fn acquire(path: &Path) -> ForgeResult<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| ForgeError::io(parent, e))?;
            }
        }

        let file = File::create(path).map_err(|e| ForgeError::io(path, e))?;
        file.try_lock_exclusive()
            .map_err(|_| ForgeError::BuildLocked {
                path: path.to_path_buf(),
            })?;

        tracing::debug!(path = %path.display(), "acquired build lock");
        Ok(Self {
            file,
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for BuildLock {
    fn drop(&mut self) {
        let _ = self.file.unlock();
    }
}
