//! FileSystem port - abstraction over file I/O operations
//!
//! Lets domain services and use cases touch the disk without depending on a
//! concrete implementation (local disk, in-memory mock).

use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// Result type for file system operations
pub type FsResult<T> = Result<T, FsError>;

/// File system operation errors
#[derive(Debug)]
pub enum FsError {
    /// File or directory not found
    NotFound(PathBuf),
    /// Permission denied
    PermissionDenied(PathBuf),
    /// I/O error
    Io(PathBuf, std::io::Error),
}

impl FsError {
    /// Attach a path to an `io::Error`, classifying common kinds.
    pub fn from_io(path: &Path, err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => FsError::NotFound(path.to_path_buf()),
            std::io::ErrorKind::PermissionDenied => FsError::PermissionDenied(path.to_path_buf()),
            _ => FsError::Io(path.to_path_buf(), err),
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            FsError::NotFound(p) | FsError::PermissionDenied(p) | FsError::Io(p, _) => p,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, FsError::NotFound(_))
    }
}

impl std::fmt::Display for FsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FsError::NotFound(path) => write!(f, "File not found: {}", path.display()),
            FsError::PermissionDenied(path) => {
                write!(f, "Permission denied: {}", path.display())
            }
            FsError::Io(path, err) => write!(f, "I/O error at {}: {}", path.display(), err),
        }
    }
}

impl std::error::Error for FsError {}

impl From<FsError> for crate::error::ForgeError {
    fn from(err: FsError) -> Self {
        match err {
            FsError::Io(path, source) => crate::error::ForgeError::Io { path, source },
            FsError::NotFound(path) => crate::error::ForgeError::Io {
                path,
                source: std::io::Error::from(std::io::ErrorKind::NotFound),
            },
            FsError::PermissionDenied(path) => crate::error::ForgeError::Io {
                path,
                source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
            },
        }
    }
}

/// Abstract file system interface
///
/// Implementations:
/// - `LocalFs` - standard file I/O with atomic writes
/// - `MockFs` (tests) - in-memory
pub trait FileSystem {
    /// Read file content as bytes
    fn read(&self, path: &Path) -> FsResult<Vec<u8>>;

    /// Write content to file atomically, creating parent directories
    fn write(&self, path: &Path, content: &[u8]) -> FsResult<()>;

    /// Check if a file or directory exists
    fn exists(&self, path: &Path) -> bool;

    /// Check if a path is a directory
    fn is_dir(&self, path: &Path) -> bool;

    /// Regular files directly inside `dir` (no recursion), unordered
    fn list_files(&self, dir: &Path) -> FsResult<Vec<PathBuf>>;

    /// Every entry (files and directories) directly inside `dir`
    fn list_entries(&self, dir: &Path) -> FsResult<Vec<PathBuf>>;

    /// Last modification time, `None` when missing
    fn modified(&self, path: &Path) -> Option<SystemTime>;

    /// Remove a file
    fn remove_file(&self, path: &Path) -> FsResult<()>;

    /// Remove a directory and everything below it
    fn remove_dir_all(&self, path: &Path) -> FsResult<()>;

    /// Create directory and parents
    fn create_dir_all(&self, path: &Path) -> FsResult<()>;
}

impl<T: FileSystem + ?Sized> FileSystem for &T {
    fn read(&self, path: &Path) -> FsResult<Vec<u8>> {
        (**self).read(path)
    }

    fn write(&self, path: &Path, content: &[u8]) -> FsResult<()> {
        (**self).write(path, content)
    }

    fn exists(&self, path: &Path) -> bool {
        (**self).exists(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        (**self).is_dir(path)
    }

    fn list_files(&self, dir: &Path) -> FsResult<Vec<PathBuf>> {
        (**self).list_files(dir)
    }

    fn list_entries(&self, dir: &Path) -> FsResult<Vec<PathBuf>> {
        (**self).list_entries(dir)
    }

    fn modified(&self, path: &Path) -> Option<SystemTime> {
        (**self).modified(path)
    }

    fn remove_file(&self, path: &Path) -> FsResult<()> {
        (**self).remove_file(path)
    }

    fn remove_dir_all(&self, path: &Path) -> FsResult<()> {
        (**self).remove_dir_all(path)
    }

    fn create_dir_all(&self, path: &Path) -> FsResult<()> {
        (**self).create_dir_all(path)
    }
}
