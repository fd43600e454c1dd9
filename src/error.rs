//! Error types for asmforge
//!
//! Library code returns `ForgeResult`; the binary wraps it in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for asmforge operations
pub type ForgeResult<T> = Result<T, ForgeError>;

/// Main error type for asmforge operations
#[derive(Error, Debug)]
pub enum ForgeError {
    /// Directory or file could not be created, read, written or removed
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// External tool ran but exited unsuccessfully
    #[error("{tool} failed ({status}): {command}")]
    ToolInvocation {
        tool: String,
        command: String,
        status: String,
        stderr: String,
    },

    /// External tool could not be spawned at all
    #[error("tool '{tool}' not found - is it installed and on PATH?")]
    ToolNotFound { tool: String },

    /// A source path cannot be expressed relative to the include root
    #[error("cannot express '{path}' relative to '{root}'")]
    PathResolution { path: PathBuf, root: PathBuf },

    /// One or more test binaries failed
    #[error("{failed} of {total} tests failed")]
    TestFailure { failed: usize, total: usize },

    /// Invalid configuration file
    #[error("invalid configuration in {file}: {message}")]
    Config { file: PathBuf, message: String },

    /// Another invocation holds the build lock
    #[error("another build is running (lock held on {path})")]
    BuildLocked { path: PathBuf },

    /// Interrupted by the user
    #[error("interrupted")]
    Cancelled,
}

impl ForgeError {
    /// Wrap an `io::Error` with the path it occurred on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ForgeError::Io {
            path: path.into(),
            source,
        }
    }

    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            ForgeError::Cancelled => 130,
            _ => 1,
        }
    }
}
