//! ToolRunner port - invocation of external toolchain programs
//!
//! The assembler, linker, C compiler and binary-inspection tools are opaque
//! collaborators. Use cases describe what to run as a `ToolCommand`; the
//! infrastructure layer spawns it.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::{ForgeError, ForgeResult};

/// A fully described external program invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolCommand {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: Option<PathBuf>,
}

impl ToolCommand {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            cwd: None,
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn path_arg(self, path: &Path) -> Self {
        self.arg(path.display().to_string())
    }

    pub fn current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cwd = Some(dir.into());
        self
    }

    /// Short tool name for messages (`/usr/bin/nasm` -> `nasm`).
    pub fn tool_name(&self) -> String {
        Path::new(&self.program)
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.program.clone())
    }
}

impl fmt::Display for ToolCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            if arg.is_empty() || arg.contains(char::is_whitespace) {
                write!(f, " '{}'", arg)?;
            } else {
                write!(f, " {}", arg)?;
            }
        }
        Ok(())
    }
}

/// Captured result of a finished process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolOutput {
    /// Exit code, `None` when terminated by a signal
    pub code: Option<i32>,
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
}

impl ToolOutput {
    pub fn success() -> Self {
        Self {
            code: Some(0),
            ..Self::default()
        }
    }

    pub fn failure(code: i32, stderr: impl Into<String>) -> Self {
        Self {
            code: Some(code),
            stdout: Vec::new(),
            stderr: stderr.into().into_bytes(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.code == Some(0)
    }

    pub fn stdout_lossy(&self) -> String {
        String::from_utf8_lossy(&self.stdout).into_owned()
    }

    pub fn stderr_lossy(&self) -> String {
        String::from_utf8_lossy(&self.stderr).into_owned()
    }

    pub fn status_label(&self) -> String {
        match self.code {
            Some(code) => format!("exit code {}", code),
            None => "terminated by signal".to_string(),
        }
    }
}

/// Runs external programs.
///
/// `run` returns `Ok` for any process that started and finished, whatever
/// its exit code. It fails with `ToolNotFound` when the program cannot be
/// spawned and `Cancelled` when interrupted.
pub trait ToolRunner {
    fn run(&self, command: &ToolCommand) -> ForgeResult<ToolOutput>;

    /// Run and turn a non-zero exit into `ToolInvocation`.
    fn run_checked(&self, command: &ToolCommand) -> ForgeResult<ToolOutput> {
        let output = self.run(command)?;
        if output.is_success() {
            Ok(output)
        } else {
            Err(ForgeError::ToolInvocation {
                tool: command.tool_name(),
                command: command.to_string(),
                status: output.status_label(),
                stderr: output.stderr_lossy(),
            })
        }
    }
}

impl<T: ToolRunner + ?Sized> ToolRunner for &T {
    fn run(&self, command: &ToolCommand) -> ForgeResult<ToolOutput> {
        (**self).run(command)
    }
}
