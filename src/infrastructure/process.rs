//! External tool execution
//!
//! Implements the ToolRunner port with `std::process`, polling the child so
//! an interrupt can kill it instead of waiting for it to finish.

use std::io::Read;
use std::process::{Child, Command, Stdio};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use crate::domain::ports::{ToolCommand, ToolOutput, ToolRunner};
use crate::error::{ForgeError, ForgeResult};

const POLL_INTERVAL: Duration = Duration::from_millis(20);

/// Shared interrupt flag, set from the Ctrl+C handler.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a token that is cancelled on SIGINT.
    ///
    /// Only one handler can be installed per process.
    pub fn from_ctrlc() -> Result<Self, ctrlc::Error> {
        let token = Self::new();
        let flag = token.cancelled.clone();
        ctrlc::set_handler(move || {
            flag.store(true, Ordering::SeqCst);
        })?;
        Ok(token)
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    /// `Err(Cancelled)` once an interrupt arrived.
    pub fn check(&self) -> ForgeResult<()> {
        if self.is_cancelled() {
            Err(ForgeError::Cancelled)
        } else {
            Ok(())
        }
    }
}

/// Runs tools as child processes.
#[derive(Debug, Clone, Default)]
pub struct SystemToolRunner {
    cancel: CancellationToken,
}

impl SystemToolRunner {
    pub fn new(cancel: CancellationToken) -> Self {
        Self { cancel }
    }

    fn spawn(&self, command: &ToolCommand) -> ForgeResult<Child> {
        let mut cmd = Command::new(&command.program);
        cmd.args(&command.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        if let Some(dir) = &command.cwd {
            cmd.current_dir(dir);
        }

        cmd.spawn().map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => ForgeError::ToolNotFound {
                tool: command.program.clone(),
            },
            _ => ForgeError::io(&command.program, e),
        })
    }
}

fn drain<R: Read + Send + 'static>(pipe: Option<R>) -> thread::JoinHandle<Vec<u8>> {
    thread::spawn(move || {
        let mut buf = Vec::new();
        if let Some(mut pipe) = pipe {
            let _ = pipe.read_to_end(&mut buf);
        }
        buf
    })
}

impl ToolRunner for SystemToolRunner {
    fn run(&self, command: &ToolCommand) -> ForgeResult<ToolOutput> {
        self.cancel.check()?;
        tracing::debug!(command = %command, "running tool");

        let mut child = self.spawn(command)?;
        let stdout = drain(child.stdout.take());
        let stderr = drain(child.stderr.take());

        let status = loop {
            match child.try_wait() {
                Ok(Some(status)) => break status,
                Ok(None) => {
                    if self.cancel.is_cancelled() {
                        let _ = child.kill();
                        let _ = child.wait();
                        tracing::debug!(command = %command, "killed after interrupt");
                        return Err(ForgeError::Cancelled);
                    }
                    thread::sleep(POLL_INTERVAL);
                }
                Err(e) => return Err(ForgeError::io(&command.program, e)),
            }
        };

        let output = ToolOutput {
            code: status.code(),
            stdout: stdout.join().unwrap_or_default(),
            stderr: stderr.join().unwrap_or_default(),
        };
        tracing::debug!(status = %output.status_label(), "tool finished");
        Ok(output)
    }
}
