//! JSON Event Sink
//!
//! Writes build events as NDJSON, one object per line.

use std::io::{self, Write};
use std::sync::Mutex;

use crate::domain::entities::TestStatus;
use crate::domain::ports::{BuildEvent, BuildEventSink};

pub struct JsonEventSink {
    writer: Mutex<Box<dyn Write + Send>>,
    detailed: bool,
}

impl JsonEventSink {
    /// Sink writing to stdout
    pub fn stdout(detailed: bool) -> Self {
        Self::with_writer(io::stdout(), detailed)
    }

    pub fn with_writer<W: Write + Send + 'static>(writer: W, detailed: bool) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
            detailed,
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

/// JSON form of a build event.
pub fn event_to_json(event: &BuildEvent) -> serde_json::Value {
    match event {
        BuildEvent::StepStarted { step } => serde_json::json!({
            "event": "step_started",
            "step": step.id(),
        }),
        BuildEvent::StepFinished { step, detail } => serde_json::json!({
            "event": "step_finished",
            "step": step.id(),
            "detail": detail,
        }),
        BuildEvent::StepSkipped { step, reason } => serde_json::json!({
            "event": "step_skipped",
            "step": step.id(),
            "reason": reason,
        }),
        BuildEvent::StepFailed { step, error } => serde_json::json!({
            "event": "step_failed",
            "step": step.id(),
            "error": error,
        }),
        BuildEvent::ToolInvoked { command } => serde_json::json!({
            "event": "tool_invoked",
            "command": command,
        }),
        BuildEvent::ManifestWritten {
            path,
            entries,
            fallbacks,
        } => serde_json::json!({
            "event": "manifest_written",
            "path": path.display().to_string(),
            "entries": entries,
            "fallbacks": fallbacks,
        }),
        BuildEvent::ObjectUpToDate { path } => serde_json::json!({
            "event": "object_up_to_date",
            "path": path.display().to_string(),
        }),
        BuildEvent::TestStarted { group, name } => serde_json::json!({
            "event": "test_started",
            "group": group,
            "name": name,
        }),
        BuildEvent::TestFinished { outcome } => {
            let (status, code) = match outcome.status {
                TestStatus::Passed => ("passed", None),
                TestStatus::Failed(code) => ("failed", code),
                TestStatus::CompileFailed => ("compile_failed", None),
            };
            serde_json::json!({
                "event": "test_finished",
                "group": outcome.group,
                "name": outcome.name,
                "status": status,
                "exit_code": code,
            })
        }
    }
}

impl BuildEventSink for JsonEventSink {
    fn on_event(&self, event: BuildEvent) {
        self.write_event(event_to_json(&event));
    }

    fn wants_detailed_events(&self) -> bool {
        self.detailed
    }
}
