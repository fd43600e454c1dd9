//! Build Event Port
//!
//! Observable interface for pipeline steps. The CLI renders these as
//! colorized status lines or as JSON lines.

use std::path::PathBuf;

use crate::domain::entities::TestOutcome;

/// A named stage of the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildStep {
    Layout,
    Discover,
    GenerateHeaders,
    CompileEntry,
    CompileSources,
    Link,
    Clean,
    Disassemble,
    ExtractShellcode,
    Analyze,
    RunTests,
}

impl BuildStep {
    pub fn label(&self) -> &'static str {
        match self {
            BuildStep::Layout => "Preparing directory layout",
            BuildStep::Discover => "Discovering sources",
            BuildStep::GenerateHeaders => "Generating aggregate headers",
            BuildStep::CompileEntry => "Assembling entry point",
            BuildStep::CompileSources => "Assembling module sources",
            BuildStep::Link => "Linking",
            BuildStep::Clean => "Cleaning",
            BuildStep::Disassemble => "Disassembling",
            BuildStep::ExtractShellcode => "Extracting shellcode",
            BuildStep::Analyze => "Analyzing binary",
            BuildStep::RunTests => "Running tests",
        }
    }

    /// Stable identifier used in JSON output.
    pub fn id(&self) -> &'static str {
        match self {
            BuildStep::Layout => "layout",
            BuildStep::Discover => "discover",
            BuildStep::GenerateHeaders => "generate_headers",
            BuildStep::CompileEntry => "compile_entry",
            BuildStep::CompileSources => "compile_sources",
            BuildStep::Link => "link",
            BuildStep::Clean => "clean",
            BuildStep::Disassemble => "disassemble",
            BuildStep::ExtractShellcode => "extract_shellcode",
            BuildStep::Analyze => "analyze",
            BuildStep::RunTests => "run_tests",
        }
    }
}

/// Event emitted while a use case runs
#[derive(Debug, Clone)]
pub enum BuildEvent {
    StepStarted { step: BuildStep },
    StepFinished { step: BuildStep, detail: String },
    StepSkipped { step: BuildStep, reason: String },
    StepFailed { step: BuildStep, error: String },
    ToolInvoked { command: String },
    ManifestWritten {
        path: PathBuf,
        entries: usize,
        fallbacks: usize,
    },
    ObjectUpToDate { path: PathBuf },
    TestStarted { group: String, name: String },
    TestFinished { outcome: TestOutcome },
}

/// Receives build events
///
/// Implementations:
/// - `ConsoleEventSink` (binary): colorized status lines
/// - `JsonEventSink` (binary): one JSON object per line
/// - `NoopEventSink`: silent operation
pub trait BuildEventSink {
    fn on_event(&self, event: BuildEvent);

    /// Whether per-file events (tool invocations, up-to-date objects) are wanted
    fn wants_detailed_events(&self) -> bool {
        true
    }
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl BuildEventSink for NoopEventSink {
    fn on_event(&self, _event: BuildEvent) {}

    fn wants_detailed_events(&self) -> bool {
        false
    }
}
