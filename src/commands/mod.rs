//! Command handlers
//!
//! Each handler wires use cases to the local file system, the system tool
//! runner and the terminal UI.

mod analysis;
mod build;
mod clean;
mod inspect;
pub(crate) mod project_root;

use std::sync::Arc;

use anyhow::Result;

use asmforge::application::Project;
use asmforge::config::LoadedConfig;
use asmforge::domain::ports::BuildEventSink;
use asmforge::infrastructure::{BuildLock, CancellationToken, JsonEventSink, SystemToolRunner};

use crate::cli::Commands;
use crate::ui::context::UiContext;
use crate::ui::sink::ConsoleEventSink;

/// Everything a handler needs for one invocation.
pub struct Session {
    pub project: Project,
    pub loaded: LoadedConfig,
    pub ui: UiContext,
    pub cancel: CancellationToken,
}

impl Session {
    pub fn runner(&self) -> SystemToolRunner {
        SystemToolRunner::new(self.cancel.clone())
    }

    pub fn sink(&self) -> Arc<dyn BuildEventSink> {
        if self.ui.json {
            Arc::new(JsonEventSink::stdout(self.ui.verbose > 0))
        } else {
            Arc::new(ConsoleEventSink::stdout(self.ui))
        }
    }

    /// Human output only; `--json` prints its own final object.
    pub fn print(&self, text: &str) {
        if !self.ui.json {
            print!("{}", text);
        }
    }
}

pub fn dispatch(command: &Commands, session: &Session) -> Result<()> {
    let _lock = if command.needs_lock() {
        Some(BuildLock::acquire(&session.project.paths.lock_path())?)
    } else {
        None
    };
    tracing::debug!(command = command.name(), root = %session.project.paths.root().display(), "dispatch");

    match command {
        Commands::Build => build::cmd_build(session, false),
        Commands::Rebuild => build::cmd_rebuild(session),
        Commands::GenerateHeaders => build::cmd_generate_headers(session),
        Commands::DebugBuild => build::cmd_build(session, true),
        Commands::RunTests { .. } => test::cmd_run_tests(session),
        Commands::Disassemble { debug } => analysis::cmd_disassemble(session, *debug),
        Commands::ExtractShellcode => analysis::cmd_extract_shellcode(session),
        Commands::AnalyzeBinary => analysis::cmd_analyze_binary(session),
        Commands::ListSources => inspect::cmd_list_sources(session),
        Commands::ShowConfig => inspect::cmd_show_config(session),
        Commands::SetupLayout => inspect::cmd_setup_layout(session),
        Commands::Clean => clean::cmd_clean(session, false, true),
        Commands::FullClean { yes } => clean::cmd_clean(session, true, *yes),
    }
}
