//! asmforge CLI - build orchestrator for modular assembly source trees
//!
//! Configuration is resolved once here (file, then environment, then flags)
//! and handed to the command handlers as a `Session`.

mod cli;
mod commands;
mod logging;
mod ui;

use anyhow::Result;
use clap::Parser;
use is_terminal::IsTerminal;

use asmforge::application::Project;
use asmforge::config::{load_layered, user_config_path, with_env_overrides, Config};
use asmforge::infrastructure::CancellationToken;

use cli::{Cli, Commands};
use commands::project_root::resolve_project_root;
use commands::Session;
use ui::context::UiContext;
use ui::error::{exit_code, print_error};
use ui::views::config::render_config_warning;

fn main() {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose, std::io::stderr().is_terminal());

    // Replaced by the session's context once the config is loaded.
    let mut fallback = Config::default();
    apply_cli_overrides(&mut fallback, &cli);
    let mut ui = UiContext::new(cli.json, cli.verbose, &fallback);

    if let Err(err) = run(&cli, &mut ui) {
        print_error(&err, &ui);
        std::process::exit(exit_code(&err));
    }
}

fn run(cli: &Cli, ui: &mut UiContext) -> Result<()> {
    let session = open_session(cli)?;
    *ui = session.ui;
    commands::dispatch(&cli.command, &session)
}

fn open_session(cli: &Cli) -> Result<Session> {
    let root = resolve_project_root(cli.project.as_deref())?;
    let user_config = user_config_path();
    let loaded = load_layered(&root, cli.config.as_deref(), user_config.as_deref())?;
    tracing::info!(
        root = %root.display(),
        file = ?loaded.file,
        "loaded configuration"
    );

    let mut config = with_env_overrides(
        loaded.config.clone(),
        |key| std::env::var(key).ok(),
        &mut std::io::stderr(),
    );
    apply_cli_overrides(&mut config, cli);

    let ui = UiContext::new(cli.json, cli.verbose, &config);
    for warning in &loaded.warnings {
        eprint!("{}", render_config_warning(warning, ui.color, ui.unicode));
    }

    let cancel = CancellationToken::from_ctrlc().unwrap_or_else(|err| {
        tracing::warn!(error = %err, "could not install Ctrl-C handler");
        CancellationToken::new()
    });

    Ok(Session {
        project: Project::new(root, config),
        loaded,
        ui,
        cancel,
    })
}

/// Flags beat environment and file values.
fn apply_cli_overrides(config: &mut Config, cli: &Cli) {
    if let Some(mode) = cli.mode {
        config.build.mode = mode;
    }
    if let Some(color) = cli.color {
        config.output.color = color;
    }
    if let Commands::RunTests {
        continue_on_failure: true,
    } = cli.command
    {
        config.tests.continue_on_failure = true;
    }
}
