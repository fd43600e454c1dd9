//! build, debug-build, rebuild and generate-headers

use anyhow::Result;

use asmforge::application::{
    BuildOptions, BuildUseCase, BuildVariant, CleanOptions, CleanUseCase, GenerateHeadersUseCase,
};
use asmforge::error::ForgeError;
use asmforge::infrastructure::LocalFs;

use crate::ui::json::emit;
use crate::ui::views::build::{build_json, render_build_header, render_build_summary};
use crate::ui::views::headers::{headers_json, render_headers_result};

use super::Session;

pub fn cmd_build(session: &Session, debug: bool) -> Result<()> {
    let (command, title) = if debug {
        ("debug-build", "debug build")
    } else {
        ("build", "build")
    };
    run_build(session, command, title, debug)
}

/// Clean without removing directories, then a release build.
pub fn cmd_rebuild(session: &Session) -> Result<()> {
    let cleaned = CleanUseCase::new(LocalFs::new())
        .execute(&session.project, &CleanOptions::new())
        .map_err(ForgeError::from)?;
    tracing::info!(removed = cleaned.total_count(), "cleaned before rebuild");
    run_build(session, "rebuild", "rebuild", false)
}

fn run_build(session: &Session, command: &str, title: &str, debug: bool) -> Result<()> {
    let ui = &session.ui;
    let project = &session.project;
    let variant = if debug {
        BuildVariant::Debug
    } else {
        BuildVariant::Release
    };
    let options = BuildOptions::new(project.mode()).with_variant(variant);

    session.print(&render_build_header(
        title, project, &options, ui.color, ui.unicode,
    ));

    let use_case = BuildUseCase::new(LocalFs::new(), session.runner());
    let report = use_case.execute_with_events(project, &options, session.sink())?;

    if ui.json {
        emit(build_json(command, &report))?;
    } else {
        print!(
            "{}",
            render_build_summary(&report, project, ui.color, ui.unicode)
        );
    }
    Ok(())
}

pub fn cmd_generate_headers(session: &Session) -> Result<()> {
    let ui = &session.ui;
    let use_case = GenerateHeadersUseCase::new(LocalFs::new());
    let result = use_case.execute_with_events(&session.project, session.sink())?;

    if ui.json {
        emit(headers_json(&result))?;
    } else {
        print!(
            "{}",
            render_headers_result(&result, &session.project, ui.color, ui.unicode)
        );
    }
    Ok(())
}
