//! list-sources, show-config and setup-layout

use anyhow::Result;

use asmforge::application::{list_sources, LayoutUseCase};
use asmforge::error::ForgeError;
use asmforge::infrastructure::LocalFs;

use crate::ui::json::emit;
use crate::ui::views::config::{config_json, render_config_toml};
use crate::ui::views::layout::{layout_json, render_layout_result};
use crate::ui::views::sources::{render_sources, sources_json};

use super::Session;

/// Read-only: neither the layout nor the manifests are touched.
pub fn cmd_list_sources(session: &Session) -> Result<()> {
    let ui = &session.ui;
    let listing = list_sources(&LocalFs::new(), &session.project)?;

    if ui.json {
        emit(sources_json(&listing))?;
    } else {
        print!(
            "{}",
            render_sources(&listing, &session.project, ui.color, ui.unicode)
        );
    }
    Ok(())
}

/// Shows the configuration after environment and flag overrides.
pub fn cmd_show_config(session: &Session) -> Result<()> {
    let ui = &session.ui;
    let config = &session.project.config;

    if ui.json {
        emit(config_json(&session.loaded, config))?;
    } else {
        print!("{}", render_config_toml(&session.loaded, config, ui.color)?);
    }
    Ok(())
}

pub fn cmd_setup_layout(session: &Session) -> Result<()> {
    let ui = &session.ui;
    let result = LayoutUseCase::new(LocalFs::new())
        .execute(&session.project)
        .map_err(ForgeError::from)?;

    if ui.json {
        emit(layout_json(&result))?;
    } else {
        print!(
            "{}",
            render_layout_result(&result, &session.project, ui.color, ui.unicode)
        );
    }
    Ok(())
}
