//! clean and full-clean

use anyhow::Result;
use dialoguer::Confirm;

use asmforge::application::{CleanOptions, CleanUseCase};
use asmforge::error::ForgeError;
use asmforge::infrastructure::LocalFs;

use crate::ui::json::emit;
use crate::ui::theme::ForgeTheme;
use crate::ui::views::clean::{clean_json, render_clean_result};
use crate::ui::views::display_rel;

use super::Session;

/// `confirmed` skips the full-clean prompt. Without a terminal there is
/// nobody to ask and the clean proceeds.
pub fn cmd_clean(session: &Session, full: bool, confirmed: bool) -> Result<()> {
    let ui = &session.ui;
    let project = &session.project;

    if full && !confirmed && ui.can_prompt() {
        let root = project.paths.root();
        let prompt = format!(
            "Remove {}/ and {}/ entirely?",
            display_rel(root, project.paths.build_dir()),
            display_rel(root, &project.paths.manifest_dir())
        );
        let proceed = Confirm::with_theme(&ForgeTheme::new(ui.color, ui.unicode))
            .with_prompt(prompt)
            .default(false)
            .interact()?;
        if !proceed {
            println!("Aborted.");
            return Ok(());
        }
    }

    let options = if full {
        CleanOptions::full()
    } else {
        CleanOptions::new()
    };
    let result = CleanUseCase::new(LocalFs::new())
        .execute(project, &options)
        .map_err(ForgeError::from)?;

    let command = if full { "full-clean" } else { "clean" };
    if ui.json {
        emit(clean_json(command, &result))?;
    } else {
        print!(
            "{}",
            render_clean_result(
                &result,
                project,
                full,
                ui.verbose > 0,
                ui.color,
                ui.unicode
            )
        );
    }
    Ok(())
}
