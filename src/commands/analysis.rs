//! disassemble, extract-shellcode and analyze-binary

use anyhow::Result;

use asmforge::application::AnalysisUseCase;
use asmforge::infrastructure::{LocalFs, SystemToolRunner};

use crate::ui::json::emit;
use crate::ui::views::analysis::{
    analysis_json, render_analysis, render_disassembly_saved, render_shellcode, shellcode_json,
};

use super::Session;

fn use_case(session: &Session) -> AnalysisUseCase<LocalFs, SystemToolRunner> {
    AnalysisUseCase::new(LocalFs::new(), session.runner())
}

/// The listing is echoed to stdout as well as saved.
pub fn cmd_disassemble(session: &Session, debug: bool) -> Result<()> {
    let ui = &session.ui;
    let listing = use_case(session).disassemble(&session.project, debug)?;

    if ui.json {
        emit(serde_json::json!({
            "event": "complete",
            "command": "disassemble",
            "success": true,
            "binary": listing.binary.display().to_string(),
            "output": listing.output.display().to_string(),
        }))?;
    } else {
        print!("{}", listing.text);
        eprint!(
            "{}",
            render_disassembly_saved(&listing, &session.project, ui.color, ui.unicode)
        );
    }
    Ok(())
}

pub fn cmd_extract_shellcode(session: &Session) -> Result<()> {
    let ui = &session.ui;
    let shellcode = use_case(session).extract_shellcode(&session.project)?;

    if ui.json {
        emit(shellcode_json(&shellcode))?;
    } else {
        print!(
            "{}",
            render_shellcode(&shellcode, &session.project, ui.color, ui.unicode)
        );
    }
    Ok(())
}

/// Nulls are reported, not treated as a failure.
pub fn cmd_analyze_binary(session: &Session) -> Result<()> {
    let ui = &session.ui;
    let analysis = use_case(session).analyze(&session.project)?;

    if ui.json {
        emit(analysis_json(&analysis))?;
    } else {
        print!(
            "{}",
            render_analysis(&analysis, &session.project, ui.color, ui.unicode)
        );
    }
    Ok(())
}
