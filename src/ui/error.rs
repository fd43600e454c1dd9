use asmforge::error::ForgeError;

use crate::ui::blocks::error::ErrorBlock;
use crate::ui::context::UiContext;

/// Exit code for an error surfaced from a command handler.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<ForgeError>()
        .map(ForgeError::exit_code)
        .unwrap_or(1)
}

pub fn render_error(err: &anyhow::Error, supports_color: bool, supports_unicode: bool) -> String {
    let Some(forge) = err.downcast_ref::<ForgeError>() else {
        return ErrorBlock::new(format!("{err:#}")).render(supports_color, supports_unicode);
    };

    let block = match forge {
        ForgeError::ToolInvocation {
            command, stderr, ..
        } => ErrorBlock::new(forge.to_string())
            .with_command(command)
            .with_stderr(stderr),
        ForgeError::ToolNotFound { tool } => ErrorBlock::new(forge.to_string()).with_hint(format!(
            "install {tool}, or point [toolchain] in asmforge.toml (or AS/LD/CC/OBJDUMP/OBJCOPY) at it"
        )),
        ForgeError::Config { .. } => {
            ErrorBlock::new(forge.to_string()).with_hint("run `asmforge show-config` with a fixed file")
        }
        ForgeError::BuildLocked { .. } => ErrorBlock::new(forge.to_string())
            .with_hint("wait for the other asmforge process to finish"),
        ForgeError::TestFailure { .. } => ErrorBlock::new(forge.to_string())
            .with_hint("pass --continue-on-failure to run every test"),
        other => ErrorBlock::new(format!("{err:#}")).with_hint(match other {
            ForgeError::Cancelled => "interrupted by Ctrl-C",
            _ => "rerun with -vv for tool command lines",
        }),
    };
    block.render(supports_color, supports_unicode)
}

pub fn print_error(err: &anyhow::Error, ui: &UiContext) {
    if ui.json {
        let output = serde_json::json!({
            "event": "error",
            "message": format!("{err:#}"),
            "exit_code": exit_code(err),
        });
        let _ = crate::ui::json::emit(output);
        return;
    }
    eprint!("{}", render_error(err, ui.color, ui.unicode));
}
