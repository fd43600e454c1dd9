//! One status line per pipeline step.

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepState {
    Running,
    Done,
    Skipped,
    Failed,
}

impl StepState {
    fn icon(&self) -> Icon {
        match self {
            StepState::Running => Icon::Progress,
            StepState::Done => Icon::Success,
            StepState::Skipped => Icon::Skipped,
            StepState::Failed => Icon::Error,
        }
    }
}

/// `● Linking…` before a step, `✓ Linking (build/payload)` after it.
pub fn render_step(
    state: StepState,
    label: &str,
    detail: Option<&str>,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let icon = state.icon().colored(supports_color, supports_unicode);
    let ellipsis = if supports_unicode { "…" } else { "..." };
    match (state, detail) {
        (StepState::Running, _) => format!("{icon} {label}{ellipsis}"),
        (_, Some(detail)) if !detail.is_empty() => format!(
            "{icon} {label} {}",
            ColoredText::dim(format!("({detail})")).render(supports_color)
        ),
        _ => format!("{icon} {label}"),
    }
}

/// Indented detail line under a step (`↳ nasm -f elf64 ...`).
pub fn render_detail(text: &str, supports_color: bool, supports_unicode: bool) -> String {
    format!(
        "  {} {}",
        Icon::Arrow.colored(supports_color, supports_unicode),
        ColoredText::dim(text).render(supports_color)
    )
}
