use asmforge::application::{LayoutResult, Project};

use crate::ui::blocks::summary::ResultSummary;
use crate::ui::primitives::icon::Icon;
use crate::ui::views::display_rel;

pub fn render_layout_result(
    result: &LayoutResult,
    project: &Project,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let root = project.paths.root();
    let mut summary = if result.created.is_empty() && result.gitignore.is_none() {
        ResultSummary::success("Layout already in place")
    } else {
        ResultSummary::success("Layout ready")
    };
    for dir in &result.created {
        summary.add_row(Icon::Layout, format!("{}/", display_rel(root, dir)));
    }
    if let Some(gitignore) = &result.gitignore {
        summary.add_row(Icon::Success, display_rel(root, gitignore));
    }
    summary.with_next_step("asmforge build");
    summary.render(supports_color, supports_unicode)
}

pub fn layout_json(result: &LayoutResult) -> serde_json::Value {
    serde_json::json!({
        "event": "complete",
        "command": "setup-layout",
        "success": true,
        "created": result.created.iter().map(|p| p.display().to_string()).collect::<Vec<_>>(),
        "gitignore": result.gitignore.as_ref().map(|p| p.display().to_string()),
    })
}
