use asmforge::application::{CleanResult, Project};

use crate::ui::blocks::summary::ResultSummary;
use crate::ui::primitives::icon::Icon;
use crate::ui::views::display_rel;

pub fn render_clean_result(
    result: &CleanResult,
    project: &Project,
    full: bool,
    verbose: bool,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    if result.is_empty() {
        return ResultSummary::success("Nothing to clean").render(supports_color, supports_unicode);
    }

    let title = if full { "Full clean complete" } else { "Clean complete" };
    let mut summary = ResultSummary::success(title);
    let artifacts = result.removed.len() - result.manifests - result.test_binaries;
    summary.add_stat("Build artifacts", artifacts);
    summary.add_stat("Manifests", result.manifests);
    summary.add_stat("Test binaries", result.test_binaries);

    let root = project.paths.root();
    for dir in &result.directories {
        summary.add_row(Icon::Clean, format!("{}/", display_rel(root, dir)));
    }
    if verbose {
        for path in &result.removed {
            summary.add_row(Icon::Arrow, display_rel(root, path));
        }
    }
    summary.render(supports_color, supports_unicode)
}

pub fn clean_json(command: &str, result: &CleanResult) -> serde_json::Value {
    serde_json::json!({
        "event": "complete",
        "command": command,
        "success": true,
        "removed": result.removed.iter().map(|p| p.display().to_string()).collect::<Vec<_>>(),
        "manifests": result.manifests,
        "test_binaries": result.test_binaries,
        "directories": result
            .directories
            .iter()
            .map(|p| p.display().to_string())
            .collect::<Vec<_>>(),
    })
}
