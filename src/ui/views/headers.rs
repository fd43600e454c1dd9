use asmforge::application::{HeadersResult, Project};

use crate::ui::blocks::summary::ResultSummary;
use crate::ui::primitives::icon::Icon;
use crate::ui::views::display_rel;

pub fn render_headers_result(
    result: &HeadersResult,
    project: &Project,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut summary = ResultSummary::success("Aggregate headers generated");
    summary.add_stat("Mode", project.mode().to_string());
    summary.add_stat("Sources", result.discovery.total_sources());

    let root = project.paths.root();
    for manifest in &result.manifests {
        let icon = if manifest.fallback_count() > 0 {
            Icon::Warning
        } else {
            Icon::Success
        };
        summary.add_row(
            icon,
            format!(
                "{} ({} entries)",
                display_rel(root, manifest.target()),
                manifest.entries().len()
            ),
        );
    }
    summary.render(supports_color, supports_unicode)
}

pub fn headers_json(result: &HeadersResult) -> serde_json::Value {
    serde_json::json!({
        "event": "complete",
        "command": "generate-headers",
        "success": true,
        "sources": result.discovery.total_sources(),
        "fallbacks": result.fallback_count(),
        "manifests": result
            .manifests
            .iter()
            .map(|m| serde_json::json!({
                "path": m.target().display().to_string(),
                "entries": m.entries().len(),
            }))
            .collect::<Vec<_>>(),
    })
}
