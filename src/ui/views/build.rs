use asmforge::application::{BuildOptions, BuildReport, BuildVariant, Project};

use crate::ui::blocks::header::CommandHeader;
use crate::ui::blocks::summary::ResultSummary;
use crate::ui::primitives::icon::Icon;
use crate::ui::views::display_rel;

pub fn render_build_header(
    title: &str,
    project: &Project,
    options: &BuildOptions,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut header = CommandHeader::new(Icon::Build, format!("asmforge {title}"));
    header.add("Project", project.paths.root().display().to_string());
    header.add("Mode", options.mode.to_string());
    if options.is_debug() {
        header.add("Variant", "debug");
    }
    header.render(supports_color, supports_unicode)
}

pub fn render_build_summary(
    report: &BuildReport,
    project: &Project,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let title = if report.has_changes() {
        "Build complete"
    } else {
        "Build up to date"
    };
    let mut summary = ResultSummary::success(title);
    let root = project.paths.root();
    summary.add_stat("Binary", display_rel(root, &report.binary));
    summary.add_stat("Mode", report.mode.to_string());
    summary.add_stat(
        "Sources",
        format!(
            "{} in {} categories",
            report.source_count, report.category_count
        ),
    );
    summary.add_stat("Assembled", report.compiled.len());
    if !report.up_to_date.is_empty() {
        summary.add_stat("Up to date", report.up_to_date.len());
    }
    summary.add_stat("Link set", report.link_set.len());
    if report.variant == BuildVariant::Release {
        summary.with_next_step("asmforge run-tests");
    }
    summary.render(supports_color, supports_unicode)
}

pub fn build_json(command: &str, report: &BuildReport) -> serde_json::Value {
    serde_json::json!({
        "event": "complete",
        "command": command,
        "success": true,
        "mode": report.mode.as_str(),
        "debug": report.variant == BuildVariant::Debug,
        "binary": report.binary.display().to_string(),
        "sources": report.source_count,
        "manifests": report.manifest_count,
        "compiled": report.compiled.len(),
        "up_to_date": report.up_to_date.len(),
        "linked": report.linked,
        "link_set": report
            .link_set
            .objects()
            .iter()
            .map(|p| p.display().to_string())
            .collect::<Vec<_>>(),
    })
}
