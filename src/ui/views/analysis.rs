use asmforge::application::{BinaryAnalysis, Disassembly, Project, Shellcode};

use crate::ui::blocks::summary::ResultSummary;
use crate::ui::primitives::icon::Icon;
use crate::ui::views::display_rel;

/// Offsets listed before the rest are summarized.
const MAX_LISTED_OFFSETS: usize = 16;

pub fn render_disassembly_saved(
    listing: &Disassembly,
    project: &Project,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    format!(
        "{} Disassembly saved to {}\n",
        Icon::Success.colored(supports_color, supports_unicode),
        display_rel(project.paths.root(), &listing.output)
    )
}

pub fn render_shellcode(
    shellcode: &Shellcode,
    project: &Project,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let root = project.paths.root();
    let mut summary = ResultSummary::success("Shellcode extracted");
    summary.add_stat("Length", format!("{} bytes", shellcode.len()));
    summary.add_stat("Raw", display_rel(root, &shellcode.raw));
    summary.add_stat("Hex", display_rel(root, &shellcode.hex));
    summary.render(supports_color, supports_unicode)
}

pub fn shellcode_json(shellcode: &Shellcode) -> serde_json::Value {
    serde_json::json!({
        "event": "complete",
        "command": "extract-shellcode",
        "success": true,
        "length": shellcode.len(),
        "raw": shellcode.raw.display().to_string(),
        "hex": shellcode.hex.display().to_string(),
        "escaped": shellcode.escaped,
    })
}

/// `0x0001, 0x0002, ... (+n more)`
pub fn format_offsets(offsets: &[usize]) -> String {
    let mut listed: Vec<String> = offsets
        .iter()
        .take(MAX_LISTED_OFFSETS)
        .map(|o| format!("{:#06x}", o))
        .collect();
    if offsets.len() > MAX_LISTED_OFFSETS {
        listed.push(format!("(+{} more)", offsets.len() - MAX_LISTED_OFFSETS));
    }
    listed.join(", ")
}

pub fn render_analysis(
    analysis: &BinaryAnalysis,
    project: &Project,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let bytes = &analysis.bytes;
    let mut summary = if bytes.is_null_free() {
        ResultSummary::success("Binary analysis: clean")
    } else {
        ResultSummary::failure("Binary analysis: contains nulls")
    };
    summary.add_stat(
        "Binary",
        display_rel(project.paths.root(), &analysis.shellcode.binary),
    );
    summary.add_stat(".text size", format!("{} bytes", bytes.size));
    summary.add_stat("Null bytes", bytes.null_count());
    if !bytes.is_null_free() {
        summary.add_row(Icon::Warning, format_offsets(&bytes.null_offsets));
    }
    summary.render(supports_color, supports_unicode)
}

pub fn analysis_json(analysis: &BinaryAnalysis) -> serde_json::Value {
    serde_json::json!({
        "event": "complete",
        "command": "analyze-binary",
        "success": true,
        "binary": analysis.shellcode.binary.display().to_string(),
        "size": analysis.bytes.size,
        "null_count": analysis.bytes.null_count(),
        "null_offsets": analysis.bytes.null_offsets,
        "verdict": analysis.verdict(),
    })
}
