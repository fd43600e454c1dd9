//! Build-mode selection
//!
//! A pure branch on `BuildMode`: which sources are assembled on their own and
//! which objects reach the linker. The orchestrator consumes the resulting
//! `BuildPlan` without branching on the mode again.

use std::path::Path;

use crate::domain::entities::{BuildPlan, CompileAction, CompileStep, Discovery, LinkSet};
use crate::domain::value_objects::BuildMode;

/// Select the compile steps and link set for `mode`.
///
/// - `Include`: every source is skipped, the link set is just the entry object.
/// - `Separate`: every source is compiled to `<obj_root>/<category>/<stem>.o`
///   and appended to the link set after the entry object.
pub fn select(
    mode: BuildMode,
    discovery: &Discovery,
    entry_object: &Path,
    obj_root: &Path,
) -> BuildPlan {
    let action = if mode.compiles_per_file() {
        CompileAction::Compile
    } else {
        CompileAction::Skip
    };

    let steps: Vec<CompileStep> = discovery
        .all_sources()
        .map(|source| CompileStep {
            object: source.object_path(obj_root),
            source: source.clone(),
            action,
        })
        .collect();

    let mut link_set = LinkSet::new(entry_object);
    for step in steps.iter().filter(|s| s.action == CompileAction::Compile) {
        link_set.push(step.object.clone());
    }

    BuildPlan {
        mode,
        entry_object: entry_object.to_path_buf(),
        steps,
        link_set,
    }
}
