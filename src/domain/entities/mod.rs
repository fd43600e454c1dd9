//! Domain Entities
//!
//! - `Discovery` - Sources found per category
//! - `Manifest` - A generated aggregate header
//! - `BuildPlan` / `LinkSet` - Compile decisions and link inputs
//! - `TestReport` - Outcomes of a test run

mod build_plan;
mod discovery;
pub mod manifest;
mod test_report;

pub use build_plan::{BuildPlan, CompileAction, CompileStep, LinkSet};
pub use discovery::Discovery;
pub use manifest::{IncludeEntry, Manifest};
pub use test_report::{TestOutcome, TestReport, TestStatus};
