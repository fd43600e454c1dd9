//! Build Use Case
//!
//! Orchestrates one build invocation:
//! - Layout and discovery
//! - Manifest generation for every category
//! - Entry-point and (in separate mode) per-file assembly
//! - Linking the plan's link set

mod options;
mod report;
mod use_case;

pub use options::{BuildOptions, BuildVariant};
pub use report::BuildReport;
pub use use_case::BuildUseCase;
