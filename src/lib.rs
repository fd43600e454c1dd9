//! asmforge - build orchestrator for modular assembly source trees
//!
//! Sources live in `src/<category>/`. Each build regenerates one aggregate
//! header per category under `include/auto/`, then either assembles the
//! entry point alone with every module textually included (`include` mode)
//! or assembles each module to its own object and links them together
//! (`separate` mode).

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

#[cfg(test)]
pub(crate) mod test_support;

// Re-exports for convenience
pub use application::Project;
pub use config::Config;
pub use domain::value_objects::{BuildMode, ModuleCategory};
pub use error::{ForgeError, ForgeResult};
