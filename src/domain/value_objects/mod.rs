//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod build_mode;
mod category;
mod config_warning;
mod source_file;

pub use build_mode::BuildMode;
pub use category::{InvalidCategory, ModuleCategory, DEFAULT_CATEGORIES};
pub use config_warning::ConfigWarning;
pub use source_file::SourceFile;
