//! Configuration module for asmforge
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (BUILD_MODE, AS, LDFLAGS, ...)
//! 3. `--config <FILE>`, else project config (`asmforge.toml`)
//! 4. User config (~/.config/asmforge/config.toml)
//! 5. Built-in defaults (lowest priority)

mod env_validator;
mod loader;
mod paths;
#[cfg(test)]
mod tests;
mod types;

pub use crate::domain::value_objects::ConfigWarning;

pub use env_validator::{closest, levenshtein, parse_bool, EnvVarValidator, BOOL_VALUES};
pub use loader::{
    load_layered, load_with_warnings, user_config_path, with_env_overrides, LoadedConfig,
    PROJECT_CONFIG_FILE,
};
pub use paths::{ProjectPaths, LOCK_FILE, MANIFEST_SUBDIR};
pub use types::{
    BuildConfig, ColorMode, Config, LayoutConfig, OutputConfig, ProjectConfig, TestsConfig,
    ToolchainConfig,
};
