//! Configuration loading and layering

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::domain::value_objects::BuildMode;
use crate::error::{ForgeError, ForgeResult};

pub use crate::domain::value_objects::ConfigWarning;

use super::env_validator::{closest, parse_bool, EnvVarValidator, BOOL_VALUES};
use super::types::{ColorMode, Config};

/// Project config file name, looked up in the project root.
pub const PROJECT_CONFIG_FILE: &str = "asmforge.toml";

/// A loaded configuration plus where it came from.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: Config,
    pub warnings: Vec<ConfigWarning>,
    /// `None` when built-in defaults were used
    pub file: Option<PathBuf>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> ForgeResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path).map_err(|e| ForgeError::io(path, e))?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| ForgeError::Config {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Resolve the config file: explicit path, project file, user file, defaults.
///
/// An explicit path that does not exist is an error; the others are optional.
pub fn load_layered(
    project_root: &Path,
    explicit: Option<&Path>,
    user_config: Option<&Path>,
) -> ForgeResult<LoadedConfig> {
    if let Some(path) = explicit {
        let (config, warnings) = load_with_warnings(path)?;
        return Ok(LoadedConfig {
            config,
            warnings,
            file: Some(path.to_path_buf()),
        });
    }

    let project_config = project_root.join(PROJECT_CONFIG_FILE);
    let candidates = std::iter::once(project_config).chain(user_config.map(Path::to_path_buf));

    for candidate in candidates {
        if candidate.is_file() {
            let (config, warnings) = load_with_warnings(&candidate)?;
            return Ok(LoadedConfig {
                config,
                warnings,
                file: Some(candidate),
            });
        }
    }

    Ok(LoadedConfig {
        config: Config::default(),
        warnings: Vec::new(),
        file: None,
    })
}

/// `$XDG_CONFIG_HOME/asmforge/config.toml` (or the platform equivalent).
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("asmforge").join("config.toml"))
}

/// Apply environment overrides read through `get_env`.
///
/// Invalid values keep the configured value and print a warning to `warn`.
pub fn with_env_overrides<W: Write>(
    mut config: Config,
    get_env: impl Fn(&str) -> Option<String>,
    warn: &mut W,
) -> Config {
    if let Some(mode) = get_env("BUILD_MODE") {
        let current = config.build.mode;
        config.build.mode = EnvVarValidator::new("BUILD_MODE", &BuildMode::NAMES)
            .parse_with_writer(&mode, BuildMode::parse, current, warn);
    }

    if let Some(flag) = get_env("CONTINUE_ON_TEST_FAILURE") {
        let current = config.tests.continue_on_failure;
        config.tests.continue_on_failure =
            EnvVarValidator::new("CONTINUE_ON_TEST_FAILURE", BOOL_VALUES)
                .parse_with_writer(&flag, parse_bool, current, warn);
    }

    if let Some(color) = get_env("ASMFORGE_COLOR") {
        let current = config.output.color;
        config.output.color = EnvVarValidator::new("ASMFORGE_COLOR", &ColorMode::NAMES)
            .parse_with_writer(&color, ColorMode::parse, current, warn);
    }

    let tc = &mut config.toolchain;
    for (var, slot) in [
        ("AS", &mut tc.assembler),
        ("LD", &mut tc.linker),
        ("CC", &mut tc.cc),
        ("OBJDUMP", &mut tc.objdump),
        ("OBJCOPY", &mut tc.objcopy),
    ] {
        if let Some(value) = get_env(var).filter(|v| !v.trim().is_empty()) {
            *slot = value.trim().to_string();
        }
    }

    for (var, slot) in [
        ("ASFLAGS", &mut tc.asm_flags),
        ("DEBUG_ASFLAGS", &mut tc.debug_flags),
        ("LDFLAGS", &mut tc.ld_flags),
        ("LDFLAGS_SEPARATE", &mut tc.ld_flags_separate),
        ("CFLAGS", &mut tc.cflags),
    ] {
        if let Some(value) = get_env(var) {
            *slot = split_flags(&value);
        }
    }

    config
}

fn split_flags(value: &str) -> Vec<String> {
    value.split_whitespace().map(str::to_string).collect()
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "project",
        "name",
        "entry",
        "extension",
        "categories",
        "layout",
        "src",
        "include",
        "build",
        "tests",
        "mode",
        "toolchain",
        "assembler",
        "linker",
        "cc",
        "objdump",
        "objcopy",
        "asm_flags",
        "debug_flags",
        "ld_flags",
        "ld_flags_separate",
        "cflags",
        "continue_on_failure",
        "output",
        "color",
        "unicode",
    ];

    closest(unknown, CANDIDATES.iter().copied()).map(str::to_string)
}
