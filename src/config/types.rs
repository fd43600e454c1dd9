//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{BuildMode, ModuleCategory};
use crate::error::ForgeResult;

use super::loader::{self, ConfigWarning};

/// Project identity and source conventions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Output binary name (`build/<name>`)
    #[serde(default = "default_name")]
    pub name: String,

    /// Entry-point source, relative to the source directory
    #[serde(default = "default_entry")]
    pub entry: String,

    /// Source-file extension without the dot
    #[serde(default = "default_extension")]
    pub extension: String,

    /// Closed set of module categories, in link order
    #[serde(default = "ModuleCategory::defaults")]
    pub categories: Vec<ModuleCategory>,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            entry: default_entry(),
            extension: default_extension(),
            categories: ModuleCategory::defaults(),
        }
    }
}

fn default_name() -> String {
    "payload".to_string()
}

fn default_entry() -> String {
    "main.asm".to_string()
}

fn default_extension() -> String {
    "asm".to_string()
}

/// Directory layout, relative to the project root
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    #[serde(default = "default_src")]
    pub src: PathBuf,

    #[serde(default = "default_include")]
    pub include: PathBuf,

    #[serde(default = "default_build")]
    pub build: PathBuf,

    #[serde(default = "default_tests")]
    pub tests: PathBuf,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            src: default_src(),
            include: default_include(),
            build: default_build(),
            tests: default_tests(),
        }
    }
}

fn default_src() -> PathBuf {
    PathBuf::from("src")
}

fn default_include() -> PathBuf {
    PathBuf::from("include")
}

fn default_build() -> PathBuf {
    PathBuf::from("build")
}

fn default_tests() -> PathBuf {
    PathBuf::from("tests")
}

/// Build configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct BuildConfig {
    #[serde(default)]
    pub mode: BuildMode,
}

/// External toolchain identities and flags
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolchainConfig {
    #[serde(default = "default_assembler")]
    pub assembler: String,

    #[serde(default = "default_linker")]
    pub linker: String,

    #[serde(default = "default_cc")]
    pub cc: String,

    #[serde(default = "default_objdump")]
    pub objdump: String,

    #[serde(default = "default_objcopy")]
    pub objcopy: String,

    #[serde(default = "default_asm_flags")]
    pub asm_flags: Vec<String>,

    #[serde(default = "default_debug_flags")]
    pub debug_flags: Vec<String>,

    /// Linker flags in include mode
    #[serde(default = "default_ld_flags")]
    pub ld_flags: Vec<String>,

    /// Linker flags in separate mode (dead-code elimination)
    #[serde(default = "default_ld_flags_separate")]
    pub ld_flags_separate: Vec<String>,

    #[serde(default = "default_cflags")]
    pub cflags: Vec<String>,
}

impl Default for ToolchainConfig {
    fn default() -> Self {
        Self {
            assembler: default_assembler(),
            linker: default_linker(),
            cc: default_cc(),
            objdump: default_objdump(),
            objcopy: default_objcopy(),
            asm_flags: default_asm_flags(),
            debug_flags: default_debug_flags(),
            ld_flags: default_ld_flags(),
            ld_flags_separate: default_ld_flags_separate(),
            cflags: default_cflags(),
        }
    }
}

impl ToolchainConfig {
    /// Linker flags for `mode`.
    pub fn linker_flags(&self, mode: BuildMode) -> &[String] {
        match mode {
            BuildMode::Include => &self.ld_flags,
            BuildMode::Separate => &self.ld_flags_separate,
        }
    }
}

fn default_assembler() -> String {
    "nasm".to_string()
}

fn default_linker() -> String {
    "ld".to_string()
}

fn default_cc() -> String {
    "gcc".to_string()
}

fn default_objdump() -> String {
    "objdump".to_string()
}

fn default_objcopy() -> String {
    "objcopy".to_string()
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn default_asm_flags() -> Vec<String> {
    strings(&["-f", "elf64"])
}

fn default_debug_flags() -> Vec<String> {
    strings(&["-g", "-F", "dwarf"])
}

fn default_ld_flags() -> Vec<String> {
    strings(&["-s"])
}

fn default_ld_flags_separate() -> Vec<String> {
    strings(&["-s", "--gc-sections"])
}

fn default_cflags() -> Vec<String> {
    strings(&["-Wall", "-Wextra"])
}

/// Test runner configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct TestsConfig {
    /// Keep running after a failing test binary
    #[serde(default)]
    pub continue_on_failure: bool,
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub color: ColorMode,

    #[serde(default = "default_true")]
    pub unicode: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::default(),
            unicode: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Color output mode
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub const NAMES: [&'static str; 3] = ["auto", "always", "never"];

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "auto" => Some(ColorMode::Auto),
            "always" => Some(ColorMode::Always),
            "never" => Some(ColorMode::Never),
            _ => None,
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub project: ProjectConfig,

    #[serde(default)]
    pub layout: LayoutConfig,

    #[serde(default)]
    pub build: BuildConfig,

    #[serde(default)]
    pub toolchain: ToolchainConfig,

    #[serde(default)]
    pub tests: TestsConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> ForgeResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> ForgeResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Render as TOML for `show-config`.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
