//! Build mode value object
//!
//! Selects between a single compilation unit and per-file compilation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// How the project is compiled and linked.
///
/// - `Include`: the entry point pulls every source in through the generated
///   manifests, so only the entry point is assembled and linked.
/// - `Separate`: every source is assembled to its own object and the linker
///   drops unreferenced sections.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum BuildMode {
    #[default]
    Include,
    Separate,
}

impl BuildMode {
    /// Accepted spellings, used for typo suggestions.
    pub const NAMES: [&'static str; 2] = ["include", "separate"];

    pub fn as_str(&self) -> &'static str {
        match self {
            BuildMode::Include => "include",
            BuildMode::Separate => "separate",
        }
    }

    /// Whether each discovered source is assembled on its own.
    pub fn compiles_per_file(&self) -> bool {
        matches!(self, BuildMode::Separate)
    }

    /// Case-insensitive parse that returns `None` on unknown input.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "include" => Some(BuildMode::Include),
            "separate" => Some(BuildMode::Separate),
            _ => None,
        }
    }
}

impl fmt::Display for BuildMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BuildMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| {
            format!(
                "unknown build mode '{}' (expected one of: {})",
                s,
                Self::NAMES.join(", ")
            )
        })
    }
}
