//! Module category value object
//!
//! A category names one source subdirectory (`src/<category>/`). The set is
//! closed per project and comes from configuration, never from scanning.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Categories used when the configuration does not list any.
pub const DEFAULT_CATEGORIES: [&str; 6] = [
    "network",
    "process",
    "utils",
    "stealth",
    "persistence",
    "features",
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid module category '{0}': use letters, digits, '_' or '-'")]
pub struct InvalidCategory(pub String);

/// Validated name of a module category.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ModuleCategory(String);

impl ModuleCategory {
    pub fn new(name: impl Into<String>) -> Result<Self, InvalidCategory> {
        let name = name.into();
        let valid = !name.is_empty()
            && name
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if valid {
            Ok(Self(name))
        } else {
            Err(InvalidCategory(name))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The built-in category list.
    pub fn defaults() -> Vec<ModuleCategory> {
        DEFAULT_CATEGORIES
            .iter()
            .map(|name| ModuleCategory(name.to_string()))
            .collect()
    }

    /// File name of the generated manifest for this category.
    pub fn manifest_file_name(&self) -> String {
        format!("{}.inc", self.0)
    }
}

impl TryFrom<String> for ModuleCategory {
    type Error = InvalidCategory;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ModuleCategory> for String {
    fn from(category: ModuleCategory) -> Self {
        category.0
    }
}

impl fmt::Display for ModuleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
