//! Manifest entity - a generated aggregate header for one category
//!
//! A manifest is built as a sequence of `IncludeEntry` records and only then
//! rendered to text, so tests can assert on the records directly.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};

use crate::domain::value_objects::{BuildMode, ModuleCategory};

/// Prefix of the line carrying the generation timestamp.
pub const GENERATED_PREFIX: &str = "; Generated: ";

const RULE: &str =
    "; ==========================================================================";

/// One `%include` directive in a manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncludeEntry {
    /// Path as written in the directive (always `/`-separated)
    path: String,
    /// True when the source could not be made relative to the include root
    fallback: bool,
}

impl IncludeEntry {
    pub fn relative(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            fallback: false,
        }
    }

    pub fn absolute_fallback(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            fallback: true,
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn is_fallback(&self) -> bool {
        self.fallback
    }

    pub fn directive(&self) -> String {
        format!("%include \"{}\"", self.path)
    }
}

/// Aggregate header listing every source of one category.
#[derive(Debug, Clone, PartialEq)]
pub struct Manifest {
    category: ModuleCategory,
    target: PathBuf,
    entries: Vec<IncludeEntry>,
    generated_at: DateTime<Utc>,
    mode: BuildMode,
}

impl Manifest {
    pub fn new(
        category: ModuleCategory,
        target: impl Into<PathBuf>,
        entries: Vec<IncludeEntry>,
        generated_at: DateTime<Utc>,
        mode: BuildMode,
    ) -> Self {
        Self {
            category,
            target: target.into(),
            entries,
            generated_at,
            mode,
        }
    }

    pub fn category(&self) -> &ModuleCategory {
        &self.category
    }

    /// Where the manifest is written.
    pub fn target(&self) -> &Path {
        &self.target
    }

    pub fn entries(&self) -> &[IncludeEntry] {
        &self.entries
    }

    pub fn generated_at(&self) -> DateTime<Utc> {
        self.generated_at
    }

    pub fn mode(&self) -> BuildMode {
        self.mode
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of entries that fell back to an absolute path.
    pub fn fallback_count(&self) -> usize {
        self.entries.iter().filter(|e| e.is_fallback()).count()
    }

    /// Render the manifest as assembler source.
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str(RULE);
        out.push('\n');
        out.push_str(&format!(
            "; Auto-generated aggregate header for module category: {}\n",
            self.category
        ));
        out.push_str(&format!(
            "{}{}\n",
            GENERATED_PREFIX,
            self.generated_at.format("%Y-%m-%dT%H:%M:%SZ")
        ));
        out.push_str(&format!(
            "; Build mode: {} (informational only)\n",
            self.mode
        ));
        out.push_str("; DO NOT EDIT - regenerated on every build\n");
        out.push_str(RULE);
        out.push('\n');

        if !self.entries.is_empty() {
            out.push('\n');
            for entry in &self.entries {
                out.push_str(&entry.directive());
                out.push('\n');
            }
        }

        out
    }
}

/// Strip the timestamp line so two renders can be compared.
pub fn without_timestamp(rendered: &str) -> String {
    rendered
        .lines()
        .filter(|line| !line.starts_with(GENERATED_PREFIX))
        .collect::<Vec<_>>()
        .join("\n")
}
