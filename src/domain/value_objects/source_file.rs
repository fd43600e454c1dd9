//! Source file value object

use std::path::{Path, PathBuf};

use super::ModuleCategory;

/// A discovered source file belonging to one module category.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SourceFile {
    category: ModuleCategory,
    path: PathBuf,
}

impl SourceFile {
    pub fn new(category: ModuleCategory, path: impl Into<PathBuf>) -> Self {
        Self {
            category,
            path: path.into(),
        }
    }

    pub fn category(&self) -> &ModuleCategory {
        &self.category
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File name including extension, e.g. `socket.asm`.
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// File name without extension, used to name the object file.
    pub fn stem(&self) -> String {
        self.path
            .file_stem()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// Object path for this source under `obj_root`: `<obj_root>/<category>/<stem>.o`.
    pub fn object_path(&self, obj_root: &Path) -> PathBuf {
        obj_root
            .join(self.category.as_str())
            .join(format!("{}.o", self.stem()))
    }
}
