//! Aggregate-header generation
//!
//! Builds one `Manifest` per category from discovered sources. Include paths
//! are relative to the include root (the directory passed to the assembler
//! with `-I`).

use std::path::{Component, Path, PathBuf};

use chrono::{DateTime, Utc};

use crate::domain::entities::{IncludeEntry, Manifest};
use crate::domain::value_objects::{BuildMode, ModuleCategory, SourceFile};
use crate::error::{ForgeError, ForgeResult};

/// Express `path` relative to `root` with `/` separators.
///
/// Fails with `PathResolution` when `path` is not below `root` (different
/// roots, or one absolute and the other relative).
pub fn relative_to(path: &Path, root: &Path) -> ForgeResult<String> {
    let stripped = path
        .strip_prefix(root)
        .map_err(|_| ForgeError::PathResolution {
            path: path.to_path_buf(),
            root: root.to_path_buf(),
        })?;

    let parts: Vec<String> = stripped
        .components()
        .filter_map(|c| match c {
            Component::Normal(s) => Some(s.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect();

    if parts.is_empty() {
        return Err(ForgeError::PathResolution {
            path: path.to_path_buf(),
            root: root.to_path_buf(),
        });
    }

    Ok(parts.join("/"))
}

/// Builds manifests for a fixed include root and output directory.
#[derive(Debug, Clone)]
pub struct ManifestGenerator {
    include_root: PathBuf,
    manifest_dir: PathBuf,
    mode: BuildMode,
}

impl ManifestGenerator {
    pub fn new(
        include_root: impl Into<PathBuf>,
        manifest_dir: impl Into<PathBuf>,
        mode: BuildMode,
    ) -> Self {
        Self {
            include_root: include_root.into(),
            manifest_dir: manifest_dir.into(),
            mode,
        }
    }

    pub fn manifest_path(&self, category: &ModuleCategory) -> PathBuf {
        self.manifest_dir.join(category.manifest_file_name())
    }

    /// Build the manifest for `category`, keeping the order of `sources`.
    pub fn build(
        &self,
        category: &ModuleCategory,
        sources: &[SourceFile],
        now: DateTime<Utc>,
    ) -> Manifest {
        let entries = sources.iter().map(|s| self.entry_for(s)).collect();
        Manifest::new(
            category.clone(),
            self.manifest_path(category),
            entries,
            now,
            self.mode,
        )
    }

    fn entry_for(&self, source: &SourceFile) -> IncludeEntry {
        match relative_to(source.path(), &self.include_root) {
            Ok(rel) => IncludeEntry::relative(rel),
            Err(err) => {
                tracing::warn!(%err, "falling back to absolute include path");
                IncludeEntry::absolute_fallback(
                    source.path().to_string_lossy().replace('\\', "/"),
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::manifest::without_timestamp;
    use chrono::TimeZone;

    fn network() -> ModuleCategory {
        ModuleCategory::new("network").unwrap()
    }

    fn at(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 16, hour, 0, 0).unwrap()
    }

    fn generator() -> ManifestGenerator {
        ManifestGenerator::new("/proj/src", "/proj/include/auto", BuildMode::Include)
    }

    #[test]
    fn relative_to_uses_forward_slashes() {
        let rel = relative_to(
            Path::new("/proj/src/network/a.asm"),
            Path::new("/proj/src"),
        )
        .unwrap();
        assert_eq!(rel, "network/a.asm");
    }

    #[test]
    fn relative_to_fails_outside_root() {
        let err = relative_to(Path::new("/other/a.asm"), Path::new("/proj/src")).unwrap_err();
        assert!(matches!(err, ForgeError::PathResolution { .. }));
    }

    #[test]
    fn empty_category_yields_header_only_manifest() {
        let m = generator().build(&network(), &[], at(1));
        assert!(m.is_empty());
        assert_eq!(m.target(), Path::new("/proj/include/auto/network.inc"));
        assert!(!m.render().contains("%include"));
    }

    #[test]
    fn entries_follow_discovery_order() {
        let sources = vec![
            SourceFile::new(network(), "/proj/src/network/a.asm"),
            SourceFile::new(network(), "/proj/src/network/b.asm"),
        ];
        let m = generator().build(&network(), &sources, at(1));
        let paths: Vec<&str> = m.entries().iter().map(|e| e.path()).collect();
        assert_eq!(paths, vec!["network/a.asm", "network/b.asm"]);
    }

    #[test]
    fn unresolvable_path_falls_back_to_absolute() {
        let sources = vec![SourceFile::new(network(), "/mnt/shared/net.asm")];
        let m = generator().build(&network(), &sources, at(1));
        assert_eq!(m.entries()[0].path(), "/mnt/shared/net.asm");
        assert!(m.entries()[0].is_fallback());
    }

    #[test]
    fn regeneration_is_identical_apart_from_timestamp() {
        let sources = vec![SourceFile::new(network(), "/proj/src/network/a.asm")];
        let first = generator().build(&network(), &sources, at(1)).render();
        let second = generator().build(&network(), &sources, at(9)).render();

        assert_ne!(first, second);
        assert_eq!(without_timestamp(&first), without_timestamp(&second));
    }

    #[test]
    fn rendered_manifest_snapshot() {
        let sources = vec![
            SourceFile::new(network(), "/proj/src/network/dns.asm"),
            SourceFile::new(network(), "/proj/src/network/socket.asm"),
        ];
        let m = ManifestGenerator::new("/proj/src", "/proj/include/auto", BuildMode::Separate)
            .build(&network(), &sources, at(12));
        insta::assert_snapshot!(m.render(), @r#"
        ; ==========================================================================
        ; Auto-generated aggregate header for module category: network
        ; Generated: 2026-10-16T12:00:00Z
        ; Build mode: separate (informational only)
        ; DO NOT EDIT - regenerated on every build
        ; ==========================================================================

        %include "network/dns.asm"
        %include "network/socket.asm"
        "#);
    }
}
