//! Resolved project paths
//!
//! Every directory and artifact location derived from the project root and
//! the `[layout]` / `[project]` sections.

use std::path::{Path, PathBuf};

use super::types::Config;

/// Subdirectory of the include root holding generated manifests.
pub const MANIFEST_SUBDIR: &str = "auto";

/// Lock file guarding concurrent builds of the same project.
pub const LOCK_FILE: &str = ".asmforge.lock";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectPaths {
    root: PathBuf,
    src_dir: PathBuf,
    include_dir: PathBuf,
    build_dir: PathBuf,
    tests_dir: PathBuf,
    name: String,
    entry: String,
}

impl ProjectPaths {
    pub fn new(root: impl Into<PathBuf>, config: &Config) -> Self {
        let root = root.into();
        let layout = &config.layout;
        Self {
            src_dir: root.join(&layout.src),
            include_dir: root.join(&layout.include),
            build_dir: root.join(&layout.build),
            tests_dir: root.join(&layout.tests),
            name: config.project.name.clone(),
            entry: config.project.entry.clone(),
            root,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Source root; also the assembler include root for manifest directives.
    pub fn src_dir(&self) -> &Path {
        &self.src_dir
    }

    pub fn include_dir(&self) -> &Path {
        &self.include_dir
    }

    /// `include/auto`
    pub fn manifest_dir(&self) -> PathBuf {
        self.include_dir.join(MANIFEST_SUBDIR)
    }

    pub fn build_dir(&self) -> &Path {
        &self.build_dir
    }

    pub fn obj_dir(&self) -> PathBuf {
        self.build_dir.join("obj")
    }

    pub fn obj_debug_dir(&self) -> PathBuf {
        self.build_dir.join("obj-debug")
    }

    pub fn tests_dir(&self) -> &Path {
        &self.tests_dir
    }

    pub fn binary(&self) -> PathBuf {
        self.build_dir.join(&self.name)
    }

    pub fn debug_binary(&self) -> PathBuf {
        self.build_dir.join(format!("{}_debug", self.name))
    }

    pub fn shellcode_bin(&self) -> PathBuf {
        self.build_dir.join(format!("{}.bin", self.name))
    }

    pub fn shellcode_hex(&self) -> PathBuf {
        self.build_dir.join(format!("{}.hex", self.name))
    }

    pub fn disassembly(&self) -> PathBuf {
        self.build_dir.join(format!("{}.disasm", self.name))
    }

    pub fn entry_source(&self) -> PathBuf {
        self.src_dir.join(&self.entry)
    }

    fn entry_stem(&self) -> String {
        Path::new(&self.entry)
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.entry.clone())
    }

    pub fn entry_object(&self) -> PathBuf {
        self.obj_dir().join(format!("{}.o", self.entry_stem()))
    }

    pub fn entry_debug_object(&self) -> PathBuf {
        self.obj_debug_dir().join(format!("{}.o", self.entry_stem()))
    }

    pub fn lock_path(&self) -> PathBuf {
        self.root.join(LOCK_FILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_follow_default_layout() {
        let paths = ProjectPaths::new("/proj", &Config::default());

        assert_eq!(paths.src_dir(), Path::new("/proj/src"));
        assert_eq!(paths.manifest_dir(), PathBuf::from("/proj/include/auto"));
        assert_eq!(paths.entry_object(), PathBuf::from("/proj/build/obj/main.o"));
        assert_eq!(paths.binary(), PathBuf::from("/proj/build/payload"));
        assert_eq!(
            paths.debug_binary(),
            PathBuf::from("/proj/build/payload_debug")
        );
        assert_eq!(
            paths.shellcode_hex(),
            PathBuf::from("/proj/build/payload.hex")
        );
    }

    #[test]
    fn paths_honor_custom_layout_and_entry() {
        let mut config = Config::default();
        config.layout.build = PathBuf::from("out");
        config.project.entry = "start.s".to_string();
        config.project.name = "implant".to_string();

        let paths = ProjectPaths::new("/p", &config);
        assert_eq!(paths.entry_source(), PathBuf::from("/p/src/start.s"));
        assert_eq!(paths.entry_object(), PathBuf::from("/p/out/obj/start.o"));
        assert_eq!(
            paths.entry_debug_object(),
            PathBuf::from("/p/out/obj-debug/start.o")
        );
        assert_eq!(paths.binary(), PathBuf::from("/p/out/implant"));
    }
}
