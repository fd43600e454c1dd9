use std::path::{Path, PathBuf};

use asmforge::config::PROJECT_CONFIG_FILE;

/// Nearest ancestor of `start` (inclusive) holding `asmforge.toml`, else
/// `start` itself.
pub(crate) fn discover_project_root(start: &Path) -> PathBuf {
    start
        .ancestors()
        .find(|dir| dir.join(PROJECT_CONFIG_FILE).is_file())
        .unwrap_or(start)
        .to_path_buf()
}

/// `--project` wins; otherwise search upward from the current directory.
pub(crate) fn resolve_project_root(explicit: Option<&Path>) -> std::io::Result<PathBuf> {
    match explicit {
        Some(path) => Ok(path.to_path_buf()),
        None => Ok(discover_project_root(&std::env::current_dir()?)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn finds_config_in_ancestor() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        std::fs::write(root.join(PROJECT_CONFIG_FILE), "").unwrap();
        let start = root.join("src/network");
        std::fs::create_dir_all(&start).unwrap();

        assert_eq!(discover_project_root(&start), root.to_path_buf());
    }

    #[test]
    fn nearest_config_wins() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        std::fs::write(root.join(PROJECT_CONFIG_FILE), "").unwrap();
        std::fs::create_dir_all(root.join("sub/src")).unwrap();
        std::fs::write(root.join("sub").join(PROJECT_CONFIG_FILE), "").unwrap();

        assert_eq!(discover_project_root(&root.join("sub/src")), root.join("sub"));
    }

    #[test]
    fn falls_back_to_start() {
        let dir = tempdir().unwrap();
        let start = dir.path().join("plain");
        std::fs::create_dir_all(&start).unwrap();
        assert_eq!(discover_project_root(&start), start);
    }

    #[test]
    fn explicit_project_is_used_verbatim() {
        let path = Path::new("/does/not/exist");
        assert_eq!(resolve_project_root(Some(path)).unwrap(), path);
    }
}
