//! Test discovery

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use ignore::WalkBuilder;

use crate::error::{ForgeError, ForgeResult};

/// One C test source and the executable it compiles to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCase {
    /// File stem, e.g. `t1`
    pub name: String,
    pub source: PathBuf,
    /// Same directory as the source, no extension
    pub binary: PathBuf,
}

/// Tests sharing a directory below the tests root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestGroup {
    /// Directory relative to the tests root, `/`-separated
    pub name: String,
    pub dir: PathBuf,
    pub cases: Vec<TestCase>,
}

/// Walk `root` for `*.c` files grouped by directory.
///
/// Hidden entries are skipped and `.gitignore` files honored. Files directly
/// in `root` belong to no group and are ignored. Groups are sorted by path,
/// cases by file name. A missing root yields no groups; any directory that
/// cannot be read fails discovery.
pub fn discover_tests(root: &Path) -> ForgeResult<Vec<TestGroup>> {
    if !root.is_dir() {
        return Ok(Vec::new());
    }

    let mut by_dir: BTreeMap<PathBuf, Vec<PathBuf>> = BTreeMap::new();
    for result in WalkBuilder::new(root)
        .hidden(true)
        .git_ignore(true)
        .require_git(false)
        .build()
    {
        let entry = result.map_err(|err| walk_error(root, err))?;
        let path = entry.path();
        if !entry.file_type().is_some_and(|t| t.is_file()) {
            continue;
        }
        if !path.extension().is_some_and(|e| e == "c") {
            continue;
        }
        let Some(dir) = path.parent() else { continue };
        if dir == root {
            tracing::debug!(path = %path.display(), "skipping test outside a group");
            continue;
        }
        by_dir
            .entry(dir.to_path_buf())
            .or_default()
            .push(path.to_path_buf());
    }

    let groups = by_dir
        .into_iter()
        .map(|(dir, mut sources)| {
            sources.sort();
            let cases = sources
                .into_iter()
                .map(|source| TestCase {
                    name: source
                        .file_stem()
                        .map(|s| s.to_string_lossy().into_owned())
                        .unwrap_or_default(),
                    binary: source.with_extension(""),
                    source,
                })
                .collect();
            TestGroup {
                name: group_name(root, &dir),
                dir,
                cases,
            }
        })
        .collect();
    Ok(groups)
}

fn walk_error(root: &Path, err: ignore::Error) -> ForgeError {
    let path = error_path(&err).unwrap_or(root).to_path_buf();
    let message = err.to_string();
    let source = err
        .into_io_error()
        .unwrap_or_else(|| std::io::Error::new(std::io::ErrorKind::Other, message));
    ForgeError::Io { path, source }
}

fn error_path(err: &ignore::Error) -> Option<&Path> {
    match err {
        ignore::Error::WithPath { path, .. } => Some(path),
        ignore::Error::WithDepth { err, .. } | ignore::Error::WithLineNumber { err, .. } => {
            error_path(err)
        }
        _ => None,
    }
}

fn group_name(root: &Path, dir: &Path) -> String {
    let rel = dir.strip_prefix(root).unwrap_or(dir);
    rel.components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join("/")
}
