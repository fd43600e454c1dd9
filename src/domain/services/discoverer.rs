//! Source discovery
//!
//! Lists `src/<category>/*.<ext>` for every configured category.

use std::path::Path;

use crate::domain::entities::Discovery;
use crate::domain::ports::{FileSystem, FsResult};
use crate::domain::value_objects::{ModuleCategory, SourceFile};

/// Discover sources for each category under `src_root`.
///
/// - Files only, no recursion into subdirectories.
/// - Extension match is exact (`asm` matches `x.asm`, not `x.ASM`).
/// - Missing category directories yield an empty list.
/// - Sources are sorted by file name so regenerated manifests are stable.
pub fn discover<F>(
    fs: &F,
    src_root: &Path,
    categories: &[ModuleCategory],
    extension: &str,
) -> FsResult<Discovery>
where
    F: FileSystem + ?Sized,
{
    let extension = extension.trim_start_matches('.');
    let mut discovery = Discovery::new();

    for category in categories {
        let dir = src_root.join(category.as_str());
        let files = match fs.list_files(&dir) {
            Ok(files) => files,
            Err(e) if e.is_not_found() => Vec::new(),
            Err(e) => return Err(e),
        };

        let mut sources: Vec<SourceFile> = files
            .into_iter()
            .filter(|p| p.extension().map(|e| e == extension).unwrap_or(false))
            .map(|p| SourceFile::new(category.clone(), p))
            .collect();
        sources.sort_by_key(|s| s.file_name());

        discovery.push(category.clone(), sources);
    }

    Ok(discovery)
}
