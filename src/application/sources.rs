//! Source listing

use std::path::PathBuf;

use crate::domain::entities::Discovery;
use crate::domain::ports::FileSystem;
use crate::domain::services::discover;
use crate::error::ForgeResult;

use super::project::Project;

/// What `list-sources` shows
#[derive(Debug, Clone)]
pub struct SourceListing {
    pub entry: PathBuf,
    pub entry_exists: bool,
    pub discovery: Discovery,
}

/// Discover sources without touching the layout or the manifests.
pub fn list_sources<F>(fs: &F, project: &Project) -> ForgeResult<SourceListing>
where
    F: FileSystem + ?Sized,
{
    let discovery = discover(
        fs,
        project.paths.src_dir(),
        project.categories(),
        project.extension(),
    )?;
    let entry = project.paths.entry_source();
    Ok(SourceListing {
        entry_exists: fs.exists(&entry),
        entry,
        discovery,
    })
}
