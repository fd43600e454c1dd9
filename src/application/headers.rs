//! Generate-Headers Use Case
//!
//! Layout, discovery and one manifest per category, nothing compiled.

use std::sync::Arc;

use chrono::Utc;

use crate::domain::entities::{Discovery, Manifest};
use crate::domain::ports::{BuildEvent, BuildEventSink, BuildStep, FileSystem, NoopEventSink};
use crate::domain::services::{discover, ManifestGenerator};
use crate::domain::value_objects::BuildMode;
use crate::error::ForgeResult;

use super::layout::ensure_layout;
use super::project::Project;

/// Discovery plus the manifests written from it
#[derive(Debug, Clone)]
pub struct HeadersResult {
    pub discovery: Discovery,
    pub manifests: Vec<Manifest>,
}

impl HeadersResult {
    pub fn fallback_count(&self) -> usize {
        self.manifests.iter().map(Manifest::fallback_count).sum()
    }
}

/// Write every manifest in `discovery` to `include/auto/<category>.inc`.
///
/// Manifests are rewritten unconditionally; the include root for the
/// directives is the source directory.
pub fn write_manifests<F>(
    fs: &F,
    project: &Project,
    discovery: &Discovery,
    mode: BuildMode,
    sink: &dyn BuildEventSink,
) -> ForgeResult<Vec<Manifest>>
where
    F: FileSystem + ?Sized,
{
    let generator = ManifestGenerator::new(
        project.paths.src_dir(),
        project.paths.manifest_dir(),
        mode,
    );
    let now = Utc::now();

    let mut manifests = Vec::with_capacity(discovery.category_count());
    for (category, sources) in discovery.iter() {
        let manifest = generator.build(category, sources, now);
        fs.write(manifest.target(), manifest.render().as_bytes())?;
        tracing::debug!(
            path = %manifest.target().display(),
            entries = manifest.entries().len(),
            "wrote manifest"
        );
        if sink.wants_detailed_events() {
            sink.on_event(BuildEvent::ManifestWritten {
                path: manifest.target().to_path_buf(),
                entries: manifest.entries().len(),
                fallbacks: manifest.fallback_count(),
            });
        }
        manifests.push(manifest);
    }
    Ok(manifests)
}

/// Discover sources, emitting the discovery step events.
pub fn discover_sources<F>(
    fs: &F,
    project: &Project,
    sink: &dyn BuildEventSink,
) -> ForgeResult<Discovery>
where
    F: FileSystem + ?Sized,
{
    sink.on_event(BuildEvent::StepStarted {
        step: BuildStep::Discover,
    });
    let discovery = discover(
        fs,
        project.paths.src_dir(),
        project.categories(),
        project.extension(),
    )?;
    sink.on_event(BuildEvent::StepFinished {
        step: BuildStep::Discover,
        detail: format!(
            "{} source(s) in {} categories",
            discovery.total_sources(),
            discovery.category_count()
        ),
    });
    Ok(discovery)
}

/// Create the layout, emitting the layout step events.
pub fn prepare_layout<F>(fs: &F, project: &Project, sink: &dyn BuildEventSink) -> ForgeResult<()>
where
    F: FileSystem + ?Sized,
{
    sink.on_event(BuildEvent::StepStarted {
        step: BuildStep::Layout,
    });
    let created = ensure_layout(fs, project)?;
    sink.on_event(BuildEvent::StepFinished {
        step: BuildStep::Layout,
        detail: match created.len() {
            0 => "up to date".to_string(),
            n => format!("{} directories created", n),
        },
    });
    Ok(())
}

pub struct GenerateHeadersUseCase<FS: FileSystem> {
    fs: FS,
}

impl<FS: FileSystem> GenerateHeadersUseCase<FS> {
    pub fn new(fs: FS) -> Self {
        Self { fs }
    }

    pub fn execute(&self, project: &Project) -> ForgeResult<HeadersResult> {
        self.execute_with_events(project, Arc::new(NoopEventSink))
    }

    pub fn execute_with_events(
        &self,
        project: &Project,
        sink: Arc<dyn BuildEventSink>,
    ) -> ForgeResult<HeadersResult> {
        prepare_layout(&self.fs, project, sink.as_ref())?;
        let discovery = discover_sources(&self.fs, project, sink.as_ref())?;

        sink.on_event(BuildEvent::StepStarted {
            step: BuildStep::GenerateHeaders,
        });
        let manifests = write_manifests(
            &self.fs,
            project,
            &discovery,
            project.mode(),
            sink.as_ref(),
        )?;
        sink.on_event(BuildEvent::StepFinished {
            step: BuildStep::GenerateHeaders,
            detail: format!("{} manifests", manifests.len()),
        });

        Ok(HeadersResult {
            discovery,
            manifests,
        })
    }
}
