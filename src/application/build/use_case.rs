//! Build Use Case
//!
//! layout -> discovery -> manifests -> assemble -> link, fail-fast.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::application::headers::{discover_sources, prepare_layout, write_manifests};
use crate::application::project::Project;
use crate::domain::entities::{BuildPlan, CompileAction, Discovery, Manifest};
use crate::domain::ports::{
    BuildEvent, BuildEventSink, BuildStep, FileSystem, NoopEventSink, ToolCommand, ToolRunner,
};
use crate::domain::services::{needs_rebuild, select};
use crate::domain::value_objects::BuildMode;
use crate::error::ForgeResult;

use super::options::{BuildOptions, BuildVariant};
use super::report::BuildReport;

/// Defined for the entry point in separate mode so it can skip the manifests.
pub const SEPARATE_BUILD_DEFINE: &str = "-DSEPARATE_BUILD";

const STRIP_FLAGS: &[&str] = &["-s", "--strip-all", "-S", "--strip-debug"];

/// Artifact locations for one variant
struct Targets {
    obj_root: PathBuf,
    entry_object: PathBuf,
    binary: PathBuf,
}

impl Targets {
    fn for_variant(project: &Project, variant: BuildVariant) -> Self {
        let paths = &project.paths;
        match variant {
            BuildVariant::Release => Self {
                obj_root: paths.obj_dir(),
                entry_object: paths.entry_object(),
                binary: paths.binary(),
            },
            BuildVariant::Debug => Self {
                obj_root: paths.obj_debug_dir(),
                entry_object: paths.entry_debug_object(),
                binary: paths.debug_binary(),
            },
        }
    }
}

/// Build use case
pub struct BuildUseCase<FS, TR>
where
    FS: FileSystem,
    TR: ToolRunner,
{
    fs: FS,
    runner: TR,
}

impl<FS, TR> BuildUseCase<FS, TR>
where
    FS: FileSystem,
    TR: ToolRunner,
{
    pub fn new(fs: FS, runner: TR) -> Self {
        Self { fs, runner }
    }

    /// Build without event reporting
    pub fn execute(&self, project: &Project, options: &BuildOptions) -> ForgeResult<BuildReport> {
        self.execute_with_events(project, options, Arc::new(NoopEventSink))
    }

    pub fn execute_with_events(
        &self,
        project: &Project,
        options: &BuildOptions,
        sink: Arc<dyn BuildEventSink>,
    ) -> ForgeResult<BuildReport> {
        let sink = sink.as_ref();
        let targets = Targets::for_variant(project, options.variant);

        prepare_layout(&self.fs, project, sink)?;
        let discovery = discover_sources(&self.fs, project, sink)?;

        sink.on_event(BuildEvent::StepStarted {
            step: BuildStep::GenerateHeaders,
        });
        let manifests = write_manifests(&self.fs, project, &discovery, options.mode, sink)?;
        sink.on_event(BuildEvent::StepFinished {
            step: BuildStep::GenerateHeaders,
            detail: format!("{} manifests", manifests.len()),
        });

        let plan = select(
            options.mode,
            &discovery,
            &targets.entry_object,
            &targets.obj_root,
        );
        tracing::debug!(
            mode = %plan.mode,
            objects = plan.link_set.len(),
            "selected build plan"
        );

        let mut compiled = Vec::new();
        let mut up_to_date = Vec::new();

        self.compile_entry(
            project,
            options,
            &plan,
            &discovery,
            &manifests,
            sink,
            &mut compiled,
            &mut up_to_date,
        )?;
        self.compile_sources(project, options, &plan, sink, &mut compiled, &mut up_to_date)?;
        let linked = self.link(project, options, &plan, &targets.binary, !compiled.is_empty(), sink)?;

        Ok(BuildReport {
            mode: options.mode,
            variant: options.variant,
            binary: targets.binary,
            source_count: discovery.total_sources(),
            category_count: discovery.category_count(),
            manifest_count: manifests.len(),
            compiled,
            up_to_date,
            linked,
            link_set: plan.link_set,
        })
    }

    #[allow(clippy::too_many_arguments)]
    fn compile_entry(
        &self,
        project: &Project,
        options: &BuildOptions,
        plan: &BuildPlan,
        discovery: &Discovery,
        manifests: &[Manifest],
        sink: &dyn BuildEventSink,
        compiled: &mut Vec<PathBuf>,
        up_to_date: &mut Vec<PathBuf>,
    ) -> ForgeResult<()> {
        let step = BuildStep::CompileEntry;
        sink.on_event(BuildEvent::StepStarted { step });

        let source = project.paths.entry_source();
        let mut inputs = vec![source.clone()];
        if plan.mode == BuildMode::Include {
            inputs.extend(discovery.all_sources().map(|s| s.path().to_path_buf()));
            inputs.extend(manifests.iter().map(|m| m.target().to_path_buf()));
        }

        let stamp = mode_stamp(&plan.entry_object);
        let same_mode = self
            .fs
            .read(&stamp)
            .is_ok_and(|recorded| recorded == plan.mode.as_str().as_bytes());
        if same_mode && !needs_rebuild(&self.fs, &plan.entry_object, &inputs) {
            self.report_up_to_date(&plan.entry_object, sink);
            up_to_date.push(plan.entry_object.clone());
            sink.on_event(BuildEvent::StepSkipped {
                step,
                reason: "entry object up to date".to_string(),
            });
            return Ok(());
        }

        let is_separate = plan.mode == BuildMode::Separate;
        let command = self.assemble(project, options, &source, &plan.entry_object, is_separate)?;
        self.run_tool(&command, step, sink)?;
        self.fs.write(&stamp, plan.mode.as_str().as_bytes())?;
        compiled.push(plan.entry_object.clone());

        sink.on_event(BuildEvent::StepFinished {
            step,
            detail: display_name(&plan.entry_object),
        });
        Ok(())
    }

    fn compile_sources(
        &self,
        project: &Project,
        options: &BuildOptions,
        plan: &BuildPlan,
        sink: &dyn BuildEventSink,
        compiled: &mut Vec<PathBuf>,
        up_to_date: &mut Vec<PathBuf>,
    ) -> ForgeResult<()> {
        let step = BuildStep::CompileSources;
        let steps: Vec<_> = plan.compile_steps().collect();

        if plan.mode == BuildMode::Include {
            sink.on_event(BuildEvent::StepSkipped {
                step,
                reason: format!(
                    "include mode: {} source(s) assembled through manifests",
                    plan.skipped_count()
                ),
            });
            return Ok(());
        }
        if steps.is_empty() {
            sink.on_event(BuildEvent::StepSkipped {
                step,
                reason: "no sources discovered".to_string(),
            });
            return Ok(());
        }

        sink.on_event(BuildEvent::StepStarted { step });
        let mut count = 0;
        for compile in steps {
            debug_assert_eq!(compile.action, CompileAction::Compile);
            let inputs = [compile.source.path().to_path_buf()];
            if !needs_rebuild(&self.fs, &compile.object, &inputs) {
                self.report_up_to_date(&compile.object, sink);
                up_to_date.push(compile.object.clone());
                continue;
            }

            let command =
                self.assemble(project, options, compile.source.path(), &compile.object, false)?;
            self.run_tool(&command, step, sink)?;
            compiled.push(compile.object.clone());
            count += 1;
        }

        sink.on_event(BuildEvent::StepFinished {
            step,
            detail: format!("{} object(s) assembled", count),
        });
        Ok(())
    }

    fn link(
        &self,
        project: &Project,
        options: &BuildOptions,
        plan: &BuildPlan,
        binary: &Path,
        force: bool,
        sink: &dyn BuildEventSink,
    ) -> ForgeResult<bool> {
        let step = BuildStep::Link;
        let objects = plan.link_set.objects();

        if !force && !needs_rebuild(&self.fs, binary, objects) {
            sink.on_event(BuildEvent::StepSkipped {
                step,
                reason: format!("{} up to date", display_name(binary)),
            });
            return Ok(false);
        }

        sink.on_event(BuildEvent::StepStarted { step });
        let command = ToolCommand::new(&project.config.toolchain.linker)
            .args(linker_flags(project, options))
            .arg("-o")
            .path_arg(binary)
            .args(objects.iter().map(|o| o.display().to_string()));
        self.run_tool(&command, step, sink)?;

        sink.on_event(BuildEvent::StepFinished {
            step,
            detail: format!("{} ({} object(s))", display_name(binary), objects.len()),
        });
        Ok(true)
    }

    fn assemble(
        &self,
        project: &Project,
        options: &BuildOptions,
        source: &Path,
        object: &Path,
        separate_entry: bool,
    ) -> ForgeResult<ToolCommand> {
        if let Some(parent) = object.parent() {
            self.fs.create_dir_all(parent)?;
        }

        let toolchain = &project.config.toolchain;
        let mut command =
            ToolCommand::new(&toolchain.assembler).args(toolchain.asm_flags.iter().cloned());
        if options.is_debug() {
            command = command.args(toolchain.debug_flags.iter().cloned());
        }
        if separate_entry {
            command = command.arg(SEPARATE_BUILD_DEFINE);
        }

        Ok(command
            .arg("-I")
            .arg(dir_arg(project.paths.include_dir()))
            .arg("-I")
            .arg(dir_arg(project.paths.src_dir()))
            .arg("-o")
            .path_arg(object)
            .path_arg(source))
    }

    fn run_tool(
        &self,
        command: &ToolCommand,
        step: BuildStep,
        sink: &dyn BuildEventSink,
    ) -> ForgeResult<()> {
        if sink.wants_detailed_events() {
            sink.on_event(BuildEvent::ToolInvoked {
                command: command.to_string(),
            });
        }
        match self.runner.run_checked(command) {
            Ok(_) => Ok(()),
            Err(err) => {
                sink.on_event(BuildEvent::StepFailed {
                    step,
                    error: err.to_string(),
                });
                Err(err)
            }
        }
    }

    fn report_up_to_date(&self, object: &Path, sink: &dyn BuildEventSink) {
        if sink.wants_detailed_events() {
            sink.on_event(BuildEvent::ObjectUpToDate {
                path: object.to_path_buf(),
            });
        }
    }
}

fn linker_flags(project: &Project, options: &BuildOptions) -> Vec<String> {
    let flags = project.config.toolchain.linker_flags(options.mode);
    if options.is_debug() {
        flags
            .iter()
            .filter(|f| !STRIP_FLAGS.contains(&f.as_str()))
            .cloned()
            .collect()
    } else {
        flags.to_vec()
    }
}

/// `main.o` -> `main.mode`: the mode the entry object was assembled in.
fn mode_stamp(entry_object: &Path) -> PathBuf {
    entry_object.with_extension("mode")
}

/// Include directories are passed with a trailing separator.
fn dir_arg(dir: &Path) -> String {
    let rendered = dir.display().to_string();
    if rendered.ends_with('/') {
        rendered
    } else {
        format!("{}/", rendered)
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
