//! In-memory doubles for the domain ports, shared by unit tests.

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use crate::domain::ports::{
    BuildEvent, BuildEventSink, FileSystem, FsError, FsResult, ToolCommand, ToolOutput, ToolRunner,
};
use crate::error::ForgeResult;

/// In-memory file system keyed by path.
#[derive(Default)]
pub struct MockFs {
    files: RefCell<BTreeMap<PathBuf, (Vec<u8>, SystemTime)>>,
    dirs: RefCell<BTreeSet<PathBuf>>,
}

impl MockFs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(self, path: &str, content: &str) -> Self {
        self.with_file_at(path, content, SystemTime::now())
    }

    pub fn with_file_at(self, path: &str, content: &str, at: SystemTime) -> Self {
        let path = PathBuf::from(path);
        self.add_ancestors(&path);
        self.files
            .borrow_mut()
            .insert(path, (content.as_bytes().to_vec(), at));
        self
    }

    /// Parent directories of a file outlive the file, as on disk.
    fn add_ancestors(&self, path: &Path) {
        let mut dirs = self.dirs.borrow_mut();
        for ancestor in path.ancestors().skip(1) {
            if ancestor.as_os_str().is_empty() {
                break;
            }
            dirs.insert(ancestor.to_path_buf());
        }
    }

    pub fn contents(&self, path: &str) -> Option<String> {
        self.files
            .borrow()
            .get(Path::new(path))
            .map(|(c, _)| String::from_utf8_lossy(c).into_owned())
    }

    fn dir_known(&self, dir: &Path) -> bool {
        self.dirs.borrow().contains(dir)
            || self.files.borrow().keys().any(|p| p.starts_with(dir) && p != dir)
    }
}

impl FileSystem for MockFs {
    fn read(&self, path: &Path) -> FsResult<Vec<u8>> {
        self.files
            .borrow()
            .get(path)
            .map(|(c, _)| c.clone())
            .ok_or_else(|| FsError::NotFound(path.to_path_buf()))
    }

    fn write(&self, path: &Path, content: &[u8]) -> FsResult<()> {
        self.add_ancestors(path);
        self.files
            .borrow_mut()
            .insert(path.to_path_buf(), (content.to_vec(), SystemTime::now()));
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.borrow().contains_key(path) || self.dir_known(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        !self.files.borrow().contains_key(path) && self.dir_known(path)
    }

    fn list_files(&self, dir: &Path) -> FsResult<Vec<PathBuf>> {
        if !self.dir_known(dir) {
            return Err(FsError::NotFound(dir.to_path_buf()));
        }
        Ok(self
            .files
            .borrow()
            .keys()
            .filter(|p| p.parent() == Some(dir))
            .cloned()
            .collect())
    }

    fn list_entries(&self, dir: &Path) -> FsResult<Vec<PathBuf>> {
        if !self.dir_known(dir) {
            return Err(FsError::NotFound(dir.to_path_buf()));
        }
        let mut entries = BTreeSet::new();
        let files = self.files.borrow();
        let dirs = self.dirs.borrow();
        for path in files.keys().chain(dirs.iter()) {
            if let Ok(rest) = path.strip_prefix(dir) {
                if let Some(first) = rest.components().next() {
                    entries.insert(dir.join(first));
                }
            }
        }
        Ok(entries.into_iter().collect())
    }

    fn modified(&self, path: &Path) -> Option<SystemTime> {
        self.files.borrow().get(path).map(|(_, t)| *t)
    }

    fn remove_file(&self, path: &Path) -> FsResult<()> {
        self.files
            .borrow_mut()
            .remove(path)
            .map(|_| ())
            .ok_or_else(|| FsError::NotFound(path.to_path_buf()))
    }

    fn remove_dir_all(&self, path: &Path) -> FsResult<()> {
        self.files.borrow_mut().retain(|p, _| !p.starts_with(path));
        self.dirs.borrow_mut().retain(|p| !p.starts_with(path));
        Ok(())
    }

    fn create_dir_all(&self, path: &Path) -> FsResult<()> {
        self.add_ancestors(path);
        self.dirs.borrow_mut().insert(path.to_path_buf());
        Ok(())
    }
}

/// Tool runner that records every command and answers from a script.
///
/// Commands whose rendered form contains a registered needle get the
/// matching exit code; everything else succeeds. With `touch_outputs`, the
/// path following `-o` is created on the real file system so staleness
/// checks see the artifact.
#[derive(Default)]
pub struct MockToolRunner {
    pub calls: RefCell<Vec<ToolCommand>>,
    failures: Vec<(String, i32, String)>,
    touch_outputs: bool,
}

impl MockToolRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn touching_outputs() -> Self {
        Self {
            touch_outputs: true,
            ..Self::default()
        }
    }

    pub fn fail_when(mut self, needle: &str, code: i32, stderr: &str) -> Self {
        self.failures
            .push((needle.to_string(), code, stderr.to_string()));
        self
    }

    pub fn rendered_calls(&self) -> Vec<String> {
        self.calls.borrow().iter().map(|c| c.to_string()).collect()
    }

    pub fn count_program(&self, program: &str) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|c| c.program == program)
            .count()
    }
}

impl ToolRunner for MockToolRunner {
    fn run(&self, command: &ToolCommand) -> ForgeResult<ToolOutput> {
        self.calls.borrow_mut().push(command.clone());
        let rendered = command.to_string();

        if let Some((_, code, stderr)) = self
            .failures
            .iter()
            .find(|(needle, _, _)| rendered.contains(needle.as_str()))
        {
            return Ok(ToolOutput::failure(*code, stderr.clone()));
        }

        if self.touch_outputs {
            if let Some(pos) = command.args.iter().position(|a| a == "-o") {
                if let Some(out) = command.args.get(pos + 1) {
                    let out = match &command.cwd {
                        Some(cwd) => cwd.join(out),
                        None => PathBuf::from(out),
                    };
                    if let Some(parent) = out.parent() {
                        let _ = std::fs::create_dir_all(parent);
                    }
                    let _ = std::fs::write(&out, b"\x7fELF");
                }
            }
        }

        Ok(ToolOutput::success())
    }
}

/// Event sink that keeps every event for later assertions.
#[derive(Default)]
pub struct RecordingSink {
    pub events: RefCell<Vec<BuildEvent>>,
}

impl RecordingSink {
    /// Step lifecycle as `started:<id>` / `finished:<id>` / ... strings.
    pub fn step_trace(&self) -> Vec<String> {
        self.events
            .borrow()
            .iter()
            .filter_map(|event| match event {
                BuildEvent::StepStarted { step } => Some(format!("started:{}", step.id())),
                BuildEvent::StepFinished { step, .. } => Some(format!("finished:{}", step.id())),
                BuildEvent::StepSkipped { step, .. } => Some(format!("skipped:{}", step.id())),
                BuildEvent::StepFailed { step, .. } => Some(format!("failed:{}", step.id())),
                _ => None,
            })
            .collect()
    }

    pub fn tool_invocations(&self) -> usize {
        self.events
            .borrow()
            .iter()
            .filter(|e| matches!(e, BuildEvent::ToolInvoked { .. }))
            .count()
    }
}

impl BuildEventSink for RecordingSink {
    fn on_event(&self, event: BuildEvent) {
        self.events.borrow_mut().push(event);
    }
}
