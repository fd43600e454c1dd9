//! Test Runner Use Case

use std::sync::Arc;

use crate::application::project::Project;
use crate::domain::entities::{TestOutcome, TestReport, TestStatus};
use crate::domain::ports::{
    BuildEvent, BuildEventSink, BuildStep, NoopEventSink, ToolCommand, ToolOutput, ToolRunner,
};
use crate::error::ForgeResult;

use super::discovery::{discover_tests, TestCase, TestGroup};

/// Options for a test run
#[derive(Debug, Clone, Copy, Default)]
pub struct TestRunOptions {
    /// Run every test even after a failure
    pub continue_on_failure: bool,
}

pub struct TestRunnerUseCase<TR: ToolRunner> {
    runner: TR,
}

impl<TR: ToolRunner> TestRunnerUseCase<TR> {
    pub fn new(runner: TR) -> Self {
        Self { runner }
    }

    pub fn execute(&self, project: &Project, options: &TestRunOptions) -> ForgeResult<TestReport> {
        self.execute_with_events(project, options, Arc::new(NoopEventSink))
    }

    /// Discover tests under the tests directory and run them.
    pub fn execute_with_events(
        &self,
        project: &Project,
        options: &TestRunOptions,
        sink: Arc<dyn BuildEventSink>,
    ) -> ForgeResult<TestReport> {
        let groups = discover_tests(project.paths.tests_dir())?;
        self.run_groups(project, &groups, options, sink.as_ref())
    }

    /// Run `groups` in order, applying the failure policy.
    ///
    /// Tool errors other than a non-zero exit (missing compiler, interrupt)
    /// abort the run.
    pub fn run_groups(
        &self,
        project: &Project,
        groups: &[TestGroup],
        options: &TestRunOptions,
        sink: &dyn BuildEventSink,
    ) -> ForgeResult<TestReport> {
        let total: usize = groups.iter().map(|g| g.cases.len()).sum();
        let mut report = TestReport::new();

        sink.on_event(BuildEvent::StepStarted {
            step: BuildStep::RunTests,
        });

        'groups: for group in groups {
            for case in &group.cases {
                sink.on_event(BuildEvent::TestStarted {
                    group: group.name.clone(),
                    name: case.name.clone(),
                });

                let outcome = self.run_case(project, group, case, sink)?;
                let failed = !outcome.status.is_pass();
                sink.on_event(BuildEvent::TestFinished {
                    outcome: outcome.clone(),
                });
                report.record(outcome);

                if failed && !options.continue_on_failure {
                    report.stopped_early = true;
                    report.not_run = total - report.total_run();
                    break 'groups;
                }
            }
        }

        let detail = format!("{} passed, {} failed", report.passed(), report.failed());
        if report.is_success() {
            sink.on_event(BuildEvent::StepFinished {
                step: BuildStep::RunTests,
                detail,
            });
        } else {
            sink.on_event(BuildEvent::StepFailed {
                step: BuildStep::RunTests,
                error: detail,
            });
        }
        Ok(report)
    }

    fn run_case(
        &self,
        project: &Project,
        group: &TestGroup,
        case: &TestCase,
        sink: &dyn BuildEventSink,
    ) -> ForgeResult<TestOutcome> {
        let toolchain = &project.config.toolchain;
        let compile = ToolCommand::new(&toolchain.cc)
            .args(toolchain.cflags.iter().cloned())
            .arg("-I")
            .path_arg(project.paths.include_dir())
            .arg("-o")
            .path_arg(&case.binary)
            .path_arg(&case.source);
        self.announce(&compile, sink);

        let compiled = self.runner.run(&compile)?;
        if !compiled.is_success() {
            return Ok(outcome(group, case, TestStatus::CompileFailed, &compiled));
        }

        let run = ToolCommand::new(format!("./{}", case.name)).current_dir(&group.dir);
        self.announce(&run, sink);
        let ran = self.runner.run(&run)?;

        let status = if ran.is_success() {
            TestStatus::Passed
        } else {
            TestStatus::Failed(ran.code)
        };
        Ok(outcome(group, case, status, &ran))
    }

    fn announce(&self, command: &ToolCommand, sink: &dyn BuildEventSink) {
        if sink.wants_detailed_events() {
            sink.on_event(BuildEvent::ToolInvoked {
                command: command.to_string(),
            });
        }
    }
}

fn outcome(group: &TestGroup, case: &TestCase, status: TestStatus, out: &ToolOutput) -> TestOutcome {
    let output = if status.is_pass() {
        String::new()
    } else if out.stderr.is_empty() {
        out.stdout_lossy()
    } else {
        out.stderr_lossy()
    };
    TestOutcome {
        name: case.name.clone(),
        group: group.name.clone(),
        source: case.source.clone(),
        status,
        output,
    }
}
