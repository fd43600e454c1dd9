//! Test report entity - outcomes of a test run

use std::path::PathBuf;

/// Outcome of one test binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestStatus {
    Passed,
    /// Exited non-zero (`None` when killed by a signal)
    Failed(Option<i32>),
    /// The test source did not compile
    CompileFailed,
}

impl TestStatus {
    pub fn is_pass(&self) -> bool {
        matches!(self, TestStatus::Passed)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestOutcome {
    /// Test name (source file stem)
    pub name: String,
    /// Directory group relative to the tests root, e.g. `network`
    pub group: String,
    pub source: PathBuf,
    pub status: TestStatus,
    /// Captured stderr (or stdout when stderr is empty) of a failing test
    pub output: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TestReport {
    pub outcomes: Vec<TestOutcome>,
    /// True when the run halted at the first failure
    pub stopped_early: bool,
    /// Tests that were discovered but never ran
    pub not_run: usize,
}

impl TestReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, outcome: TestOutcome) {
        self.outcomes.push(outcome);
    }

    pub fn passed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.status.is_pass()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.passed()
    }

    pub fn total_run(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_success(&self) -> bool {
        self.failed() == 0
    }
}
