//! Test Runner Use Case
//!
//! Compiles every `tests/<group>/*.c` with the C compiler, runs the
//! resulting executables and applies the stop/continue failure policy.

mod discovery;
mod use_case;

pub use discovery::{discover_tests, TestCase, TestGroup};
pub use use_case::{TestRunOptions, TestRunnerUseCase};
