//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `BuildUseCase` - layout, discovery, manifests, assemble, link
//! - `GenerateHeadersUseCase` - manifests only
//! - `CleanUseCase` - remove artifacts (and directories for a full clean)
//! - `TestRunnerUseCase` - compile and run C tests with a failure policy
//! - `AnalysisUseCase` - disassembly, shellcode extraction, null-byte analysis
//! - `LayoutUseCase` - directory setup

pub mod analysis;
pub mod build;
pub mod clean;
pub mod headers;
pub mod layout;
pub mod project;
pub mod sources;
pub mod test_runner;

pub use analysis::{AnalysisUseCase, BinaryAnalysis, Disassembly, Shellcode};
pub use build::{BuildOptions, BuildReport, BuildUseCase, BuildVariant};
pub use clean::{CleanOptions, CleanResult, CleanUseCase};
pub use headers::{GenerateHeadersUseCase, HeadersResult};
pub use layout::{ensure_layout, LayoutResult, LayoutUseCase};
pub use project::Project;
pub use sources::{list_sources, SourceListing};
pub use test_runner::{discover_tests, TestGroup, TestRunOptions, TestRunnerUseCase};
