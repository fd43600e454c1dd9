//! Domain Layer
//!
//! Build-orchestration logic without direct I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Discovery, Manifest, BuildPlan, TestReport
//! - `value_objects/` - ModuleCategory, BuildMode, SourceFile
//! - `services/` - Discoverer, ManifestGenerator, mode selector, staleness
//! - `ports/` - FileSystem, ToolRunner, BuildEventSink
//!
//! ## Design Principles
//!
//! 1. **No ambient state** - configuration arrives as parameters
//! 2. **Plain data out** - the selector returns a plan, not side effects
//! 3. **Ports & Adapters** - all I/O goes through trait-defined ports

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
