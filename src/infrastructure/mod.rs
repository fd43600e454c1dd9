//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - Local file system
//! - `process` - External tool execution with interrupt support
//! - `lock` - Per-project build lock
//! - `events/` - NDJSON event sink

pub mod events;
pub mod fs;
pub mod lock;
pub mod process;

pub use events::JsonEventSink;
pub use fs::LocalFs;
pub use lock::BuildLock;
pub use process::{CancellationToken, SystemToolRunner};
