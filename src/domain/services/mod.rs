//! Domain Services
//!
//! Pure business logic over domain entities. I/O goes through the
//! `FileSystem` port only.

mod byte_analysis;
mod discoverer;
mod manifest_generator;
mod mode_selector;
mod staleness;

pub use byte_analysis::{analyze_bytes, escape_hex, ByteAnalysis};
pub use discoverer::discover;
pub use manifest_generator::{relative_to, ManifestGenerator};
pub use mode_selector::select;
pub use staleness::needs_rebuild;
