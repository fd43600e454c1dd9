//! Event Sink Implementations
//!
//! - JsonEventSink: NDJSON output for CI/automation
//!
//! The colorized console sink lives in the binary's `ui` module.

mod json;

pub use json::{event_to_json, JsonEventSink};
