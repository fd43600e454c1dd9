//! NDJSON helpers for `--json` output.

use std::io::{self, Write};

use serde::Serialize;

/// Write one JSON object followed by a newline.
pub fn write_event(out: &mut impl Write, event: &serde_json::Value) -> io::Result<()> {
    serde_json::to_writer(&mut *out, event)?;
    out.write_all(b"\n")
}

pub fn emit(event: serde_json::Value) -> io::Result<()> {
    write_event(&mut io::stdout().lock(), &event)
}

/// Serialize any value as one NDJSON line on stdout.
pub fn emit_value<T: Serialize>(value: &T) -> io::Result<()> {
    let json = serde_json::to_value(value)?;
    emit(json)
}
