//! Diagnostic logging
//!
//! `tracing` events go to stderr so they never mix with `--json` output on
//! stdout. `RUST_LOG`, when set, replaces the verbosity-derived filter.

use std::sync::Once;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

static INIT: Once = Once::new();

/// `-v` count to level: warn, info, debug, trace.
pub fn level_for(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn filter_directives(verbose: u8, rust_log: Option<&str>) -> String {
    match rust_log {
        Some(directives) if !directives.trim().is_empty() => directives.to_string(),
        _ => format!("asmforge={}", level_for(verbose)),
    }
}

pub fn init_logging(verbose: u8, ansi: bool) {
    INIT.call_once(|| {
        let rust_log = std::env::var("RUST_LOG").ok();
        let filter = EnvFilter::new(filter_directives(verbose, rust_log.as_deref()));
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(verbose > 2)
                    .with_ansi(ansi)
                    .with_writer(std::io::stderr),
            )
            .init();
    });
}
