//! Common helpers for asmforge integration tests.
//!
//! - `TestEnv`: isolated project and home directories plus a CLI runner
//! - `toolchain`: shell-script stand-ins for nasm, ld, gcc and binutils
//! - Fixtures: small assembly and C sources

#![allow(dead_code)]

pub mod env;
pub mod fixtures;
#[cfg(unix)]
pub mod toolchain;

pub use env::*;
pub use fixtures::*;
