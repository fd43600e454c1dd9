//! Terminal presentation for the `asmforge` binary.
//!
//! Design tokens live in `theme`; everything else renders through
//! `primitives`, `blocks` and `widgets` so color and unicode fallbacks are
//! decided in one place (`UiContext`).

pub mod blocks;
pub mod context;
pub mod error;
pub mod json;
pub mod primitives;
pub mod sink;
pub mod terminal;
pub mod theme;
pub mod views;
pub mod widgets;
