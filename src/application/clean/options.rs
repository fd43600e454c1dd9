//! Clean options

/// Options for the clean command
#[derive(Debug, Clone, Copy, Default)]
pub struct CleanOptions {
    /// Also remove the `build/` and `include/auto/` directories
    pub full: bool,
}

impl CleanOptions {
    /// Create new clean options
    pub fn new() -> Self {
        Self::default()
    }

    /// Options for `full-clean`
    pub fn full() -> Self {
        Self { full: true }
    }
}
