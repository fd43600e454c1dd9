//! Clean Use Case
//!
//! Removes build artifacts and generated manifests.
//!
//! - `clean` empties `build/`, deletes `include/auto/*.inc` and compiled
//!   test executables
//! - `full-clean` additionally removes the `build/` and `include/auto/`
//!   directories themselves
//!
//! Hand-written includes and sources are never touched.

mod options;
mod result;
mod use_case;

pub use options::CleanOptions;
pub use result::CleanResult;
pub use use_case::CleanUseCase;
