//! docpatch-util - Utility functions for docpatch
//!
//! Currently hosts the JSON equality routines used by the `test` operation.

pub mod json_equal;

pub use json_equal::{deep_equal, positional_equal};
