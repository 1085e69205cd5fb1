//! Command implementations.

pub mod completions;
pub mod emit;
pub mod types;
