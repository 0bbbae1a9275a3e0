//! CLI command implementations.

pub mod matrix;
pub mod paths;
pub mod report;
pub mod stats;
