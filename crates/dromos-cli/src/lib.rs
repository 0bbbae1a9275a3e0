//! Command-line interface for Dromos.
//!
//! The binary in `main.rs` is a thin argument parser; everything it calls
//! lives here so the loader and formatters stay testable.

pub mod commands;
pub mod load;
pub mod output;

use clap::ValueEnum;

/// Output format for command results.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output.
    Table,
    /// Machine-readable JSON output.
    Json,
}
