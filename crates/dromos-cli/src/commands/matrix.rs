//! Adjacency matrix command.

use std::path::Path;

use anyhow::{Context, Result};

use crate::OutputFormat;
use crate::load::{self, NodeNames};
use crate::output::network::{MatrixOutput, render_matrix};
use crate::output::{Format, status};

/// Run the matrix command.
pub fn run(file: &Path, names: &NodeNames, format: OutputFormat, quiet: bool) -> Result<()> {
    let graph = load::load_graph(file, names)
        .with_context(|| format!("failed to load network from {}", file.display()))?;

    match Format::from(format) {
        Format::Json => {
            let output = MatrixOutput::new(&graph, names);
            if !quiet {
                println!("{}", serde_json::to_string_pretty(&output)?);
            }
        }
        Format::Table => {
            status(&render_matrix(&graph, names), quiet);
        }
    }

    Ok(())
}
