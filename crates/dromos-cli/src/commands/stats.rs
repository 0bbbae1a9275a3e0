//! Network statistics command.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::OutputFormat;
use crate::load::{self, NodeNames};
use crate::output::{Format, print_key_value_table};

/// Summary statistics of a loaded network.
#[derive(Serialize)]
struct StatsOutput {
    node_count: usize,
    edge_count: usize,
    total_weight: u64,
    min_degree: usize,
    max_degree: usize,
}

/// Run the stats command.
pub fn run(file: &Path, names: &NodeNames, format: OutputFormat, quiet: bool) -> Result<()> {
    let graph = load::load_graph(file, names)
        .with_context(|| format!("failed to load network from {}", file.display()))?;

    let degrees: Vec<usize> = graph
        .vertex_ids()
        .filter_map(|id| graph.vertex(id))
        .map(dromos_core::Vertex::degree)
        .collect();

    let output = StatsOutput {
        node_count: graph.vertex_count(),
        edge_count: graph.edge_count(),
        total_weight: graph.total_weight(),
        min_degree: degrees.iter().copied().min().unwrap_or(0),
        max_degree: degrees.iter().copied().max().unwrap_or(0),
    };

    let fmt = Format::from(format);
    match fmt {
        Format::Json => {
            if !quiet {
                println!("{}", serde_json::to_string_pretty(&output)?);
            }
        }
        Format::Table => {
            let items = vec![
                ("Nodes", output.node_count.to_string()),
                ("Edges", output.edge_count.to_string()),
                ("Total Weight", output.total_weight.to_string()),
                ("Min Degree", output.min_degree.to_string()),
                ("Max Degree", output.max_degree.to_string()),
            ];
            print_key_value_table(&items, fmt, quiet);
        }
    }

    Ok(())
}
