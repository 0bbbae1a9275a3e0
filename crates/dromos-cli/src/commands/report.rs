//! Full network report: adjacency matrix plus all-pairs shortest paths.
//!
//! This is the classic batch run: print the matrix (and write it to
//! `matrix.txt`), then run Dijkstra once per ordered node pair and emit a
//! routing-table line for each, separated per source node (written to
//! `LS.txt`).

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use dromos_core::shortest_path;

use crate::load::{self, NodeNames};
use crate::output::network::{path_line, render_matrix};
use crate::output::status;

/// Run the report command.
pub fn run(
    file: &Path,
    matrix_file: &Path,
    table_file: &Path,
    names: &NodeNames,
    quiet: bool,
) -> Result<()> {
    status(
        &format!("Loading network graph from {} ...", file.display()),
        quiet,
    );
    let graph = load::load_graph(file, names)
        .with_context(|| format!("failed to load network from {}", file.display()))?;
    status("OK", quiet);

    let matrix = render_matrix(&graph, names);
    status("\nGraph as adjacency matrix:\n", quiet);
    status(&matrix, quiet);
    fs::write(matrix_file, &matrix)
        .with_context(|| format!("failed to write {}", matrix_file.display()))?;

    let table = shortest_path_table(&graph, names);
    status("\nShortest paths:\n", quiet);
    status(&table, quiet);
    fs::write(table_file, &table)
        .with_context(|| format!("failed to write {}", table_file.display()))?;

    tracing::debug!(
        matrix = %matrix_file.display(),
        table = %table_file.display(),
        "report written"
    );
    Ok(())
}

/// Builds the all-pairs routing table, one Dijkstra run per ordered pair,
/// with `--------` separators between source nodes.
#[must_use]
pub fn shortest_path_table(graph: &dromos_core::Graph, names: &NodeNames) -> String {
    let ids: Vec<_> = graph.vertex_ids().collect();
    let mut out = String::new();

    for (position, &source) in ids.iter().enumerate() {
        for &dest in &ids {
            if source == dest {
                continue;
            }

            let tree = shortest_path(graph, source, Some(dest));
            let _ = writeln!(out, "{}", path_line(&tree, dest, names));
        }

        if position < ids.len() - 1 {
            out.push_str("--------\n");
        }
    }

    out
}
