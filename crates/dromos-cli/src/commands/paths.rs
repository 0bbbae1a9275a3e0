//! Shortest paths from a single source node.

use std::path::Path;

use anyhow::{Context, Result, bail};
use dromos_common::VertexId;
use dromos_core::shortest_path;

use crate::OutputFormat;
use crate::load::{self, NodeNames};
use crate::output::network::{PathRecord, route_string};
use crate::output::{Format, add_header, create_table};

/// Run the paths command.
pub fn run(
    file: &Path,
    from: char,
    to: Option<char>,
    names: &NodeNames,
    format: OutputFormat,
    quiet: bool,
) -> Result<()> {
    let graph = load::load_graph(file, names)
        .with_context(|| format!("failed to load network from {}", file.display()))?;

    let source = names.id(from)?;
    if graph.vertex(source).is_none() {
        bail!("node {from:?} is not part of this network");
    }

    let target = to.map(|name| names.id(name)).transpose()?;
    let destinations: Vec<VertexId> = match target {
        Some(dest) => vec![dest],
        None => graph.vertex_ids().filter(|&id| id != source).collect(),
    };

    // A single run answers every destination; early exit only pays off when
    // one pair was asked for.
    let tree = shortest_path(&graph, source, target);

    if quiet {
        return Ok(());
    }

    match Format::from(format) {
        Format::Json => {
            let records: Vec<PathRecord> = destinations
                .iter()
                .map(|&dest| PathRecord::new(&tree, dest, names))
                .collect();
            println!("{}", serde_json::to_string_pretty(&records)?);
        }
        Format::Table => {
            let mut table = create_table();
            add_header(&mut table, &["Destination", "Distance", "Route"]);
            for &dest in &destinations {
                let distance = tree
                    .distance(dest)
                    .map_or_else(|| "unreachable".to_string(), |d| d.to_string());
                let route = tree
                    .path_to(dest)
                    .map_or_else(|| "-".to_string(), |path| route_string(&path, names));
                table.add_row(vec![names.name(dest).to_string(), distance, route]);
            }
            println!("{table}");
        }
    }

    Ok(())
}
