//! Network-specific renderings: adjacency matrix and routing-table lines.

use std::fmt::Write as _;

use dromos_common::{VertexId, Weight};
use dromos_core::{Graph, PathTree};
use serde::Serialize;

use crate::load::NodeNames;

/// Renders the graph as a plain-text adjacency matrix.
///
/// One row and column per node, diagonal cells always `0`, blank cells for
/// "no direct edge", weights right-aligned two wide.
#[must_use]
pub fn render_matrix(graph: &Graph, names: &NodeNames) -> String {
    let ids: Vec<VertexId> = graph.vertex_ids().collect();
    let mut out = String::new();

    out.push_str("  ");
    for &id in &ids {
        let _ = write!(out, "  {}", names.name(id));
    }
    out.push('\n');

    for &row in &ids {
        let _ = write!(out, "{}  ", names.name(row));
        for &col in &ids {
            if row == col {
                out.push_str("  0");
            } else if let Some(edge) = graph.edge(row, col) {
                let _ = write!(out, " {:>2}", edge.weight);
            } else {
                out.push_str("   ");
            }
        }
        out.push('\n');
    }

    out
}

/// JSON shape of the adjacency matrix.
#[derive(Serialize)]
pub struct MatrixOutput {
    /// Node names in matrix order.
    pub nodes: Vec<char>,
    /// `weights[i][j]` is the direct edge weight from node `i` to node `j`,
    /// `0` on the diagonal, `null` where no direct edge exists.
    pub weights: Vec<Vec<Option<Weight>>>,
}

impl MatrixOutput {
    /// Builds the JSON matrix view of `graph`.
    #[must_use]
    pub fn new(graph: &Graph, names: &NodeNames) -> Self {
        let ids: Vec<VertexId> = graph.vertex_ids().collect();
        let nodes = ids.iter().map(|&id| names.name(id)).collect();

        let weights = ids
            .iter()
            .map(|&row| {
                ids.iter()
                    .map(|&col| {
                        if row == col {
                            Some(0)
                        } else {
                            graph.edge(row, col).map(|e| e.weight)
                        }
                    })
                    .collect()
            })
            .collect();

        Self { nodes, weights }
    }
}

/// Formats one routing-table line: `dest (src, hop)`.
///
/// `hop` is the destination's predecessor on the shortest path; when the
/// predecessor is the source itself (a directly-routed destination) the
/// destination's own name is shown instead. Unreachable destinations get
/// `-` for the hop.
#[must_use]
pub fn path_line(tree: &PathTree, dest: VertexId, names: &NodeNames) -> String {
    let src = tree.source();
    let hop = match tree.predecessor(dest) {
        Some(prev) if prev == src => names.name(dest).to_string(),
        Some(prev) => names.name(prev).to_string(),
        None => "-".to_string(),
    };

    format!("{} ({}, {})", names.name(dest), names.name(src), hop)
}

/// Renders a recovered path as `u -> v -> w`.
#[must_use]
pub fn route_string(path: &[VertexId], names: &NodeNames) -> String {
    let parts: Vec<String> = path.iter().map(|&id| names.name(id).to_string()).collect();
    parts.join(" -> ")
}

/// JSON shape of a single shortest-path answer.
#[derive(Serialize)]
pub struct PathRecord {
    /// Source node name.
    pub from: char,
    /// Destination node name.
    pub to: char,
    /// Source vertex index.
    pub from_index: VertexId,
    /// Destination vertex index.
    pub to_index: VertexId,
    /// Shortest distance; `null` when unreachable.
    pub distance: Option<Weight>,
    /// Node names along the path, source first; `null` when unreachable.
    pub route: Option<Vec<char>>,
}

impl PathRecord {
    /// Builds the record for `dest` out of a finished run.
    #[must_use]
    pub fn new(tree: &PathTree, dest: VertexId, names: &NodeNames) -> Self {
        let route = tree
            .path_to(dest)
            .map(|path| path.iter().map(|&id| names.name(id)).collect());

        Self {
            from: names.name(tree.source()),
            to: names.name(dest),
            from_index: tree.source(),
            to_index: dest,
            distance: tree.distance(dest),
            route,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dromos_core::shortest_path;

    fn v(id: u32) -> VertexId {
        VertexId::new(id)
    }

    fn triangle() -> Graph {
        let mut graph = Graph::new();
        graph.add_undirected_edge(v(0), v(1), 1);
        graph.add_undirected_edge(v(1), v(2), 2);
        graph.add_undirected_edge(v(0), v(2), 5);
        graph
    }

    #[test]
    fn test_matrix_layout() {
        let graph = triangle();
        let names = NodeNames::default();
        let rendered = render_matrix(&graph, &names);

        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "    u  v  w");
        assert_eq!(lines[1], "u    0  1  5");
        assert_eq!(lines[2], "v    1  0  2");
        assert_eq!(lines[3], "w    5  2  0");
    }

    #[test]
    fn test_matrix_blank_for_missing_edge() {
        let mut graph = Graph::new();
        graph.add_edge(v(0), v(1), 3);
        let names = NodeNames::default();

        let rendered = render_matrix(&graph, &names);
        let lines: Vec<&str> = rendered.lines().collect();
        // v's row has no edge back to u: blank cell before its diagonal.
        assert_eq!(lines[2], "v       0");
    }

    #[test]
    fn test_matrix_json_shape() {
        let graph = triangle();
        let names = NodeNames::default();
        let output = MatrixOutput::new(&graph, &names);

        assert_eq!(output.nodes, vec!['u', 'v', 'w']);
        assert_eq!(output.weights[0], vec![Some(0), Some(1), Some(5)]);
        assert_eq!(output.weights[2], vec![Some(5), Some(2), Some(0)]);
    }

    #[test]
    fn test_path_line_indirect_hop() {
        let graph = triangle();
        let names = NodeNames::default();
        let tree = shortest_path(&graph, v(0), Some(v(2)));

        // u -> w routes through v.
        assert_eq!(path_line(&tree, v(2), &names), "w (u, v)");
    }

    #[test]
    fn test_path_line_direct_hop_shows_destination() {
        let graph = triangle();
        let names = NodeNames::default();
        let tree = shortest_path(&graph, v(0), Some(v(1)));

        assert_eq!(path_line(&tree, v(1), &names), "v (u, v)");
    }

    #[test]
    fn test_path_line_unreachable() {
        let mut graph = triangle();
        graph.add_vertex(v(3));
        let names = NodeNames::default();
        let tree = shortest_path(&graph, v(0), None);

        assert_eq!(path_line(&tree, v(3), &names), "x (u, -)");
    }

    #[test]
    fn test_route_string() {
        let names = NodeNames::default();
        assert_eq!(route_string(&[v(0), v(1), v(2)], &names), "u -> v -> w");
        assert_eq!(route_string(&[v(0)], &names), "u");
    }

    #[test]
    fn test_path_record_unreachable_fields() {
        let mut graph = triangle();
        graph.add_vertex(v(3));
        let names = NodeNames::default();
        let tree = shortest_path(&graph, v(0), None);

        let record = PathRecord::new(&tree, v(3), &names);
        assert_eq!(record.distance, None);
        assert_eq!(record.route, None);
        assert_eq!(record.to, 'x');
    }
}
