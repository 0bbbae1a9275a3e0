//! Loading router networks from textual edge lists.
//!
//! A network file holds one link per line: `<left> <right> <weight>`, where
//! the endpoints are single-character node names. Names are consecutive
//! characters offset from a fixed first node (`u` by default), so `u v 3`
//! becomes an edge between vertex 0 and vertex 1 with weight 3. The name
//! mapping stays on this side of the boundary; the core only ever sees
//! dense [`VertexId`] indices.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use dromos_common::{Error, Result, VertexId, Weight};
use dromos_core::Graph;

/// Mapping between single-character node names and dense vertex indices.
#[derive(Clone, Copy, Debug)]
pub struct NodeNames {
    first: char,
}

impl NodeNames {
    /// Creates a mapping whose first node is named `first`.
    #[must_use]
    pub fn new(first: char) -> Self {
        Self { first }
    }

    /// Resolves a node name to its vertex index.
    ///
    /// Names before the first node have no index and are rejected.
    pub fn id(&self, name: char) -> Result<VertexId> {
        (name as u32)
            .checked_sub(self.first as u32)
            .map(VertexId::new)
            .ok_or(Error::NodeOutOfRange(name))
    }

    /// Renders a vertex index back into its node name.
    #[must_use]
    pub fn name(&self, id: VertexId) -> char {
        char::from_u32(self.first as u32 + id.as_u32()).unwrap_or('?')
    }
}

impl Default for NodeNames {
    fn default() -> Self {
        Self::new('u')
    }
}

/// Loads a network graph from the file at `path`.
pub fn load_graph(path: &Path, names: &NodeNames) -> Result<Graph> {
    let file = File::open(path)?;
    let graph = parse_network(BufReader::new(file), names)?;
    tracing::debug!(
        path = %path.display(),
        nodes = graph.vertex_count(),
        edges = graph.edge_count(),
        "loaded network"
    );
    Ok(graph)
}

/// Parses a network from any line-oriented reader.
///
/// Blank lines are skipped. Anything else that is not exactly three
/// well-formed fields fails the whole load; a partially built graph is
/// discarded with the error.
pub fn parse_network(reader: impl BufRead, names: &NodeNames) -> Result<Graph> {
    let mut graph = Graph::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let record = line.trim();
        if record.is_empty() {
            continue;
        }

        let (left, right, weight) = parse_record(record, index + 1, names)?;
        graph.add_edge(left, right, weight);
    }

    if graph.vertex_count() == 0 {
        return Err(Error::EmptyNetwork);
    }
    Ok(graph)
}

/// Parses one `<left> <right> <weight>` record.
fn parse_record(
    record: &str,
    line: usize,
    names: &NodeNames,
) -> Result<(VertexId, VertexId, Weight)> {
    let fields: Vec<&str> = record.split_whitespace().collect();
    if fields.len() != 3 {
        return Err(Error::MalformedRecord {
            line,
            reason: format!("expected 3 fields, found {}", fields.len()),
        });
    }

    let left = single_char(fields[0], line)?;
    let right = single_char(fields[1], line)?;
    let weight: Weight = fields[2].parse().map_err(|_| Error::MalformedRecord {
        line,
        reason: format!("invalid weight {:?}", fields[2]),
    })?;

    Ok((names.id(left)?, names.id(right)?, weight))
}

fn single_char(field: &str, line: usize) -> Result<char> {
    let mut chars = field.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(Error::MalformedRecord {
            line,
            reason: format!("node name {field:?} is not a single character"),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_node_names_roundtrip() {
        let names = NodeNames::default();
        let id = names.id('w').unwrap();
        assert_eq!(id, VertexId::new(2));
        assert_eq!(names.name(id), 'w');
    }

    #[test]
    fn test_node_name_before_first_is_rejected() {
        let names = NodeNames::new('u');
        assert!(matches!(names.id('a'), Err(Error::NodeOutOfRange('a'))));
    }

    #[test]
    fn test_parse_simple_network() {
        let names = NodeNames::default();
        let input = "u v 1\nv w 2\nu w 5\n";

        let graph = parse_network(Cursor::new(input), &names).unwrap();
        assert_eq!(graph.vertex_count(), 3);
        assert_eq!(graph.edge_count(), 3);
        assert_eq!(
            graph
                .edge(VertexId::new(0), VertexId::new(1))
                .unwrap()
                .weight,
            1
        );
    }

    #[test]
    fn test_parse_skips_blank_lines() {
        let names = NodeNames::default();
        let input = "u v 1\n\n  \nv w 2\n";

        let graph = parse_network(Cursor::new(input), &names).unwrap();
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn test_wrong_field_count_reports_line() {
        let names = NodeNames::default();
        let input = "u v 1\nu v\n";

        let err = parse_network(Cursor::new(input), &names).unwrap_err();
        match err {
            Error::MalformedRecord { line, .. } => assert_eq!(line, 2),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_bad_weight_is_malformed() {
        let names = NodeNames::default();
        let input = "u v lots\n";

        let err = parse_network(Cursor::new(input), &names).unwrap_err();
        assert!(matches!(err, Error::MalformedRecord { line: 1, .. }));
    }

    #[test]
    fn test_multi_char_name_is_malformed() {
        let names = NodeNames::default();
        let input = "uu v 1\n";

        let err = parse_network(Cursor::new(input), &names).unwrap_err();
        assert!(matches!(err, Error::MalformedRecord { line: 1, .. }));
    }

    #[test]
    fn test_empty_input_is_empty_network() {
        let names = NodeNames::default();
        let err = parse_network(Cursor::new(""), &names).unwrap_err();
        assert!(matches!(err, Error::EmptyNetwork));
    }

    #[test]
    fn test_records_insert_directed_edges() {
        // One record per direction; a single record does not imply its
        // reverse.
        let names = NodeNames::default();
        let graph = parse_network(Cursor::new("u v 4\n"), &names).unwrap();

        assert!(graph.edge(VertexId::new(0), VertexId::new(1)).is_some());
        assert!(graph.edge(VertexId::new(1), VertexId::new(0)).is_none());
    }
}
