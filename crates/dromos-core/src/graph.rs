//! Adjacency-list graph storage.
//!
//! Vertices live in a lazily-populated slot array keyed by dense
//! [`VertexId`] indices: referencing an index creates the vertex, storage
//! grows geometrically and never shrinks. Each vertex owns its outgoing
//! edges.
//!
//! Edges are directed. [`Graph::add_edge`] inserts exactly one `from -> to`
//! arc; router files list each direction of a link explicitly. Callers that
//! want undirected semantics in one call use
//! [`Graph::add_undirected_edge`], which performs the symmetric double
//! insertion.

use dromos_common::{VertexId, Weight};

/// A directed weighted arc to another vertex.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Edge {
    /// The destination vertex this edge points to.
    pub target: VertexId,
    /// The cost of traveling along this edge.
    pub weight: Weight,
}

/// A vertex and its outgoing edges.
///
/// No traversal state lives here; shortest-path runs keep their own
/// distance/predecessor maps so that runs over a shared graph cannot
/// interfere.
#[derive(Clone, Debug, Default)]
pub struct Vertex {
    edges: Vec<Edge>,
}

impl Vertex {
    /// Returns the outgoing edges in insertion order.
    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Returns the number of outgoing edges.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.edges.len()
    }

    /// Finds the first edge pointing at `target`, if any. O(degree).
    #[must_use]
    pub fn edge_to(&self, target: VertexId) -> Option<&Edge> {
        self.edges.iter().find(|e| e.target == target)
    }

    fn push_edge(&mut self, edge: Edge) {
        self.edges.push(edge);
    }
}

/// Adjacency-list graph over dense vertex indices.
///
/// The slot array is grown to `max(2 * current, index + 4)` whenever an
/// out-of-range index is referenced, and never shrinks. Unreferenced slots
/// in between stay empty until something names them.
///
/// Duplicate and self edges are not rejected; callers that insert them get
/// redundant-edge semantics ([`Vertex::edge_to`] returns the first match).
#[derive(Clone, Debug, Default)]
pub struct Graph {
    vertices: Vec<Option<Vertex>>,
    vertex_count: usize,
    edge_count: usize,
}

impl Graph {
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of populated vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Returns the number of directed edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Returns the size of the slot array, i.e. one past the highest index
    /// ever referenced. Useful for sizing per-run scratch structures.
    #[must_use]
    pub fn slot_count(&self) -> usize {
        self.vertices.len()
    }

    /// Ensures a vertex exists at `id`. Idempotent: an existing vertex is
    /// left untouched.
    pub fn add_vertex(&mut self, id: VertexId) {
        let index = id.index();
        if index >= self.vertices.len() {
            let grown = (self.vertices.len() * 2).max(index + 4);
            self.vertices.resize_with(grown, || None);
        }

        if self.vertices[index].is_none() {
            self.vertices[index] = Some(Vertex::default());
            self.vertex_count += 1;
        }
    }

    /// Appends one directed edge `from -> to`, creating either endpoint if
    /// it does not exist yet.
    pub fn add_edge(&mut self, from: VertexId, to: VertexId, weight: Weight) {
        self.add_vertex(from);
        self.add_vertex(to);

        self.vertices[from.index()]
            .as_mut()
            .expect("endpoint just created")
            .push_edge(Edge { target: to, weight });
        self.edge_count += 1;
    }

    /// Inserts the symmetric pair of directed edges `a -> b` and `b -> a`.
    pub fn add_undirected_edge(&mut self, a: VertexId, b: VertexId, weight: Weight) {
        self.add_edge(a, b, weight);
        self.add_edge(b, a, weight);
    }

    /// Returns the vertex at `id`, or `None` if that slot was never
    /// populated. No side effects.
    #[must_use]
    pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.vertices.get(id.index()).and_then(Option::as_ref)
    }

    /// Returns the first edge `from -> to`, or `None` if either the vertex
    /// or such an edge is absent. O(degree of `from`).
    #[must_use]
    pub fn edge(&self, from: VertexId, to: VertexId) -> Option<&Edge> {
        self.vertex(from)?.edge_to(to)
    }

    /// Iterates populated vertex ids in index order.
    pub fn vertex_ids(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.vertices
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|_| VertexId::new(i as u32)))
    }

    /// Sum of all edge weights.
    #[must_use]
    pub fn total_weight(&self) -> Weight {
        self.vertices
            .iter()
            .flatten()
            .flat_map(|v| v.edges.iter())
            .map(|e| e.weight)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(id: u32) -> VertexId {
        VertexId::new(id)
    }

    #[test]
    fn test_add_vertex_is_idempotent() {
        let mut graph = Graph::new();
        graph.add_vertex(v(2));
        graph.add_vertex(v(2));

        assert_eq!(graph.vertex_count(), 1);
        assert!(graph.vertex(v(2)).is_some());
        assert_eq!(graph.vertex(v(2)).unwrap().degree(), 0);
    }

    #[test]
    fn test_lazy_slots_stay_empty() {
        let mut graph = Graph::new();
        graph.add_vertex(v(10));

        assert_eq!(graph.vertex_count(), 1);
        assert!(graph.slot_count() >= 11);
        assert!(graph.vertex(v(3)).is_none());
        assert!(graph.vertex(v(999)).is_none());
    }

    #[test]
    fn test_storage_growth_never_shrinks() {
        let mut graph = Graph::new();
        graph.add_vertex(v(0));
        let after_first = graph.slot_count();
        graph.add_vertex(v(1));
        assert!(graph.slot_count() >= after_first);

        graph.add_vertex(v(50));
        let after_big = graph.slot_count();
        graph.add_vertex(v(2));
        assert_eq!(graph.slot_count(), after_big);
    }

    #[test]
    fn test_add_edge_creates_endpoints() {
        let mut graph = Graph::new();
        graph.add_edge(v(0), v(1), 4);

        assert_eq!(graph.vertex_count(), 2);
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.edge(v(0), v(1)), Some(&Edge { target: v(1), weight: 4 }));
    }

    #[test]
    fn test_add_edge_is_directed() {
        let mut graph = Graph::new();
        graph.add_edge(v(0), v(1), 4);

        assert!(graph.edge(v(1), v(0)).is_none());
    }

    #[test]
    fn test_add_undirected_edge_populates_both_endpoints() {
        let mut graph = Graph::new();
        graph.add_undirected_edge(v(0), v(1), 7);

        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.edge(v(0), v(1)).unwrap().weight, 7);
        assert_eq!(graph.edge(v(1), v(0)).unwrap().weight, 7);
    }

    #[test]
    fn test_edge_lookup_misses_are_none() {
        let mut graph = Graph::new();
        graph.add_edge(v(0), v(1), 4);

        assert!(graph.edge(v(0), v(2)).is_none());
        assert!(graph.edge(v(5), v(0)).is_none());
    }

    #[test]
    fn test_duplicate_edge_first_match_wins_on_lookup() {
        let mut graph = Graph::new();
        graph.add_edge(v(0), v(1), 4);
        graph.add_edge(v(0), v(1), 9);

        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.edge(v(0), v(1)).unwrap().weight, 4);
    }

    #[test]
    fn test_vertex_ids_in_index_order() {
        let mut graph = Graph::new();
        graph.add_vertex(v(5));
        graph.add_vertex(v(1));
        graph.add_vertex(v(3));

        let ids: Vec<VertexId> = graph.vertex_ids().collect();
        assert_eq!(ids, vec![v(1), v(3), v(5)]);
    }

    #[test]
    fn test_total_weight() {
        let mut graph = Graph::new();
        graph.add_edge(v(0), v(1), 4);
        graph.add_edge(v(1), v(2), 6);

        assert_eq!(graph.total_weight(), 10);
    }
}
