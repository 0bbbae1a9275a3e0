//! Single-source shortest paths (Dijkstra's algorithm).
//!
//! Each call to [`shortest_path`] is an independent run: it allocates fresh
//! distance, predecessor, and visited state, drives its own
//! [`IndexedMinHeap`], and returns a [`PathTree`] the caller reads results
//! out of. Nothing is written back into the graph.
//!
//! Two behavioral details are deliberate and relied on by callers:
//!
//! - Relaxation is non-strict (`dist[u] + w <= dist[v]`), so an
//!   equal-length path found later overwrites the predecessor without
//!   changing the distance.
//! - When a target is given, the run stops as soon as the target is popped.
//!   Distances to vertices not yet settled at that point are simply absent
//!   from the result. Safe because weights are non-negative.

use dromos_common::collections::{
    dromos_map_with_capacity, dromos_set_with_capacity, DromosMap, DromosSet,
};
use dromos_common::{VertexId, Weight};

use crate::graph::Graph;
use crate::heap::IndexedMinHeap;

/// Result of one shortest-path run from a fixed source.
///
/// Unreachable vertices are an ordinary outcome: [`PathTree::distance`] and
/// [`PathTree::path_to`] return `None` for them, never an error.
#[derive(Clone, Debug)]
pub struct PathTree {
    source: VertexId,
    dist: DromosMap<VertexId, Weight>,
    prev: DromosMap<VertexId, VertexId>,
}

impl PathTree {
    /// The source vertex this run started from.
    #[must_use]
    pub fn source(&self) -> VertexId {
        self.source
    }

    /// Shortest known distance from the source to `vertex`.
    ///
    /// `Some(0)` for the source itself, `None` if `vertex` was unreachable
    /// (or not yet settled when an early-exit run stopped).
    #[must_use]
    pub fn distance(&self, vertex: VertexId) -> Option<Weight> {
        self.dist.get(&vertex).copied()
    }

    /// The vertex preceding `vertex` on its shortest path from the source.
    #[must_use]
    pub fn predecessor(&self, vertex: VertexId) -> Option<VertexId> {
        self.prev.get(&vertex).copied()
    }

    /// Recovers the full path from the source to `target` by walking
    /// predecessor links, returned source-first.
    ///
    /// `path_to(source)` is the zero-edge path `[source]`. Returns `None`
    /// when `target` is unreachable.
    #[must_use]
    pub fn path_to(&self, target: VertexId) -> Option<Vec<VertexId>> {
        self.dist.get(&target)?;

        let mut path = vec![target];
        let mut current = target;
        while current != self.source {
            if path.len() > self.prev.len() + 1 {
                return None;
            }
            current = *self.prev.get(&current)?;
            path.push(current);
        }

        path.reverse();
        Some(path)
    }
}

/// Runs Dijkstra's algorithm over `graph` from `source`.
///
/// With `target: Some(t)` the run settles vertices only until `t` is popped
/// off the heap; with `None` it settles everything reachable. Computing an
/// all-pairs table means one run per ordered pair - O(V * E * log V) in
/// total, which is fine at the tens-of-nodes scale this targets but is the
/// first thing to replace if the networks ever grow.
#[must_use]
pub fn shortest_path(graph: &Graph, source: VertexId, target: Option<VertexId>) -> PathTree {
    let n = graph.vertex_count();
    let mut dist: DromosMap<VertexId, Weight> = dromos_map_with_capacity(n);
    let mut prev: DromosMap<VertexId, VertexId> = dromos_map_with_capacity(n);
    let mut visited: DromosSet<VertexId> = dromos_set_with_capacity(n);

    dist.insert(source, 0);

    let mut heap = IndexedMinHeap::with_capacity(graph.slot_count());
    heap.push(source, 0);

    while let Some(u) = heap.pop() {
        if target == Some(u) {
            break;
        }
        visited.insert(u);

        let Some(vertex) = graph.vertex(u) else {
            continue;
        };
        let dist_u = dist[&u];

        for edge in vertex.edges() {
            if visited.contains(&edge.target) {
                continue;
            }

            let candidate = dist_u.saturating_add(edge.weight);
            let improves = match dist.get(&edge.target) {
                Some(&known) => candidate <= known,
                None => true,
            };

            if improves {
                dist.insert(edge.target, candidate);
                prev.insert(edge.target, u);
                heap.push(edge.target, candidate);
            }
        }
    }

    PathTree { source, dist, prev }
}
