//! The Dromos algorithmic core.
//!
//! This is where shortest paths actually get computed. The crate has three
//! pieces, leaf-first:
//!
//! - [`heap`] - An indexed binary min-heap with O(log n) decrease-key
//! - [`graph`] - Adjacency-list storage keyed by dense [`VertexId`]s
//! - [`dijkstra`] - The shortest-path engine, one run per (source, target)
//!
//! The core is single-threaded and synchronous: a [`Graph`] is built once,
//! then read by a sequence of independent [`dijkstra::shortest_path`] runs.
//! Each run keeps its own distance/predecessor state, so repeated runs (or
//! runs on different threads sharing a `&Graph`) cannot interfere.
//!
//! [`VertexId`]: dromos_common::VertexId
//! [`Graph`]: graph::Graph

pub mod dijkstra;
pub mod graph;
pub mod heap;

pub use dijkstra::{shortest_path, PathTree};
pub use graph::{Edge, Graph, Vertex};
pub use heap::IndexedMinHeap;
