//! Identifier and scalar types for graph elements.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a vertex in the network graph.
///
/// Internally a dense zero-based `u32` index. The character-based node names
/// seen in router files are a boundary concern; by the time an identifier
/// reaches the core it has already been reduced to this index.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[repr(transparent)]
pub struct VertexId(pub u32);

impl VertexId {
    /// Creates a new VertexId from a raw u32 value.
    #[inline]
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the raw u32 value.
    #[inline]
    #[must_use]
    pub const fn as_u32(self) -> u32 {
        self.0
    }

    /// Returns the identifier as a usize, suitable for array indexing.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VertexId({})", self.0)
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for VertexId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl From<VertexId> for u32 {
    fn from(id: VertexId) -> Self {
        id.0
    }
}

/// Edge weight and path distance scalar.
///
/// Weights are non-negative by construction, which is what makes Dijkstra's
/// settled-vertex invariant hold.
pub type Weight = u64;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_id_roundtrip() {
        let id = VertexId::new(7);
        assert_eq!(id.as_u32(), 7);
        assert_eq!(id.index(), 7);
        assert_eq!(u32::from(id), 7);
        assert_eq!(VertexId::from(7u32), id);
    }

    #[test]
    fn test_vertex_id_ordering() {
        assert!(VertexId::new(1) < VertexId::new(2));
        assert_eq!(VertexId::default(), VertexId::new(0));
    }

    #[test]
    fn test_vertex_id_display() {
        assert_eq!(VertexId::new(3).to_string(), "3");
        assert_eq!(format!("{:?}", VertexId::new(3)), "VertexId(3)");
    }
}
