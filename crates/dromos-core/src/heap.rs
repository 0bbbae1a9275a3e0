//! Indexed binary min-heap used as the Dijkstra priority queue.
//!
//! A plain binary heap makes decrease-key O(n) because you have to find the
//! entry first. This one keeps a position table from vertex id to heap slot,
//! so pushing a vertex that is already queued relocates it in O(log n)
//! instead of duplicating it.

use dromos_common::{VertexId, Weight};

/// One queued `(vertex, priority)` record.
#[derive(Clone, Copy, Debug)]
struct HeapEntry {
    vertex: VertexId,
    priority: Weight,
}

/// Binary min-heap over `(vertex, priority)` pairs with positional indexing.
///
/// Two tie-break rules are part of this heap's contract, because they decide
/// result ordering among equal-priority candidates:
///
/// - Sift-up stops only at a strictly-lesser ancestor priority. An equal
///   parent does not stop an element from bubbling past it.
/// - Pop refills the hole with the smaller child only while that child is
///   strictly smaller than the displaced last entry; otherwise the last
///   entry takes the hole.
pub struct IndexedMinHeap {
    entries: Vec<HeapEntry>,
    /// Vertex index -> current slot in `entries`, `None` when not queued.
    positions: Vec<Option<usize>>,
}

impl IndexedMinHeap {
    /// Creates an empty heap sized for vertices with indices below `capacity`.
    ///
    /// The position table grows on demand, so `capacity` is a sizing hint,
    /// not a hard limit.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            positions: vec![None; capacity],
        }
    }

    /// Returns the number of queued vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no vertices are queued.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the priority currently recorded for `vertex`, if queued.
    #[must_use]
    pub fn priority(&self, vertex: VertexId) -> Option<Weight> {
        let slot = *self.positions.get(vertex.index())?;
        slot.map(|s| self.entries[s].priority)
    }

    /// Queues `vertex` at `priority`, or decrease-keys it if already queued.
    ///
    /// A vertex with no current slot is appended as a new leaf; one that is
    /// already queued is re-prioritized in place. Either way the entry is
    /// then sifted toward the root. Pushing a queued vertex with a larger
    /// priority than its current one is a caller bug.
    pub fn push(&mut self, vertex: VertexId, priority: Weight) {
        if vertex.index() >= self.positions.len() {
            self.positions.resize(vertex.index() + 1, None);
        }

        let slot = match self.positions[vertex.index()] {
            Some(slot) => {
                debug_assert!(priority <= self.entries[slot].priority);
                slot
            }
            None => {
                self.entries.push(HeapEntry { vertex, priority });
                self.entries.len() - 1
            }
        };

        self.sift_up(slot, vertex, priority);
    }

    /// Removes and returns the minimum-priority vertex, or `None` when empty.
    pub fn pop(&mut self) -> Option<VertexId> {
        let root = self.entries.first()?.vertex;
        let last = self.entries.len() - 1;
        let mut hole = 0;

        // Walk the hole down, pulling up whichever child beats the displaced
        // last entry, until the last entry itself is the smallest candidate.
        loop {
            let min = self.min_slot(hole, last);
            if min == last {
                break;
            }

            self.entries[hole] = self.entries[min];
            self.positions[self.entries[hole].vertex.index()] = Some(hole);
            hole = min;
        }

        let moved = self.entries[last];
        self.entries[hole] = moved;
        self.positions[moved.vertex.index()] = Some(hole);
        self.entries.truncate(last);
        self.positions[root.index()] = None;

        Some(root)
    }

    /// Smallest-priority slot among the last entry and `hole`'s children.
    fn min_slot(&self, hole: usize, last: usize) -> usize {
        let mut min = last;

        let left = 2 * hole + 1;
        if left <= last && self.entries[left].priority < self.entries[min].priority {
            min = left;
        }

        let right = 2 * hole + 2;
        if right <= last && self.entries[right].priority < self.entries[min].priority {
            min = right;
        }

        min
    }

    /// Moves ancestors down until one with a strictly lesser priority is
    /// found, then writes `(vertex, priority)` into the freed slot.
    fn sift_up(&mut self, mut slot: usize, vertex: VertexId, priority: Weight) {
        while slot > 0 {
            let parent = (slot - 1) / 2;
            if self.entries[parent].priority < priority {
                break;
            }

            self.entries[slot] = self.entries[parent];
            self.positions[self.entries[slot].vertex.index()] = Some(slot);
            slot = parent;
        }

        self.entries[slot] = HeapEntry { vertex, priority };
        self.positions[vertex.index()] = Some(slot);
    }
}
