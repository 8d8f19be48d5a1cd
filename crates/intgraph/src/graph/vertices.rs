//! Live vertex ids plus the pool of ids freed by removal.

use super::types::Vertex;
use indexmap::IndexSet;
use std::collections::BTreeSet;

/// Tracks live vertices in insertion order and recycles removed ids.
///
/// Invariants: `live` and `free` are disjoint, and every id in `1..=max`
/// ever handed out is either live or free.
#[derive(Debug, Clone, Default)]
pub struct VertexSet {
    live: IndexSet<Vertex>,
    free: BTreeSet<Vertex>,
    max: Vertex,
}

impl VertexSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty set with room for `capacity` vertices.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            live: IndexSet::with_capacity(capacity),
            ..Self::default()
        }
    }

    /// Hand out the next id.
    ///
    /// `1` for an empty set, otherwise the smallest freed id, otherwise
    /// `max() + 1`.
    pub fn allocate(&mut self) -> Vertex {
        let vertex = if self.live.is_empty() {
            self.free.clear();
            1
        } else if let Some(recycled) = self.free.pop_first() {
            recycled
        } else {
            self.max + 1
        };
        self.live.insert(vertex);
        self.max = self.max.max(vertex);
        vertex
    }

    /// Retire `vertex`, returning its id to the free pool.
    ///
    /// Returns `false` if `vertex` was not live.
    pub fn release(&mut self, vertex: Vertex) -> bool {
        if !self.live.shift_remove(&vertex) {
            return false;
        }
        self.free.insert(vertex);
        if vertex == self.max {
            self.max = self.live.iter().copied().max().unwrap_or(0);
        }
        true
    }

    /// Whether `vertex` is live.
    pub fn contains(&self, vertex: Vertex) -> bool {
        self.live.contains(&vertex)
    }

    /// Number of live vertices.
    pub fn len(&self) -> usize {
        self.live.len()
    }

    /// Whether no vertex is live.
    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    /// Largest live id, or 0 when empty.
    pub fn max(&self) -> Vertex {
        self.max
    }

    /// Live vertices in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = Vertex> + '_ {
        self.live.iter().copied()
    }

    /// Ids waiting to be reused, smallest first.
    pub fn free_ids(&self) -> impl Iterator<Item = Vertex> + '_ {
        self.free.iter().copied()
    }

    /// Forget every vertex and every freed id.
    pub fn clear(&mut self) {
        self.live.clear();
        self.free.clear();
        self.max = 0;
    }
}
