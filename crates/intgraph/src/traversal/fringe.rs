//! Fringes: the pending-work collections that order a traversal.

use crate::graph::Vertex;
use std::cmp::Reverse;
use std::collections::{BinaryHeap, VecDeque};

/// Pending vertices of a traversal.
///
/// The order in which [`Fringe::pop`] hands vertices back decides the kind of
/// search: first-in-first-out gives breadth-first, last-in-first-out gives
/// depth-first, a priority order gives best-first.
pub trait Fringe {
    /// Add `vertex` to the fringe.
    fn push(&mut self, vertex: Vertex);

    /// Take the next vertex, or `None` when the fringe is empty.
    fn pop(&mut self) -> Option<Vertex>;

    /// Whether no vertex is pending.
    fn is_empty(&self) -> bool;

    /// Drop every pending vertex.
    fn clear(&mut self);
}

/// First in, first out.
impl Fringe for VecDeque<Vertex> {
    fn push(&mut self, vertex: Vertex) {
        self.push_back(vertex);
    }

    fn pop(&mut self) -> Option<Vertex> {
        self.pop_front()
    }

    fn is_empty(&self) -> bool {
        VecDeque::is_empty(self)
    }

    fn clear(&mut self) {
        VecDeque::clear(self);
    }
}

/// Last in, first out.
impl Fringe for Vec<Vertex> {
    fn push(&mut self, vertex: Vertex) {
        Vec::push(self, vertex);
    }

    fn pop(&mut self) -> Option<Vertex> {
        Vec::pop(self)
    }

    fn is_empty(&self) -> bool {
        Vec::is_empty(self)
    }

    fn clear(&mut self) {
        Vec::clear(self);
    }
}

/// Smallest vertex id first.
impl Fringe for BinaryHeap<Reverse<Vertex>> {
    fn push(&mut self, vertex: Vertex) {
        BinaryHeap::push(self, Reverse(vertex));
    }

    fn pop(&mut self) -> Option<Vertex> {
        BinaryHeap::pop(self).map(|Reverse(vertex)| vertex)
    }

    fn is_empty(&self) -> bool {
        BinaryHeap::is_empty(self)
    }

    fn clear(&mut self) {
        BinaryHeap::clear(self);
    }
}

/// Best-first fringe: smallest key first, ties broken by vertex id.
///
/// The key of a vertex is computed once, when it is pushed.
pub struct PriorityFringe<K, F> {
    key: F,
    heap: BinaryHeap<Reverse<(K, Vertex)>>,
}

impl<K, F> PriorityFringe<K, F>
where
    K: Ord,
    F: FnMut(Vertex) -> K,
{
    /// Create an empty fringe ordered by `key`.
    pub fn new(key: F) -> Self {
        Self {
            key,
            heap: BinaryHeap::new(),
        }
    }

    /// Number of pending entries (a vertex may be pending more than once).
    pub fn len(&self) -> usize {
        self.heap.len()
    }
}

impl<K, F> Fringe for PriorityFringe<K, F>
where
    K: Ord,
    F: FnMut(Vertex) -> K,
{
    fn push(&mut self, vertex: Vertex) {
        let key = (self.key)(vertex);
        self.heap.push(Reverse((key, vertex)));
    }

    fn pop(&mut self) -> Option<Vertex> {
        self.heap.pop().map(|Reverse((_, vertex))| vertex)
    }

    fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    fn clear(&mut self) {
        self.heap.clear();
    }
}
