//! Edge storage with adjacency indexes.

use super::types::{Edge, Kind, Vertex};
use indexmap::IndexSet;
use std::collections::HashMap;

/// Stored edges in insertion order, indexed by endpoint.
///
/// Each edge is stored exactly once, in the orientation it was first added.
/// For undirected sets `(u, v)` and `(v, u)` are the same edge, so lookups
/// try both orientations.
#[derive(Debug, Clone)]
pub struct EdgeSet {
    kind: Kind,
    edges: IndexSet<Edge>,
    // Adjacency indexes over the stored orientation
    outgoing: HashMap<Vertex, IndexSet<Vertex>>,
    incoming: HashMap<Vertex, IndexSet<Vertex>>,
}

impl EdgeSet {
    /// Create an empty set with the given semantics.
    pub fn new(kind: Kind) -> Self {
        Self {
            kind,
            edges: IndexSet::new(),
            outgoing: HashMap::new(),
            incoming: HashMap::new(),
        }
    }

    /// Adjacency semantics of this set.
    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// The stored orientation of edge `(u, v)`, if present.
    pub fn find(&self, u: Vertex, v: Vertex) -> Option<Edge> {
        if self.edges.contains(&(u, v)) {
            return Some((u, v));
        }
        match self.kind {
            Kind::Undirected if self.edges.contains(&(v, u)) => Some((v, u)),
            _ => None,
        }
    }

    /// Whether edge `(u, v)` is present.
    pub fn contains(&self, u: Vertex, v: Vertex) -> bool {
        self.find(u, v).is_some()
    }

    /// Store `(u, v)` unless it is already present.
    ///
    /// Returns `true` if the edge was newly stored.
    pub fn insert(&mut self, u: Vertex, v: Vertex) -> bool {
        if self.contains(u, v) {
            return false;
        }
        self.edges.insert((u, v));
        self.outgoing.entry(u).or_default().insert(v);
        self.incoming.entry(v).or_default().insert(u);
        true
    }

    /// Remove edge `(u, v)` in whichever orientation it is stored.
    ///
    /// Returns `true` if an edge was removed.
    pub fn remove(&mut self, u: Vertex, v: Vertex) -> bool {
        let Some((source, target)) = self.find(u, v) else {
            return false;
        };
        self.edges.shift_remove(&(source, target));
        if let Some(targets) = self.outgoing.get_mut(&source) {
            targets.shift_remove(&target);
        }
        if let Some(sources) = self.incoming.get_mut(&target) {
            sources.shift_remove(&source);
        }
        true
    }

    /// Remove every edge with `vertex` as either endpoint.
    ///
    /// Returns the number of edges removed.
    pub fn remove_incident(&mut self, vertex: Vertex) -> usize {
        let targets = self.outgoing.remove(&vertex).unwrap_or_default();
        let sources = self.incoming.remove(&vertex).unwrap_or_default();
        let mut removed = 0;

        for target in targets {
            self.edges.shift_remove(&(vertex, target));
            if target != vertex {
                if let Some(set) = self.incoming.get_mut(&target) {
                    set.shift_remove(&vertex);
                }
            }
            removed += 1;
        }

        for source in sources {
            // Self-edge already handled above
            if source == vertex {
                continue;
            }
            self.edges.shift_remove(&(source, vertex));
            if let Some(set) = self.outgoing.get_mut(&source) {
                set.shift_remove(&vertex);
            }
            removed += 1;
        }

        removed
    }

    /// Number of stored edges whose source is `vertex`.
    pub fn out_count(&self, vertex: Vertex) -> usize {
        self.outgoing.get(&vertex).map_or(0, IndexSet::len)
    }

    /// Number of stored edges whose target is `vertex`.
    pub fn in_count(&self, vertex: Vertex) -> usize {
        self.incoming.get(&vertex).map_or(0, IndexSet::len)
    }

    /// Number of stored edges touching `vertex`, a self-edge counted once.
    pub fn incident_count(&self, vertex: Vertex) -> usize {
        let self_edge = usize::from(self.edges.contains(&(vertex, vertex)));
        self.out_count(vertex) + self.in_count(vertex) - self_edge
    }

    /// Targets of stored edges leaving `vertex`.
    pub fn targets(&self, vertex: Vertex) -> impl Iterator<Item = Vertex> + '_ {
        self.outgoing.get(&vertex).into_iter().flatten().copied()
    }

    /// Sources of stored edges entering `vertex`.
    pub fn sources(&self, vertex: Vertex) -> impl Iterator<Item = Vertex> + '_ {
        self.incoming.get(&vertex).into_iter().flatten().copied()
    }

    /// Every vertex joined to `vertex` by a stored edge in either orientation.
    pub fn neighbors(&self, vertex: Vertex) -> Vec<Vertex> {
        let mut neighbors: Vec<Vertex> = self.targets(vertex).collect();
        neighbors.extend(self.sources(vertex).filter(|&source| source != vertex));
        neighbors
    }

    /// Number of stored edges.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Whether no edge is stored.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Stored edges in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = Edge> + '_ {
        self.edges.iter().copied()
    }

    /// Drop every edge.
    pub fn clear(&mut self) {
        self.edges.clear();
        self.outgoing.clear();
        self.incoming.clear();
    }
}
