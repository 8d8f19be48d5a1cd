//! Per-vertex storage for search results: best weight and predecessor.

use crate::error::{GraphError, Result};
use crate::graph::{Graph, Vertex};
use log::warn;
use std::collections::HashMap;

/// Read/write access to the best known weight and predecessor of a vertex.
///
/// Unset vertices read as weight `+∞` and predecessor `0`.
pub trait PathStore {
    /// Best known distance from the source to `vertex`.
    fn weight(&self, vertex: Vertex) -> f64;

    /// Record `weight` as the best known distance to `vertex`.
    fn set_weight(&mut self, vertex: Vertex, weight: f64);

    /// Predecessor of `vertex` on its best known path, or 0 for none.
    fn predecessor(&self, vertex: Vertex) -> Vertex;

    /// Record `predecessor` as the vertex before `vertex` on its best path.
    fn set_predecessor(&mut self, vertex: Vertex, predecessor: Vertex);

    /// Check that every id up to `max_vertex` can be stored.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::CapacityExceeded`] if the store is too small.
    fn ensure_capacity(&self, _max_vertex: Vertex) -> Result<()> {
        Ok(())
    }
}

/// Arrays indexed directly by vertex id.
///
/// Sized once, at construction, and never resized: vertices added to the
/// graph afterwards may fall outside it. Reads outside the bound give the
/// unset values and writes there are dropped.
#[derive(Debug, Clone)]
pub struct DenseStore {
    weights: Vec<f64>,
    predecessors: Vec<Vertex>,
}

impl DenseStore {
    /// A store for ids `0..capacity`.
    pub fn new(capacity: usize) -> Self {
        Self {
            weights: vec![f64::INFINITY; capacity],
            predecessors: vec![0; capacity],
        }
    }

    /// A store large enough for every vertex currently in `graph`.
    pub fn for_graph(graph: &Graph) -> Self {
        Self::new(graph.max_vertex() + 1)
    }

    /// Number of slots (valid ids are `0..capacity`).
    pub fn capacity(&self) -> usize {
        self.weights.len()
    }
}

impl PathStore for DenseStore {
    fn weight(&self, vertex: Vertex) -> f64 {
        self.weights.get(vertex).copied().unwrap_or(f64::INFINITY)
    }

    fn set_weight(&mut self, vertex: Vertex, weight: f64) {
        match self.weights.get_mut(vertex) {
            Some(slot) => *slot = weight,
            None => warn!("Dropping weight of vertex {vertex}: outside dense store"),
        }
    }

    fn predecessor(&self, vertex: Vertex) -> Vertex {
        self.predecessors.get(vertex).copied().unwrap_or(0)
    }

    fn set_predecessor(&mut self, vertex: Vertex, predecessor: Vertex) {
        match self.predecessors.get_mut(vertex) {
            Some(slot) => *slot = predecessor,
            None => warn!("Dropping predecessor of vertex {vertex}: outside dense store"),
        }
    }

    fn ensure_capacity(&self, max_vertex: Vertex) -> Result<()> {
        if max_vertex < self.capacity() {
            Ok(())
        } else {
            Err(GraphError::CapacityExceeded {
                vertex: max_vertex,
                capacity: self.capacity(),
            })
        }
    }
}

/// Hash maps keyed by vertex id; grows with the graph.
#[derive(Debug, Clone, Default)]
pub struct MapStore {
    weights: HashMap<Vertex, f64>,
    predecessors: HashMap<Vertex, Vertex>,
}

impl MapStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl PathStore for MapStore {
    fn weight(&self, vertex: Vertex) -> f64 {
        self.weights.get(&vertex).copied().unwrap_or(f64::INFINITY)
    }

    fn set_weight(&mut self, vertex: Vertex, weight: f64) {
        self.weights.insert(vertex, weight);
    }

    fn predecessor(&self, vertex: Vertex) -> Vertex {
        self.predecessors.get(&vertex).copied().unwrap_or(0)
    }

    fn set_predecessor(&mut self, vertex: Vertex, predecessor: Vertex) {
        if predecessor == 0 {
            self.predecessors.remove(&vertex);
        } else {
            self.predecessors.insert(vertex, predecessor);
        }
    }
}
