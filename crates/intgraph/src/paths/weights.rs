//! Edge weights and distance estimates for shortest-path search.

use crate::graph::{EdgeId, Graph, Kind, Vertex};
use std::collections::HashMap;

/// Static edge weights plus an optional estimate of the remaining distance.
///
/// Weights must be non-negative. The estimate must never exceed the true
/// remaining distance to the destination (admissible) and must be a pure
/// function of the vertex; the default of 0 turns A* into Dijkstra.
pub trait EdgeWeights {
    /// Weight of edge `(u, v)`, `+∞` if there is no such edge.
    fn edge_weight(&self, u: Vertex, v: Vertex) -> f64;

    /// Estimated distance from `vertex` to the destination.
    fn estimated_distance(&self, _vertex: Vertex) -> f64 {
        0.0
    }
}

impl<F> EdgeWeights for F
where
    F: Fn(Vertex, Vertex) -> f64,
{
    fn edge_weight(&self, u: Vertex, v: Vertex) -> f64 {
        self(u, v)
    }
}

/// Edge weights combined with a distance estimate, for A* search.
#[derive(Debug, Clone)]
pub struct WithHeuristic<W, H> {
    weights: W,
    heuristic: H,
}

impl<W, H> WithHeuristic<W, H>
where
    W: EdgeWeights,
    H: Fn(Vertex) -> f64,
{
    /// Use `heuristic` as the estimate on top of `weights`.
    pub fn new(weights: W, heuristic: H) -> Self {
        Self { weights, heuristic }
    }
}

impl<W, H> EdgeWeights for WithHeuristic<W, H>
where
    W: EdgeWeights,
    H: Fn(Vertex) -> f64,
{
    fn edge_weight(&self, u: Vertex, v: Vertex) -> f64 {
        self.weights.edge_weight(u, v)
    }

    fn estimated_distance(&self, vertex: Vertex) -> f64 {
        (self.heuristic)(vertex)
    }
}

/// Edge weights keyed by [`Graph::edge_id`].
///
/// For an undirected graph `(u, v)` and `(v, u)` share one weight.
#[derive(Debug, Clone)]
pub struct EdgeWeightMap {
    kind: Kind,
    weights: HashMap<EdgeId, f64>,
}

impl EdgeWeightMap {
    /// An empty map with the edge semantics of `kind`.
    pub fn new(kind: Kind) -> Self {
        Self {
            kind,
            weights: HashMap::new(),
        }
    }

    /// An empty map with the edge semantics of `graph`.
    pub fn for_graph(graph: &Graph) -> Self {
        Self::new(graph.kind())
    }

    /// Set the weight of edge `(u, v)`, returning the previous weight.
    pub fn insert(&mut self, u: Vertex, v: Vertex, weight: f64) -> Option<f64> {
        self.weights.insert(self.kind.edge_id(u, v), weight)
    }

    /// Weight of edge `(u, v)` if one was set.
    pub fn get(&self, u: Vertex, v: Vertex) -> Option<f64> {
        self.weights.get(&self.kind.edge_id(u, v)).copied()
    }

    /// Forget the weight of edge `(u, v)`.
    pub fn remove(&mut self, u: Vertex, v: Vertex) -> Option<f64> {
        self.weights.remove(&self.kind.edge_id(u, v))
    }

    /// Number of weighted edges.
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Whether no edge has a weight.
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }
}

impl EdgeWeights for EdgeWeightMap {
    fn edge_weight(&self, u: Vertex, v: Vertex) -> f64 {
        self.get(u, v).unwrap_or(f64::INFINITY)
    }
}
