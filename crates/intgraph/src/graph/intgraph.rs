//! The [`Graph`] interface: vertex recycling, edges and adjacency queries.

use super::edges::EdgeSet;
use super::types::{Edge, EdgeId, Kind, Vertex};
use super::vertices::VertexSet;
use crate::error::{GraphError, Result};
use log::{debug, trace};

/// A directed or undirected graph over positive integer vertex ids.
///
/// `Graph` owns its vertices and edges. Engines built on it only borrow it,
/// so the borrow checker rules out mutation while a search is running.
#[derive(Debug, Clone)]
pub struct Graph {
    kind: Kind,
    vertices: VertexSet,
    edges: EdgeSet,
}

impl Graph {
    /// Create an empty graph with the given semantics.
    pub fn new(kind: Kind) -> Self {
        Self {
            kind,
            vertices: VertexSet::new(),
            edges: EdgeSet::new(kind),
        }
    }

    /// Create an empty directed graph.
    pub fn directed() -> Self {
        Self::new(Kind::Directed)
    }

    /// Create an empty undirected graph.
    pub fn undirected() -> Self {
        Self::new(Kind::Undirected)
    }

    /// Create an empty graph with room for `vertices` vertices.
    pub fn with_capacity(kind: Kind, vertices: usize) -> Self {
        Self {
            kind,
            vertices: VertexSet::with_capacity(vertices),
            edges: EdgeSet::new(kind),
        }
    }

    /// Adjacency semantics of this graph.
    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// Whether edges are ordered pairs.
    pub fn is_directed(&self) -> bool {
        self.kind.is_directed()
    }

    /// Number of live vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Largest live vertex id, or 0 for an empty graph.
    pub fn max_vertex(&self) -> Vertex {
        self.vertices.max()
    }

    /// Number of stored edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Whether the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Whether `vertex` is live.
    pub fn contains_vertex(&self, vertex: Vertex) -> bool {
        self.vertices.contains(vertex)
    }

    /// Whether edge `(u, v)` is present.
    ///
    /// Undirected graphs answer the same for `(v, u)`.
    pub fn contains_edge(&self, u: Vertex, v: Vertex) -> bool {
        self.contains_vertex(u) && self.contains_vertex(v) && self.edges.contains(u, v)
    }

    /// Number of edges leaving `vertex`.
    ///
    /// For undirected graphs this is the number of incident edges. Returns 0
    /// for a vertex that is not live.
    pub fn out_degree(&self, vertex: Vertex) -> usize {
        if !self.contains_vertex(vertex) {
            return 0;
        }
        match self.kind {
            Kind::Directed => self.edges.out_count(vertex),
            Kind::Undirected => self.edges.incident_count(vertex),
        }
    }

    /// Number of edges entering `vertex`.
    ///
    /// For undirected graphs this equals [`Graph::out_degree`].
    pub fn in_degree(&self, vertex: Vertex) -> usize {
        if !self.contains_vertex(vertex) {
            return 0;
        }
        match self.kind {
            Kind::Directed => self.edges.in_count(vertex),
            Kind::Undirected => self.edges.incident_count(vertex),
        }
    }

    /// Add a new vertex and return its id.
    ///
    /// Ids freed by [`Graph::remove_vertex`] are reused smallest first before
    /// the id space grows past [`Graph::max_vertex`].
    pub fn add_vertex(&mut self) -> Vertex {
        let recycled = self.vertices.free_ids().next();
        let vertex = self.vertices.allocate();
        if recycled == Some(vertex) {
            trace!("Recycled vertex id {vertex}");
        }
        debug!("Adding vertex: id={vertex}");
        vertex
    }

    /// Add edge `(u, v)` unless already present and return its id.
    ///
    /// The same id is returned whether or not the edge was new.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::InvalidVertex`] if either endpoint is not live.
    pub fn add_edge(&mut self, u: Vertex, v: Vertex) -> Result<EdgeId> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;
        if self.edges.insert(u, v) {
            debug!("Adding edge: ({u}, {v})");
        } else {
            trace!("Edge ({u}, {v}) already present");
        }
        Ok(self.edge_id(u, v))
    }

    /// Remove `vertex` and every edge incident to it.
    ///
    /// The id becomes available to [`Graph::add_vertex`]. Returns `false`
    /// (and does nothing) if `vertex` is not live.
    pub fn remove_vertex(&mut self, vertex: Vertex) -> bool {
        if !self.vertices.release(vertex) {
            return false;
        }
        let removed = self.edges.remove_incident(vertex);
        debug!("Deleting vertex: id={vertex}, incident edges={removed}");
        true
    }

    /// Remove edge `(u, v)`.
    ///
    /// Undirected graphs remove the edge whichever order it was added in.
    /// Returns `false` if the edge was not present.
    pub fn remove_edge(&mut self, u: Vertex, v: Vertex) -> bool {
        let removed = self.edges.remove(u, v);
        if removed {
            debug!("Deleting edge: ({u}, {v})");
        }
        removed
    }

    /// Live vertices in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = Vertex> + '_ {
        self.vertices.iter()
    }

    /// Vertices reachable from `vertex` by one edge.
    ///
    /// Directed graphs follow edges forwards; undirected graphs return every
    /// neighbour. Empty for a vertex that is not live.
    pub fn successors(&self, vertex: Vertex) -> Vec<Vertex> {
        if !self.contains_vertex(vertex) {
            return Vec::new();
        }
        match self.kind {
            Kind::Directed => self.edges.targets(vertex).collect(),
            Kind::Undirected => self.edges.neighbors(vertex),
        }
    }

    /// Vertices with an edge into `vertex`.
    ///
    /// For undirected graphs this equals [`Graph::successors`].
    pub fn predecessors(&self, vertex: Vertex) -> Vec<Vertex> {
        if !self.contains_vertex(vertex) {
            return Vec::new();
        }
        match self.kind {
            Kind::Directed => self.edges.sources(vertex).collect(),
            Kind::Undirected => self.edges.neighbors(vertex),
        }
    }

    /// Stored edges, in the orientation they were added.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.edges.iter()
    }

    /// Guard that `vertex` belongs to this graph.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::InvalidVertex`] if `vertex` is not live.
    pub fn check_vertex(&self, vertex: Vertex) -> Result<()> {
        if self.contains_vertex(vertex) {
            Ok(())
        } else {
            Err(GraphError::invalid_vertex(vertex))
        }
    }

    /// Canonical key of edge `(u, v)` under this graph's semantics.
    pub fn edge_id(&self, u: Vertex, v: Vertex) -> EdgeId {
        self.kind.edge_id(u, v)
    }

    /// Drop every vertex and edge and forget recycled ids.
    pub fn clear(&mut self) {
        debug!("Clearing graph");
        self.vertices.clear();
        self.edges.clear();
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::directed()
    }
}
