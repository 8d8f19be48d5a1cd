//! Single-source shortest paths: Dijkstra, generalized to A*.
//!
//! [`ShortestPaths`] borrows a [`Graph`] and fills a caller-chosen
//! [`PathStore`] with the best weight and predecessor of every vertex, using
//! the edge weights and distance estimate of an [`EdgeWeights`].
//!
//! The priority order is `weight(v) + estimated_distance(v)`, ties broken by
//! ascending vertex id, so equal-weight graphs always give the same tree.

mod store;
mod weights;

pub use store::{DenseStore, MapStore, PathStore};
pub use weights::{EdgeWeightMap, EdgeWeights, WithHeuristic};

use crate::error::Result;
use crate::graph::{Graph, Vertex};
use log::{debug, trace};
use std::cmp::Ordering;
use std::collections::BTreeSet;

/// Queue entry: priority then vertex id.
#[derive(Debug, Clone, Copy)]
struct Entry {
    priority: f64,
    vertex: Vertex,
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Entry {}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority
            .total_cmp(&other.priority)
            .then_with(|| self.vertex.cmp(&other.vertex))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Shortest paths in a borrowed graph from one source, optionally to one
/// destination.
///
/// ```rust
/// use intgraph::{EdgeWeightMap, Graph, MapStore, ShortestPaths};
///
/// # fn example() -> intgraph::Result<()> {
/// let mut graph = Graph::undirected();
/// let (a, b, c) = (graph.add_vertex(), graph.add_vertex(), graph.add_vertex());
/// let mut weights = EdgeWeightMap::for_graph(&graph);
/// for (u, v, w) in [(a, b, 2.0), (b, c, 2.0), (a, c, 3.0)] {
///     graph.add_edge(u, v)?;
///     weights.insert(u, v, w);
/// }
///
/// let mut paths = ShortestPaths::new(&graph, c, MapStore::new(), weights)?.with_destination(a)?;
/// paths.compute_paths()?;
/// assert_eq!(paths.path(), Some(vec![c, a]));
/// # Ok(())
/// # }
/// # example().unwrap();
/// ```
pub struct ShortestPaths<'g, S, W> {
    graph: &'g Graph,
    source: Vertex,
    destination: Option<Vertex>,
    store: S,
    weights: W,
}

impl<'g, S, W> ShortestPaths<'g, S, W>
where
    S: PathStore,
    W: EdgeWeights,
{
    /// Paths in `graph` from `source`, recorded in `store`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::GraphError::InvalidVertex`] if `source` is not live.
    pub fn new(graph: &'g Graph, source: Vertex, store: S, weights: W) -> Result<Self> {
        graph.check_vertex(source)?;
        Ok(Self {
            graph,
            source,
            destination: None,
            store,
            weights,
        })
    }

    /// Stop the search as soon as `destination` is settled.
    ///
    /// Only the path to `destination` is then guaranteed to be shortest.
    ///
    /// # Errors
    ///
    /// Returns [`crate::GraphError::InvalidVertex`] if `destination` is not
    /// live.
    pub fn with_destination(mut self, destination: Vertex) -> Result<Self> {
        self.graph.check_vertex(destination)?;
        self.destination = Some(destination);
        Ok(self)
    }

    /// The starting vertex.
    pub fn source(&self) -> Vertex {
        self.source
    }

    /// The destination, if one was set.
    pub fn destination(&self) -> Option<Vertex> {
        self.destination
    }

    /// Run the search, overwriting whatever the store held for the graph's
    /// vertices.
    ///
    /// # Errors
    ///
    /// Returns [`crate::GraphError::CapacityExceeded`] if the store cannot
    /// hold the graph's largest vertex. The store is untouched in that case.
    pub fn compute_paths(&mut self) -> Result<()> {
        self.store.ensure_capacity(self.graph.max_vertex())?;
        debug!(
            "Computing paths: source={}, destination={:?}, vertices={}",
            self.source,
            self.destination,
            self.graph.vertex_count()
        );

        for vertex in self.graph.vertices() {
            self.store.set_weight(vertex, f64::INFINITY);
            self.store.set_predecessor(vertex, 0);
        }
        self.store.set_weight(self.source, 0.0);

        let mut queue: BTreeSet<Entry> = self.graph.vertices().map(|v| self.entry(v)).collect();

        while let Some(Entry { vertex, .. }) = queue.pop_first() {
            if Some(vertex) == self.destination {
                debug!("Reached destination {vertex}");
                return Ok(());
            }

            let base = self.store.weight(vertex);
            if base == f64::INFINITY {
                continue;
            }

            for successor in self.graph.successors(vertex) {
                let candidate = base + self.weights.edge_weight(vertex, successor);
                if candidate < self.store.weight(successor) {
                    // Priorities are keys, so take the entry out before changing it
                    queue.remove(&self.entry(successor));
                    self.store.set_weight(successor, candidate);
                    self.store.set_predecessor(successor, vertex);
                    queue.insert(self.entry(successor));
                    trace!("Relaxed {successor}: weight={candidate}, via {vertex}");
                }
            }
        }

        Ok(())
    }

    /// Best known distance from the source to `vertex`, `+∞` if unreached.
    pub fn weight(&self, vertex: Vertex) -> f64 {
        self.store.weight(vertex)
    }

    /// Vertex before `vertex` on its best known path, 0 for none.
    pub fn predecessor(&self, vertex: Vertex) -> Vertex {
        self.store.predecessor(vertex)
    }

    /// Whether a path from the source to `vertex` was found.
    pub fn is_reachable(&self, vertex: Vertex) -> bool {
        self.graph.contains_vertex(vertex) && self.store.weight(vertex) < f64::INFINITY
    }

    /// The vertices of the best known path from the source to `vertex`.
    ///
    /// `None` if `vertex` is unreachable or not live. With a destination set,
    /// paths to other vertices are real paths but not necessarily shortest.
    pub fn path_to(&self, vertex: Vertex) -> Option<Vec<Vertex>> {
        if !self.is_reachable(vertex) {
            return None;
        }

        let mut path = vec![vertex];
        let mut current = vertex;
        while self.store.predecessor(current) != 0 {
            current = self.store.predecessor(current);
            path.push(current);
            // A predecessor chain longer than the graph is not a path
            if path.len() > self.graph.vertex_count() {
                return None;
            }
        }

        if current != self.source {
            return None;
        }
        path.reverse();
        Some(path)
    }

    /// The path from the source to the destination.
    ///
    /// `None` without a destination or when it is unreachable.
    pub fn path(&self) -> Option<Vec<Vertex>> {
        self.destination.and_then(|destination| self.path_to(destination))
    }

    /// The store holding the results.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// The edge weights in use.
    pub fn weights(&self) -> &W {
        &self.weights
    }

    /// Give up the engine and keep its results.
    pub fn into_store(self) -> S {
        self.store
    }

    fn entry(&self, vertex: Vertex) -> Entry {
        Entry {
            priority: self.store.weight(vertex) + self.weights.estimated_distance(vertex),
            vertex,
        }
    }
}
