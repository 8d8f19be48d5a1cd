//! # intgraph
//!
//! Small graphs over positive integer vertex ids, with a fringe-driven
//! traversal engine and a Dijkstra/A* shortest-path engine built on it.
//!
//! ## Core Principles
//!
//! - **Ids, not payloads**: vertices are opaque integers; labels live with the caller
//! - **Recycled ids**: removed vertex ids are handed out again, smallest first
//! - **One storage, two semantics**: directed and undirected graphs share [`Graph`]
//! - **Pluggable search**: fringes, visit hooks, weight storage and heuristics are supplied by the caller
//!
//! ## Architecture
//!
//! ```text
//! Algorithms (bfs, dfs_postorder, reachable)
//!     ↓
//! Traversal engine        Shortest-path engine
//!     ↓                       ↓
//! Graph (VertexSet + EdgeSet, Directed | Undirected)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use intgraph::{DenseStore, Graph, ShortestPaths, Vertex};
//!
//! # fn example() -> intgraph::Result<()> {
//! let mut graph = Graph::directed();
//! let a = graph.add_vertex();
//! let b = graph.add_vertex();
//! let c = graph.add_vertex();
//! graph.add_edge(a, b)?;
//! graph.add_edge(b, c)?;
//! graph.add_edge(a, c)?;
//!
//! let weight = |u: Vertex, v: Vertex| if (u, v) == (a, c) { 5.0 } else { 1.0 };
//! let mut paths = ShortestPaths::new(&graph, a, DenseStore::for_graph(&graph), weight)?;
//! paths.compute_paths()?;
//!
//! assert_eq!(paths.weight(c), 2.0);
//! assert_eq!(paths.path_to(c), Some(vec![a, b, c]));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod algorithms;
pub mod error;
pub mod graph;
pub mod paths;
pub mod traversal;

// Re-export main types
pub use error::{GraphError, Result};
pub use graph::{Edge, EdgeId, Graph, Kind, Vertex};
pub use paths::{
    DenseStore, EdgeWeightMap, EdgeWeights, MapStore, PathStore, ShortestPaths, WithHeuristic,
};
pub use traversal::{Fringe, PriorityFringe, Traversal, TraversalOutcome, Visitor};
