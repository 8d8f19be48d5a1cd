//! Core graph types and operations.
//!
//! This module defines the fundamental building blocks:
//! - [`VertexSet`]: live vertex ids and the recycled-id pool
//! - [`EdgeSet`]: stored edges with adjacency indexes
//! - [`Graph`]: the graph interface, directed or undirected

mod edges;
mod intgraph;
mod types;
mod vertices;

pub use edges::EdgeSet;
pub use intgraph::Graph;
pub use types::{Edge, EdgeId, Kind, Vertex};
pub use vertices::VertexSet;
