//! Error types for graph and search operations.
//!
//! All fallible operations return [`Result<T>`]. Unreachable vertices are not
//! errors: searches report them through an infinite weight instead.

use crate::graph::Vertex;
use thiserror::Error;

/// Result type alias for intgraph operations.
pub type Result<T> = std::result::Result<T, GraphError>;

/// Error type for all graph operations.
///
/// Errors fail fast and are never recovered internally.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// Vertex is not currently live in the graph
    #[error("Invalid vertex: {vertex}")]
    InvalidVertex {
        /// The offending vertex id
        vertex: Vertex,
    },

    /// A fixed-size store cannot hold a vertex of the graph
    #[error("Vertex {vertex} exceeds store capacity {capacity}")]
    CapacityExceeded {
        /// Largest vertex the store was asked to hold
        vertex: Vertex,
        /// Number of slots in the store (valid ids are `0..capacity`)
        capacity: usize,
    },
}

impl GraphError {
    /// Create a [`GraphError::InvalidVertex`] for `vertex`.
    pub fn invalid_vertex(vertex: Vertex) -> Self {
        Self::InvalidVertex { vertex }
    }
}
