//! Core graph types: vertex and edge ids, and the directedness of a graph.

/// A live vertex: a positive integer assigned by the graph.
///
/// `0` is never a vertex and is used as the "no vertex" sentinel.
pub type Vertex = usize;

/// An edge as stored: `(source, target)`.
pub type Edge = (Vertex, Vertex);

/// Canonical key of an edge, see [`Kind::edge_id`].
///
/// Wide enough that pairing any two vertex ids below `2^63` cannot overflow.
pub type EdgeId = u128;

/// Adjacency semantics of a graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// `(u, v)` and `(v, u)` are distinct edges
    Directed,
    /// `(u, v)` and `(v, u)` denote the same edge
    Undirected,
}

impl Kind {
    /// Whether this is [`Kind::Directed`].
    pub fn is_directed(self) -> bool {
        matches!(self, Kind::Directed)
    }

    /// Canonical key of edge `(u, v)`.
    ///
    /// Cantor pairing over `(u - 1, v - 1)` for directed graphs and over
    /// `(max, min)` for undirected graphs, so distinct edges never share a
    /// key and undirected keys ignore endpoint order.
    ///
    /// `u` and `v` must be vertices, i.e. positive ids: `0` is not shifted
    /// below `1`, so a directed key involving `0` shares its value with the
    /// same edge on vertex `1`.
    pub fn edge_id(self, u: Vertex, v: Vertex) -> EdgeId {
        match self {
            Kind::Directed => {
                let u = u.saturating_sub(1) as EdgeId;
                let v = v.saturating_sub(1) as EdgeId;
                cantor(u, v)
            }
            Kind::Undirected => {
                let (lo, hi) = if u <= v { (u, v) } else { (v, u) };
                cantor(hi as EdgeId, lo as EdgeId)
            }
        }
    }
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Kind::Directed => write!(f, "Directed"),
            Kind::Undirected => write!(f, "Undirected"),
        }
    }
}

fn cantor(a: EdgeId, b: EdgeId) -> EdgeId {
    (a + b) * (a + b + 1) / 2 + b
}
