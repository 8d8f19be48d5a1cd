//! Ready-made walks built on the [`Traversal`] engine.
//!
//! These cover what a dependency-ordering consumer of the graph needs:
//! visit orders, post-order (dependencies before dependents), and
//! reachability.

use crate::error::Result;
use crate::graph::{Graph, Vertex};
use crate::traversal::{Traversal, Visitor};

/// Records visits and, optionally, post-visits.
struct OrderRecorder {
    pre: Vec<Vertex>,
    post: Vec<Vertex>,
    post_visit: bool,
    natural_order: bool,
}

impl OrderRecorder {
    fn new(post_visit: bool, natural_order: bool) -> Self {
        Self {
            pre: Vec::new(),
            post: Vec::new(),
            post_visit,
            natural_order,
        }
    }
}

impl Visitor for OrderRecorder {
    fn visit(&mut self, vertex: Vertex) -> bool {
        self.pre.push(vertex);
        true
    }

    fn should_post_visit(&self, _vertex: Vertex) -> bool {
        self.post_visit
    }

    fn post_visit(&mut self, vertex: Vertex) -> bool {
        self.post.push(vertex);
        true
    }

    // A stack pops the last successor first; reversing restores graph order
    fn reverse_successors(&self, _vertex: Vertex) -> bool {
        self.natural_order
    }
}

/// Breadth-First Search from `start`.
///
/// # Returns
/// Vertices in visit order, starting with `start`
///
/// # Errors
/// [`crate::GraphError::InvalidVertex`] if `start` is not live
pub fn bfs(graph: &Graph, start: Vertex) -> Result<Vec<Vertex>> {
    let mut recorder = OrderRecorder::new(false, false);
    Traversal::breadth_first(graph).traverse_from(start, &mut recorder)?;
    Ok(recorder.pre)
}

/// Depth-First Search from `start`, in pre-order.
///
/// Successors are explored in the order the graph reports them.
///
/// # Returns
/// Vertices in visit order, starting with `start`
///
/// # Errors
/// [`crate::GraphError::InvalidVertex`] if `start` is not live
pub fn dfs_preorder(graph: &Graph, start: Vertex) -> Result<Vec<Vertex>> {
    let mut recorder = OrderRecorder::new(false, true);
    Traversal::depth_first(graph).traverse_from(start, &mut recorder)?;
    Ok(recorder.pre)
}

/// Depth-First Search from each of `starts`, in post-order.
///
/// Every vertex appears after all vertices reachable from it that were not
/// already finished, which for a DAG of "depends on" edges is a valid build
/// order.
///
/// # Errors
/// [`crate::GraphError::InvalidVertex`] if a start vertex is not live
pub fn dfs_postorder(
    graph: &Graph,
    starts: impl IntoIterator<Item = Vertex>,
) -> Result<Vec<Vertex>> {
    let mut recorder = OrderRecorder::new(true, true);
    let mut traversal = Traversal::depth_first(graph);
    // One seed at a time so each tree finishes before the next starts
    for start in starts {
        traversal.traverse_from(start, &mut recorder)?;
    }
    Ok(recorder.post)
}

/// Every vertex reachable from any of `starts` (including the starts),
/// in ascending order.
///
/// # Errors
/// [`crate::GraphError::InvalidVertex`] if a start vertex is not live
pub fn reachable(graph: &Graph, starts: impl IntoIterator<Item = Vertex>) -> Result<Vec<Vertex>> {
    let mut recorder = OrderRecorder::new(false, false);
    Traversal::breadth_first(graph).traverse(starts, &mut recorder)?;
    let mut found = recorder.pre;
    found.sort_unstable();
    Ok(found)
}
