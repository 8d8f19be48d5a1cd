//! Generalized fringe-driven traversal.
//!
//! A [`Traversal`] repeatedly takes a vertex from its [`Fringe`], visits it if
//! it is unmarked, and offers the vertex's successors back to the fringe. The
//! fringe decides the order (breadth-first, depth-first, best-first) and a
//! [`Visitor`] decides what happens at each step.
//!
//! Marks survive between calls to [`Traversal::traverse`], so a traversal can
//! be halted and resumed, or run again from new starting points without
//! revisiting anything, until [`Traversal::clear`] is called.

mod fringe;

pub use fringe::{Fringe, PriorityFringe};

use crate::error::Result;
use crate::graph::{Graph, Vertex};
use log::{debug, trace};
use std::collections::{HashSet, VecDeque};

/// How a call to [`Traversal::traverse`] ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraversalOutcome {
    /// The fringe ran dry
    Exhausted,
    /// A visit or post-visit hook asked to stop
    Halted,
}

/// Hooks called by [`Traversal::traverse`].
///
/// Every hook has a default, so an implementation only overrides what it
/// needs. The unit type `()` is a visitor that just marks.
pub trait Visitor {
    /// Visit `vertex`. Returning `false` halts the traversal immediately.
    fn visit(&mut self, _vertex: Vertex) -> bool {
        true
    }

    /// Whether `vertex` should be post-visited once it comes off the fringe
    /// again after its successors were offered.
    ///
    /// Mostly useful with a depth-first fringe.
    fn should_post_visit(&self, _vertex: Vertex) -> bool {
        false
    }

    /// Post-visit `vertex`. Returning `false` halts the traversal immediately.
    fn post_visit(&mut self, _vertex: Vertex) -> bool {
        true
    }

    /// Whether the successors of `vertex` are offered in reverse order.
    fn reverse_successors(&self, _vertex: Vertex) -> bool {
        false
    }

    /// Whether successor `v` of the just-visited `u` goes on the fringe.
    ///
    /// `marked` tells whether `v` has already been visited. By default only
    /// unmarked successors are added.
    fn process_successor(&mut self, _u: Vertex, _v: Vertex, marked: bool) -> bool {
        !marked
    }
}

impl Visitor for () {}

/// A traversal of a borrowed [`Graph`] using fringe `F`.
///
/// The traversal owns its fringe and its marks; the graph is only read.
pub struct Traversal<'g, F> {
    graph: &'g Graph,
    fringe: F,
    marked: HashSet<Vertex>,
    post_visited: HashSet<Vertex>,
}

impl<'g> Traversal<'g, VecDeque<Vertex>> {
    /// A breadth-first traversal of `graph`.
    pub fn breadth_first(graph: &'g Graph) -> Self {
        Self::with_fringe(graph, VecDeque::new())
    }
}

impl<'g> Traversal<'g, Vec<Vertex>> {
    /// A depth-first traversal of `graph`.
    pub fn depth_first(graph: &'g Graph) -> Self {
        Self::with_fringe(graph, Vec::new())
    }
}

impl<'g, F: Fringe> Traversal<'g, F> {
    /// A traversal of `graph` ordered by `fringe`.
    pub fn with_fringe(graph: &'g Graph, fringe: F) -> Self {
        Self {
            graph,
            fringe,
            marked: HashSet::new(),
            post_visited: HashSet::new(),
        }
    }

    /// The graph being traversed.
    pub fn graph(&self) -> &'g Graph {
        self.graph
    }

    /// Whether `vertex` has been visited since the last [`Traversal::clear`].
    pub fn is_marked(&self, vertex: Vertex) -> bool {
        self.marked.contains(&vertex)
    }

    /// Mark `vertex` without visiting it, keeping later traversals out of it.
    pub fn mark(&mut self, vertex: Vertex) {
        self.marked.insert(vertex);
    }

    /// Number of marked vertices.
    pub fn marked_count(&self) -> usize {
        self.marked.len()
    }

    /// Unmark every vertex and forget which vertices were post-visited.
    pub fn clear(&mut self) {
        self.marked.clear();
        self.post_visited.clear();
    }

    /// Seed the fringe with `starts` and traverse until the fringe is empty
    /// or a hook halts.
    ///
    /// Whatever was left on the fringe by an earlier halted call is dropped;
    /// marks are kept.
    ///
    /// # Errors
    ///
    /// Returns [`crate::GraphError::InvalidVertex`] if a start vertex is not
    /// live. Nothing is visited in that case.
    pub fn traverse<V>(
        &mut self,
        starts: impl IntoIterator<Item = Vertex>,
        visitor: &mut V,
    ) -> Result<TraversalOutcome>
    where
        V: Visitor + ?Sized,
    {
        let starts: Vec<Vertex> = starts.into_iter().collect();
        for &start in &starts {
            self.graph.check_vertex(start)?;
        }

        debug!("Starting traversal from {} vertices", starts.len());
        self.fringe.clear();
        for start in starts {
            self.fringe.push(start);
        }

        while let Some(vertex) = self.fringe.pop() {
            if self.marked.contains(&vertex) {
                if visitor.should_post_visit(vertex) && self.post_visited.insert(vertex) {
                    trace!("Post-visiting vertex {vertex}");
                    if !visitor.post_visit(vertex) {
                        debug!("Traversal halted in post-visit of {vertex}");
                        return Ok(TraversalOutcome::Halted);
                    }
                }
                continue;
            }

            self.marked.insert(vertex);
            trace!("Visiting vertex {vertex}");
            if !visitor.visit(vertex) {
                debug!("Traversal halted in visit of {vertex}");
                return Ok(TraversalOutcome::Halted);
            }

            // Comes back off the fringe once its successors are done; the
            // post-visit decision is made then, not now
            self.fringe.push(vertex);

            let mut successors = self.graph.successors(vertex);
            if visitor.reverse_successors(vertex) {
                successors.reverse();
            }
            for successor in successors {
                let marked = self.marked.contains(&successor);
                if visitor.process_successor(vertex, successor, marked) {
                    self.fringe.push(successor);
                }
            }
        }

        Ok(TraversalOutcome::Exhausted)
    }

    /// [`Traversal::traverse`] from the single vertex `start`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::GraphError::InvalidVertex`] if `start` is not live.
    pub fn traverse_from<V>(&mut self, start: Vertex, visitor: &mut V) -> Result<TraversalOutcome>
    where
        V: Visitor + ?Sized,
    {
        self.traverse([start], visitor)
    }
}
