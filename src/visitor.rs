use std::ops::ControlFlow;

use crate::Graph;

/// Receives the events of a graph traversal.
///
/// Every hook gets the subject of the event plus the graph being searched,
/// and returns [`ControlFlow::Break`] to stop the search early.  All hooks
/// default to doing nothing, so a visitor only overrides the events it
/// cares about.
///
/// Event order for a single vertex is always `initialize_vertex`,
/// `discover_vertex`, then `finish_vertex`; every examined edge is reported
/// as exactly one of `tree_edge` or `non_tree_edge`, and a non-tree edge is
/// followed by `grey_target` or `black_target`.
pub trait Visitor<G: Graph> {
    /// Called once per vertex before the search starts.
    fn initialize_vertex(&mut self, _vertex: G::VertexId, _graph: &G) -> ControlFlow<()> {
        ControlFlow::Continue(())
    }

    /// Called when a vertex is first reached.
    fn discover_vertex(&mut self, _vertex: G::VertexId, _graph: &G) -> ControlFlow<()> {
        ControlFlow::Continue(())
    }

    /// Called when a vertex is taken off the breadth-first queue, before its
    /// outgoing edges are examined.
    fn examine_vertex(&mut self, _vertex: G::VertexId, _graph: &G) -> ControlFlow<()> {
        ControlFlow::Continue(())
    }

    /// Called for every outgoing edge of a vertex being expanded.
    fn examine_edge(&mut self, _edge: G::EdgeId, _graph: &G) -> ControlFlow<()> {
        ControlFlow::Continue(())
    }

    /// Called for an edge whose target is discovered through it.
    fn tree_edge(&mut self, _edge: G::EdgeId, _graph: &G) -> ControlFlow<()> {
        ControlFlow::Continue(())
    }

    /// Called for an edge whose target had already been discovered.
    fn non_tree_edge(&mut self, _edge: G::EdgeId, _graph: &G) -> ControlFlow<()> {
        ControlFlow::Continue(())
    }

    /// Called after `non_tree_edge` when the target is discovered but not
    /// finished.
    fn grey_target(&mut self, _edge: G::EdgeId, _graph: &G) -> ControlFlow<()> {
        ControlFlow::Continue(())
    }

    /// Called after `non_tree_edge` when the target is finished.
    fn black_target(&mut self, _edge: G::EdgeId, _graph: &G) -> ControlFlow<()> {
        ControlFlow::Continue(())
    }

    /// Called when a vertex and everything reached through it is done.
    fn finish_vertex(&mut self, _vertex: G::VertexId, _graph: &G) -> ControlFlow<()> {
        ControlFlow::Continue(())
    }
}

/// A visitor that ignores every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullVisitor;

impl<G: Graph> Visitor<G> for NullVisitor {}

impl<G, V> Visitor<G> for &mut V
where
    G: Graph,
    V: Visitor<G> + ?Sized,
{
    fn initialize_vertex(&mut self, vertex: G::VertexId, graph: &G) -> ControlFlow<()> {
        (**self).initialize_vertex(vertex, graph)
    }

    fn discover_vertex(&mut self, vertex: G::VertexId, graph: &G) -> ControlFlow<()> {
        (**self).discover_vertex(vertex, graph)
    }

    fn examine_vertex(&mut self, vertex: G::VertexId, graph: &G) -> ControlFlow<()> {
        (**self).examine_vertex(vertex, graph)
    }

    fn examine_edge(&mut self, edge: G::EdgeId, graph: &G) -> ControlFlow<()> {
        (**self).examine_edge(edge, graph)
    }

    fn tree_edge(&mut self, edge: G::EdgeId, graph: &G) -> ControlFlow<()> {
        (**self).tree_edge(edge, graph)
    }

    fn non_tree_edge(&mut self, edge: G::EdgeId, graph: &G) -> ControlFlow<()> {
        (**self).non_tree_edge(edge, graph)
    }

    fn grey_target(&mut self, edge: G::EdgeId, graph: &G) -> ControlFlow<()> {
        (**self).grey_target(edge, graph)
    }

    fn black_target(&mut self, edge: G::EdgeId, graph: &G) -> ControlFlow<()> {
        (**self).black_target(edge, graph)
    }

    fn finish_vertex(&mut self, vertex: G::VertexId, graph: &G) -> ControlFlow<()> {
        (**self).finish_vertex(vertex, graph)
    }
}
