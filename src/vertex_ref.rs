use std::fmt::Debug;

use crate::{Graph, edge_ref::EdgeRef, error::Result};

/// A borrowed view of one vertex.  The graph cannot change while the view
/// exists, so its vertex stays valid for the view's whole lifetime.
pub struct VertexRef<'g, G: Graph> {
    graph: &'g G,
    id: G::VertexId,
}

impl<'g, G> VertexRef<'g, G>
where
    G: Graph,
{
    pub(crate) fn new(graph: &'g G, id: G::VertexId) -> Self {
        Self { graph, id }
    }

    pub fn graph(&self) -> &'g G {
        self.graph
    }

    pub fn id(&self) -> G::VertexId {
        self.id
    }

    pub fn property(&self) -> &'g G::VertexData {
        self.graph
            .vertex(self.id)
            .expect("vertex ref outlived its vertex")
    }

    pub fn out_degree(&self) -> usize {
        self.graph
            .out_degree(self.id)
            .expect("vertex ref outlived its vertex")
    }

    pub fn in_degree(&self) -> usize {
        self.graph
            .in_degree(self.id)
            .expect("vertex ref outlived its vertex")
    }

    pub fn degree(&self) -> usize {
        self.in_degree() + self.out_degree()
    }

    pub fn out_edges(&self) -> impl Iterator<Item = EdgeRef<'g, G>> + use<'g, G> {
        let graph = self.graph;
        graph
            .out_edges(self.id)
            .expect("vertex ref outlived its vertex")
            .map(move |eid| EdgeRef::new(graph, eid))
    }

    pub fn in_edges(&self) -> impl Iterator<Item = EdgeRef<'g, G>> + use<'g, G> {
        let graph = self.graph;
        graph
            .in_edges(self.id)
            .expect("vertex ref outlived its vertex")
            .map(move |eid| EdgeRef::new(graph, eid))
    }

    /// Finds the first edge connecting this vertex to `other`, in either
    /// direction.
    pub fn find(&self, other: G::VertexId) -> Result<Option<EdgeRef<'g, G>>> {
        let graph = self.graph;
        Ok(graph
            .find_adjacent(self.id, other)?
            .map(|eid| EdgeRef::new(graph, eid)))
    }
}

impl<G: Graph> Clone for VertexRef<'_, G> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<G: Graph> Copy for VertexRef<'_, G> {}

impl<G: Graph> PartialEq for VertexRef<'_, G> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.graph, other.graph) && self.id == other.id
    }
}

impl<G> Debug for VertexRef<'_, G>
where
    G: Graph,
    G::VertexData: Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VertexRef")
            .field("id", &self.id)
            .field("property", self.property())
            .finish()
    }
}
