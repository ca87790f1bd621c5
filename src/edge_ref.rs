use std::fmt::Debug;

use crate::{Graph, error::Result, vertex_ref::VertexRef};

/// A borrowed view of one edge.
pub struct EdgeRef<'g, G: Graph> {
    graph: &'g G,
    id: G::EdgeId,
}

impl<'g, G> EdgeRef<'g, G>
where
    G: Graph,
{
    pub(crate) fn new(graph: &'g G, id: G::EdgeId) -> Self {
        Self { graph, id }
    }

    pub fn graph(&self) -> &'g G {
        self.graph
    }

    pub fn id(&self) -> G::EdgeId {
        self.id
    }

    pub fn property(&self) -> &'g G::EdgeData {
        self.graph.edge(self.id).expect("edge ref outlived its edge")
    }

    fn ends(&self) -> (G::VertexId, G::VertexId) {
        self.graph.ends(self.id).expect("edge ref outlived its edge")
    }

    pub fn source(&self) -> VertexRef<'g, G> {
        VertexRef::new(self.graph, self.ends().0)
    }

    pub fn target(&self) -> VertexRef<'g, G> {
        VertexRef::new(self.graph, self.ends().1)
    }

    /// Given one endpoint, returns a view of the other.
    pub fn opposite(&self, vertex: G::VertexId) -> Result<Option<VertexRef<'g, G>>> {
        let graph = self.graph;
        Ok(graph
            .opposite(self.id, vertex)?
            .map(|vid| VertexRef::new(graph, vid)))
    }
}

impl<G: Graph> Clone for EdgeRef<'_, G> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<G: Graph> Copy for EdgeRef<'_, G> {}

impl<G> Debug for EdgeRef<'_, G>
where
    G: Graph,
    G::EdgeData: Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (source, target) = self.ends();
        f.debug_struct("EdgeRef")
            .field("source", &source)
            .field("target", &target)
            .field("property", self.property())
            .finish()
    }
}
