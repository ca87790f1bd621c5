use std::{fmt::Debug, hash::Hash};

use crate::{
    edge_ref::EdgeRef,
    error::{GraphError, Result},
    vertex_ref::VertexRef,
};

/// A marker trait for vertex identifiers.  Identifiers are small copyable
/// values that stay valid until their vertex is erased or the graph is
/// cleared.
pub trait VertexId: Copy + Eq + Hash + Ord + Debug {}

/// A marker trait for edge identifiers.
pub trait EdgeId: Copy + Eq + Hash + Ord + Debug {}

/// A directed property graph.  Methods that return iterators over vertices
/// or edges return them in container order, which is stable for a given
/// graph state but is not insertion order in general.
///
/// Every method that takes an identifier checks that it was issued by this
/// graph and that its referent still exists, returning
/// [`GraphError::InvalidHandle`] otherwise.  Lookups that find nothing return
/// `None`.
pub trait Graph: Sized {
    type VertexData;
    type EdgeData;
    type VertexId: VertexId;
    type EdgeId: EdgeId;

    // Vertices

    /// Gets the number of vertices in the graph.
    fn num_vertices(&self) -> usize;

    /// Returns true if the graph has no vertices (and hence no edges).
    fn is_empty(&self) -> bool {
        self.num_vertices() == 0
    }

    /// Gets an iterator over all vertex identifiers.
    fn vertex_ids(&self) -> impl Iterator<Item = Self::VertexId> + '_;

    /// Gets an iterator over borrowed views of all vertices.
    fn vertices(&self) -> impl Iterator<Item = VertexRef<'_, Self>> + '_ {
        self.vertex_ids().map(move |id| VertexRef::new(self, id))
    }

    /// Checks that a vertex identifier is owned by this graph.
    fn check_valid_vertex_id(&self, id: Self::VertexId) -> Result<()>;

    /// Panics if the given vertex identifier is not valid in this graph.
    fn assert_valid_vertex_id(&self, id: Self::VertexId) {
        if let Err(err) = self.check_valid_vertex_id(id) {
            panic!("{err}: {id:?}");
        }
    }

    /// Returns the identifier if the vertex is currently owned by this graph.
    fn find_vertex(&self, id: Self::VertexId) -> Option<Self::VertexId> {
        self.check_valid_vertex_id(id).ok().map(|()| id)
    }

    fn contains_vertex(&self, id: Self::VertexId) -> bool {
        self.find_vertex(id).is_some()
    }

    /// Gets the property of a vertex.
    fn vertex(&self, id: Self::VertexId) -> Result<&Self::VertexData>;

    /// Gets a borrowed view of a vertex.
    fn vertex_ref(&self, id: Self::VertexId) -> Result<VertexRef<'_, Self>> {
        self.check_valid_vertex_id(id)?;
        Ok(VertexRef::new(self, id))
    }

    /// Gets an iterator over the edges leaving a vertex, in adjacency order.
    fn out_edges(&self, id: Self::VertexId) -> Result<impl Iterator<Item = Self::EdgeId> + '_>;

    /// Gets an iterator over the edges entering a vertex, in adjacency order.
    fn in_edges(&self, id: Self::VertexId) -> Result<impl Iterator<Item = Self::EdgeId> + '_>;

    fn out_degree(&self, id: Self::VertexId) -> Result<usize>;

    fn in_degree(&self, id: Self::VertexId) -> Result<usize>;

    /// Gets the sum of a vertex's incoming and outgoing edge counts.  A
    /// self-loop contributes to both.
    fn degree(&self, id: Self::VertexId) -> Result<usize> {
        Ok(self.in_degree(id)? + self.out_degree(id)?)
    }

    /// Gets the targets of a vertex's outgoing edges, in adjacency order.
    /// A target reached by parallel edges is repeated.
    fn successors(&self, id: Self::VertexId) -> Result<impl Iterator<Item = Self::VertexId> + '_> {
        Ok(self
            .out_edges(id)?
            .filter_map(move |eid| self.target(eid).ok()))
    }

    /// Finds the first edge incident to `id` (incoming edges first, then
    /// outgoing) whose opposite endpoint is `other`.
    fn find_adjacent(
        &self,
        id: Self::VertexId,
        other: Self::VertexId,
    ) -> Result<Option<Self::EdgeId>>;

    /// Gets an exclusive upper bound on [`Self::vertex_index`].
    fn vertex_bound(&self) -> usize;

    /// Maps a vertex to a dense index, unique among live vertices and smaller
    /// than [`Self::vertex_bound`].  Used to size per-vertex state tables.
    fn vertex_index(&self, id: Self::VertexId) -> Result<usize>;

    // Edges

    /// Gets the number of edges in the graph.
    fn num_edges(&self) -> usize;

    /// Gets an iterator over all edge identifiers.
    fn edge_ids(&self) -> impl Iterator<Item = Self::EdgeId> + '_;

    /// Gets an iterator over borrowed views of all edges.
    fn edges(&self) -> impl Iterator<Item = EdgeRef<'_, Self>> + '_ {
        self.edge_ids().map(move |id| EdgeRef::new(self, id))
    }

    /// Checks that an edge identifier is owned by this graph.
    fn check_valid_edge_id(&self, id: Self::EdgeId) -> Result<()>;

    /// Panics if the given edge identifier is not valid in this graph.
    fn assert_valid_edge_id(&self, id: Self::EdgeId) {
        if let Err(err) = self.check_valid_edge_id(id) {
            panic!("{err}: {id:?}");
        }
    }

    /// Returns the identifier if the edge is currently owned by this graph.
    fn find_edge(&self, id: Self::EdgeId) -> Option<Self::EdgeId> {
        self.check_valid_edge_id(id).ok().map(|()| id)
    }

    fn contains_edge(&self, id: Self::EdgeId) -> bool {
        self.find_edge(id).is_some()
    }

    /// Gets the property of an edge.
    fn edge(&self, id: Self::EdgeId) -> Result<&Self::EdgeData>;

    /// Gets a borrowed view of an edge.
    fn edge_ref(&self, id: Self::EdgeId) -> Result<EdgeRef<'_, Self>> {
        self.check_valid_edge_id(id)?;
        Ok(EdgeRef::new(self, id))
    }

    /// Gets the (source, target) pair of an edge.
    fn ends(&self, id: Self::EdgeId) -> Result<(Self::VertexId, Self::VertexId)>;

    fn source(&self, id: Self::EdgeId) -> Result<Self::VertexId> {
        Ok(self.ends(id)?.0)
    }

    fn target(&self, id: Self::EdgeId) -> Result<Self::VertexId> {
        Ok(self.ends(id)?.1)
    }

    /// Given one endpoint of an edge, returns the other.  The opposite of a
    /// self-loop's vertex is the vertex itself.  Returns `Ok(None)` if
    /// `vertex` is a valid vertex that is not an endpoint of the edge.
    fn opposite(&self, id: Self::EdgeId, vertex: Self::VertexId) -> Result<Option<Self::VertexId>> {
        self.check_valid_vertex_id(vertex)?;
        let (source, target) = self.ends(id)?;
        Ok(if vertex == source {
            Some(target)
        } else if vertex == target {
            Some(source)
        } else {
            None
        })
    }

    /// Finds the first edge from `source` to `target`, in the adjacency order
    /// of `source`'s outgoing edges.
    fn find_edge_between(
        &self,
        source: Self::VertexId,
        target: Self::VertexId,
    ) -> Result<Option<Self::EdgeId>> {
        self.check_valid_vertex_id(target)?;
        Ok(self
            .out_edges(source)?
            .find(|eid| matches!(self.target(*eid), Ok(t) if t == target)))
    }

    /// Checks if there is at least one edge from `source` to `target`.
    fn has_edge(&self, source: Self::VertexId, target: Self::VertexId) -> Result<bool> {
        Ok(self.find_edge_between(source, target)?.is_some())
    }
}

/// A trait for graphs that support mutation.
///
/// Structural mutation keeps every vertex's adjacency sets consistent with
/// the graph's edge set: an edge is recorded in its source's outgoing set and
/// its target's incoming set for exactly as long as it exists.
pub trait GraphMut: Graph {
    /// Creates a new, empty graph.
    fn new() -> Self;

    /// Gets a mutable reference to the property of a vertex.
    fn vertex_mut(&mut self, id: Self::VertexId) -> Result<&mut Self::VertexData>;

    /// Gets a mutable reference to the property of an edge.
    fn edge_mut(&mut self, id: Self::EdgeId) -> Result<&mut Self::EdgeData>;

    /// Adds a vertex with no edges.
    fn insert_vertex(&mut self, property: Self::VertexData) -> Self::VertexId;

    /// Adds a directed edge from `source` to `target`.  Parallel edges and
    /// self-loops are allowed; each insertion creates a distinct edge.
    fn insert_edge(
        &mut self,
        source: Self::VertexId,
        target: Self::VertexId,
        property: Self::EdgeData,
    ) -> Result<Self::EdgeId>;

    /// Adds two independent directed edges, `a -> b` and `b -> a`, carrying
    /// copies of the same property.  Erasing one leaves the other in place.
    /// Nothing is inserted unless both endpoints are valid.
    fn insert_undirected(
        &mut self,
        a: Self::VertexId,
        b: Self::VertexId,
        property: Self::EdgeData,
    ) -> Result<(Self::EdgeId, Self::EdgeId)>
    where
        Self::EdgeData: Clone,
    {
        self.check_valid_vertex_id(a)?;
        self.check_valid_vertex_id(b)?;
        let forward = self.insert_edge(a, b, property.clone())?;
        let backward = self.insert_edge(b, a, property)?;
        Ok((forward, backward))
    }

    /// Removes a vertex and every edge incident to it, returning the vertex's
    /// property.
    fn erase_vertex(&mut self, id: Self::VertexId) -> Result<Self::VertexData>;

    /// Removes an edge, returning its property.
    fn erase_edge(&mut self, id: Self::EdgeId) -> Result<Self::EdgeData>;

    /// Removes all edges and then all vertices.  Every identifier issued so
    /// far becomes invalid; the graph stays usable.
    fn clear(&mut self);
}

/// Shorthand used by implementations to reject a handle from another graph.
pub(crate) fn foreign_vertex() -> GraphError {
    GraphError::invalid_vertex("handle belongs to another graph")
}

pub(crate) fn foreign_edge() -> GraphError {
    GraphError::invalid_edge("handle belongs to another graph")
}
