use std::{collections::BTreeSet, fmt::Debug};

use crate::{
    adjacency::AdjacencySet,
    arena::{Arena, ArenaKey},
    edge::Edge,
    error::{GraphError, Result},
    format_debug::format_debug,
    graph::{Graph, GraphMut, foreign_edge, foreign_vertex},
    graph_id::GraphId,
    tracing_support::{debug, trace},
    vertex::Vertex,
};

/// Vertex identifier for [`HandleGraph`].
///
/// Contains a generational arena key and the identifier of the issuing graph.
/// A handle whose vertex has been erased never resolves again, even after the
/// arena slot is reused.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexHandle {
    key: ArenaKey,
    graph_id: GraphId,
}

impl VertexHandle {
    pub fn key(&self) -> ArenaKey {
        self.key
    }
}

impl Debug for VertexHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "VertexHandle({}v{})",
            self.key.index(),
            self.key.generation()
        )
    }
}

impl crate::graph::VertexId for VertexHandle {}

/// Edge identifier for [`HandleGraph`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeHandle {
    key: ArenaKey,
    graph_id: GraphId,
}

impl EdgeHandle {
    pub fn key(&self) -> ArenaKey {
        self.key
    }
}

impl Debug for EdgeHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "EdgeHandle({}v{})",
            self.key.index(),
            self.key.generation()
        )
    }
}

impl crate::graph::EdgeId for EdgeHandle {}

/// A property graph addressed by opaque handles.
///
/// Vertices and edges live in generational arenas owned by the graph.
/// Vertices refer to their edges, and edges to their endpoints, by arena key
/// only.  Erased slots are reused, so vertex iteration order is arena slot
/// order rather than insertion order.
///
/// # Type Parameters
/// * `V` - The type of vertex properties
/// * `E` - The type of edge properties
/// * `S` - The adjacency set container, keyed by edge [`ArenaKey`]
///
/// A clone is a new graph: it gets its own identity, so handles issued by
/// either copy are rejected by the other.
pub struct HandleGraph<V, E, S = BTreeSet<ArenaKey>> {
    vertices: Arena<Vertex<V, ArenaKey, S>>,
    edges: Arena<Edge<E, ArenaKey>>,
    id: GraphId,
}

impl<V, E, S> HandleGraph<V, E, S>
where
    S: AdjacencySet<ArenaKey>,
{
    fn vertex_handle(&self, key: ArenaKey) -> VertexHandle {
        VertexHandle {
            key,
            graph_id: self.id,
        }
    }

    fn edge_handle(&self, key: ArenaKey) -> EdgeHandle {
        EdgeHandle {
            key,
            graph_id: self.id,
        }
    }

    fn vertex_key(&self, handle: VertexHandle) -> Result<ArenaKey> {
        if handle.graph_id != self.id {
            return Err(foreign_vertex());
        }
        if !self.vertices.contains(handle.key) {
            return Err(GraphError::invalid_vertex("vertex has been erased"));
        }
        Ok(handle.key)
    }

    fn edge_key(&self, handle: EdgeHandle) -> Result<ArenaKey> {
        if handle.graph_id != self.id {
            return Err(foreign_edge());
        }
        if !self.edges.contains(handle.key) {
            return Err(GraphError::invalid_edge("edge has been erased"));
        }
        Ok(handle.key)
    }

    fn vertex_entry(&self, handle: VertexHandle) -> Result<&Vertex<V, ArenaKey, S>> {
        let key = self.vertex_key(handle)?;
        Ok(self.vertices.get(key).expect("validated vertex key"))
    }

    fn edge_entry(&self, handle: EdgeHandle) -> Result<&Edge<E, ArenaKey>> {
        let key = self.edge_key(handle)?;
        Ok(self.edges.get(key).expect("validated edge key"))
    }

    /// Unlinks an edge from both endpoints and removes it from the edge
    /// arena.  Returns `None` if the edge is already gone.
    fn detach_edge(&mut self, key: ArenaKey) -> Option<Edge<E, ArenaKey>> {
        let edge = self.edges.remove(key)?;
        let (source, target) = (edge.source(), edge.target());
        self.vertices
            .get_mut(source)
            .expect("edge source is live")
            .remove_edge(source, key, source, target);
        if !edge.is_self_loop() {
            self.vertices
                .get_mut(target)
                .expect("edge target is live")
                .remove_edge(target, key, source, target);
        }
        Some(edge)
    }
}

impl<V, E, S> Graph for HandleGraph<V, E, S>
where
    S: AdjacencySet<ArenaKey>,
{
    type VertexData = V;
    type EdgeData = E;
    type VertexId = VertexHandle;
    type EdgeId = EdgeHandle;

    fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Gets an iterator over all vertex handles in arena slot order.
    fn vertex_ids(&self) -> impl Iterator<Item = VertexHandle> + '_ {
        self.vertices.keys().map(move |key| self.vertex_handle(key))
    }

    fn check_valid_vertex_id(&self, id: VertexHandle) -> Result<()> {
        self.vertex_key(id).map(|_| ())
    }

    fn vertex(&self, id: VertexHandle) -> Result<&V> {
        Ok(self.vertex_entry(id)?.property())
    }

    fn out_edges(&self, id: VertexHandle) -> Result<impl Iterator<Item = EdgeHandle> + '_> {
        let vertex = self.vertex_entry(id)?;
        Ok(vertex.out_edges().map(move |key| self.edge_handle(key)))
    }

    fn in_edges(&self, id: VertexHandle) -> Result<impl Iterator<Item = EdgeHandle> + '_> {
        let vertex = self.vertex_entry(id)?;
        Ok(vertex.in_edges().map(move |key| self.edge_handle(key)))
    }

    fn out_degree(&self, id: VertexHandle) -> Result<usize> {
        Ok(self.vertex_entry(id)?.out_degree())
    }

    fn in_degree(&self, id: VertexHandle) -> Result<usize> {
        Ok(self.vertex_entry(id)?.in_degree())
    }

    fn degree(&self, id: VertexHandle) -> Result<usize> {
        Ok(self.vertex_entry(id)?.degree())
    }

    fn find_adjacent(&self, id: VertexHandle, other: VertexHandle) -> Result<Option<EdgeHandle>> {
        let vertex = self.vertex_entry(id)?;
        let other = self.vertex_key(other)?;
        let found = vertex.find(other, |edge_key| {
            self.edges
                .get(edge_key)
                .and_then(|edge| edge.opposite(id.key))
                .expect("adjacent edge is incident to its vertex")
        });
        Ok(found.map(|key| self.edge_handle(key)))
    }

    fn vertex_bound(&self) -> usize {
        self.vertices.slot_bound()
    }

    fn vertex_index(&self, id: VertexHandle) -> Result<usize> {
        Ok(self.vertex_key(id)?.index())
    }

    fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// Gets an iterator over all edge handles in arena slot order.
    fn edge_ids(&self) -> impl Iterator<Item = EdgeHandle> + '_ {
        self.edges.keys().map(move |key| self.edge_handle(key))
    }

    fn check_valid_edge_id(&self, id: EdgeHandle) -> Result<()> {
        self.edge_key(id).map(|_| ())
    }

    fn edge(&self, id: EdgeHandle) -> Result<&E> {
        Ok(self.edge_entry(id)?.property())
    }

    fn ends(&self, id: EdgeHandle) -> Result<(VertexHandle, VertexHandle)> {
        let edge = self.edge_entry(id)?;
        Ok((
            self.vertex_handle(edge.source()),
            self.vertex_handle(edge.target()),
        ))
    }

    fn find_edge_between(
        &self,
        source: VertexHandle,
        target: VertexHandle,
    ) -> Result<Option<EdgeHandle>> {
        let vertex = self.vertex_entry(source)?;
        let target = self.vertex_key(target)?;
        let found = vertex
            .out_edges()
            .find(|key| matches!(self.edges.get(*key), Some(edge) if edge.target() == target));
        Ok(found.map(|key| self.edge_handle(key)))
    }
}

impl<V, E, S> GraphMut for HandleGraph<V, E, S>
where
    S: AdjacencySet<ArenaKey>,
{
    fn new() -> Self {
        Self {
            vertices: Arena::new(),
            edges: Arena::new(),
            id: GraphId::new(),
        }
    }

    fn vertex_mut(&mut self, id: VertexHandle) -> Result<&mut V> {
        let key = self.vertex_key(id)?;
        Ok(self
            .vertices
            .get_mut(key)
            .expect("validated vertex key")
            .property_mut())
    }

    fn edge_mut(&mut self, id: EdgeHandle) -> Result<&mut E> {
        let key = self.edge_key(id)?;
        Ok(self
            .edges
            .get_mut(key)
            .expect("validated edge key")
            .property_mut())
    }

    fn insert_vertex(&mut self, property: V) -> VertexHandle {
        let key = self.vertices.insert(Vertex::new(property));
        let handle = self.vertex_handle(key);
        trace!(vertex = ?handle, "inserted vertex");
        handle
    }

    fn insert_edge(
        &mut self,
        source: VertexHandle,
        target: VertexHandle,
        property: E,
    ) -> Result<EdgeHandle> {
        let source_key = self.vertex_key(source)?;
        let target_key = self.vertex_key(target)?;
        let key = self
            .edges
            .insert(Edge::new(source_key, target_key, property));
        self.vertices
            .get_mut(source_key)
            .expect("validated vertex key")
            .add_out_edge(key);
        self.vertices
            .get_mut(target_key)
            .expect("validated vertex key")
            .add_in_edge(key);
        let handle = self.edge_handle(key);
        trace!(edge = ?handle, ?source, ?target, "inserted edge");
        Ok(handle)
    }

    fn erase_vertex(&mut self, id: VertexHandle) -> Result<V> {
        let vertex = self.vertex_entry(id)?;
        let incident: Vec<ArenaKey> = vertex.in_edges().chain(vertex.out_edges()).collect();
        // A self-loop is listed twice; the second detach finds nothing.
        #[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
        let detached = incident
            .into_iter()
            .filter(|key| self.detach_edge(*key).is_some())
            .count();
        let vertex = self
            .vertices
            .remove(id.key)
            .expect("validated vertex key");
        debug!(vertex = ?id, detached, "erased vertex");
        Ok(vertex.into_property())
    }

    fn erase_edge(&mut self, id: EdgeHandle) -> Result<E> {
        let key = self.edge_key(id)?;
        let edge = self.detach_edge(key).expect("validated edge key");
        trace!(edge = ?id, "erased edge");
        Ok(edge.into_property())
    }

    fn clear(&mut self) {
        debug!(
            vertices = self.vertices.len(),
            edges = self.edges.len(),
            "clearing graph"
        );
        self.edges.clear();
        self.vertices.clear();
    }
}

impl<V, E, S> Clone for HandleGraph<V, E, S>
where
    V: Clone,
    E: Clone,
    S: Clone,
{
    fn clone(&self) -> Self {
        Self {
            vertices: self.vertices.clone(),
            edges: self.edges.clone(),
            id: GraphId::new(),
        }
    }
}

impl<V, E, S> Default for HandleGraph<V, E, S>
where
    S: AdjacencySet<ArenaKey>,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V, E, S> Debug for HandleGraph<V, E, S>
where
    V: Debug,
    E: Debug,
    S: AdjacencySet<ArenaKey>,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        format_debug(self, f, "HandleGraph")
    }
}
