use std::{collections::BTreeSet, fmt::Debug};

use crate::{
    adjacency::AdjacencySet,
    descriptor_table::DescriptorTable,
    edge::Edge,
    error::{GraphError, Result},
    format_debug::format_debug,
    graph::{Graph, GraphMut, foreign_edge, foreign_vertex},
    graph_id::GraphId,
    tracing_support::{debug, trace},
    vertex::Vertex,
};

/// Vertex identifier for [`DescriptorGraph`]: the vertex's position in
/// creation order.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexDescriptor {
    index: usize,
    graph_id: GraphId,
}

impl VertexDescriptor {
    /// The creation-order index of the vertex: 0 for the first vertex ever
    /// inserted into the graph, 1 for the second, and so on.
    pub fn index(&self) -> usize {
        self.index
    }
}

impl Debug for VertexDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "VertexDescriptor({})", self.index)
    }
}

impl crate::graph::VertexId for VertexDescriptor {}

/// Edge identifier for [`DescriptorGraph`].
///
/// Identifies an edge by its (source-index, target-index) pair together with
/// its own creation-order index, which keeps parallel edges distinct.
/// Descriptors order by creation.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeDescriptor {
    index: usize,
    source: usize,
    target: usize,
    graph_id: GraphId,
}

impl EdgeDescriptor {
    /// The creation-order index of the edge.
    pub fn index(&self) -> usize {
        self.index
    }

    /// The (source-index, target-index) pair of the edge.
    pub fn ends(&self) -> (usize, usize) {
        (self.source, self.target)
    }
}

impl Debug for EdgeDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "EdgeDescriptor({}: {} -> {})",
            self.index, self.source, self.target
        )
    }
}

impl crate::graph::EdgeId for EdgeDescriptor {}

/// A property graph addressed by dense integer descriptors.
///
/// Every vertex and edge gets the next index in creation order; indices are
/// never reused, even after [`GraphMut::clear`].  Vertex iteration is in
/// creation order.
///
/// # Type Parameters
/// * `V` - The type of vertex properties
/// * `E` - The type of edge properties
/// * `S` - The adjacency set container, keyed by edge index
///
/// A clone is a new graph: it gets its own identity, so descriptors issued
/// by either copy are rejected by the other.
///
/// Erased vertices keep their slot until [`GraphMut::clear`], so
/// [`Graph::vertex_bound`], the size of per-vertex search state and the
/// cost of iterating vertices grow with the number of vertices inserted
/// since the last clear, not with the number currently live.
pub struct DescriptorGraph<V, E, S = BTreeSet<usize>> {
    vertices: DescriptorTable<Vertex<V, usize, S>>,
    edges: DescriptorTable<Edge<E, usize>>,
    id: GraphId,
}

impl<V, E, S> DescriptorGraph<V, E, S>
where
    S: AdjacencySet<usize>,
{
    fn vertex_descriptor(&self, index: usize) -> VertexDescriptor {
        VertexDescriptor {
            index,
            graph_id: self.id,
        }
    }

    fn edge_descriptor(&self, index: usize, edge: &Edge<E, usize>) -> EdgeDescriptor {
        EdgeDescriptor {
            index,
            source: edge.source(),
            target: edge.target(),
            graph_id: self.id,
        }
    }

    /// Builds the descriptor of a live edge from its index alone.
    fn edge_descriptor_at(&self, index: usize) -> EdgeDescriptor {
        let edge = self.edges.get(index).expect("adjacent edge is live");
        self.edge_descriptor(index, edge)
    }

    fn vertex_entry(&self, descriptor: VertexDescriptor) -> Result<&Vertex<V, usize, S>> {
        if descriptor.graph_id != self.id {
            return Err(foreign_vertex());
        }
        self.vertices
            .get(descriptor.index)
            .ok_or_else(|| GraphError::invalid_vertex("no live vertex has this descriptor"))
    }

    fn edge_entry(&self, descriptor: EdgeDescriptor) -> Result<&Edge<E, usize>> {
        if descriptor.graph_id != self.id {
            return Err(foreign_edge());
        }
        self.edges
            .get(descriptor.index)
            .ok_or_else(|| GraphError::invalid_edge("no live edge has this descriptor"))
    }

    /// Unlinks an edge from both endpoints and removes it from the edge
    /// table.  Returns `None` if the edge is already gone.
    fn detach_edge(&mut self, index: usize) -> Option<Edge<E, usize>> {
        let edge = self.edges.remove(index)?;
        let (source, target) = (edge.source(), edge.target());
        self.vertices
            .get_mut(source)
            .expect("edge source is live")
            .remove_edge(source, index, source, target);
        if !edge.is_self_loop() {
            self.vertices
                .get_mut(target)
                .expect("edge target is live")
                .remove_edge(target, index, source, target);
        }
        Some(edge)
    }
}

impl<V, E, S> Graph for DescriptorGraph<V, E, S>
where
    S: AdjacencySet<usize>,
{
    type VertexData = V;
    type EdgeData = E;
    type VertexId = VertexDescriptor;
    type EdgeId = EdgeDescriptor;

    fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Gets an iterator over all vertex descriptors in creation order.
    fn vertex_ids(&self) -> impl Iterator<Item = VertexDescriptor> + '_ {
        self.vertices
            .keys()
            .map(move |index| self.vertex_descriptor(index))
    }

    fn check_valid_vertex_id(&self, id: VertexDescriptor) -> Result<()> {
        self.vertex_entry(id).map(|_| ())
    }

    fn vertex(&self, id: VertexDescriptor) -> Result<&V> {
        Ok(self.vertex_entry(id)?.property())
    }

    fn out_edges(&self, id: VertexDescriptor) -> Result<impl Iterator<Item = EdgeDescriptor> + '_> {
        let vertex = self.vertex_entry(id)?;
        Ok(vertex
            .out_edges()
            .map(move |index| self.edge_descriptor_at(index)))
    }

    fn in_edges(&self, id: VertexDescriptor) -> Result<impl Iterator<Item = EdgeDescriptor> + '_> {
        let vertex = self.vertex_entry(id)?;
        Ok(vertex
            .in_edges()
            .map(move |index| self.edge_descriptor_at(index)))
    }

    fn out_degree(&self, id: VertexDescriptor) -> Result<usize> {
        Ok(self.vertex_entry(id)?.out_degree())
    }

    fn in_degree(&self, id: VertexDescriptor) -> Result<usize> {
        Ok(self.vertex_entry(id)?.in_degree())
    }

    fn degree(&self, id: VertexDescriptor) -> Result<usize> {
        Ok(self.vertex_entry(id)?.degree())
    }

    fn find_adjacent(
        &self,
        id: VertexDescriptor,
        other: VertexDescriptor,
    ) -> Result<Option<EdgeDescriptor>> {
        let vertex = self.vertex_entry(id)?;
        self.check_valid_vertex_id(other)?;
        let found = vertex.find(other.index, |edge_index| {
            self.edges
                .get(edge_index)
                .and_then(|edge| edge.opposite(id.index))
                .expect("adjacent edge is incident to its vertex")
        });
        Ok(found.map(|index| self.edge_descriptor_at(index)))
    }

    fn vertex_bound(&self) -> usize {
        self.vertices.slot_bound()
    }

    fn vertex_index(&self, id: VertexDescriptor) -> Result<usize> {
        self.check_valid_vertex_id(id)?;
        Ok(self
            .vertices
            .slot_of(id.index)
            .expect("validated vertex descriptor"))
    }

    fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// Gets an iterator over all edge descriptors in creation order.
    fn edge_ids(&self) -> impl Iterator<Item = EdgeDescriptor> + '_ {
        self.edges
            .iter()
            .map(move |(index, edge)| self.edge_descriptor(index, edge))
    }

    fn check_valid_edge_id(&self, id: EdgeDescriptor) -> Result<()> {
        self.edge_entry(id).map(|_| ())
    }

    fn edge(&self, id: EdgeDescriptor) -> Result<&E> {
        Ok(self.edge_entry(id)?.property())
    }

    fn ends(&self, id: EdgeDescriptor) -> Result<(VertexDescriptor, VertexDescriptor)> {
        let edge = self.edge_entry(id)?;
        Ok((
            self.vertex_descriptor(edge.source()),
            self.vertex_descriptor(edge.target()),
        ))
    }

    fn find_edge_between(
        &self,
        source: VertexDescriptor,
        target: VertexDescriptor,
    ) -> Result<Option<EdgeDescriptor>> {
        let vertex = self.vertex_entry(source)?;
        self.check_valid_vertex_id(target)?;
        let found = vertex.out_edges().find(
            |index| matches!(self.edges.get(*index), Some(edge) if edge.target() == target.index),
        );
        Ok(found.map(|index| self.edge_descriptor_at(index)))
    }
}

impl<V, E, S> GraphMut for DescriptorGraph<V, E, S>
where
    S: AdjacencySet<usize>,
{
    fn new() -> Self {
        Self {
            vertices: DescriptorTable::new(),
            edges: DescriptorTable::new(),
            id: GraphId::new(),
        }
    }

    fn vertex_mut(&mut self, id: VertexDescriptor) -> Result<&mut V> {
        self.check_valid_vertex_id(id)?;
        Ok(self
            .vertices
            .get_mut(id.index)
            .expect("validated vertex descriptor")
            .property_mut())
    }

    fn edge_mut(&mut self, id: EdgeDescriptor) -> Result<&mut E> {
        self.check_valid_edge_id(id)?;
        Ok(self
            .edges
            .get_mut(id.index)
            .expect("validated edge descriptor")
            .property_mut())
    }

    fn insert_vertex(&mut self, property: V) -> VertexDescriptor {
        let index = self.vertices.insert(Vertex::new(property));
        let descriptor = self.vertex_descriptor(index);
        trace!(vertex = ?descriptor, "inserted vertex");
        descriptor
    }

    fn insert_edge(
        &mut self,
        source: VertexDescriptor,
        target: VertexDescriptor,
        property: E,
    ) -> Result<EdgeDescriptor> {
        self.check_valid_vertex_id(source)?;
        self.check_valid_vertex_id(target)?;
        let index = self
            .edges
            .insert(Edge::new(source.index, target.index, property));
        self.vertices
            .get_mut(source.index)
            .expect("validated vertex descriptor")
            .add_out_edge(index);
        self.vertices
            .get_mut(target.index)
            .expect("validated vertex descriptor")
            .add_in_edge(index);
        let descriptor = EdgeDescriptor {
            index,
            source: source.index,
            target: target.index,
            graph_id: self.id,
        };
        trace!(edge = ?descriptor, "inserted edge");
        Ok(descriptor)
    }

    fn erase_vertex(&mut self, id: VertexDescriptor) -> Result<V> {
        let vertex = self.vertex_entry(id)?;
        let incident: Vec<usize> = vertex.in_edges().chain(vertex.out_edges()).collect();
        // A self-loop is listed twice; the second detach finds nothing.
        #[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
        let detached = incident
            .into_iter()
            .filter(|index| self.detach_edge(*index).is_some())
            .count();
        let vertex = self
            .vertices
            .remove(id.index)
            .expect("validated vertex descriptor");
        debug!(vertex = ?id, detached, "erased vertex");
        Ok(vertex.into_property())
    }

    fn erase_edge(&mut self, id: EdgeDescriptor) -> Result<E> {
        self.check_valid_edge_id(id)?;
        let edge = self
            .detach_edge(id.index)
            .expect("validated edge descriptor");
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

impl<V, E, S> Clone for DescriptorGraph<V, E, S>
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

impl<V, E, S> Default for DescriptorGraph<V, E, S>
where
    S: AdjacencySet<usize>,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V, E, S> Debug for DescriptorGraph<V, E, S>
where
    V: Debug,
    E: Debug,
    S: AdjacencySet<usize>,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        format_debug(self, f, "DescriptorGraph")
    }
}
