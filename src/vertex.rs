use std::{fmt::Debug, marker::PhantomData};

use crate::adjacency::AdjacencySet;

/// Storage record for a vertex: its property plus the keys of its incoming
/// and outgoing edges.  `K` is the edge key type of the owning graph.
///
/// Invariant: an edge key is in `out_edges` iff this vertex is the edge's
/// source, and in `in_edges` iff it is the edge's target.  A self-loop is in
/// both.
#[derive(Clone)]
pub(crate) struct Vertex<V, K, S> {
    property: V,
    in_edges: S,
    out_edges: S,
    key: PhantomData<K>,
}

impl<V, K, S> Vertex<V, K, S>
where
    K: Copy + Eq + Debug,
    S: AdjacencySet<K>,
{
    pub fn new(property: V) -> Self {
        Self {
            property,
            in_edges: S::default(),
            out_edges: S::default(),
            key: PhantomData,
        }
    }

    pub fn property(&self) -> &V {
        &self.property
    }

    pub fn property_mut(&mut self) -> &mut V {
        &mut self.property
    }

    pub fn into_property(self) -> V {
        self.property
    }

    pub fn add_in_edge(&mut self, edge: K) {
        let inserted = self.in_edges.insert(edge);
        debug_assert!(inserted, "edge {edge:?} already in incoming set");
    }

    pub fn add_out_edge(&mut self, edge: K) {
        let inserted = self.out_edges.insert(edge);
        debug_assert!(inserted, "edge {edge:?} already in outgoing set");
    }

    pub fn in_edges(&self) -> impl Iterator<Item = K> + '_ {
        self.in_edges.iter().copied()
    }

    pub fn out_edges(&self) -> impl Iterator<Item = K> + '_ {
        self.out_edges.iter().copied()
    }

    pub fn in_degree(&self) -> usize {
        self.in_edges.len()
    }

    pub fn out_degree(&self) -> usize {
        self.out_edges.len()
    }

    /// Sum of the incoming and outgoing set sizes.  A self-loop counts twice.
    pub fn degree(&self) -> usize {
        self.in_degree() + self.out_degree()
    }

    /// Finds the first incident edge, scanning incoming then outgoing edges,
    /// whose opposite endpoint is `other`.  `opposite` maps an edge key to the
    /// endpoint across from this vertex.
    pub fn find<VK: Eq>(&self, other: VK, mut opposite: impl FnMut(K) -> VK) -> Option<K> {
        self.in_edges()
            .chain(self.out_edges())
            .find(|edge| opposite(*edge) == other)
    }

    /// Removes `edge` from whichever adjacency sets it belongs to, based on
    /// which of its endpoints is `this`.
    ///
    /// # Panics
    ///
    /// Panics if `this` is neither endpoint.  That means the adjacency
    /// invariant was already broken, so there is nothing to recover.
    pub fn remove_edge<VK: Eq + Debug>(&mut self, this: VK, edge: K, source: VK, target: VK) {
        let is_source = this == source;
        let is_target = this == target;
        if !is_source && !is_target {
            panic!("inconsistent adjacency: edge {edge:?} is not incident to vertex {this:?}");
        }
        if is_source {
            self.out_edges.remove(&edge);
        }
        if is_target {
            self.in_edges.remove(&edge);
        }
    }
}

impl<V: Debug, K, S> Debug for Vertex<V, K, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Vertex").field(&self.property).finish()
    }
}
