//! Containers usable as per-vertex adjacency sets.
//!
//! A vertex keeps its incoming and outgoing edges in two sets of edge keys.
//! The set type is a generic parameter of the graph, so the ordering of
//! adjacency iteration is whatever the chosen container provides.

use std::{
    collections::{BTreeSet, HashSet},
    hash::{BuildHasher, Hash},
};

/// A unique-element container of edge keys.
pub trait AdjacencySet<K>: Default {
    /// Inserts a key, returning `false` if it was already present.
    fn insert(&mut self, key: K) -> bool;

    /// Removes a key, returning `true` if it was present.
    fn remove(&mut self, key: &K) -> bool;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates over the keys in container order.
    fn iter<'a>(&'a self) -> impl Iterator<Item = &'a K>
    where
        K: 'a;
}

/// Ordered by key.  For freshly built graphs this is creation order, since
/// both addressing modes hand out increasing keys until storage is reused.
impl<K: Ord> AdjacencySet<K> for BTreeSet<K> {
    fn insert(&mut self, key: K) -> bool {
        BTreeSet::insert(self, key)
    }

    fn remove(&mut self, key: &K) -> bool {
        BTreeSet::remove(self, key)
    }

    fn len(&self) -> usize {
        BTreeSet::len(self)
    }

    fn iter<'a>(&'a self) -> impl Iterator<Item = &'a K>
    where
        K: 'a,
    {
        BTreeSet::iter(self)
    }
}

impl<K, H> AdjacencySet<K> for HashSet<K, H>
where
    K: Eq + Hash,
    H: BuildHasher + Default,
{
    fn insert(&mut self, key: K) -> bool {
        HashSet::insert(self, key)
    }

    fn remove(&mut self, key: &K) -> bool {
        HashSet::remove(self, key)
    }

    fn len(&self) -> usize {
        HashSet::len(self)
    }

    fn iter<'a>(&'a self) -> impl Iterator<Item = &'a K>
    where
        K: 'a,
    {
        HashSet::iter(self)
    }
}
