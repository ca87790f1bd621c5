/// Storage record for a directed edge.  `K` is the vertex key type of the
/// owning graph.
#[derive(Clone, Debug)]
pub(crate) struct Edge<E, K> {
    property: E,
    source: K,
    target: K,
}

impl<E, K: Copy + Eq> Edge<E, K> {
    pub fn new(source: K, target: K, property: E) -> Self {
        Self {
            property,
            source,
            target,
        }
    }

    pub fn property(&self) -> &E {
        &self.property
    }

    pub fn property_mut(&mut self) -> &mut E {
        &mut self.property
    }

    pub fn into_property(self) -> E {
        self.property
    }

    pub fn source(&self) -> K {
        self.source
    }

    pub fn target(&self) -> K {
        self.target
    }

    pub fn is_self_loop(&self) -> bool {
        self.source == self.target
    }

    /// Given one endpoint, returns the other.  A self-loop's opposite is the
    /// vertex itself.  Returns `None` if `vertex` is not an endpoint.
    pub fn opposite(&self, vertex: K) -> Option<K> {
        if vertex == self.source {
            Some(self.target)
        } else if vertex == self.target {
            Some(self.source)
        } else {
            None
        }
    }
}
