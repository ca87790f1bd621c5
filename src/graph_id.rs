use std::sync::atomic::{AtomicUsize, Ordering};

/// A global graph identifier counter.  We assume no two live graphs will have
/// the same identifier.  Wrapping around is technically possible but would
/// only cause a handle from one graph to be mistaken for a handle of another
/// graph created 2^64 graphs later.
static GRAPH_ID_COUNTER: AtomicUsize = AtomicUsize::new(0);

/// A unique identifier for a graph instance.  Every handle carries the
/// identifier of the graph that issued it.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
pub struct GraphId(usize);

impl GraphId {
    /// Create a new unique graph identifier.
    pub fn new() -> Self {
        GraphId(GRAPH_ID_COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for GraphId {
    fn default() -> Self {
        Self::new()
    }
}
