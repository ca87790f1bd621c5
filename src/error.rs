use std::fmt;

/// The kind of handle rejected by a graph operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HandleKind {
    Vertex,
    Edge,
}

impl fmt::Display for HandleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HandleKind::Vertex => f.write_str("vertex"),
            HandleKind::Edge => f.write_str("edge"),
        }
    }
}

/// Errors returned by graph operations.
///
/// Lookups that find nothing are not errors; they return `None`.  Corrupted
/// adjacency state is not an error either: it is reported by a panic, since
/// it can only follow from a bug inside this crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// A handle was not issued by this graph, or its referent has been erased.
    #[error("invalid {kind} handle: {reason}")]
    InvalidHandle {
        kind: HandleKind,
        reason: &'static str,
    },
}

impl GraphError {
    pub(crate) fn invalid_vertex(reason: &'static str) -> Self {
        GraphError::InvalidHandle {
            kind: HandleKind::Vertex,
            reason,
        }
    }

    pub(crate) fn invalid_edge(reason: &'static str) -> Self {
        GraphError::InvalidHandle {
            kind: HandleKind::Edge,
            reason,
        }
    }

    /// Returns the kind of handle that was rejected.
    pub fn handle_kind(&self) -> HandleKind {
        match self {
            GraphError::InvalidHandle { kind, .. } => *kind,
        }
    }
}

pub type Result<T> = std::result::Result<T, GraphError>;
