pub mod adjacency;
pub mod arena;
pub mod descriptor_graph;
pub mod descriptor_table;
pub mod edge_ref;
pub mod error;
pub mod graph;
pub mod handle_graph;
pub mod search;
pub mod tracing_support;
pub mod vertex_ref;
pub mod visitor;

mod edge;
mod format_debug;
mod graph_id;
mod vertex;

pub use adjacency::AdjacencySet;
pub use arena::ArenaKey;
pub use descriptor_graph::{DescriptorGraph, EdgeDescriptor, VertexDescriptor};
pub use edge_ref::EdgeRef;
pub use error::{GraphError, HandleKind, Result};
pub use graph::{EdgeId, Graph, GraphMut, VertexId};
pub use handle_graph::{EdgeHandle, HandleGraph, VertexHandle};
pub use search::{
    Color, ColorMap, SearchOutcome, breadth_first_search, depth_first_forest, depth_first_search,
};
pub use vertex_ref::VertexRef;
pub use visitor::{NullVisitor, Visitor};
