//! Route graph data model
//!
//! - Vertices identified by opaque labels
//! - Directed edges with finite non-negative weights
//! - At most one edge per ordered vertex pair
//! - Loading from compact edge-list notation

pub mod edge;
pub mod loader;
pub mod store;
pub mod types;

// Re-export main types
pub use edge::Edge;
pub use loader::{load_graph, parse_edge_list, LoadError, LoadResult};
pub use store::{build_graph, EdgeRejection, GraphError, GraphResult, GraphStatistics, RouteGraph};
pub use types::VertexLabel;
