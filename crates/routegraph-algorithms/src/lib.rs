pub mod common;
pub mod walks;
pub mod pathfinding;
pub mod trips;

pub use common::{GraphView, VertexIdx};
pub use walks::{enumerate_walks, visit_walks, Walk, WalkBounds};
pub use pathfinding::{lightest_walk, lightest_walk_edge_bound, PathResult};
pub use trips::{
    count_walks_below, count_walks_exact, count_walks_within, weight_edge_bound, EdgeBound,
};
