//! Route and trip algorithms
//!
//! Walk enumeration lives in the `routegraph-algorithms` crate.
//! This module provides the integration/adapter layer over [`RouteGraph`].

pub mod route;
pub mod trips;

use crate::graph::{RouteGraph, VertexLabel};
use routegraph_algorithms::GraphView;
use thiserror::Error;

// Re-export algorithms
pub use routegraph_algorithms::{enumerate_walks, visit_walks, PathResult, Walk, WalkBounds};
pub use route::{format_weight, parse_route, route_distance, RouteDistance};
pub use trips::{
    count_under_weight, count_with_exact_edges, count_with_max_edges, shortest_path,
    shortest_path_weight, RoutePath, TripPlanner,
};

/// Errors reported by trip queries
#[derive(Error, Debug, PartialEq)]
pub enum QueryError {
    #[error("No path found from {from} to {to}")]
    NoPathFound { from: VertexLabel, to: VertexLabel },

    #[error("Invalid weight bound {0}: must be a finite number")]
    InvalidWeightBound(f64),

    #[error("Weight bound {0} needs more stops than can be searched")]
    WeightBoundTooLarge(f64),
}

pub type QueryResult<T> = Result<T, QueryError>;

/// Build a GraphView from the graph for algorithm execution.
///
/// View indices are the graph's dense vertex indices.
pub fn build_view(graph: &RouteGraph) -> GraphView {
    GraphView::from_adjacency_list(graph.adjacency().to_vec())
}
