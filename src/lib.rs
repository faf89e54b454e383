//! Routegraph
//!
//! Route planning over a small in-memory directed weighted graph: route
//! distances, stop-bounded trip counts, shortest routes (including the
//! lightest cycle back to the start) and distance-bounded trip counts.
//!
//! # Architecture
//!
//! - `graph`: the route graph store and its edge-list loader
//! - `algo`: route evaluation and trip queries, an adapter over the
//!   `routegraph-algorithms` crate which does the bounded walk enumeration
//! - `battery`: ordered query batteries and report formatting
//! - `config`: YAML-backed planner configuration
//!
//! ## Example Usage
//!
//! ```rust
//! use routegraph::algo::{count_with_max_edges, route_distance, shortest_path_weight, RouteDistance};
//! use routegraph::graph::load_graph;
//!
//! let graph = load_graph("AB5, BC4, CD8, DC8, DE6, AD5, CE2, EB3, AE7").unwrap();
//!
//! assert_eq!(route_distance(&graph, &["A", "B", "C"]), RouteDistance::Distance(9.0));
//! assert_eq!(route_distance(&graph, &["A", "E", "D"]).to_string(), "NO SUCH ROUTE");
//! assert_eq!(count_with_max_edges(&graph, "C", "C", 3), 2);
//! assert_eq!(shortest_path_weight(&graph, "B", "B"), Ok(9.0));
//! ```

#![warn(clippy::all)]

pub mod algo;
pub mod battery;
pub mod config;
pub mod graph;

// Re-export main types for convenience
pub use graph::{
    build_graph, load_graph, Edge, GraphError, GraphResult, GraphStatistics, LoadError,
    LoadResult, RouteGraph, VertexLabel,
};

pub use algo::{
    count_under_weight, count_with_exact_edges, count_with_max_edges, route_distance,
    shortest_path, shortest_path_weight, QueryError, QueryResult, RouteDistance, RoutePath,
    TripPlanner,
};

pub use battery::{canonical_battery, format_report, run_battery, QueryOutcome, TripQuery};

pub use config::{ConfigError, ConfigResult, PlannerConfig, CANONICAL_GRAPH};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}
