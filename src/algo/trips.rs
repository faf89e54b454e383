//! Trip queries by vertex label
//!
//! Resolves labels to dense indices, runs the walk policies from
//! `routegraph-algorithms` over a [`GraphView`], and maps results back.

use super::{build_view, QueryError, QueryResult};
use crate::graph::{RouteGraph, VertexLabel};
use routegraph_algorithms::{
    count_walks_below, count_walks_exact, count_walks_within, lightest_walk,
    lightest_walk_edge_bound, weight_edge_bound, EdgeBound, GraphView, VertexIdx,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// A lightest route between two vertices
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutePath {
    pub source: VertexLabel,
    pub target: VertexLabel,
    pub stops: Vec<VertexLabel>,
    pub cost: f64,
}

/// Query front-end over one immutable graph.
///
/// Holds the dense view so a battery of queries projects the graph once.
/// Each query keeps its own search state, so a planner can be shared across
/// threads.
#[derive(Debug, Clone)]
pub struct TripPlanner<'g> {
    graph: &'g RouteGraph,
    view: GraphView,
    shortest_path_max_edges: Option<usize>,
}

impl<'g> TripPlanner<'g> {
    pub fn new(graph: &'g RouteGraph) -> Self {
        Self {
            graph,
            view: build_view(graph),
            shortest_path_max_edges: None,
        }
    }

    /// Override the edge bound for shortest-path search (default: vertex count)
    pub fn with_shortest_path_max_edges(mut self, max_edges: Option<usize>) -> Self {
        self.shortest_path_max_edges = max_edges;
        self
    }

    pub fn graph(&self) -> &'g RouteGraph {
        self.graph
    }

    pub fn view(&self) -> &GraphView {
        &self.view
    }

    fn endpoints(&self, from: &str, to: &str) -> Option<(VertexIdx, VertexIdx)> {
        Some((self.graph.index_of(from)?, self.graph.index_of(to)?))
    }

    /// Trips from `from` to `to` with at least one and at most `max_edges` stops
    pub fn count_with_max_edges(&self, from: &str, to: &str, max_edges: usize) -> usize {
        let count = self
            .endpoints(from, to)
            .map_or(0, |(s, t)| count_walks_within(&self.view, s, t, max_edges));
        debug!("Trips {}->{} with at most {} stops: {}", from, to, max_edges, count);
        count
    }

    /// Trips from `from` to `to` with exactly `exact_edges` stops
    pub fn count_with_exact_edges(&self, from: &str, to: &str, exact_edges: usize) -> usize {
        let count = self
            .endpoints(from, to)
            .map_or(0, |(s, t)| count_walks_exact(&self.view, s, t, exact_edges));
        debug!("Trips {}->{} with exactly {} stops: {}", from, to, exact_edges, count);
        count
    }

    /// Lightest non-trivial route; for `from == to` the lightest cycle
    pub fn shortest_path(&self, from: &str, to: &str) -> QueryResult<RoutePath> {
        let no_path = || QueryError::NoPathFound {
            from: from.into(),
            to: to.into(),
        };
        let (s, t) = self.endpoints(from, to).ok_or_else(no_path)?;
        let max_edges = self
            .shortest_path_max_edges
            .unwrap_or_else(|| lightest_walk_edge_bound(&self.view));

        let result = lightest_walk(&self.view, s, t, max_edges).ok_or_else(no_path)?;
        let stops = result
            .path
            .iter()
            .filter_map(|&idx| self.graph.label_at(idx).cloned())
            .collect();
        debug!("Shortest {}->{}: {}", from, to, result.cost);

        Ok(RoutePath {
            source: from.into(),
            target: to.into(),
            stops,
            cost: result.cost,
        })
    }

    pub fn shortest_path_weight(&self, from: &str, to: &str) -> QueryResult<f64> {
        self.shortest_path(from, to).map(|path| path.cost)
    }

    /// Distinct non-trivial trips whose total distance is strictly below `max_weight`
    pub fn count_under_weight(&self, from: &str, to: &str, max_weight: f64) -> QueryResult<usize> {
        if !max_weight.is_finite() {
            return Err(QueryError::InvalidWeightBound(max_weight));
        }
        let Some((s, t)) = self.endpoints(from, to) else {
            return Ok(0);
        };

        let max_edges = match weight_edge_bound(&self.view, max_weight) {
            EdgeBound::Edges(max_edges) => max_edges,
            EdgeBound::NoPositiveWeight => {
                warn!(
                    "No positive edge weight to derive a stop bound below {}; falling back to {} stops",
                    max_weight, self.view.node_count
                );
                self.view.node_count
            }
            EdgeBound::Overflow => return Err(QueryError::WeightBoundTooLarge(max_weight)),
        };

        let count = count_walks_below(&self.view, s, t, max_weight, max_edges);
        debug!(
            "Trips {}->{} below {} (searched up to {} stops): {}",
            from, to, max_weight, max_edges, count
        );
        Ok(count)
    }
}

pub fn count_with_max_edges(graph: &RouteGraph, from: &str, to: &str, max_edges: usize) -> usize {
    TripPlanner::new(graph).count_with_max_edges(from, to, max_edges)
}

pub fn count_with_exact_edges(
    graph: &RouteGraph,
    from: &str,
    to: &str,
    exact_edges: usize,
) -> usize {
    TripPlanner::new(graph).count_with_exact_edges(from, to, exact_edges)
}

pub fn shortest_path(graph: &RouteGraph, from: &str, to: &str) -> QueryResult<RoutePath> {
    TripPlanner::new(graph).shortest_path(from, to)
}

pub fn shortest_path_weight(graph: &RouteGraph, from: &str, to: &str) -> QueryResult<f64> {
    TripPlanner::new(graph).shortest_path_weight(from, to)
}

pub fn count_under_weight(
    graph: &RouteGraph,
    from: &str,
    to: &str,
    max_weight: f64,
) -> QueryResult<usize> {
    TripPlanner::new(graph).count_under_weight(from, to, max_weight)
}
