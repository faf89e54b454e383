//! Pathfinding over bounded walks
//!
//! The lightest non-trivial walk between two vertices, found by exhaustive
//! bounded enumeration. Unlike Dijkstra this also answers `source == target`
//! with the lightest cycle instead of the empty walk.

use super::common::{GraphView, VertexIdx};
use super::walks::{search_walks, WalkBounds};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Result of a pathfinding algorithm
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PathResult {
    pub source: VertexIdx,
    pub target: VertexIdx,
    pub path: Vec<VertexIdx>,
    pub cost: f64,
}

/// Edge bound large enough to reach the lightest non-trivial walk.
///
/// With non-negative weights a lightest walk can always be shortened to a
/// simple path (at most N-1 edges) or, when `source == target`, a simple
/// cycle (at most N edges).
pub fn lightest_walk_edge_bound(view: &GraphView) -> usize {
    view.node_count
}

/// Lightest walk from `source` to `target` with 1..=`max_edges` edges.
///
/// Ties keep the walk found first. Returns `None` when no such walk exists
/// within the bound. Once a walk is found, any branch already as heavy as it
/// is abandoned.
pub fn lightest_walk(
    view: &GraphView,
    source: VertexIdx,
    target: VertexIdx,
    max_edges: usize,
) -> Option<PathResult> {
    let mut best: Option<(Vec<VertexIdx>, f64)> = None;

    search_walks(view, source, target, WalkBounds::edges(max_edges), |vertices, weight| {
        if vertices.len() < 2 {
            return None;
        }
        let improves = match &best {
            Some((_, best_weight)) => weight < *best_weight,
            None => true,
        };
        if !improves {
            return None;
        }
        best = Some((vertices.to_vec(), weight));
        Some(weight)
    });

    best.map(|(path, cost)| PathResult {
        source,
        target,
        path,
        cost,
    })
}
