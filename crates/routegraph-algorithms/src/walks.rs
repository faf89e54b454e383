//! Bounded walk enumeration
//!
//! A walk may revisit vertices and edges, so on a cyclic graph the number of
//! walks between two vertices is unbounded. Every search here therefore takes
//! a mandatory edge-count bound, and optionally a weight ceiling.

use super::common::{GraphView, VertexIdx};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A walk through the view: consecutive vertices are joined by an edge
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Walk {
    pub vertices: Vec<VertexIdx>,
    pub weight: f64,
}

impl Walk {
    /// Number of edges traversed (stops)
    pub fn edge_count(&self) -> usize {
        self.vertices.len().saturating_sub(1)
    }

    /// The zero-edge walk consisting of a single vertex
    pub fn is_trivial(&self) -> bool {
        self.edge_count() == 0
    }
}

/// Limits applied to a walk search
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WalkBounds {
    /// Maximum number of edges in an emitted walk. Zero yields no walks.
    pub max_edges: usize,
    /// Abandon any branch whose accumulated weight reaches this value
    pub weight_below: Option<f64>,
}

impl WalkBounds {
    pub fn edges(max_edges: usize) -> Self {
        Self {
            max_edges,
            weight_below: None,
        }
    }

    pub fn with_weight_below(mut self, ceiling: f64) -> Self {
        self.weight_below = Some(ceiling);
        self
    }
}

/// One level of the depth-first search: a vertex on the current walk and
/// the CSR position of its next unexplored outgoing edge
struct Frame {
    vertex: VertexIdx,
    cursor: usize,
    weight: f64,
}

/// Iterative depth-first walk search.
///
/// Memory grows with the depth actually reached, never with `bounds.max_edges`,
/// so huge bounds on acyclic or weight-limited searches stay cheap. The visitor
/// may return a tighter weight ceiling that applies to the rest of the search.
pub(crate) fn search_walks<F>(
    view: &GraphView,
    source: VertexIdx,
    target: VertexIdx,
    bounds: WalkBounds,
    mut visitor: F,
) where
    F: FnMut(&[VertexIdx], f64) -> Option<f64>,
{
    if !view.contains(source) || !view.contains(target) || bounds.max_edges == 0 {
        return;
    }

    let mut ceiling = bounds.weight_below;
    let mut path = vec![source];
    let mut stack = vec![Frame {
        vertex: source,
        cursor: view.out_offsets[source],
        weight: 0.0,
    }];

    loop {
        let edges_so_far = stack.len() - 1;
        let Some(frame) = stack.last_mut() else {
            break;
        };

        let end = view.out_offsets[frame.vertex + 1];
        if edges_so_far >= bounds.max_edges || frame.cursor >= end {
            stack.pop();
            path.pop();
            continue;
        }

        let edge = frame.cursor;
        frame.cursor += 1;
        let next = view.out_targets[edge];
        let next_weight = frame.weight + view.weights[edge];
        if ceiling.is_some_and(|c| next_weight >= c) {
            continue;
        }

        path.push(next);
        if next == target {
            if let Some(tighter) = visitor(&path, next_weight) {
                ceiling = Some(ceiling.map_or(tighter, |c| c.min(tighter)));
            }
        }
        // Walks may pass through the target and come back to it later.
        stack.push(Frame {
            vertex: next,
            cursor: view.out_offsets[next],
            weight: next_weight,
        });
    }
}

/// Visit every walk from `source` to `target` with between 1 and
/// `bounds.max_edges` edges.
///
/// The visitor receives the vertex sequence and total weight of each walk.
/// The trivial zero-edge walk is never visited, even when `source == target`.
/// Unknown endpoints or a zero edge bound visit nothing.
pub fn visit_walks<F>(
    view: &GraphView,
    source: VertexIdx,
    target: VertexIdx,
    bounds: WalkBounds,
    mut visitor: F,
) where
    F: FnMut(&[VertexIdx], f64),
{
    search_walks(view, source, target, bounds, |vertices, weight| {
        visitor(vertices, weight);
        None
    });
}

/// Collect every walk from `source` to `target` with 1..=`max_edges` edges
pub fn enumerate_walks(
    view: &GraphView,
    source: VertexIdx,
    target: VertexIdx,
    max_edges: usize,
) -> Vec<Walk> {
    let mut walks = Vec::new();
    visit_walks(view, source, target, WalkBounds::edges(max_edges), |vertices, weight| {
        walks.push(Walk {
            vertices: vertices.to_vec(),
            weight,
        });
    });
    walks
}
