//! Trip counting policies
//!
//! Each policy drives the walk enumerator with its own bound and filter. A
//! "stop" is one edge traversal; the trivial zero-edge walk never counts as a
//! trip, including when source and target coincide.

use super::common::{GraphView, VertexIdx};
use super::walks::{visit_walks, WalkBounds};

/// Count walks with at least one and at most `max_edges` edges
pub fn count_walks_within(
    view: &GraphView,
    source: VertexIdx,
    target: VertexIdx,
    max_edges: usize,
) -> usize {
    let mut count = 0;
    visit_walks(view, source, target, WalkBounds::edges(max_edges), |vertices, _| {
        if vertices.len() > 1 {
            count += 1;
        }
    });
    count
}

/// Count walks with exactly `edges` edges
pub fn count_walks_exact(
    view: &GraphView,
    source: VertexIdx,
    target: VertexIdx,
    edges: usize,
) -> usize {
    let mut count = 0;
    visit_walks(view, source, target, WalkBounds::edges(edges), |vertices, _| {
        if vertices.len() - 1 == edges {
            count += 1;
        }
    });
    count
}

/// Outcome of deriving an edge bound from a weight ceiling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeBound {
    /// Every walk lighter than the ceiling has at most this many edges
    Edges(usize),
    /// No edge has a positive weight, so weight alone bounds nothing
    NoPositiveWeight,
    /// The bound does not fit in a `usize`
    Overflow,
}

/// Edge bound covering every walk lighter than `max_weight`.
///
/// A walk of `k` edges weighs at least `k * w_min`, where `w_min` is the
/// smallest positive edge weight, so `floor(max_weight / w_min) + 1` edges
/// always suffice. Non-positive `max_weight` needs no edges at all.
pub fn weight_edge_bound(view: &GraphView, max_weight: f64) -> EdgeBound {
    if max_weight <= 0.0 {
        return EdgeBound::Edges(0);
    }
    let Some(min_weight) = view.min_positive_weight() else {
        return EdgeBound::NoPositiveWeight;
    };
    let steps = (max_weight / min_weight).floor();
    if !steps.is_finite() || steps >= usize::MAX as f64 {
        return EdgeBound::Overflow;
    }
    EdgeBound::Edges(steps as usize + 1)
}

/// Count walks with 1..=`max_edges` edges whose total weight is below `max_weight`
pub fn count_walks_below(
    view: &GraphView,
    source: VertexIdx,
    target: VertexIdx,
    max_weight: f64,
    max_edges: usize,
) -> usize {
    let bounds = WalkBounds::edges(max_edges).with_weight_below(max_weight);
    let mut count = 0;
    visit_walks(view, source, target, bounds, |vertices, weight| {
        if vertices.len() > 1 && weight < max_weight {
            count += 1;
        }
    });
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    // Triangle 0 -> 1 -> 2 -> 0, each edge 1.0, plus a shortcut 0 -> 2 (3.0)
    fn triangle() -> GraphView {
        GraphView::from_edges(3, &[(0, 1, 1.0), (1, 2, 1.0), (2, 0, 1.0), (0, 2, 3.0)])
    }

    #[test]
    fn test_count_within_and_exact() {
        let view = triangle();

        // 0->0: 0-1-2-0 (3), 0-2-0 (2)
        assert_eq!(count_walks_within(&view, 0, 0, 3), 2);
        assert_eq!(count_walks_exact(&view, 0, 0, 2), 1);
        assert_eq!(count_walks_exact(&view, 0, 0, 3), 1);
        assert_eq!(count_walks_within(&view, 0, 0, 0), 0);
        assert_eq!(count_walks_exact(&view, 0, 0, 0), 0);
    }

    #[test]
    fn test_weight_edge_bound() {
        let view = triangle();
        assert_eq!(weight_edge_bound(&view, 3.0), EdgeBound::Edges(4));
        assert_eq!(weight_edge_bound(&view, 2.5), EdgeBound::Edges(3));
        assert_eq!(weight_edge_bound(&view, 0.0), EdgeBound::Edges(0));
        assert_eq!(weight_edge_bound(&view, -1.0), EdgeBound::Edges(0));
        assert_eq!(weight_edge_bound(&view, 1e30), EdgeBound::Overflow);

        let flat = GraphView::from_edges(2, &[(0, 1, 0.0)]);
        assert_eq!(weight_edge_bound(&flat, 5.0), EdgeBound::NoPositiveWeight);
    }

    #[test]
    fn test_count_below_is_strict() {
        let view = triangle();

        // 0-1-2-0 weighs 3.0, 0-2-0 weighs 4.0
        assert_eq!(weight_edge_bound(&view, 4.0), EdgeBound::Edges(5));
        assert_eq!(count_walks_below(&view, 0, 0, 4.0, 5), 1);
        assert_eq!(count_walks_below(&view, 0, 0, 4.5, 5), 2);

        assert_eq!(count_walks_below(&view, 0, 0, 0.0, 0), 0);
    }

    #[test]
    fn test_exact_count_with_huge_edge_bound() {
        let view = GraphView::from_edges(3, &[(0, 1, 1.0), (1, 2, 1.0)]);
        assert_eq!(count_walks_exact(&view, 0, 2, usize::MAX), 0);
        assert_eq!(count_walks_within(&view, 0, 2, usize::MAX), 1);
    }

    #[test]
    fn test_count_below_on_deep_cheap_cycle() {
        // 2^-10 sums exactly: k round trips weigh k / 512, so 1..=15_359 round
        // trips stay below 30 and the deepest walk has 30_718 edges.
        let hop = 1.0 / 1024.0;
        let view = GraphView::from_edges(2, &[(0, 1, hop), (1, 0, hop)]);

        let EdgeBound::Edges(bound) = weight_edge_bound(&view, 30.0) else {
            panic!("expected a finite edge bound");
        };
        assert_eq!(bound, 30_721);
        assert_eq!(count_walks_below(&view, 0, 0, 30.0, bound), 15_359);
    }
}
