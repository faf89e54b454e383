//! Shared utilities for walk algorithms
//!
//! Provides a read-only, dense view of a weighted digraph for algorithm execution.

/// Dense vertex index (0..N)
pub type VertexIdx = usize;

/// A dense, integer-indexed view of the graph topology using Compressed Sparse Row (CSR) format.
///
/// Every edge carries a weight. The view owns no labels; callers keep the
/// mapping between their own identifiers and dense indices.
#[derive(Debug, Clone)]
pub struct GraphView {
    /// Number of vertices
    pub node_count: usize,

    /// Outgoing edges CSR structure
    /// Offsets into `out_targets`. Size = node_count + 1
    pub out_offsets: Vec<usize>,
    /// Contiguous array of target vertex indices
    pub out_targets: Vec<VertexIdx>,
    /// Edge weights: aligned with `out_targets`
    pub weights: Vec<f64>,
}

impl GraphView {
    /// Get the out-degree of a vertex (by index)
    pub fn out_degree(&self, idx: VertexIdx) -> usize {
        self.out_offsets[idx + 1] - self.out_offsets[idx]
    }

    /// Get outgoing neighbors (successors) of a vertex
    pub fn successors(&self, idx: VertexIdx) -> &[VertexIdx] {
        let start = self.out_offsets[idx];
        let end = self.out_offsets[idx + 1];
        &self.out_targets[start..end]
    }

    /// Get weights for outgoing edges of a vertex, aligned with `successors`
    pub fn weights(&self, idx: VertexIdx) -> &[f64] {
        let start = self.out_offsets[idx];
        let end = self.out_offsets[idx + 1];
        &self.weights[start..end]
    }

    /// Iterate `(target, weight)` pairs for the outgoing edges of a vertex
    pub fn out_edges(&self, idx: VertexIdx) -> impl Iterator<Item = (VertexIdx, f64)> + '_ {
        self.successors(idx)
            .iter()
            .copied()
            .zip(self.weights(idx).iter().copied())
    }

    /// Whether `idx` names a vertex of this view
    pub fn contains(&self, idx: VertexIdx) -> bool {
        idx < self.node_count
    }

    /// Total number of edges
    pub fn edge_count(&self) -> usize {
        self.out_targets.len()
    }

    /// Smallest strictly positive edge weight, if any edge has one
    pub fn min_positive_weight(&self) -> Option<f64> {
        self.weights
            .iter()
            .copied()
            .filter(|w| *w > 0.0)
            .fold(None, |acc, w| match acc {
                Some(m) if m <= w => Some(m),
                _ => Some(w),
            })
    }

    /// Build a view from per-vertex adjacency lists of `(target, weight)`
    pub fn from_adjacency_list(outgoing: Vec<Vec<(VertexIdx, f64)>>) -> Self {
        let node_count = outgoing.len();
        let mut out_offsets = Vec::with_capacity(node_count + 1);
        let mut out_targets = Vec::new();
        let mut weights = Vec::new();

        out_offsets.push(0);
        for neighbors in outgoing {
            for (target, weight) in neighbors {
                out_targets.push(target);
                weights.push(weight);
            }
            out_offsets.push(out_targets.len());
        }

        GraphView {
            node_count,
            out_offsets,
            out_targets,
            weights,
        }
    }

    /// Build a view with `node_count` vertices from a flat `(source, target, weight)` list
    pub fn from_edges(node_count: usize, edges: &[(VertexIdx, VertexIdx, f64)]) -> Self {
        let mut outgoing = vec![Vec::new(); node_count];
        for &(source, target, weight) in edges {
            outgoing[source].push((target, weight));
        }
        Self::from_adjacency_list(outgoing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csr_layout() {
        // 0 -> 1 (2.0), 0 -> 2 (3.0), 2 -> 0 (1.5)
        let view = GraphView::from_edges(3, &[(0, 1, 2.0), (0, 2, 3.0), (2, 0, 1.5)]);

        assert_eq!(view.node_count, 3);
        assert_eq!(view.edge_count(), 3);
        assert_eq!(view.out_offsets, vec![0, 2, 2, 3]);
        assert_eq!(view.successors(0), &[1, 2]);
        assert_eq!(view.weights(0), &[2.0, 3.0]);
        assert_eq!(view.out_degree(1), 0);
        assert_eq!(view.out_edges(2).collect::<Vec<_>>(), vec![(0, 1.5)]);
        assert!(view.contains(2));
        assert!(!view.contains(3));
    }

    #[test]
    fn test_min_positive_weight() {
        let view = GraphView::from_edges(3, &[(0, 1, 0.0), (1, 2, 4.0), (2, 0, 2.5)]);
        assert_eq!(view.min_positive_weight(), Some(2.5));

        let zero_only = GraphView::from_edges(2, &[(0, 1, 0.0)]);
        assert_eq!(zero_only.min_positive_weight(), None);

        let empty = GraphView::from_adjacency_list(vec![vec![]; 2]);
        assert_eq!(empty.min_positive_weight(), None);
    }
}
