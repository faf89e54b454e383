//! In-memory route graph storage
//!
//! Vertices live in an insertion-ordered set, so a vertex's position doubles
//! as its dense index for algorithm views. Edges are kept twice: as per-vertex
//! adjacency lists for traversal and in a pair-keyed map for O(1) weight lookup.

use super::edge::Edge;
use super::types::VertexLabel;
use indexmap::IndexSet;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use tracing::{debug, info};

/// Why an edge was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeRejection {
    UnknownSource,
    UnknownTarget,
    Duplicate,
}

impl fmt::Display for EdgeRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EdgeRejection::UnknownSource => write!(f, "source vertex does not exist"),
            EdgeRejection::UnknownTarget => write!(f, "target vertex does not exist"),
            EdgeRejection::Duplicate => write!(f, "an edge already connects this ordered pair"),
        }
    }
}

/// Errors that can occur during graph operations
#[derive(Error, Debug, PartialEq)]
pub enum GraphError {
    #[error("Invalid edge {from}->{to}: {reason}")]
    InvalidEdge {
        from: VertexLabel,
        to: VertexLabel,
        reason: EdgeRejection,
    },

    #[error("Invalid weight {weight} on edge {from}->{to}: weights must be finite and non-negative")]
    InvalidWeight {
        from: VertexLabel,
        to: VertexLabel,
        weight: f64,
    },

    #[error("Edge {from}->{to} not found")]
    EdgeNotFound { from: VertexLabel, to: VertexLabel },
}

pub type GraphResult<T> = Result<T, GraphError>;

/// Summary figures for a graph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphStatistics {
    pub vertex_count: usize,
    pub edge_count: usize,
    /// Smallest strictly positive edge weight
    pub min_positive_weight: Option<f64>,
    pub max_weight: Option<f64>,
}

/// Directed weighted graph with at most one edge per ordered vertex pair
///
/// Mutation needs `&mut self`; once the graph is shared by reference (or
/// behind an `Arc`) it is read-only for every query.
#[derive(Debug, Clone, Default)]
pub struct RouteGraph {
    /// Vertex labels; position = dense index
    vertices: IndexSet<VertexLabel>,

    /// Outgoing `(target, weight)` per vertex, in edge insertion order
    outgoing: Vec<Vec<(usize, f64)>>,

    /// Weight by `(source, target)` index pair
    weights: FxHashMap<(usize, usize), f64>,
}

impl RouteGraph {
    /// Create a new empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a vertex, returning its dense index. Re-inserting a label is a no-op.
    pub fn add_vertex(&mut self, label: impl Into<VertexLabel>) -> usize {
        let (idx, inserted) = self.vertices.insert_full(label.into());
        if inserted {
            self.outgoing.push(Vec::new());
        }
        idx
    }

    /// Add a directed edge between two existing vertices
    pub fn add_edge(&mut self, from: &str, to: &str, weight: f64) -> GraphResult<()> {
        if !weight.is_finite() || weight < 0.0 {
            return Err(GraphError::InvalidWeight {
                from: from.into(),
                to: to.into(),
                weight,
            });
        }

        let rejection = |reason| GraphError::InvalidEdge {
            from: from.into(),
            to: to.into(),
            reason,
        };
        let source = self
            .index_of(from)
            .ok_or_else(|| rejection(EdgeRejection::UnknownSource))?;
        let target = self
            .index_of(to)
            .ok_or_else(|| rejection(EdgeRejection::UnknownTarget))?;
        if self.weights.contains_key(&(source, target)) {
            return Err(rejection(EdgeRejection::Duplicate));
        }

        self.weights.insert((source, target), weight);
        self.outgoing[source].push((target, weight));
        debug!("Added edge {}->{} ({})", from, to, weight);
        Ok(())
    }

    pub fn has_edge(&self, from: &str, to: &str) -> bool {
        self.pair(from, to)
            .is_some_and(|pair| self.weights.contains_key(&pair))
    }

    /// Weight of the edge `from -> to`
    pub fn edge_weight(&self, from: &str, to: &str) -> GraphResult<f64> {
        self.pair(from, to)
            .and_then(|pair| self.weights.get(&pair).copied())
            .ok_or_else(|| GraphError::EdgeNotFound {
                from: from.into(),
                to: to.into(),
            })
    }

    /// Outgoing `(target, weight)` pairs of a vertex; empty for unknown vertices
    pub fn neighbors(&self, label: &str) -> impl Iterator<Item = (&VertexLabel, f64)> + '_ {
        let adjacency: &[(usize, f64)] = match self.index_of(label) {
            Some(idx) => &self.outgoing[idx],
            None => &[],
        };
        adjacency
            .iter()
            .filter_map(move |&(target, weight)| Some((self.vertices.get_index(target)?, weight)))
    }

    pub fn contains_vertex(&self, label: &str) -> bool {
        self.vertices.contains(label)
    }

    /// Dense index of a vertex
    pub fn index_of(&self, label: &str) -> Option<usize> {
        self.vertices.get_index_of(label)
    }

    /// Label of the vertex at a dense index
    pub fn label_at(&self, idx: usize) -> Option<&VertexLabel> {
        self.vertices.get_index(idx)
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.weights.len()
    }

    /// Vertices in insertion order
    pub fn vertices(&self) -> impl Iterator<Item = &VertexLabel> {
        self.vertices.iter()
    }

    /// All edges, grouped by source vertex in insertion order
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.vertices
            .iter()
            .zip(self.outgoing.iter())
            .flat_map(move |(source, targets)| {
                targets.iter().filter_map(move |&(target, weight)| {
                    let target = self.vertices.get_index(target)?;
                    Some(Edge::new(source.clone(), target.clone(), weight))
                })
            })
    }

    /// Outgoing adjacency by dense index
    pub fn adjacency(&self) -> &[Vec<(usize, f64)>] {
        &self.outgoing
    }

    pub fn statistics(&self) -> GraphStatistics {
        let positive = self.weights.values().copied().filter(|w| *w > 0.0);
        GraphStatistics {
            vertex_count: self.vertex_count(),
            edge_count: self.edge_count(),
            min_positive_weight: positive.reduce(f64::min),
            max_weight: self.weights.values().copied().reduce(f64::max),
        }
    }

    fn pair(&self, from: &str, to: &str) -> Option<(usize, usize)> {
        Some((self.index_of(from)?, self.index_of(to)?))
    }
}

/// Build a graph from a vertex set and an ordered edge list.
///
/// Construction is all-or-nothing: the first rejected edge aborts the build
/// and no partially built graph escapes.
pub fn build_graph<V, E>(vertices: V, edges: E) -> GraphResult<RouteGraph>
where
    V: IntoIterator,
    V::Item: Into<VertexLabel>,
    E: IntoIterator<Item = Edge>,
{
    let mut graph = RouteGraph::new();
    for vertex in vertices {
        graph.add_vertex(vertex);
    }
    for edge in edges {
        graph.add_edge(edge.source.as_str(), edge.target.as_str(), edge.weight)?;
    }

    info!(
        "Built route graph with {} vertices and {} edges",
        graph.vertex_count(),
        graph.edge_count()
    );
    Ok(graph)
}
