//! Weighted directed edge

use super::types::VertexLabel;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A directed, weighted edge between two labelled vertices
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    /// Source vertex (edge goes FROM this vertex)
    pub source: VertexLabel,

    /// Target vertex (edge goes TO this vertex)
    pub target: VertexLabel,

    /// Travel weight; finite and non-negative once accepted by a graph
    pub weight: f64,
}

impl Edge {
    pub fn new(
        source: impl Into<VertexLabel>,
        target: impl Into<VertexLabel>,
        weight: f64,
    ) -> Self {
        Edge {
            source: source.into(),
            target: target.into(),
            weight,
        }
    }

    pub fn is_self_loop(&self) -> bool {
        self.source == self.target
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{} ({})", self.source, self.target, self.weight)
    }
}
