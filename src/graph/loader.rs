//! Compact edge-list notation
//!
//! A graph is written as comma-separated entries `<source><target><weight>`,
//! one character per vertex label: `"AB5, BC4, CD8"`.

use super::edge::Edge;
use super::store::{build_graph, GraphError, RouteGraph};
use indexmap::IndexSet;
use thiserror::Error;
use tracing::debug;

/// Errors raised while loading an edge list
#[derive(Error, Debug, PartialEq)]
pub enum LoadError {
    #[error("Malformed edge entry '{entry}': {reason}")]
    MalformedEntry { entry: String, reason: String },

    #[error(transparent)]
    Graph(#[from] GraphError),
}

pub type LoadResult<T> = Result<T, LoadError>;

fn parse_entry(entry: &str) -> LoadResult<Edge> {
    let malformed = |reason: &str| LoadError::MalformedEntry {
        entry: entry.to_string(),
        reason: reason.to_string(),
    };

    let mut chars = entry.chars();
    let source = chars
        .next()
        .ok_or_else(|| malformed("missing source vertex"))?;
    let target = chars
        .next()
        .ok_or_else(|| malformed("missing target vertex"))?;
    let weight_text = chars.as_str().trim();
    if weight_text.is_empty() {
        return Err(malformed("missing weight"));
    }
    let weight = weight_text
        .parse::<f64>()
        .map_err(|e| malformed(&format!("invalid weight: {}", e)))?;

    Ok(Edge::new(source, target, weight))
}

/// Parse an edge list without building a graph. Empty entries are skipped.
pub fn parse_edge_list(input: &str) -> LoadResult<Vec<Edge>> {
    input
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(parse_entry)
        .collect()
}

/// Parse an edge list and build the graph it describes.
///
/// Vertices are registered in order of first appearance before any edge is added.
pub fn load_graph(input: &str) -> LoadResult<RouteGraph> {
    let edges = parse_edge_list(input)?;
    let vertices: IndexSet<_> = edges
        .iter()
        .flat_map(|edge| [edge.source.clone(), edge.target.clone()])
        .collect();
    debug!("Parsed {} edges over {} vertices", edges.len(), vertices.len());

    Ok(build_graph(vertices, edges)?)
}
