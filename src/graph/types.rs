//! Core type definitions for the route graph

use serde::{Deserialize, Serialize};
use std::fmt;

/// Vertex label (e.g., "A", "Kiwi Junction")
///
/// Opaque to every algorithm; two vertices are the same vertex iff their labels are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
#[serde(transparent)]
pub struct VertexLabel(String);

impl VertexLabel {
    pub fn new(label: impl Into<String>) -> Self {
        VertexLabel(label.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VertexLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for VertexLabel {
    fn from(s: String) -> Self {
        VertexLabel(s)
    }
}

impl From<&str> for VertexLabel {
    fn from(s: &str) -> Self {
        VertexLabel(s.to_string())
    }
}

impl From<char> for VertexLabel {
    fn from(c: char) -> Self {
        VertexLabel(c.to_string())
    }
}

impl AsRef<str> for VertexLabel {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::borrow::Borrow<str> for VertexLabel {
    fn borrow(&self) -> &str {
        &self.0
    }
}
