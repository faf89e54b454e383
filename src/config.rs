//! Planner configuration
//!
//! Every field has a default, so a YAML file only lists what it changes:
//!
//! ```yaml
//! graph: "AB5, BC4, CA3"
//! parallel: false
//! queries:
//!   - kind: distance
//!     route: A-B-C
//!   - kind: under_weight
//!     from: A
//!     to: A
//!     max_weight: 30
//! ```

use crate::algo::TripPlanner;
use crate::battery::{canonical_battery, run_battery, QueryOutcome, TripQuery};
use crate::graph::{load_graph, LoadError, RouteGraph};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

/// The sample rail network: A→B=5, B→C=4, C→D=8, D→C=8, D→E=6, A→D=5, C→E=2, E→B=3, A→E=7
pub const CANONICAL_GRAPH: &str = "AB5, BC4, CD8, DC8, DE6, AD5, CE2, EB3, AE7";

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid graph in config: {0}")]
    Load(#[from] LoadError),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Graph, search limits and query battery for one planner run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// Edge list in compact notation (`AB5, BC4, ...`)
    pub graph: String,
    /// Edge bound for shortest-path search (None = vertex count)
    pub shortest_path_max_edges: Option<usize>,
    /// Evaluate battery queries in parallel
    pub parallel: bool,
    /// Queries to run, in report order
    pub queries: Vec<TripQuery>,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            graph: CANONICAL_GRAPH.to_string(),
            shortest_path_max_edges: None,
            parallel: true,
            queries: canonical_battery(),
        }
    }
}

impl PlannerConfig {
    pub fn from_yaml_str(yaml: &str) -> ConfigResult<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn from_yaml_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_yaml_str(&text)?;
        info!("Loaded planner config from {}", path.display());
        Ok(config)
    }

    pub fn to_yaml(&self) -> ConfigResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn load_graph(&self) -> ConfigResult<RouteGraph> {
        Ok(load_graph(&self.graph)?)
    }

    /// Planner over `graph` honoring this config's search limits
    pub fn planner<'g>(&self, graph: &'g RouteGraph) -> TripPlanner<'g> {
        TripPlanner::new(graph).with_shortest_path_max_edges(self.shortest_path_max_edges)
    }

    /// Load the graph and run the configured battery
    pub fn run(&self) -> ConfigResult<Vec<QueryOutcome>> {
        let graph = self.load_graph()?;
        let planner = self.planner(&graph);
        Ok(run_battery(&planner, &self.queries, self.parallel))
    }
}
