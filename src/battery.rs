//! Query battery and report formatting
//!
//! A battery is an ordered list of queries evaluated against one graph and
//! reported as numbered output lines.

use crate::algo::route::{format_weight, parse_route, RouteDistance};
use crate::algo::TripPlanner;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::info;

/// One query of a battery
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TripQuery {
    /// Distance along an explicit route, e.g. `A-B-C`
    Distance { route: String },
    /// Trips with at most `stops` stops
    MaxStops { from: String, to: String, stops: usize },
    /// Trips with exactly `stops` stops
    ExactStops { from: String, to: String, stops: usize },
    /// Length of the shortest route
    Shortest { from: String, to: String },
    /// Trips with a total distance below `max_weight`
    UnderWeight {
        from: String,
        to: String,
        max_weight: f64,
    },
}

impl TripQuery {
    pub fn run(&self, planner: &TripPlanner<'_>) -> QueryOutcome {
        match self {
            TripQuery::Distance { route } => {
                let stops = parse_route(route);
                QueryOutcome::Distance(crate::algo::route_distance(planner.graph(), &stops))
            }
            TripQuery::MaxStops { from, to, stops } => {
                QueryOutcome::Count(planner.count_with_max_edges(from, to, *stops))
            }
            TripQuery::ExactStops { from, to, stops } => {
                QueryOutcome::Count(planner.count_with_exact_edges(from, to, *stops))
            }
            TripQuery::Shortest { from, to } => match planner.shortest_path_weight(from, to) {
                Ok(weight) => QueryOutcome::Weight(weight),
                Err(e) => QueryOutcome::Failed(e.to_string()),
            },
            TripQuery::UnderWeight {
                from,
                to,
                max_weight,
            } => match planner.count_under_weight(from, to, *max_weight) {
                Ok(count) => QueryOutcome::Count(count),
                Err(e) => QueryOutcome::Failed(e.to_string()),
            },
        }
    }
}

impl fmt::Display for TripQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TripQuery::Distance { route } => write!(f, "distance of route {}", route),
            TripQuery::MaxStops { from, to, stops } => {
                write!(f, "trips {} to {} with at most {} stops", from, to, stops)
            }
            TripQuery::ExactStops { from, to, stops } => {
                write!(f, "trips {} to {} with exactly {} stops", from, to, stops)
            }
            TripQuery::Shortest { from, to } => write!(f, "shortest route {} to {}", from, to),
            TripQuery::UnderWeight {
                from,
                to,
                max_weight,
            } => write!(f, "trips {} to {} shorter than {}", from, to, max_weight),
        }
    }
}

/// Result of one battery query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum QueryOutcome {
    Distance(RouteDistance),
    Count(usize),
    Weight(f64),
    /// An expected query failure, e.g. no path between the endpoints
    Failed(String),
}

impl fmt::Display for QueryOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryOutcome::Distance(distance) => write!(f, "{}", distance),
            QueryOutcome::Count(count) => write!(f, "{}", count),
            QueryOutcome::Weight(weight) => write!(f, "{}", format_weight(*weight)),
            QueryOutcome::Failed(message) => write!(f, "{}", message),
        }
    }
}

/// The ten classic queries over the sample rail network
pub fn canonical_battery() -> Vec<TripQuery> {
    let distance = |route: &str| TripQuery::Distance {
        route: route.to_string(),
    };
    vec![
        distance("A-B-C"),
        distance("A-D"),
        distance("A-D-C"),
        distance("A-E-B-C-D"),
        distance("A-E-D"),
        TripQuery::MaxStops {
            from: "C".into(),
            to: "C".into(),
            stops: 3,
        },
        TripQuery::ExactStops {
            from: "A".into(),
            to: "C".into(),
            stops: 4,
        },
        TripQuery::Shortest {
            from: "A".into(),
            to: "C".into(),
        },
        TripQuery::Shortest {
            from: "B".into(),
            to: "B".into(),
        },
        TripQuery::UnderWeight {
            from: "C".into(),
            to: "C".into(),
            max_weight: 30.0,
        },
    ]
}

/// Evaluate every query against the planner's graph, preserving order
pub fn run_battery(
    planner: &TripPlanner<'_>,
    queries: &[TripQuery],
    parallel: bool,
) -> Vec<QueryOutcome> {
    info!("Running {} queries (parallel: {})", queries.len(), parallel);
    if parallel {
        queries.par_iter().map(|query| query.run(planner)).collect()
    } else {
        queries.iter().map(|query| query.run(planner)).collect()
    }
}

/// Render outcomes as `Output #n: <outcome>` lines
pub fn format_report(outcomes: &[QueryOutcome]) -> String {
    outcomes
        .iter()
        .enumerate()
        .map(|(i, outcome)| format!("Output #{}: {}\n", i + 1, outcome))
        .collect()
}
