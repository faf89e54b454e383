//! Route distance along an explicit vertex sequence

use crate::graph::{RouteGraph, VertexLabel};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Outcome of following an explicit route
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteDistance {
    /// Sum of the traversed edge weights
    Distance(f64),
    /// Some consecutive pair of stops has no connecting edge
    NoSuchRoute,
}

impl RouteDistance {
    pub fn as_distance(&self) -> Option<f64> {
        match self {
            RouteDistance::Distance(d) => Some(*d),
            RouteDistance::NoSuchRoute => None,
        }
    }

    pub fn is_route(&self) -> bool {
        matches!(self, RouteDistance::Distance(_))
    }
}

impl fmt::Display for RouteDistance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteDistance::Distance(d) => write!(f, "{}", format_weight(*d)),
            RouteDistance::NoSuchRoute => write!(f, "NO SUCH ROUTE"),
        }
    }
}

/// Render a weight, keeping one decimal on integral values ("9.0", "13.5")
pub fn format_weight(weight: f64) -> String {
    if weight.is_finite() && weight.fract() == 0.0 {
        format!("{:.1}", weight)
    } else {
        format!("{}", weight)
    }
}

/// Split route notation `A-B-C` into stops
pub fn parse_route(route: &str) -> Vec<VertexLabel> {
    route
        .split('-')
        .map(str::trim)
        .map(VertexLabel::from)
        .collect()
}

/// Total distance of the route visiting `stops` in order.
///
/// Fewer than two stops is not a route. A missing edge between any
/// consecutive pair, including one touching an unknown vertex, makes the
/// whole route [`RouteDistance::NoSuchRoute`].
pub fn route_distance<S: AsRef<str>>(graph: &RouteGraph, stops: &[S]) -> RouteDistance {
    if stops.len() < 2 {
        return RouteDistance::NoSuchRoute;
    }

    let mut total = 0.0;
    for leg in stops.windows(2) {
        let (from, to) = (leg[0].as_ref(), leg[1].as_ref());
        match graph.edge_weight(from, to) {
            Ok(weight) => total += weight,
            Err(e) => {
                debug!("Route broken: {}", e);
                return RouteDistance::NoSuchRoute;
            }
        }
    }
    RouteDistance::Distance(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::load_graph;

    #[test]
    fn test_route_distance() {
        let graph = load_graph("AB5, BC4, CD8, AD5").unwrap();

        assert_eq!(route_distance(&graph, &["A", "B", "C"]), RouteDistance::Distance(9.0));
        assert_eq!(route_distance(&graph, &["A", "D"]), RouteDistance::Distance(5.0));
        assert_eq!(route_distance(&graph, &["D", "A"]), RouteDistance::NoSuchRoute);
        assert_eq!(route_distance(&graph, &["A", "Z"]), RouteDistance::NoSuchRoute);
    }

    #[test]
    fn test_single_stop_is_not_a_route() {
        let graph = load_graph("AB5").unwrap();
        assert_eq!(route_distance(&graph, &["A"]), RouteDistance::NoSuchRoute);
        assert_eq!(route_distance::<&str>(&graph, &[]), RouteDistance::NoSuchRoute);
    }

    #[test]
    fn test_parse_route() {
        let stops = parse_route("A - E-B ");
        assert_eq!(
            stops,
            vec![VertexLabel::new("A"), VertexLabel::new("E"), VertexLabel::new("B")]
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(RouteDistance::Distance(22.0).to_string(), "22.0");
        assert_eq!(RouteDistance::Distance(2.5).to_string(), "2.5");
        assert_eq!(RouteDistance::NoSuchRoute.to_string(), "NO SUCH ROUTE");
        assert_eq!(RouteDistance::Distance(9.0).as_distance(), Some(9.0));
        assert!(!RouteDistance::NoSuchRoute.is_route());
    }
}
