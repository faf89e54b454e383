use routegraph::algo::{parse_route, RouteDistance};
use routegraph::graph::{build_graph, load_graph, Edge, RouteGraph};
use routegraph::{
    count_under_weight, count_with_exact_edges, count_with_max_edges, route_distance,
    shortest_path, shortest_path_weight, QueryError, CANONICAL_GRAPH,
};

fn canonical() -> RouteGraph {
    load_graph(CANONICAL_GRAPH).unwrap()
}

fn distance(graph: &RouteGraph, route: &str) -> RouteDistance {
    route_distance(graph, &parse_route(route))
}

#[test]
fn test_route_distances() {
    let graph = canonical();

    assert_eq!(distance(&graph, "A-B-C"), RouteDistance::Distance(9.0));
    assert_eq!(distance(&graph, "A-D"), RouteDistance::Distance(5.0));
    assert_eq!(distance(&graph, "A-D-C"), RouteDistance::Distance(13.0));
    assert_eq!(distance(&graph, "A-E-B-C-D"), RouteDistance::Distance(22.0));
    assert_eq!(distance(&graph, "A-E-D"), RouteDistance::NoSuchRoute);
    assert_eq!(distance(&graph, "A-E-D").to_string(), "NO SUCH ROUTE");
}

#[test]
fn test_route_distance_is_order_sensitive() {
    let graph = canonical();

    assert_eq!(distance(&graph, "C-D"), RouteDistance::Distance(8.0));
    assert_eq!(distance(&graph, "D-C"), RouteDistance::Distance(8.0));
    assert_eq!(distance(&graph, "A-B-C"), RouteDistance::Distance(9.0));
    assert_eq!(distance(&graph, "C-B-A"), RouteDistance::NoSuchRoute);
}

#[test]
fn test_trips_with_max_stops() {
    let graph = canonical();

    // C-D-C and C-E-B-C
    assert_eq!(count_with_max_edges(&graph, "C", "C", 3), 2);
    assert_eq!(count_with_max_edges(&graph, "C", "C", 1), 0);
    for from in ["A", "B", "C", "D", "E"] {
        for to in ["A", "B", "C", "D", "E"] {
            assert_eq!(count_with_max_edges(&graph, from, to, 0), 0);
        }
    }
}

#[test]
fn test_trips_with_exact_stops() {
    let graph = canonical();

    // A-B-C-D-C, A-D-C-D-C, A-D-E-B-C
    assert_eq!(count_with_exact_edges(&graph, "A", "C", 4), 3);
    assert_eq!(count_with_exact_edges(&graph, "A", "C", 0), 0);
}

#[test]
fn test_exact_counts_sum_to_max_count() {
    let graph = canonical();
    let labels = ["A", "B", "C", "D", "E"];

    for from in labels {
        for to in labels {
            let max_stops = 6;
            let summed: usize = (1..=max_stops)
                .map(|k| count_with_exact_edges(&graph, from, to, k))
                .sum();
            assert_eq!(summed, count_with_max_edges(&graph, from, to, max_stops));
        }
    }
}

#[test]
fn test_shortest_routes() {
    let graph = canonical();

    assert_eq!(shortest_path_weight(&graph, "A", "C"), Ok(9.0));
    assert_eq!(shortest_path_weight(&graph, "B", "B"), Ok(9.0));

    let cycle = shortest_path(&graph, "B", "B").unwrap();
    let stops: Vec<&str> = cycle.stops.iter().map(|s| s.as_str()).collect();
    assert_eq!(stops, vec!["B", "C", "E", "B"]);
}

#[test]
fn test_shortest_route_unreachable() {
    let graph = canonical();

    // Nothing leads back into A.
    assert_eq!(
        shortest_path_weight(&graph, "A", "A"),
        Err(QueryError::NoPathFound {
            from: "A".into(),
            to: "A".into()
        })
    );
    assert!(shortest_path_weight(&graph, "C", "A").is_err());
}

#[test]
fn test_trips_under_distance() {
    let graph = canonical();

    // CDC, CEBC, CDEBC, CEBCEBC, CEBCDC, CDCEBC, CEBCEBCEBC
    assert_eq!(count_under_weight(&graph, "C", "C", 30.0), Ok(7));
    // Strictly below: C-E-B-C weighs exactly 9.
    assert_eq!(count_under_weight(&graph, "C", "C", 9.0), Ok(0));
    assert_eq!(count_under_weight(&graph, "C", "C", 9.5), Ok(1));
}

#[test]
fn test_shortest_cycle_missing_in_acyclic_graph() {
    let graph = build_graph(
        ["S", "M", "T"],
        vec![Edge::new("S", "M", 1.0), Edge::new("M", "T", 1.0)],
    )
    .unwrap();

    assert_eq!(shortest_path_weight(&graph, "S", "T"), Ok(2.0));
    assert!(matches!(
        shortest_path_weight(&graph, "S", "S"),
        Err(QueryError::NoPathFound { .. })
    ));
    assert_eq!(count_under_weight(&graph, "S", "S", 100.0), Ok(0));
}

#[test]
fn test_multi_character_labels() {
    let graph = build_graph(
        ["Kiwi Junction", "Harbour"],
        vec![
            Edge::new("Kiwi Junction", "Harbour", 12.5),
            Edge::new("Harbour", "Kiwi Junction", 7.5),
        ],
    )
    .unwrap();

    assert_eq!(
        route_distance(&graph, &["Kiwi Junction", "Harbour", "Kiwi Junction"]),
        RouteDistance::Distance(20.0)
    );
    assert_eq!(shortest_path_weight(&graph, "Harbour", "Harbour"), Ok(20.0));
    assert_eq!(count_with_exact_edges(&graph, "Harbour", "Harbour", 4), 1);
}

#[test]
fn test_under_weight_on_cheap_cycle_searches_deep() {
    // Each hop weighs 2^-10, so a round trip weighs 1/512 with no rounding.
    let hop = 1.0 / 1024.0;
    let graph = build_graph(["A", "B"], vec![Edge::new("A", "B", hop), Edge::new("B", "A", hop)])
        .unwrap();

    // 1..=15_359 round trips stay below 30, the longest has 30_718 stops.
    assert_eq!(count_under_weight(&graph, "A", "A", 30.0), Ok(15_359));
    assert_eq!(count_under_weight(&graph, "A", "B", 1.0), Ok(512));
}
