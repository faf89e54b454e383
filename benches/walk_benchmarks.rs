use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use routegraph::algo::TripPlanner;
use routegraph::graph::{build_graph, load_graph, Edge};
use routegraph::CANONICAL_GRAPH;

/// Benchmark stop-bounded trip counting on the sample network
fn bench_max_stops(c: &mut Criterion) {
    let mut group = c.benchmark_group("max_stops");
    let graph = load_graph(CANONICAL_GRAPH).unwrap();
    let planner = TripPlanner::new(&graph);

    for stops in [3, 6, 9, 12].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(stops), stops, |b, &stops| {
            b.iter(|| {
                criterion::black_box(planner.count_with_max_edges("C", "C", stops));
            });
        });
    }
    group.finish();
}

/// Benchmark distance-bounded trip counting as the bound grows
fn bench_under_weight(c: &mut Criterion) {
    let mut group = c.benchmark_group("under_weight");
    let graph = load_graph(CANONICAL_GRAPH).unwrap();
    let planner = TripPlanner::new(&graph);

    for max_weight in [30.0, 60.0, 90.0].iter() {
        group.bench_with_input(
            BenchmarkId::from_parameter(max_weight),
            max_weight,
            |b, &max_weight| {
                b.iter(|| {
                    criterion::black_box(planner.count_under_weight("C", "C", max_weight).unwrap());
                });
            },
        );
    }
    group.finish();
}

/// Benchmark lightest-cycle search on a ring with chords
fn bench_shortest_cycle(c: &mut Criterion) {
    let mut group = c.benchmark_group("shortest_cycle");

    for &size in [6usize, 8, 10].iter() {
        // V0 -> V1 -> ... -> V(n-1) -> V0, plus Vi -> V(i+2) chords
        let labels: Vec<String> = (0..size).map(|i| format!("V{}", i)).collect();
        let mut edges = Vec::new();
        for i in 0..size {
            edges.push(Edge::new(labels[i].as_str(), labels[(i + 1) % size].as_str(), 2.0));
            edges.push(Edge::new(labels[i].as_str(), labels[(i + 2) % size].as_str(), 3.5));
        }
        let graph = build_graph(labels.iter().map(String::as_str), edges).unwrap();
        let planner = TripPlanner::new(&graph);

        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| {
                criterion::black_box(planner.shortest_path_weight("V0", "V0").unwrap());
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_max_stops, bench_under_weight, bench_shortest_cycle);
criterion_main!(benches);
