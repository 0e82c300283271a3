//! Graph-construction and query benchmarks
//!
//! Ride-edge generation is quadratic in route length by design; the
//! `graph_build` group tracks that cost over growing synthetic routes so a
//! regression in the edge-generation strategy shows up here.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use geo::Point;
use transit_catalogue::prelude::*;

const SETTINGS: RoutingSettings = RoutingSettings {
    bus_wait_time: 6.0,
    bus_velocity: 40.0,
};

/// One linear bus over `n` distinct stops with declared hop distances
fn synthetic_catalogue(n: usize) -> TransitCatalogue {
    let mut catalogue = TransitCatalogue::new(DistancePolicy::Lenient);
    let names: Vec<String> = (0..n).map(|i| format!("stop-{i}")).collect();
    for (i, name) in names.iter().enumerate() {
        catalogue.add_stop(name, Point::new(37.0 + 0.005 * i as f64, 55.0));
    }
    let refs: Vec<&str> = names.iter().map(String::as_str).collect();
    catalogue.add_bus("long", &refs, false);
    for window in names.windows(2) {
        catalogue.set_distance(&window[0], &window[1], 800);
    }
    catalogue
}

fn bench_graph_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("graph_build");
    for n in [25, 50, 100, 200] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter_batched(
                || synthetic_catalogue(n),
                |catalogue| TransitRouter::new(SETTINGS, catalogue).unwrap(),
                criterion::BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_build_route(c: &mut Criterion) {
    let router = TransitRouter::new(SETTINGS, synthetic_catalogue(100)).unwrap();
    c.bench_function("build_route_end_to_end", |b| {
        b.iter(|| router.build_route("stop-0", "stop-99").unwrap());
    });
}

criterion_group!(benches, bench_graph_build, bench_build_route);
criterion_main!(benches);
