use rand::{rngs::StdRng, Rng, SeedableRng};
use route_core::prelude::*;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

criterion_group!(benches, build_graph, shortest_route);
criterion_main!(benches);

/// Random route table with `num_cities` cities and `num_routes` routes
fn random_routes(num_cities: i64, num_routes: usize) -> Vec<RouteRecord> {
    let mut rng = StdRng::seed_from_u64(42);
    (0..num_routes)
        .map(|_| {
            let from = rng.gen_range(0..num_cities);
            RouteRecord::new(
                from,
                format!("City {}", from),
                rng.gen_range(0..num_cities),
                rng.gen_range(5.0..300.0),
                rng.gen_range(10.0..2500.0),
                rng.gen_range(0.5..30.0),
            )
        })
        .collect()
}

pub fn build_graph(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_graph");
    for num_routes in [1_000, 10_000, 100_000] {
        let routes = random_routes(num_routes as i64 / 10, num_routes);
        group.bench_with_input(BenchmarkId::from_parameter(num_routes), &routes, |b, routes| {
            b.iter(|| GraphBuilder::new(black_box(routes)).build().unwrap());
        });
    }
    group.finish();
}

pub fn shortest_route(c: &mut Criterion) {
    let routes = random_routes(10_000, 100_000);
    let planner = RoutePlanner::new(&routes, PlannerParams::default()).unwrap();

    c.bench_with_input(
        BenchmarkId::new("shortest_route", routes.len()),
        &planner,
        |b, planner| {
            b.iter(|| planner.shortest_to(black_box(9_999)));
        },
    );
}
