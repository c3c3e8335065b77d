use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::DVec2;
use pipeline_tour::{
    build_route, nearest_vertex_index, parse_route_document, Path, RouteIndex, RouteParams,
};
use std::hint::black_box;

fn bench_route_parsing(c: &mut Criterion) {
    let json = include_str!("../tests/fixtures/sample_route.json");

    c.bench_function("json_parse_sample_route", |b| {
        b.iter(|| {
            let path = parse_route_document(black_box(json)).expect("JSON parse failed");
            black_box(path.vertex_count())
        })
    });
}

/// Sinusförmige planare Quell-Route mit `vertex_count` Vertices im Abstand von 10 m.
fn build_synthetic_source(vertex_count: usize) -> Path {
    let coords: Vec<[f64; 3]> = (0..vertex_count)
        .map(|i| {
            let x = i as f64 * 10.0;
            [x, (x / 80.0).sin() * 40.0, (x / 300.0).cos() * 5.0]
        })
        .collect();
    Path::planar(&coords)
}

fn build_query_points(count: usize, extent: f64) -> Vec<DVec2> {
    (0..count)
        .map(|i| {
            let x = ((i * 37) % 1000) as f64 / 1000.0 * extent;
            let y = ((i * 7) % 80) as f64 - 40.0;
            DVec2::new(x, y)
        })
        .collect()
}

fn bench_route_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("route_pipeline");

    for &vertex_count in &[100usize, 1_000usize] {
        let source = build_synthetic_source(vertex_count);
        let params = RouteParams::default();

        group.bench_with_input(
            BenchmarkId::new("build_route", vertex_count),
            &source,
            |b, source| {
                b.iter(|| {
                    let route = build_route(black_box(source), &params).expect("Route");
                    black_box(route.vertex_count())
                })
            },
        );
    }

    group.finish();
}

fn bench_nearest_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("nearest_queries");

    for &vertex_count in &[1_000usize, 10_000usize] {
        let route = build_route(&build_synthetic_source(vertex_count), &RouteParams::default())
            .expect("Route");
        let index = RouteIndex::from_route(&route);
        let query_points = build_query_points(256, vertex_count as f64 * 10.0);

        group.bench_with_input(
            BenchmarkId::new("kd_tree", vertex_count),
            &index,
            |b, index| {
                b.iter(|| {
                    let mut sum = 0usize;
                    for point in &query_points {
                        if let Some(hit) = index.nearest(black_box(*point)) {
                            sum += hit.index;
                        }
                    }
                    black_box(sum)
                })
            },
        );

        group.bench_with_input(
            BenchmarkId::new("linear_scan", vertex_count),
            &route,
            |b, route| {
                b.iter(|| {
                    let mut sum = 0usize;
                    for point in &query_points {
                        sum += nearest_vertex_index(route, black_box(*point)).unwrap_or(0);
                    }
                    black_box(sum)
                })
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_route_parsing,
    bench_route_pipeline,
    bench_nearest_queries
);
criterion_main!(benches);
