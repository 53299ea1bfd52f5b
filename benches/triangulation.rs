//! Benchmarks for the bubble frontier and greedy triangulation.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use bubblemesh::spatial::SpatialGrid;
use bubblemesh::{greedy_triangulation, triangulate, FrontierConfig, Point, Segment};

/// Generates random points in a square of side `extent`.
fn generate_random_points(count: usize, extent: f64, seed: u64) -> Vec<Point<f64>> {
    let mut points = Vec::with_capacity(count);
    let mut state = seed;

    for _ in 0..count {
        // xorshift for deterministic random
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        let x = (state as f64 / u64::MAX as f64) * extent;

        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        let y = (state as f64 / u64::MAX as f64) * extent;

        points.push(Point::new(x, y));
    }

    points
}

fn bench_frontier(c: &mut Criterion) {
    let mut group = c.benchmark_group("frontier");
    let config = FrontierConfig::default().with_bucket_size(25.0);

    for count in [50, 200, 1000] {
        let points = generate_random_points(count, 400.0, 12345);
        group.throughput(Throughput::Elements(count as u64));

        group.bench_with_input(BenchmarkId::new("triangulate", count), &points, |b, pts| {
            b.iter(|| triangulate(black_box(pts.clone()), config))
        });
    }

    group.finish();
}

fn bench_bucket_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("bucket_size");
    let points = generate_random_points(500, 400.0, 54321);

    for bucket in [10.0, 50.0, 100.0, 400.0] {
        let config = FrontierConfig::default().with_bucket_size(bucket);
        group.bench_with_input(BenchmarkId::from_parameter(bucket), &config, |b, cfg| {
            b.iter(|| triangulate(black_box(points.clone()), *cfg))
        });
    }

    group.finish();
}

fn bench_grid(c: &mut Criterion) {
    let mut group = c.benchmark_group("spatial_grid");
    let baseline = Segment::from_coords(0.0, 0.0, 0.0, 10.0);

    for count in [1000, 10000] {
        let points = generate_random_points(count, 400.0, 777);
        group.throughput(Throughput::Elements(count as u64));

        group.bench_with_input(BenchmarkId::new("build", count), &points, |b, pts| {
            b.iter(|| SpatialGrid::new(25.0, black_box(pts.iter().copied())))
        });

        let grid = SpatialGrid::new(25.0, points.iter().copied()).unwrap();
        group.bench_with_input(BenchmarkId::new("sort", count), &grid, |b, g| {
            b.iter(|| {
                let mut g = g.clone();
                g.sort_by_distance(black_box(baseline));
                g
            })
        });
    }

    group.finish();
}

fn bench_greedy(c: &mut Criterion) {
    let mut group = c.benchmark_group("greedy");

    for count in [25, 50, 100] {
        let points = generate_random_points(count, 400.0, 999);
        group.bench_with_input(BenchmarkId::from_parameter(count), &points, |b, pts| {
            b.iter(|| greedy_triangulation(black_box(pts), 0.0))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_frontier,
    bench_bucket_size,
    bench_grid,
    bench_greedy
);
criterion_main!(benches);
