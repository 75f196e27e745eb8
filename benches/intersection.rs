//! Benchmarks for polygon intersection and the pairwise collision test.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use std::f64::consts::TAU;
use std::sync::Arc;

use pixelcoll::{collides, intersection, CollisionInfo, ConvexPolygon, Mask, Point2};

/// Builds a regular n-gon centered at `(cx, cy)`.
fn regular_polygon(n: usize, cx: f64, cy: f64, radius: f64) -> ConvexPolygon<f64> {
    let points = (0..n)
        .map(|i| {
            let angle = TAU * i as f64 / n as f64;
            Point2::new(cx + radius * angle.cos(), cy + radius * angle.sin())
        })
        .collect();
    ConvexPolygon::Polygon(points)
}

/// A dense blob mask: a filled disc on a square grid.
fn disc_mask(size: usize) -> Arc<Mask> {
    let center = size as f64 / 2.0;
    let radius = size as f64 / 2.5;
    let rows = (0..size)
        .map(|y| {
            (0..size)
                .map(|x| {
                    let dx = x as f64 - center;
                    let dy = y as f64 - center;
                    (dx * dx + dy * dy).sqrt() <= radius
                })
                .collect()
        })
        .collect();
    Arc::new(Mask::from_rows(rows, Point2::origin()).unwrap())
}

fn bench_polygon_intersection(c: &mut Criterion) {
    let mut group = c.benchmark_group("polygon_intersection");

    for &n in &[8usize, 32, 128] {
        let a = regular_polygon(n, 0.0, 0.0, 10.0);
        let b = regular_polygon(n, 6.0, 3.0, 10.0);

        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |bencher, _| {
            bencher.iter(|| intersection(black_box(&a), black_box(&b), None, None));
        });
    }

    group.finish();
}

fn bench_pairwise(c: &mut Criterion) {
    let mut group = c.benchmark_group("pairwise_collision");

    let mask = disc_mask(64);
    let a = CollisionInfo::new(Arc::clone(&mask), Point2::new(0.0, 0.0), 0.0, 1.0, 1.0, 1);

    // Grazing contact forces the longest pixel walk.
    let grazing = CollisionInfo::new(Arc::clone(&mask), Point2::new(51.0, 0.0), 0.4, 1.0, 1.0, 2);
    group.bench_function("grazing", |bencher| {
        bencher.iter(|| collides(black_box(&a), black_box(&grazing)));
    });

    // Deep overlap exits on one of the first pixels.
    let overlapping =
        CollisionInfo::new(Arc::clone(&mask), Point2::new(5.0, 5.0), 0.9, 1.0, 1.0, 3);
    group.bench_function("overlapping", |bencher| {
        bencher.iter(|| collides(black_box(&a), black_box(&overlapping)));
    });

    // Bounding boxes alone settle this one.
    let distant = CollisionInfo::new(mask, Point2::new(500.0, 500.0), 0.0, 1.0, 1.0, 4);
    group.bench_function("culled", |bencher| {
        bencher.iter(|| collides(black_box(&a), black_box(&distant)));
    });

    group.finish();
}

criterion_group!(benches, bench_polygon_intersection, bench_pairwise);
criterion_main!(benches);
