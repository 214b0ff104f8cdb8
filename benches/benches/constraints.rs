// Copyright 2026 the Zoomable Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Affine, Point, Rect, Vec2};
use zoomable_view::{Constraints, ImageMapper, ScaleLimits};

const IMAGE: Rect = Rect::new(0.0, 0.0, 1_000.0, 2_000.0);
const VIEW: Rect = Rect::new(0.0, 0.0, 1_000.0, 1_000.0);

fn gen_points(n: usize) -> Vec<Point> {
    (0..n)
        .map(|i| {
            let f = i as f64;
            Point::new((f * 37.0) % 1_000.0, (f * 91.0) % 1_000.0)
        })
        .collect()
}

fn bench_constraints(c: &mut Criterion) {
    let mut group = c.benchmark_group("zoomable_view/constraints");
    let constraints = Constraints::new(ScaleLimits::default(), IMAGE, VIEW);
    let pivot = Point::new(500.0, 500.0);

    let cases = [
        ("in_bounds", Affine::scale_about(2.0, pivot)),
        ("below_min", Affine::scale_about(0.4, pivot)),
        (
            "out_of_bounds",
            Affine::scale(2.5).then_translate(Vec2::new(300.0, -4_000.0)),
        ),
        ("rotated", Affine::rotate_about(0.3, pivot).then_scale_about(1.5, pivot)),
    ];
    for (name, transform) in cases {
        group.bench_function(name, |b| {
            b.iter(|| black_box(constraints.apply(black_box(transform), pivot)));
        });
    }

    group.finish();
}

fn bench_mapping(c: &mut Criterion) {
    let mut group = c.benchmark_group("zoomable_view/mapping");
    let mapper = ImageMapper::new(IMAGE);
    let transform = Affine::scale_about(2.0, Point::new(400.0, 300.0))
        .then_translate(Vec2::new(-100.0, -50.0));

    for n in [64_usize, 4_096] {
        let points = gen_points(n);
        group.throughput(Throughput::Elements(n as u64));

        group.bench_with_input(BenchmarkId::new("single", n), &points, |b, points| {
            b.iter(|| {
                for p in points {
                    black_box(mapper.to_image_relative(transform, *p));
                }
            });
        });

        group.bench_with_input(BenchmarkId::new("in_place", n), &points, |b, points| {
            let mut scratch = points.clone();
            b.iter(|| {
                scratch.copy_from_slice(points);
                mapper.to_image_relative_in_place(transform, &mut scratch);
                black_box(&scratch);
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_constraints, bench_mapping);
criterion_main!(benches);
