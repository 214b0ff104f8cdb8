// Copyright 2026 the Zoomable Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect};
use zoomable::{AnimationStep, ZoomableController};
use zoomable_gesture::touch::{TouchEvent, TouchPhase, TouchPointer};
use zoomable_gesture::transform::TransformGestureDetector;

fn controller() -> ZoomableController<TransformGestureDetector> {
    let mut c = ZoomableController::new(TransformGestureDetector::new());
    c.set_image_bounds(Rect::new(0.0, 0.0, 1_000.0, 2_000.0));
    c.set_view_bounds(Rect::new(0.0, 0.0, 1_000.0, 1_000.0));
    c.set_enabled(true);
    c
}

/// A pinch that spreads and rotates slightly over `steps` moves.
fn pinch_stream(steps: usize) -> Vec<TouchEvent> {
    let mut events = Vec::with_capacity(steps + 4);
    let a = TouchPointer::new(0, Point::new(450.0, 500.0));
    let b = TouchPointer::new(1, Point::new(550.0, 500.0));
    events.push(TouchEvent::new(TouchPhase::Down, 0, &[a], 0));
    events.push(TouchEvent::new(TouchPhase::PointerDown, 1, &[a, b], 5));
    let mut last = [a, b];
    for i in 1..=steps {
        let t = i as f64 / steps as f64;
        let half = 50.0 + 150.0 * t;
        let lift = 20.0 * t;
        let a = TouchPointer::new(0, Point::new(500.0 - half, 500.0 + lift));
        let b = TouchPointer::new(1, Point::new(500.0 + half, 500.0 - lift));
        events.push(TouchEvent::new(TouchPhase::Move, 1, &[a, b], 5 + i as u64 * 8));
        last = [a, b];
    }
    let end = 10 + steps as u64 * 8;
    events.push(TouchEvent::new(TouchPhase::PointerUp, 1, &last, end));
    events.push(TouchEvent::new(TouchPhase::Up, 0, &last[..1], end + 5));
    events
}

fn bench_gestures(c: &mut Criterion) {
    let mut group = c.benchmark_group("zoomable/gesture");

    for steps in [16_usize, 256] {
        let stream = pinch_stream(steps);
        group.bench_function(format!("pinch(moves={steps})"), |b| {
            b.iter_batched(
                controller,
                |mut zoom| {
                    for event in &stream {
                        zoom.on_touch_event(event);
                    }
                    black_box(zoom.transform());
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.bench_function("pinch_with_rotation(moves=256)", |b| {
        let stream = pinch_stream(256);
        b.iter_batched(
            || {
                let mut zoom = controller();
                zoom.set_rotation_enabled(true);
                zoom
            },
            |mut zoom| {
                for event in &stream {
                    zoom.on_touch_event(event);
                }
                black_box(zoom.transform());
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

fn bench_animation(c: &mut Criterion) {
    let mut group = c.benchmark_group("zoomable/animation");

    group.bench_function("zoom_to_max", |b| {
        b.iter_batched(
            controller,
            |mut zoom| {
                zoom.zoom_to_view_point(3.0, Point::new(500.0, 500.0), 0);
                let mut now = 0;
                while let AnimationStep::Running { next_tick_in_ms, .. } =
                    zoom.on_animation_tick(now)
                {
                    now += next_tick_in_ms;
                }
                black_box(zoom.scale_factor());
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(benches, bench_gestures, bench_animation);
criterion_main!(benches);
