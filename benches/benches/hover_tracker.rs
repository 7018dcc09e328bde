// Copyright 2026 the Hoverslop Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use hoverslop_state::margin::{Slop, SlopSides};
use hoverslop_state::tracker::{HoverTracker, TrackerOptions};
use kurbo::{Point, Rect};

const BOUNDS: Rect = Rect::new(100.0, 100.0, 300.0, 200.0);

/// A pointer path that repeatedly crosses the slop boundary: approach from
/// the left, sweep through the rect, exit right, then come back.
fn scripted_path(steps: usize) -> Vec<Point> {
    let mut path = Vec::with_capacity(steps);
    for i in 0..steps {
        let t = i as f64 / steps as f64;
        // Triangle wave over x in [0, 400]; y drifts slowly through the rect.
        let phase = (t * 8.0).fract();
        let x = if phase < 0.5 {
            phase * 2.0 * 400.0
        } else {
            (1.0 - phase) * 2.0 * 400.0
        };
        let y = 90.0 + t * 120.0;
        path.push(Point::new(x, y));
    }
    path
}

fn bench_pointer_path(c: &mut Criterion) {
    let path = scripted_path(1024);

    let mut group = c.benchmark_group("hover_tracker");

    group.bench_function("uniform_slop_path_1024", |b| {
        b.iter_batched(
            || HoverTracker::new(16.0, TrackerOptions::default()),
            |mut tracker| {
                for pos in &path {
                    black_box(tracker.on_pointer_move(*pos, Some(BOUNDS)));
                }
                tracker
            },
            BatchSize::SmallInput,
        );
    });

    group.bench_function("per_side_slop_path_1024", |b| {
        let slop = Slop::PerSide(SlopSides {
            top: Some(4.0),
            right: Some(32.0),
            bottom: Some(4.0),
            left: Some(32.0),
        });
        b.iter_batched(
            || HoverTracker::new(slop, TrackerOptions::default()),
            |mut tracker| {
                for pos in &path {
                    black_box(tracker.on_pointer_move(*pos, Some(BOUNDS)));
                }
                tracker
            },
            BatchSize::SmallInput,
        );
    });

    group.bench_function("absent_element_path_1024", |b| {
        b.iter_batched(
            || HoverTracker::new(16.0, TrackerOptions::default()),
            |mut tracker| {
                for pos in &path {
                    black_box(tracker.on_pointer_move(*pos, None));
                }
                tracker
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(benches, bench_pointer_path);
criterion_main!(benches);
