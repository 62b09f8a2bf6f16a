// Copyright 2025 the Graphview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::cell::Cell;
use std::rc::Rc;

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use graphview_event_state::pointer::{PointerButton, PointerButtons, ViewportEvent};
use graphview_view2d::{ViewportInput, ViewportTransform};
use kurbo::{Point, Size};

/// A drag of `steps` moves bracketed by press and release, followed by a few
/// wheel notches.
fn gesture(steps: u32) -> Vec<ViewportEvent> {
    let mut events = Vec::with_capacity(steps as usize + 6);
    events.push(ViewportEvent::PointerDown {
        button: PointerButton::Middle,
        position: Point::new(400.0, 300.0),
    });
    for i in 0..steps {
        let t = f64::from(i);
        events.push(ViewportEvent::PointerMove {
            buttons: PointerButtons::MIDDLE,
            position: Point::new(400.0 + t * 0.75, 300.0 - t * 0.5),
        });
    }
    events.push(ViewportEvent::PointerUp {
        button: PointerButton::Middle,
        position: Point::new(400.0, 300.0),
    });
    for delta in [120.0, 120.0, -240.0, 60.0] {
        events.push(ViewportEvent::Wheel { delta_y: delta });
    }
    events
}

fn bench_viewport_input(c: &mut Criterion) {
    let mut group = c.benchmark_group("graphview_view2d");
    let input = ViewportInput::default();

    for subscribers in [0_u32, 1, 8] {
        let events = gesture(1_000);
        group.bench_function(format!("gesture(moves=1000,subs={subscribers})"), |b| {
            b.iter_batched(
                || {
                    let mut transform = ViewportTransform::default();
                    let hits = Rc::new(Cell::new(0_u64));
                    for _ in 0..subscribers {
                        let scale_hits = Rc::clone(&hits);
                        transform.on_scale_changed(move |_| scale_hits.set(scale_hits.get() + 1));
                        let pan_hits = Rc::clone(&hits);
                        transform.on_translation_changed(move |_| pan_hits.set(pan_hits.get() + 1));
                    }
                    (transform, hits)
                },
                |(mut transform, hits)| {
                    for event in &events {
                        black_box(input.handle(&mut transform, *event));
                    }
                    black_box(hits.get());
                },
                BatchSize::SmallInput,
            );
        });
    }

    let transform = ViewportTransform::default();
    let canvas = Size::new(1920.0, 1080.0);
    group.bench_function("screen_to_logical(1000)", |b| {
        b.iter(|| {
            let geometry = transform.state().geometry(black_box(canvas));
            let mut acc = 0.0;
            for i in 0..1000_u32 {
                let p = geometry.screen_to_logical(Point::new(f64::from(i), f64::from(i) * 0.5));
                acc += p.x + p.y;
            }
            black_box(acc);
        });
    });

    group.finish();
}

criterion_group!(benches, bench_viewport_input);
criterion_main!(benches);
