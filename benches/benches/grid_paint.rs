// Copyright 2025 the Graphview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use graphview_grid::GridRenderer;
use graphview_imaging::{DrawOp, DrawingSurface, Size, StateOp};
use graphview_imaging_ref::RecordingSurface;
use graphview_view2d::ViewportTransform;

/// Surface that only counts path elements, so the benchmark measures line
/// placement rather than op recording.
struct CountingSurface {
    size: Size,
    elements: usize,
}

impl DrawingSurface for CountingSurface {
    fn size(&self) -> Size {
        self.size
    }

    fn state(&mut self, op: StateOp) {
        black_box(op);
    }

    fn draw(&mut self, op: DrawOp) {
        if let DrawOp::StrokePath(path) = op {
            self.elements += path.elements().len();
        }
    }
}

fn at_distance(distance: f64) -> ViewportTransform {
    let mut transform = ViewportTransform::default();
    transform
        .set_distance(distance)
        .expect("benchmark distances are finite");
    transform
}

fn bench_grid_paint(c: &mut Criterion) {
    let mut group = c.benchmark_group("graphview_grid");

    // 0.05 is deep zoom (few lines), 1.0 the default, 2.0 the densest view
    // that still shows the minor tier.
    for distance in [0.05, 1.0, 2.0] {
        let transform = at_distance(distance);
        for (w, h) in [(800.0, 600.0), (3840.0, 2160.0)] {
            let mut grid = GridRenderer::default();
            let mut surface = CountingSurface {
                size: Size::new(w, h),
                elements: 0,
            };
            group.bench_function(format!("paint(d={distance},{w}x{h})"), |b| {
                b.iter(|| {
                    surface.elements = 0;
                    grid.paint(black_box(transform.state()), &mut surface);
                    black_box(surface.elements);
                });
            });
        }
    }

    let transform = ViewportTransform::default();
    let mut grid = GridRenderer::default();
    let mut surface = RecordingSurface::new(Size::new(1920.0, 1080.0));
    group.bench_function("paint_recording(d=1,1920x1080)", |b| {
        b.iter(|| {
            surface.clear_events();
            grid.paint(black_box(transform.state()), &mut surface);
            black_box(surface.ops().len());
        });
    });

    group.finish();
}

criterion_group!(benches, bench_grid_paint);
criterion_main!(benches);
