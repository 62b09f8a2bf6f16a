// Copyright 2025 the Graphview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `graphview_grid` crate.
//!
//! These paint onto a `RecordingSurface` and assert on the recorded strokes:
//! which tiers appear at which scales, where lines land in pixels, and the
//! order and framing of the surface operations.

use std::cell::Cell;
use std::rc::Rc;

use graphview_event_state::pointer::{PointerButton, PointerButtons, ViewportEvent};
use graphview_grid::{
    AXIS_COLOR, GridRenderer, GridStyle, GridTier, MAJOR_COLOR, MINOR_COLOR, TierKind,
};
use graphview_imaging::{DrawOp, ImagingOp, Rect, Size, StateOp};
use graphview_imaging_ref::{RecordedStroke, RecordingSurface};
use graphview_view2d::{ViewportConfig, ViewportInput, ViewportTransform};
use kurbo::{PathEl, Point};

/// A transform sitting at exactly `scale` pixels per unit.
fn at_scale(scale: f64) -> ViewportTransform {
    ViewportTransform::new(ViewportConfig::default().with_scale_factor(scale))
}

fn paint(transform: &ViewportTransform, size: Size) -> RecordingSurface {
    let mut surface = RecordingSurface::new(size);
    GridRenderer::default().paint(transform.state(), &mut surface);
    surface
}

fn colors(strokes: &[RecordedStroke]) -> Vec<[u8; 4]> {
    strokes.iter().filter_map(RecordedStroke::rgba8).collect()
}

fn rgba(color: peniko::Color) -> [u8; 4] {
    color.to_rgba8().to_u8_array()
}

/// Start points of every segment in a stroke.
fn starts(stroke: &RecordedStroke) -> Vec<Point> {
    stroke
        .path
        .elements()
        .iter()
        .filter_map(|el| match el {
            PathEl::MoveTo(p) => Some(*p),
            _ => None,
        })
        .collect()
}

#[test]
fn minor_tier_appears_at_35px_per_unit() {
    let below = paint(&at_scale(34.999), Size::new(700.0, 700.0));
    assert_eq!(
        colors(&below.strokes()),
        [rgba(MAJOR_COLOR), rgba(AXIS_COLOR)]
    );

    let at = paint(&at_scale(35.0), Size::new(700.0, 700.0));
    assert_eq!(
        colors(&at.strokes()),
        [rgba(MINOR_COLOR), rgba(MAJOR_COLOR), rgba(AXIS_COLOR)]
    );
}

#[test]
fn major_tier_appears_at_3px_per_unit() {
    let below = paint(&at_scale(2.999), Size::new(700.0, 700.0));
    assert_eq!(colors(&below.strokes()), [rgba(AXIS_COLOR)]);

    let at = paint(&at_scale(3.0), Size::new(700.0, 700.0));
    assert_eq!(colors(&at.strokes()), [rgba(MAJOR_COLOR), rgba(AXIS_COLOR)]);
}

#[test]
fn axis_is_pixel_aligned_at_canvas_middle() {
    // 64px per unit keeps every intermediate value exact.
    let transform = at_scale(64.0);
    for (width, expected_x) in [(800.0, 400.5), (801.0, 401.5), (1023.0, 512.5)] {
        let surface = paint(&transform, Size::new(width, 600.0));
        let strokes = surface.strokes();
        let axis = strokes.last().unwrap();
        assert_eq!(axis.color(), Some(AXIS_COLOR));
        assert_eq!(
            starts(axis),
            [Point::new(expected_x, 0.0), Point::new(0.0, 300.5)],
            "axis position for width {width}"
        );
    }
}

#[test]
fn lines_span_the_full_canvas() {
    let surface = paint(&ViewportTransform::default(), Size::new(700.0, 560.0));
    let strokes = surface.strokes();
    let axis = strokes.last().unwrap();

    assert_eq!(
        axis.path.elements(),
        [
            PathEl::MoveTo(Point::new(350.5, 0.0)),
            PathEl::LineTo(Point::new(350.5, 560.0)),
            PathEl::MoveTo(Point::new(0.0, 280.5)),
            PathEl::LineTo(Point::new(700.0, 280.5)),
        ]
    );
}

#[test]
fn line_counts_per_tier() {
    // 700x560 at 70px per unit shows logical [-5, 5) by [-4, 4).
    let surface = paint(&ViewportTransform::default(), Size::new(700.0, 560.0));
    let strokes = surface.strokes();

    let counts: Vec<usize> = strokes.iter().map(RecordedStroke::subpath_count).collect();
    assert_eq!(counts, [40 + 32, 10 + 8, 2]);
}

#[test]
fn every_stroke_is_one_pixel_wide() {
    let surface = paint(&ViewportTransform::default(), Size::new(300.0, 200.0));
    for stroke in surface.strokes() {
        assert_eq!(stroke.style.map(|s| s.width), Some(1.0));
    }
}

#[test]
fn clear_then_clipped_tiers() {
    let surface = paint(&ViewportTransform::default(), Size::new(300.0, 200.0));
    let bounds = Rect::new(0.0, 0.0, 300.0, 200.0);
    let ops = surface.ops();

    assert_eq!(ops.first(), Some(&ImagingOp::Draw(DrawOp::Clear(bounds))));
    assert_eq!(
        ops.get(1),
        Some(&ImagingOp::State(StateOp::PushClip(bounds)))
    );
    assert_eq!(ops.last(), Some(&ImagingOp::State(StateOp::PopClip)));
    for stroke in surface.strokes() {
        assert_eq!(stroke.clip, Some(bounds));
    }
    assert_eq!(surface.current_state().clip_depth, 0);
}

#[test]
fn zero_size_canvas_only_clears() {
    for (size, cleared) in [
        (Size::ZERO, Rect::ZERO),
        (Size::new(0.0, 300.0), Rect::new(0.0, 0.0, 0.0, 300.0)),
        (Size::new(f64::NAN, 300.0), Rect::new(0.0, 0.0, 0.0, 300.0)),
        (Size::new(-5.0, -5.0), Rect::ZERO),
    ] {
        let surface = paint(&ViewportTransform::default(), size);
        assert_eq!(surface.ops(), [ImagingOp::Draw(DrawOp::Clear(cleared))]);
    }
}

#[test]
fn pan_moves_the_axes() {
    let mut transform = ViewportTransform::default();
    transform.begin_pan(Point::ORIGIN).unwrap();
    transform.update_pan(Point::new(70.0, 0.0)).unwrap();
    transform.end_pan();

    let surface = paint(&transform, Size::new(700.0, 700.0));
    let strokes = surface.strokes();
    assert_eq!(
        starts(strokes.last().unwrap()),
        [Point::new(420.5, 0.0), Point::new(0.0, 350.5)]
    );
}

#[test]
fn off_screen_origin_issues_no_axis_stroke() {
    let mut transform = ViewportTransform::default();
    transform.begin_pan(Point::ORIGIN).unwrap();
    transform.update_pan(Point::new(7000.0, 7000.0)).unwrap();
    transform.end_pan();

    let surface = paint(&transform, Size::new(700.0, 700.0));
    assert_eq!(
        colors(&surface.strokes()),
        [rgba(MINOR_COLOR), rgba(MAJOR_COLOR)]
    );
}

#[test]
fn extreme_zoom_in_keeps_lines_through_origin() {
    let mut transform = ViewportTransform::default();
    transform.handle_scroll(2500.0).unwrap();
    assert!((transform.state().scale() - 7_000_000.0).abs() < 1e-3);

    let surface = paint(&transform, Size::new(700.0, 700.0));
    let strokes = surface.strokes();
    assert_eq!(strokes.len(), 3);
    for stroke in &strokes {
        assert_eq!(
            starts(stroke),
            [Point::new(350.5, 0.0), Point::new(0.0, 350.5)]
        );
    }
}

#[test]
fn extreme_zoom_out_draws_only_axes() {
    let mut transform = ViewportTransform::default();
    transform.handle_scroll(-1e9).unwrap();

    let surface = paint(&transform, Size::new(1920.0, 1080.0));
    assert_eq!(colors(&surface.strokes()), [rgba(AXIS_COLOR)]);
}

#[test]
fn invalid_tiers_are_skipped() {
    let style = GridStyle::empty()
        .with_tier(GridTier::lines(0.0, 0.0, MINOR_COLOR))
        .with_tier(GridTier::lines(f64::NAN, 0.0, MINOR_COLOR))
        .with_tier(GridTier::axis(AXIS_COLOR));
    let mut grid = GridRenderer::new(style);
    let mut surface = RecordingSurface::new(Size::new(100.0, 100.0));

    grid.paint(ViewportTransform::default().state(), &mut surface);
    assert_eq!(colors(&surface.strokes()), [rgba(AXIS_COLOR)]);
}

#[test]
fn custom_tiers_draw_in_style_order() {
    let style = GridStyle::empty()
        .with_tier(GridTier::axis(AXIS_COLOR))
        .with_tier(GridTier::lines(0.5, 10.0, MAJOR_COLOR))
        .with_line_width(2.0);
    assert_eq!(style.tiers()[1].kind, TierKind::Lines { frequency: 0.5 });

    let mut grid = GridRenderer::new(style);
    let mut surface = RecordingSurface::new(Size::new(700.0, 700.0));
    grid.paint(ViewportTransform::default().state(), &mut surface);

    let strokes = surface.strokes();
    assert_eq!(colors(&strokes), [rgba(AXIS_COLOR), rgba(MAJOR_COLOR)]);
    // Every second unit in [-5, 5): -4, -2, 0, 2, 4 on each axis.
    assert_eq!(strokes[1].subpath_count(), 10);
    assert_eq!(strokes[1].style.as_ref().map(|s| s.width), Some(2.0));
}

#[test]
fn repaint_follows_resize() {
    let transform = ViewportTransform::default();
    let mut grid = GridRenderer::default();
    let mut surface = RecordingSurface::new(Size::new(700.0, 700.0));
    grid.paint(transform.state(), &mut surface);

    surface.clear_events();
    surface.set_size(Size::new(140.0, 140.0));
    grid.paint(transform.state(), &mut surface);

    let strokes = surface.strokes();
    assert_eq!(
        starts(strokes.last().unwrap()),
        [Point::new(70.5, 0.0), Point::new(0.0, 70.5)]
    );
}

#[test]
fn input_events_drive_repaint_requests() {
    let mut transform = ViewportTransform::default();
    let input = ViewportInput::default();
    let mut grid = GridRenderer::default();
    let mut surface = RecordingSurface::new(Size::new(700.0, 700.0));

    let requests = Rc::new(Cell::new(0_u32));
    let counter = Rc::clone(&requests);
    grid.attach(
        &mut transform,
        Rc::new(move || counter.set(counter.get() + 1)),
    );
    grid.paint(transform.state(), &mut surface);

    // Pressing alone changes nothing visible.
    input.handle(
        &mut transform,
        ViewportEvent::PointerDown {
            button: PointerButton::Middle,
            position: Point::new(10.0, 10.0),
        },
    );
    assert!(!grid.needs_repaint());

    input.handle(
        &mut transform,
        ViewportEvent::PointerMove {
            buttons: PointerButtons::MIDDLE,
            position: Point::new(80.0, 10.0),
        },
    );
    input.handle(&mut transform, ViewportEvent::Wheel { delta_y: -120.0 });
    assert!(grid.needs_repaint());
    assert_eq!(requests.get(), 1);

    surface.clear_events();
    grid.paint(transform.state(), &mut surface);
    assert!(!grid.needs_repaint());
    assert!(!surface.strokes().is_empty());
}
