// Copyright 2025 the Graphview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Graphview Imaging Reference Surface.
//!
//! This crate provides a small, stateful implementation of
//! [`DrawingSurface`] for **op recording and state tracing**.
//!
//! It is intentionally *not* a rasterizer:
//! - It does **not** produce pixels.
//! - It is intended primarily for tests and debugging that want to assert on
//!   emitted ops and the surface state at the time each op is applied.
//!
//! ```rust
//! use graphview_imaging::{BezPath, Color, DrawingSurfaceExt, Size, StrokeStyle};
//! use graphview_imaging_ref::RecordingSurface;
//!
//! let mut surface = RecordingSurface::new(Size::new(100.0, 50.0));
//! let mut path = BezPath::new();
//! path.move_to((10.5, 0.0));
//! path.line_to((10.5, 50.0));
//! surface.stroke_path(path, &StrokeStyle::new(1.0), Color::from_rgb8(43, 43, 43));
//!
//! let strokes = surface.strokes();
//! assert_eq!(strokes.len(), 1);
//! assert_eq!(strokes[0].rgba8(), Some([43, 43, 43, 255]));
//! ```

#![no_std]

extern crate alloc;

use alloc::vec::Vec;

use graphview_imaging::{
    BezPath, Color, DrawOp, DrawingSurface, ImagingOp, Rect, Size, StateOp, StrokeStyle,
};
use peniko::Brush;

/// Snapshot of the current surface state.
#[derive(Clone, Debug, Default)]
pub struct StateSnapshot {
    /// Current paint, if set.
    pub paint: Option<Brush>,
    /// Current stroke style, if set.
    pub stroke: Option<StrokeStyle>,
    /// Number of active clips on the clip stack.
    pub clip_depth: u32,
    /// Intersection of all active clips, or `None` when unclipped.
    pub clip: Option<Rect>,
}

/// Event recorded by the reference surface.
#[derive(Clone, Debug)]
pub enum Event {
    /// State operation and the resulting state snapshot.
    State {
        /// State operation that was applied.
        op: StateOp,
        /// Snapshot after applying the state operation.
        state: StateSnapshot,
    },
    /// Draw operation and the state snapshot used for drawing.
    Draw {
        /// Draw operation that was applied.
        op: DrawOp,
        /// Snapshot at the time of drawing.
        state: StateSnapshot,
    },
}

/// A stroke as it would have been rendered.
#[derive(Clone, Debug)]
pub struct RecordedStroke {
    /// Path that was stroked.
    pub path: BezPath,
    /// Paint in effect, if any was set.
    pub paint: Option<Brush>,
    /// Stroke style in effect, if any was set.
    pub style: Option<StrokeStyle>,
    /// Active clip, if any.
    pub clip: Option<Rect>,
}

impl RecordedStroke {
    /// Solid paint color, if the paint is a solid color.
    #[must_use]
    pub fn color(&self) -> Option<Color> {
        match &self.paint {
            Some(Brush::Solid(color)) => Some(*color),
            _ => None,
        }
    }

    /// Solid paint color as 8-bit RGBA components.
    #[must_use]
    pub fn rgba8(&self) -> Option<[u8; 4]> {
        self.color().map(|c| c.to_rgba8().to_u8_array())
    }

    /// Number of subpaths (pen-down runs) in the stroked path.
    #[must_use]
    pub fn subpath_count(&self) -> usize {
        self.path
            .elements()
            .iter()
            .filter(|el| matches!(el, kurbo::PathEl::MoveTo(_)))
            .count()
    }
}

/// Reference implementation of [`DrawingSurface`] that records what it is given.
///
/// This surface:
/// - Reports a caller-provided size,
/// - Tracks current paint, stroke style, and clip stack,
/// - Records high-level [`Event`]s as state and draw operations are applied.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    size: Size,
    /// Log of events in the order they were applied.
    events: Vec<Event>,
    /// Underlying surface ops.
    ops: Vec<ImagingOp>,
    /// Current surface state.
    state: StateSnapshot,
    clip_stack: Vec<Rect>,
}

impl RecordingSurface {
    /// Creates a recorder that reports `size`.
    #[must_use]
    pub fn new(size: Size) -> Self {
        Self {
            size,
            ..Self::default()
        }
    }

    /// Changes the reported size, as a host would after a resize.
    pub fn set_size(&mut self, size: Size) {
        self.size = size;
    }

    /// Returns a slice of recorded events.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Returns a slice of raw surface operations.
    pub fn ops(&self) -> &[ImagingOp] {
        &self.ops
    }

    /// Current surface state.
    pub fn current_state(&self) -> &StateSnapshot {
        &self.state
    }

    /// Every stroke in draw order, with the state it was drawn with.
    pub fn strokes(&self) -> Vec<RecordedStroke> {
        self.events
            .iter()
            .filter_map(|event| match event {
                Event::Draw {
                    op: DrawOp::StrokePath(path),
                    state,
                } => Some(RecordedStroke {
                    path: path.clone(),
                    paint: state.paint.clone(),
                    style: state.stroke.clone(),
                    clip: state.clip,
                }),
                _ => None,
            })
            .collect()
    }

    /// Clears all recorded events and ops but keeps the current state.
    pub fn clear_events(&mut self) {
        self.events.clear();
        self.ops.clear();
    }

    fn sync_clip(&mut self) {
        self.state.clip_depth = u32::try_from(self.clip_stack.len()).unwrap_or(u32::MAX);
        self.state.clip = self
            .clip_stack
            .iter()
            .copied()
            .reduce(|acc, rect| acc.intersect(rect));
    }
}

impl DrawingSurface for RecordingSurface {
    fn size(&self) -> Size {
        self.size
    }

    fn state(&mut self, op: StateOp) {
        match &op {
            StateOp::SetPaint(brush) => self.state.paint = Some(brush.clone()),
            StateOp::SetStroke(style) => self.state.stroke = Some(style.clone()),
            StateOp::PushClip(rect) => {
                self.clip_stack.push(*rect);
                self.sync_clip();
            }
            StateOp::PopClip => {
                self.clip_stack.pop();
                self.sync_clip();
            }
        }

        self.ops.push(ImagingOp::State(op.clone()));
        self.events.push(Event::State {
            op,
            state: self.state.clone(),
        });
    }

    fn draw(&mut self, op: DrawOp) {
        self.ops.push(ImagingOp::Draw(op.clone()));
        self.events.push(Event::Draw {
            op,
            state: self.state.clone(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use graphview_imaging::DrawingSurfaceExt;

    fn vertical(x: f64) -> BezPath {
        let mut path = BezPath::new();
        path.move_to((x, 0.0));
        path.line_to((x, 10.0));
        path
    }

    #[test]
    fn basic_state_and_draw() {
        let mut surface = RecordingSurface::default();

        surface.state(StateOp::SetPaint(Brush::Solid(Color::WHITE)));
        surface.draw(DrawOp::StrokePath(vertical(0.5)));

        assert_eq!(surface.events().len(), 2);
        assert_eq!(surface.ops().len(), 2);
    }

    #[test]
    fn reports_size_and_follows_resizes() {
        let mut surface = RecordingSurface::new(Size::new(20.0, 10.0));
        assert_eq!(surface.size(), Size::new(20.0, 10.0));

        surface.set_size(Size::new(5.0, 5.0));
        assert_eq!(surface.size(), Size::new(5.0, 5.0));
    }

    #[test]
    fn clip_stack_intersects_and_pops() {
        let mut surface = RecordingSurface::default();

        surface.push_clip_rect(Rect::new(0.0, 0.0, 10.0, 10.0));
        surface.push_clip_rect(Rect::new(5.0, 5.0, 20.0, 20.0));
        assert_eq!(surface.current_state().clip_depth, 2);
        assert_eq!(
            surface.current_state().clip,
            Some(Rect::new(5.0, 5.0, 10.0, 10.0))
        );

        surface.pop_clip();
        surface.pop_clip();
        assert_eq!(surface.current_state().clip_depth, 0);
        assert_eq!(surface.current_state().clip, None);

        // Extra pops are tolerated.
        surface.pop_clip();
        assert_eq!(surface.current_state().clip_depth, 0);
    }

    #[test]
    fn strokes_capture_state_at_draw_time() {
        let mut surface = RecordingSurface::new(Size::new(10.0, 10.0));
        let bounds = surface.size().to_rect();

        surface.with_clip_rect(bounds, |s| {
            s.stroke_path(vertical(1.5), &StrokeStyle::new(1.0), Color::from_rgb8(1, 2, 3));
        });
        surface.stroke_path(vertical(2.5), &StrokeStyle::new(2.0), Color::WHITE);

        let strokes = surface.strokes();
        assert_eq!(strokes.len(), 2);
        assert_eq!(strokes[0].rgba8(), Some([1, 2, 3, 255]));
        assert_eq!(strokes[0].clip, Some(bounds));
        assert_eq!(strokes[0].style.as_ref().map(|s| s.width), Some(1.0));
        assert_eq!(strokes[0].subpath_count(), 1);
        assert_eq!(strokes[1].clip, None);
        assert_eq!(strokes[1].style.as_ref().map(|s| s.width), Some(2.0));
    }

    #[test]
    fn clear_events_keeps_state() {
        let mut surface = RecordingSurface::default();

        surface.state(StateOp::SetStroke(StrokeStyle::new(1.0)));
        surface.clear_events();
        assert!(surface.events().is_empty());
        assert!(surface.ops().is_empty());

        surface.draw(DrawOp::StrokePath(vertical(0.5)));
        let strokes = surface.strokes();
        assert_eq!(strokes[0].style.as_ref().map(|s| s.width), Some(1.0));
        assert!(strokes[0].color().is_none());
    }
}
