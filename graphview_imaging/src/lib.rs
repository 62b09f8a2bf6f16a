// Copyright 2025 the Graphview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Graphview Imaging: backend-agnostic drawing-surface ops and traits.
//!
//! Renderers in Graphview (such as the background grid) never talk to a
//! concrete 2D API. They emit a short stream of plain operations against a
//! [`DrawingSurface`], which a host adapts to whatever it actually draws with
//! (a canvas 2D context, Vello, Skia, a test recorder, ...).
//!
//! # Core concepts
//!
//! - **State operations** ([`StateOp`]) change how later draws are
//!   interpreted: the current paint, stroke style, and clip stack.
//! - **Draw operations** ([`DrawOp`]) produce pixels: clearing a rectangle
//!   and stroking a path.
//! - **Surfaces** ([`DrawingSurface`]) accept both kinds and report their
//!   pixel size. [`DrawingSurfaceExt`] adds closure-based helpers such as
//!   [`DrawingSurfaceExt::with_clip_rect`].
//!
//! All coordinates are in surface pixels with the origin at the top-left
//! corner.
//!
//! # Example
//!
//! A sketch of a host surface and a caller:
//!
//! ```ignore
//! # use graphview_imaging::*;
//! # struct MySurface { /* wraps a native canvas */ }
//! # impl DrawingSurface for MySurface { /* ... */ }
//! let mut surface = MySurface { /* ... */ };
//! let bounds = surface.size().to_rect();
//!
//! surface.draw(DrawOp::Clear(bounds));
//! surface.with_clip_rect(bounds, |s| {
//!     let mut path = BezPath::new();
//!     path.move_to((10.5, 0.0));
//!     path.line_to((10.5, bounds.height()));
//!     s.stroke_path(path, &StrokeStyle::new(1.0), Color::from_rgb8(43, 43, 43));
//! });
//! ```

#![no_std]

use peniko::Brush;

pub use kurbo::{BezPath, Rect, Size};
pub use peniko::Color;

/// Stroke parameters used by [`StateOp::SetStroke`].
pub type StrokeStyle = kurbo::Stroke;

/// Operations that mutate surface state.
#[derive(Clone, Debug, PartialEq)]
pub enum StateOp {
    /// Set the paint used by subsequent strokes.
    SetPaint(Brush),
    /// Set the stroke style used by subsequent strokes.
    SetStroke(StrokeStyle),
    /// Intersect the clip with a rectangle and push it on the clip stack.
    PushClip(Rect),
    /// Pop the most recently pushed clip.
    ///
    /// Popping an empty clip stack is a no-op.
    PopClip,
}

/// Operations that produce pixels.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    /// Reset a rectangle to fully transparent, ignoring clip and paint.
    Clear(Rect),
    /// Stroke a path with the current stroke style and paint.
    StrokePath(BezPath),
}

/// A single surface operation, as captured by recorders.
#[derive(Clone, Debug, PartialEq)]
pub enum ImagingOp {
    /// A state operation.
    State(StateOp),
    /// A draw operation.
    Draw(DrawOp),
}

/// A 2D surface that renderers draw into.
///
/// Hosts implement this on top of their native drawing API. Implementations
/// must keep state (paint, stroke, clips) between calls until it is changed
/// by another [`StateOp`].
pub trait DrawingSurface {
    /// Current surface size in pixels.
    fn size(&self) -> Size;

    /// Apply a state operation.
    fn state(&mut self, op: StateOp);

    /// Apply a draw operation.
    fn draw(&mut self, op: DrawOp);

    /// Push a rectangular clip.
    ///
    /// Default implementation forwards to [`StateOp::PushClip`].
    fn push_clip_rect(&mut self, rect: Rect) {
        self.state(StateOp::PushClip(rect));
    }

    /// Pop the most recently pushed clip.
    ///
    /// Default implementation forwards to [`StateOp::PopClip`].
    fn pop_clip(&mut self) {
        self.state(StateOp::PopClip);
    }
}

/// Convenience helpers for [`DrawingSurface`] implementations and callers.
///
/// This is separate from [`DrawingSurface`] so that methods can accept closures and return values
/// without complicating trait object usage (`&mut dyn DrawingSurface`).
pub trait DrawingSurfaceExt: DrawingSurface {
    /// Run `f` inside a rectangular clip, popping it afterwards.
    ///
    /// Note: if `f` panics, the clip will not be popped.
    #[inline]
    fn with_clip_rect<R>(&mut self, rect: Rect, f: impl FnOnce(&mut Self) -> R) -> R {
        self.push_clip_rect(rect);
        let out = f(self);
        self.pop_clip();
        out
    }

    /// Set a solid paint and stroke style, then stroke `path`.
    #[inline]
    fn stroke_path(&mut self, path: BezPath, style: &StrokeStyle, color: Color) {
        self.state(StateOp::SetPaint(Brush::Solid(color)));
        self.state(StateOp::SetStroke(style.clone()));
        self.draw(DrawOp::StrokePath(path));
    }
}

impl<S: DrawingSurface + ?Sized> DrawingSurfaceExt for S {}
