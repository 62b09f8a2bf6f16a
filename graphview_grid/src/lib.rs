// Copyright 2025 the Graphview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Graphview Grid: the adaptive background grid of a node-graph canvas.
//!
//! The grid is drawn in *tiers*, back to front:
//! - **minor** lines every quarter unit, shown from 35px per unit;
//! - **major** lines every unit, shown from 3px per unit;
//! - **axis** lines through the logical origin, always shown.
//!
//! Dense tiers fade out as the user zooms out, so the canvas never turns into
//! a solid wash of lines. Every line is snapped to the pixel grid
//! ([`align_pixel`](graphview_view2d::align_pixel)) so 1px strokes stay crisp.
//!
//! [`GridRenderer`] reads a [`ViewportState`](graphview_view2d::ViewportState)
//! and draws onto any [`DrawingSurface`](graphview_imaging::DrawingSurface).
//! It learns about zoom and pan changes by subscribing to a
//! [`ViewportTransform`](graphview_view2d::ViewportTransform) and asks the
//! host for a repaint through [`RepaintRequest`].
//!
//! ## Minimal example
//!
//! ```rust
//! use std::rc::Rc;
//!
//! use graphview_grid::{AXIS_COLOR, GridRenderer};
//! use graphview_imaging::Size;
//! use graphview_imaging_ref::RecordingSurface;
//! use graphview_view2d::ViewportTransform;
//!
//! let mut transform = ViewportTransform::default();
//! let mut grid = GridRenderer::default();
//! grid.attach(&mut transform, Rc::new(|| { /* schedule a frame */ }));
//!
//! let mut surface = RecordingSurface::new(Size::new(700.0, 560.0));
//! grid.paint(transform.state(), &mut surface);
//!
//! // At the default 70px per unit all three tiers are visible; the axes are
//! // drawn last, through the middle of the canvas.
//! let strokes = surface.strokes();
//! assert_eq!(strokes.len(), 3);
//! assert_eq!(strokes[2].color(), Some(AXIS_COLOR));
//! ```
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

mod lines;
mod renderer;
mod style;

pub use lines::MAX_LINES_PER_AXIS;
pub use renderer::{GridRenderer, RepaintRequest};
pub use style::{
    AXIS_COLOR, GridStyle, GridTier, MAJOR_COLOR, MAJOR_FREQUENCY, MAJOR_MIN_SCALE, MINOR_COLOR,
    MINOR_FREQUENCY, MINOR_MIN_SCALE, TierKind,
};
