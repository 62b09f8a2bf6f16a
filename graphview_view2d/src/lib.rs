// Copyright 2025 the Graphview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Graphview View 2D: the pan/zoom model behind a node-graph canvas.
//!
//! This crate owns the viewport state of a graph editor surface and nothing
//! else. It focuses on:
//! - Zoom expressed as a *distance*, clamped away from zero, with the scale
//!   (pixels per logical unit) derived from it.
//! - Pan gestures measured in pixels and applied in logical units.
//! - Synchronous change notifications so renderers know when to repaint.
//! - Conversion between canvas pixels, logical units, and grid units.
//!
//! It does **not** render anything. Callers are expected to:
//! - Translate native mouse/wheel events into
//!   [`ViewportEvent`](graphview_event_state::pointer::ViewportEvent)s and feed
//!   them through a [`ViewportInput`], or call the [`ViewportTransform`]
//!   operations directly.
//! - Subscribe a renderer (for example `graphview_grid`) to the change
//!   notifications and schedule repaints with their toolkit.
//! - Build a [`ViewportGeometry`] from [`ViewportTransform::state`] at paint
//!   time.
//!
//! ## Minimal example
//!
//! ```rust
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! use kurbo::{Point, Size};
//! use graphview_view2d::ViewportTransform;
//!
//! let mut transform = ViewportTransform::default();
//!
//! let repaint = Rc::new(Cell::new(false));
//! let flag = Rc::clone(&repaint);
//! transform.on_scale_changed(move |_scale| flag.set(true));
//!
//! // One wheel notch away from the user zooms out a little.
//! transform.handle_scroll(-120.0).unwrap();
//! assert!(repaint.get());
//! assert!(transform.state().scale() < 70.0);
//!
//! // Map a pointer position into graph space for hit testing.
//! let geometry = transform.state().geometry(Size::new(800.0, 600.0));
//! let logical = geometry.screen_to_logical(Point::new(400.0, 300.0));
//! assert!(logical.x.abs() < 1e-9 && logical.y.abs() < 1e-9);
//! ```
//!
//! ## Design notes
//!
//! - There is exactly one writer of [`ViewportState`]: its
//!   [`ViewportTransform`]. Everything else reads it by reference.
//! - Handlers receive the new value and cannot reach the transform while it
//!   dispatches, so neither the pan anchor nor the handler list can be
//!   mutated re-entrantly.
//! - Invalid input never panics. Non-finite values and pan updates without a
//!   pan gesture are rejected with an [`InputError`] and leave the state
//!   unchanged.
//! - Everything is single-threaded; handlers are not required to be `Send`.
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

mod config;
mod error;
mod geometry;
mod input;
mod observer;
mod state;
mod transform;

pub use config::ViewportConfig;
pub use error::InputError;
pub use geometry::{Axis, AxisSpan, ViewportGeometry, align_pixel};
pub use input::{ViewportInput, ViewportResponse};
pub use observer::SubscriptionId;
pub use state::ViewportState;
pub use transform::ViewportTransform;
