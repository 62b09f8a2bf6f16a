// Copyright 2025 the Graphview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Graphview Event State: pointer vocabulary and pan-gesture tracking.
//!
//! This crate holds the small, framework-independent pieces a graph viewport
//! needs to interpret raw input:
//!
//! - [`pointer`]: button identities, held-button masks, and the
//!   [`pointer::ViewportEvent`] enum hosts translate their native events into.
//! - [`drag`]: the anchor of a pan gesture, captured on press and cleared on
//!   release.
//!
//! It does not know about zoom, scale, or rendering. `graphview_view2d`
//! combines these pieces with the viewport transform.
//!
//! ## Drag anchors
//!
//! ```rust
//! use kurbo::{Point, Vec2};
//! use graphview_event_state::drag::DragState;
//!
//! let mut drag = DragState::default();
//! drag.start(Vec2::ZERO, Point::new(10.0, 10.0));
//!
//! // Offsets are measured from the press position.
//! let total = drag.offset(Point::new(15.0, 12.0)).unwrap();
//! assert_eq!(total, Vec2::new(5.0, 2.0));
//!
//! drag.end();
//! assert!(!drag.is_dragging());
//! ```
//!
//! This crate is `no_std`.

#![no_std]

pub mod drag;
pub mod pointer;
