// Copyright 2025 the Graphview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pan-gesture anchor: remember where a drag started and how far it has moved.
//!
//! ## Usage
//!
//! 1) Start a drag with [`DragState::start`], passing the pan offset at the
//!    time of the press and the pointer position in pixels.
//! 2) On each move event, call [`DragState::offset`] to get the total pixel
//!    offset from the start position.
//! 3) End the drag with [`DragState::end`].
//!
//! Offsets are always measured from the start position, never from the
//! previous move, so a missed move event cannot accumulate error.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use graphview_event_state::drag::DragState;
//!
//! let mut drag = DragState::default();
//!
//! drag.start(Vec2::new(1.0, 2.0), Point::new(100.0, 50.0));
//! assert!(drag.is_dragging());
//!
//! let offset = drag.offset(Point::new(120.0, 50.0)).unwrap();
//! assert_eq!(offset, Vec2::new(20.0, 0.0));
//!
//! let anchor = drag.anchor().unwrap();
//! assert_eq!(anchor.start_translation, Vec2::new(1.0, 2.0));
//!
//! assert!(drag.end());
//! assert!(!drag.end());
//! ```

use kurbo::{Point, Vec2};

/// Snapshot captured when a pan gesture begins.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragAnchor {
    /// Pan offset (logical units) at the moment the drag started.
    pub start_translation: Vec2,
    /// Pointer position (canvas pixels) at the moment the drag started.
    pub start_position: Point,
}

/// Tracks the transient state of a single pan gesture.
///
/// A session exists only between [`DragState::start`] and [`DragState::end`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DragState {
    anchor: Option<DragAnchor>,
}

impl DragState {
    /// Start a new drag session, replacing any session already in progress.
    pub fn start(&mut self, translation: Vec2, position: Point) {
        self.anchor = Some(DragAnchor {
            start_translation: translation,
            start_position: position,
        });
    }

    /// Returns the anchor of the active session, if any.
    #[must_use]
    pub fn anchor(&self) -> Option<DragAnchor> {
        self.anchor
    }

    /// Total pixel offset of `position` from the drag start position.
    ///
    /// Returns `None` when no drag is active.
    #[must_use]
    pub fn offset(&self, position: Point) -> Option<Vec2> {
        self.anchor.map(|anchor| position - anchor.start_position)
    }

    /// End the current drag session.
    ///
    /// Returns `true` if a session was active. Calling this on an idle state
    /// is harmless.
    pub fn end(&mut self) -> bool {
        self.anchor.take().is_some()
    }

    /// Returns `true` while a drag session is active.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.anchor.is_some()
    }
}
