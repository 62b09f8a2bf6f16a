// Copyright 2025 the Graphview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use graphview_event_state::drag::{DragAnchor, DragState};
use kurbo::{Size, Vec2};

use crate::config::ViewportConfig;
use crate::geometry::ViewportGeometry;

/// Zoom and pan state of a graph viewport.
///
/// Only [`crate::ViewportTransform`] mutates this value. Readers (renderers,
/// hit testing, the host) borrow it through
/// [`crate::ViewportTransform::state`].
///
/// Invariants, upheld after every mutation:
/// - `distance >= config.min_distance()`;
/// - `scale == config.scale_factor() / distance`;
/// - `distance`, `scale` and `translation` are finite.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportState {
    pub(crate) distance: f64,
    pub(crate) scale: f64,
    pub(crate) translation: Vec2,
    pub(crate) drag: DragState,
}

impl ViewportState {
    /// The initial state: `distance = 1`, no pan, no drag session.
    pub(crate) fn new(config: &ViewportConfig) -> Self {
        let mut state = Self {
            distance: 1.0,
            scale: config.scale_factor(),
            translation: Vec2::ZERO,
            drag: DragState::default(),
        };
        state.set_distance(config, 1.0);
        state
    }

    /// Clamps and stores `distance`, then re-derives `scale`.
    pub(crate) fn set_distance(&mut self, config: &ViewportConfig, distance: f64) {
        self.distance = distance.max(config.min_distance());
        self.scale = config.scale_factor() / self.distance;
    }

    /// Inverse zoom parameter; larger means further zoomed out.
    #[must_use]
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Pixels per logical unit.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Logical-space pan offset (`x` is left, `y` is top).
    #[must_use]
    pub fn translation(&self) -> Vec2 {
        self.translation
    }

    /// Anchor of the active pan gesture, if one is in progress.
    #[must_use]
    pub fn drag_anchor(&self) -> Option<DragAnchor> {
        self.drag.anchor()
    }

    /// Returns `true` while a pan gesture is in progress.
    #[must_use]
    pub fn is_panning(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Builds the per-frame geometry snapshot for a canvas of `canvas` pixels.
    #[must_use]
    pub fn geometry(&self, canvas: Size) -> ViewportGeometry {
        ViewportGeometry::new(self, canvas)
    }
}
