// Copyright 2025 the Graphview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::boxed::Box;
use core::fmt;
use core::sync::atomic::{AtomicU64, Ordering};

use kurbo::{Point, Vec2};

use crate::config::ViewportConfig;
use crate::error::InputError;
use crate::observer::{Observers, SubscriptionId};
use crate::state::ViewportState;

static NEXT_TRANSFORM: AtomicU64 = AtomicU64::new(0);

/// Owner and sole writer of a [`ViewportState`].
///
/// `ViewportTransform` turns wheel and drag input into zoom and pan changes,
/// keeps the state's numeric invariants, and notifies subscribers
/// synchronously after each accepted change.
///
/// - Zoom is expressed as a *distance*: scrolling moves the distance by
///   `-delta * zoom_sensitivity`, and the scale is
///   `scale_factor / distance`.
/// - Pan is computed in pixels and applied in logical units, dividing by the
///   scale current at the time of each update.
///
/// Rejected input (non-finite values, updates without an active pan) leaves
/// the state untouched and fires nothing.
///
/// ```rust
/// use kurbo::Point;
/// use graphview_view2d::ViewportTransform;
///
/// let mut transform = ViewportTransform::default();
/// assert_eq!(transform.state().scale(), 70.0);
///
/// transform.begin_pan(Point::new(100.0, 50.0)).unwrap();
/// transform.update_pan(Point::new(170.0, 50.0)).unwrap();
/// transform.end_pan();
///
/// assert!((transform.state().translation().x - 1.0).abs() < 1e-12);
/// ```
pub struct ViewportTransform {
    config: ViewportConfig,
    state: ViewportState,
    scale_changed: Observers<f64>,
    translation_changed: Observers<Vec2>,
    id: u64,
    next_subscription: u64,
}

impl ViewportTransform {
    /// Creates a transform at `distance = 1` with no pan.
    #[must_use]
    pub fn new(config: ViewportConfig) -> Self {
        Self {
            state: ViewportState::new(&config),
            config,
            scale_changed: Observers::new(),
            translation_changed: Observers::new(),
            id: NEXT_TRANSFORM.fetch_add(1, Ordering::Relaxed),
            next_subscription: 0,
        }
    }

    /// Returns the configuration this transform was built with.
    #[must_use]
    pub fn config(&self) -> &ViewportConfig {
        &self.config
    }

    /// Returns the current viewport state.
    #[must_use]
    pub fn state(&self) -> &ViewportState {
        &self.state
    }

    /// Returns `true` while a pan gesture is in progress.
    #[must_use]
    pub fn is_panning(&self) -> bool {
        self.state.is_panning()
    }

    /// Interprets a wheel delta as a zoom step and returns the new scale.
    ///
    /// Positive deltas zoom in. The distance is clamped to
    /// [`ViewportConfig::min_distance`], and scale-changed handlers fire with
    /// the new scale.
    pub fn handle_scroll(&mut self, delta: f64) -> Result<f64, InputError> {
        if !delta.is_finite() {
            log::debug!("rejected scroll delta {delta}");
            return Err(InputError::NonFiniteDelta);
        }
        let distance = self.state.distance - delta * self.config.zoom_sensitivity();
        self.apply_distance(distance)
    }

    /// Sets the zoom distance directly and returns the new scale.
    ///
    /// The distance is clamped like [`Self::handle_scroll`] and scale-changed
    /// handlers fire.
    pub fn set_distance(&mut self, distance: f64) -> Result<f64, InputError> {
        if !distance.is_finite() {
            log::debug!("rejected zoom distance {distance}");
            return Err(InputError::NonFiniteDelta);
        }
        self.apply_distance(distance)
    }

    /// Starts a pan gesture at `position` (canvas pixels).
    ///
    /// Calling this while a pan is already active re-anchors it at the
    /// current translation and the new position.
    pub fn begin_pan(&mut self, position: Point) -> Result<(), InputError> {
        if !position.is_finite() {
            log::debug!("rejected pan start at {position:?}");
            return Err(InputError::NonFinitePosition);
        }
        self.state.drag.start(self.state.translation, position);
        log::trace!("pan started at {position:?}");
        Ok(())
    }

    /// Moves the active pan gesture to `position` and returns the new
    /// translation.
    ///
    /// `translation = start_translation + (position - start_position) / scale`.
    /// Returns [`InputError::NotPanning`] without touching the state when no
    /// gesture is active, which happens when the host misses a button press.
    pub fn update_pan(&mut self, position: Point) -> Result<Vec2, InputError> {
        if !position.is_finite() {
            log::debug!("rejected pan update at {position:?}");
            return Err(InputError::NonFinitePosition);
        }
        let drag = self.state.drag;
        let (Some(anchor), Some(pixel_delta)) = (drag.anchor(), drag.offset(position)) else {
            log::debug!("pan update at {position:?} without an active pan");
            return Err(InputError::NotPanning);
        };
        let translation = anchor.start_translation + pixel_delta / self.state.scale;
        if !translation.is_finite() {
            log::debug!("pan to {position:?} overflows at scale {}", self.state.scale);
            return Err(InputError::Overflow);
        }
        self.state.translation = translation;
        log::trace!("translation changed to {translation:?}");
        self.translation_changed.notify(translation);
        Ok(translation)
    }

    /// Ends the active pan gesture.
    ///
    /// Returns `true` if a gesture was active. Translation already applied by
    /// [`Self::update_pan`] is kept.
    pub fn end_pan(&mut self) -> bool {
        let ended = self.state.drag.end();
        if ended {
            log::trace!("pan ended at {:?}", self.state.translation);
        }
        ended
    }

    /// Restores the initial zoom and pan, cancelling any pan gesture.
    ///
    /// Both scale-changed and translation-changed handlers fire.
    pub fn reset(&mut self) {
        self.state.drag.end();
        self.state.set_distance(&self.config, 1.0);
        self.state.translation = Vec2::ZERO;
        log::trace!("viewport reset");
        self.scale_changed.notify(self.state.scale);
        self.translation_changed.notify(self.state.translation);
    }

    /// Registers a handler called with the new scale after every zoom change.
    pub fn on_scale_changed(&mut self, handler: impl FnMut(f64) + 'static) -> SubscriptionId {
        let id = self.next_id();
        self.scale_changed.subscribe(id, Box::new(handler));
        id
    }

    /// Registers a handler called with the new translation after every pan change.
    pub fn on_translation_changed(
        &mut self,
        handler: impl FnMut(Vec2) + 'static,
    ) -> SubscriptionId {
        let id = self.next_id();
        self.translation_changed.subscribe(id, Box::new(handler));
        id
    }

    /// Removes a handler registered with [`Self::on_scale_changed`] or
    /// [`Self::on_translation_changed`].
    ///
    /// Returns `false` if no handler with that id is registered, including
    /// when the id was issued by a different transform.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        if !self.issued(id) {
            log::debug!("ignored unsubscribe of {id:?} issued by another transform");
            return false;
        }
        self.scale_changed.unsubscribe(id) || self.translation_changed.unsubscribe(id)
    }

    /// Returns `true` if `id` was handed out by this transform.
    ///
    /// The handler may since have been removed.
    #[must_use]
    pub fn issued(&self, id: SubscriptionId) -> bool {
        id.transform == self.id
    }

    /// Number of registered handlers across both notifications.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.scale_changed.len() + self.translation_changed.len()
    }

    fn next_id(&mut self) -> SubscriptionId {
        let id = SubscriptionId {
            transform: self.id,
            index: self.next_subscription,
        };
        self.next_subscription += 1;
        id
    }

    fn apply_distance(&mut self, distance: f64) -> Result<f64, InputError> {
        let scale = self.config.scale_factor() / distance.max(self.config.min_distance());
        if !distance.is_finite() || !scale.is_normal() {
            log::debug!("zoom distance {distance} overflows (scale {scale})");
            return Err(InputError::Overflow);
        }
        self.state.set_distance(&self.config, distance);
        let scale = self.state.scale;
        log::trace!("distance {} scale {scale}", self.state.distance);
        self.scale_changed.notify(scale);
        Ok(scale)
    }
}

impl Default for ViewportTransform {
    fn default() -> Self {
        Self::new(ViewportConfig::default())
    }
}

impl fmt::Debug for ViewportTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewportTransform")
            .field("config", &self.config)
            .field("state", &self.state)
            .field("scale_changed", &self.scale_changed)
            .field("translation_changed", &self.translation_changed)
            .field("id", &self.id)
            .field("next_subscription", &self.next_subscription)
            .finish()
    }
}
