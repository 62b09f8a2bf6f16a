// Copyright 2025 the Graphview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Startup constants for a [`crate::ViewportTransform`].
///
/// Setters normalize their input: a value that would break the transform's
/// numeric invariants (non-finite, non-positive where a positive value is
/// required, or one that makes [`Self::max_scale`] infinite) is ignored and
/// the previous value kept.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportConfig {
    scale_factor: f64,
    zoom_sensitivity: f64,
    min_distance: f64,
}

impl ViewportConfig {
    /// Pixels per logical unit at `distance = 1`.
    pub const DEFAULT_SCALE_FACTOR: f64 = 70.0;
    /// Distance change per unit of wheel delta.
    pub const DEFAULT_ZOOM_SENSITIVITY: f64 = 1.0 / 2500.0;
    /// Smallest allowed zoom distance.
    pub const DEFAULT_MIN_DISTANCE: f64 = 1e-5;

    /// Creates the default configuration.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            scale_factor: Self::DEFAULT_SCALE_FACTOR,
            zoom_sensitivity: Self::DEFAULT_ZOOM_SENSITIVITY,
            min_distance: Self::DEFAULT_MIN_DISTANCE,
        }
    }

    /// Sets the number of pixels per logical unit at `distance = 1`.
    #[must_use]
    pub fn with_scale_factor(mut self, scale_factor: f64) -> Self {
        if scale_factor.is_finite()
            && scale_factor > 0.0
            && (scale_factor / self.min_distance).is_finite()
        {
            self.scale_factor = scale_factor;
        }
        self
    }

    /// Sets how far one unit of wheel delta moves the zoom distance.
    ///
    /// A negative sensitivity inverts the wheel direction.
    #[must_use]
    pub fn with_zoom_sensitivity(mut self, sensitivity: f64) -> Self {
        if sensitivity.is_finite() {
            self.zoom_sensitivity = sensitivity;
        }
        self
    }

    /// Sets the lower clamp for the zoom distance.
    #[must_use]
    pub fn with_min_distance(mut self, min_distance: f64) -> Self {
        if min_distance.is_finite()
            && min_distance > 0.0
            && (self.scale_factor / min_distance).is_finite()
        {
            self.min_distance = min_distance;
        }
        self
    }

    /// Pixels per logical unit at `distance = 1`.
    #[must_use]
    pub fn scale_factor(&self) -> f64 {
        self.scale_factor
    }

    /// Distance change per unit of wheel delta.
    #[must_use]
    pub fn zoom_sensitivity(&self) -> f64 {
        self.zoom_sensitivity
    }

    /// Smallest allowed zoom distance.
    #[must_use]
    pub fn min_distance(&self) -> f64 {
        self.min_distance
    }

    /// Largest scale the transform can reach, `scale_factor / min_distance`.
    #[must_use]
    pub fn max_scale(&self) -> f64 {
        self.scale_factor / self.min_distance
    }
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self::new()
    }
}
