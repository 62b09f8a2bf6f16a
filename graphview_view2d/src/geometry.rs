// Copyright 2025 the Graphview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Size, Vec2};

use crate::state::ViewportState;

/// One of the two screen axes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Horizontal axis. Its span positions vertical grid lines (columns).
    X,
    /// Vertical axis. Its span positions horizontal grid lines (rows).
    Y,
}

/// The logical range visible along one axis, plus what is needed to map it
/// back to pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisSpan {
    /// Logical coordinate at the near (left/top) edge of the canvas.
    pub start: f64,
    /// Logical coordinate at the far (right/bottom) edge of the canvas.
    pub end: f64,
    /// Translation recentered on the canvas middle, in logical units.
    pub effective_translation: f64,
    /// Pixels per logical unit.
    pub scale: f64,
    /// Canvas length along this axis, in pixels.
    pub pixels: f64,
}

impl AxisSpan {
    /// Converts a logical coordinate on this axis to a pixel coordinate.
    #[must_use]
    pub fn to_screen(&self, logical: f64) -> f64 {
        (logical + self.effective_translation) * self.scale
    }

    /// Returns `true` if `logical` lies in the half-open range `[start, end)`.
    #[must_use]
    pub fn contains(&self, logical: f64) -> bool {
        self.start <= logical && logical < self.end
    }

    /// Returns `true` when nothing is visible along this axis.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start.is_nan() || self.end.is_nan() || self.start >= self.end
    }
}

/// Per-frame snapshot of the viewport mapped onto a canvas.
///
/// Built from a [`ViewportState`] and the canvas size in pixels. It is cheap
/// to construct and should be rebuilt on every paint rather than cached,
/// because the state may change between frames.
///
/// The logical origin sits at the canvas center when the translation is
/// zero:
///
/// ```rust
/// use kurbo::{Point, Size};
/// use graphview_view2d::ViewportTransform;
///
/// let transform = ViewportTransform::default();
/// let geometry = transform.state().geometry(Size::new(700.0, 560.0));
///
/// assert_eq!(geometry.logical_to_screen(Point::ORIGIN), Point::new(350.0, 280.0));
/// let back = geometry.screen_to_logical(Point::new(420.0, 280.0));
/// assert!((back.x - 1.0).abs() < 1e-12);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportGeometry {
    canvas: Size,
    scale: f64,
    translation: Vec2,
    extent: Size,
    effective_translation: Vec2,
}

impl ViewportGeometry {
    /// Builds the snapshot for `state` on a canvas of `canvas` pixels.
    ///
    /// Negative or non-finite canvas dimensions are treated as zero, which
    /// yields an empty visible range.
    #[must_use]
    pub fn new(state: &ViewportState, canvas: Size) -> Self {
        let canvas = Size::new(sanitize_len(canvas.width), sanitize_len(canvas.height));
        let scale = state.scale();
        let translation = state.translation();
        let extent = Size::new(canvas.width / scale, canvas.height / scale);
        let effective_translation =
            translation + Vec2::new(extent.width / 2.0, extent.height / 2.0);
        Self {
            canvas,
            scale,
            translation,
            extent,
            effective_translation,
        }
    }

    /// Canvas size in pixels.
    #[must_use]
    pub fn canvas_size(&self) -> Size {
        self.canvas
    }

    /// Canvas rectangle in pixels, anchored at the origin.
    #[must_use]
    pub fn canvas_rect(&self) -> Rect {
        self.canvas.to_rect()
    }

    /// Pixels per logical unit.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Logical width and height covered by the canvas.
    #[must_use]
    pub fn logical_extent(&self) -> Size {
        self.extent
    }

    /// Translation plus half the logical extent.
    #[must_use]
    pub fn effective_translation(&self) -> Vec2 {
        self.effective_translation
    }

    /// Visible logical range along `axis`.
    #[must_use]
    pub fn span(&self, axis: Axis) -> AxisSpan {
        let (translation, extent, effective, pixels) = match axis {
            Axis::X => (
                self.translation.x,
                self.extent.width,
                self.effective_translation.x,
                self.canvas.width,
            ),
            Axis::Y => (
                self.translation.y,
                self.extent.height,
                self.effective_translation.y,
                self.canvas.height,
            ),
        };
        let start = -translation - extent / 2.0;
        AxisSpan {
            start,
            end: start + extent,
            effective_translation: effective,
            scale: self.scale,
            pixels,
        }
    }

    /// Logical rectangle covered by the canvas.
    #[must_use]
    pub fn visible_logical_rect(&self) -> Rect {
        let x = self.span(Axis::X);
        let y = self.span(Axis::Y);
        Rect::new(x.start, y.start, x.end, y.end)
    }

    /// Converts a logical point to canvas pixels.
    #[must_use]
    pub fn logical_to_screen(&self, pt: Point) -> Point {
        ((pt.to_vec2() + self.effective_translation) * self.scale).to_point()
    }

    /// Converts a canvas pixel position to logical coordinates.
    #[must_use]
    pub fn screen_to_logical(&self, pt: Point) -> Point {
        (pt.to_vec2() / self.scale - self.effective_translation).to_point()
    }

    /// Converts a logical point to grid units of a tier with the given
    /// `frequency` (lines per logical unit).
    ///
    /// Integer grid coordinates land exactly on that tier's lines.
    #[must_use]
    pub fn logical_to_grid(pt: Point, frequency: f64) -> Point {
        Point::new(pt.x * frequency, pt.y * frequency)
    }

    /// Converts grid units of a tier back to logical coordinates.
    ///
    /// Returns `pt` unchanged if `frequency` is not a positive finite number.
    #[must_use]
    pub fn grid_to_logical(pt: Point, frequency: f64) -> Point {
        if !is_valid_frequency(frequency) {
            return pt;
        }
        Point::new(pt.x / frequency, pt.y / frequency)
    }

    /// Moves a logical point onto the nearest line intersection of a tier.
    ///
    /// Returns `pt` unchanged if `frequency` is not a positive finite number.
    #[must_use]
    pub fn snap_to_grid(pt: Point, frequency: f64) -> Point {
        if !is_valid_frequency(frequency) {
            return pt;
        }
        let grid = Self::logical_to_grid(pt, frequency);
        Self::grid_to_logical(
            Point::new(libm::round(grid.x), libm::round(grid.y)),
            frequency,
        )
    }
}

/// Aligns a pixel coordinate so a 1px stroke covers exactly one pixel column.
///
/// Rounds to the nearest integer (halves toward positive infinity) and adds
/// `0.5`.
#[must_use]
pub fn align_pixel(x: f64) -> f64 {
    let floor = libm::floor(x);
    // `floor(x + 0.5)` would round the addition up for values just below a half.
    let rounded = if x - floor >= 0.5 { floor + 1.0 } else { floor };
    rounded + 0.5
}

fn sanitize_len(len: f64) -> f64 {
    if len.is_finite() { len.max(0.0) } else { 0.0 }
}

fn is_valid_frequency(frequency: f64) -> bool {
    frequency.is_finite() && frequency > 0.0
}
