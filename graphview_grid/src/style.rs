// Copyright 2025 the Graphview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec;
use alloc::vec::Vec;

use graphview_imaging::StrokeStyle;
use peniko::Color;

/// Color of the minor (quarter-unit) tier.
pub const MINOR_COLOR: Color = Color::from_rgb8(49, 49, 49);
/// Color of the major (whole-unit) tier.
pub const MAJOR_COLOR: Color = Color::from_rgb8(43, 43, 43);
/// Color of the axis lines through the logical origin.
pub const AXIS_COLOR: Color = Color::from_rgb8(35, 35, 35);

/// Minor tier: lines per logical unit.
pub const MINOR_FREQUENCY: f64 = 4.0;
/// Minor tier: smallest scale (pixels per logical unit) at which it is drawn.
pub const MINOR_MIN_SCALE: f64 = 35.0;
/// Major tier: lines per logical unit.
pub const MAJOR_FREQUENCY: f64 = 1.0;
/// Major tier: smallest scale (pixels per logical unit) at which it is drawn.
pub const MAJOR_MIN_SCALE: f64 = 3.0;

/// Which lines a [`GridTier`] produces.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TierKind {
    /// Evenly spaced lines, `frequency` per logical unit, through every
    /// integer multiple of `1 / frequency`.
    Lines {
        /// Lines per logical unit. Must be positive and finite.
        frequency: f64,
    },
    /// A single line through logical zero on each axis.
    Axis,
}

/// One level of gridline density.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridTier {
    /// Which lines this tier draws.
    pub kind: TierKind,
    /// The tier is drawn only while the viewport scale is at least this.
    pub min_scale: f64,
    /// Stroke color.
    pub color: Color,
}

impl GridTier {
    /// A tier of evenly spaced lines.
    #[must_use]
    pub const fn lines(frequency: f64, min_scale: f64, color: Color) -> Self {
        Self {
            kind: TierKind::Lines { frequency },
            min_scale,
            color,
        }
    }

    /// The axis tier, visible at every scale.
    #[must_use]
    pub const fn axis(color: Color) -> Self {
        Self {
            kind: TierKind::Axis,
            min_scale: 0.0,
            color,
        }
    }

    /// The default minor tier: 4 lines per unit from 35px per unit up.
    #[must_use]
    pub const fn minor() -> Self {
        Self::lines(MINOR_FREQUENCY, MINOR_MIN_SCALE, MINOR_COLOR)
    }

    /// The default major tier: 1 line per unit from 3px per unit up.
    #[must_use]
    pub const fn major() -> Self {
        Self::lines(MAJOR_FREQUENCY, MAJOR_MIN_SCALE, MAJOR_COLOR)
    }

    /// Returns `true` if this tier should be drawn at `scale`.
    ///
    /// The threshold is inclusive: a tier with `min_scale = 35` is drawn at
    /// exactly 35px per unit and hidden at 34.999.
    #[must_use]
    pub fn is_visible(&self, scale: f64) -> bool {
        scale >= self.min_scale
    }

    /// Returns `false` for tiers that cannot be drawn, such as a line
    /// frequency that is zero, negative, or not finite.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        match self.kind {
            TierKind::Lines { frequency } => frequency.is_finite() && frequency > 0.0,
            TierKind::Axis => true,
        }
    }
}

/// The tiers a [`crate::GridRenderer`] draws and how it strokes them.
///
/// Tiers are drawn in order, so earlier tiers sit underneath later ones.
///
/// ```rust
/// use graphview_grid::{GridStyle, GridTier};
/// use peniko::Color;
///
/// // A sparser grid: only whole units and the axes, in thicker strokes.
/// let style = GridStyle::empty()
///     .with_tier(GridTier::major())
///     .with_tier(GridTier::axis(Color::from_rgb8(90, 90, 90)))
///     .with_line_width(2.0);
/// assert_eq!(style.tiers().len(), 2);
/// assert_eq!(style.line_width(), 2.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct GridStyle {
    tiers: Vec<GridTier>,
    line_width: f64,
}

impl GridStyle {
    /// Default stroke width in pixels.
    pub const DEFAULT_LINE_WIDTH: f64 = 1.0;

    /// A style with no tiers and the default line width.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            tiers: Vec::new(),
            line_width: Self::DEFAULT_LINE_WIDTH,
        }
    }

    /// Appends a tier, drawn above every tier already present.
    #[must_use]
    pub fn with_tier(mut self, tier: GridTier) -> Self {
        self.tiers.push(tier);
        self
    }

    /// Sets the stroke width in pixels.
    ///
    /// Non-finite or non-positive widths are ignored.
    #[must_use]
    pub fn with_line_width(mut self, width: f64) -> Self {
        if width.is_finite() && width > 0.0 {
            self.line_width = width;
        }
        self
    }

    /// Tiers in draw order (back to front).
    #[must_use]
    pub fn tiers(&self) -> &[GridTier] {
        &self.tiers
    }

    /// Stroke width in pixels.
    #[must_use]
    pub fn line_width(&self) -> f64 {
        self.line_width
    }

    pub(crate) fn stroke(&self) -> StrokeStyle {
        StrokeStyle::new(self.line_width)
    }
}

impl Default for GridStyle {
    /// Minor, then major, then axis tiers, 1px wide.
    fn default() -> Self {
        Self {
            tiers: vec![GridTier::minor(), GridTier::major(), GridTier::axis(AXIS_COLOR)],
            line_width: Self::DEFAULT_LINE_WIDTH,
        }
    }
}
