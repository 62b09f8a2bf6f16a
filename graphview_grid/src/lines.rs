// Copyright 2025 the Graphview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gridline placement along one axis.

use alloc::vec::Vec;

use graphview_view2d::{AxisSpan, align_pixel};

use crate::style::TierKind;

/// Upper bound on lines a single tier may place along one axis.
///
/// A tier that would need more is skipped for that paint.
pub const MAX_LINES_PER_AXIS: u32 = 16_384;

/// Why a tier produced no lines.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum Skip {
    /// More than [`MAX_LINES_PER_AXIS`] lines would be visible.
    TooDense {
        /// Lines the tier would have needed.
        needed: f64,
    },
}

/// Fills `out` with the aligned pixel coordinates of `kind`'s lines on `span`.
///
/// Lines are placed at logical `k / frequency` for every integer `k` with
/// `span.start <= k / frequency < span.end`. Lines are indexed rather than
/// stepped so the error does not grow with distance from the origin.
pub(crate) fn line_positions(
    span: &AxisSpan,
    kind: TierKind,
    out: &mut Vec<f64>,
) -> Result<(), Skip> {
    out.clear();
    if span.is_empty() {
        return Ok(());
    }
    match kind {
        TierKind::Axis => {
            if span.contains(0.0) {
                out.push(align_pixel(span.to_screen(0.0)));
            }
            Ok(())
        }
        TierKind::Lines { frequency } => {
            let first = libm::ceil(span.start * frequency);
            let bound = libm::ceil(span.end * frequency);
            let needed = bound - first;
            if !needed.is_finite() || needed > f64::from(MAX_LINES_PER_AXIS) {
                return Err(Skip::TooDense { needed });
            }
            for n in 0..=MAX_LINES_PER_AXIS {
                let logical = (first + f64::from(n)) / frequency;
                if logical >= span.end {
                    break;
                }
                out.push(align_pixel(span.to_screen(logical)));
            }
            Ok(())
        }
    }
}
