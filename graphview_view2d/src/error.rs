// Copyright 2025 the Graphview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// Why a transform operation was rejected.
///
/// Every rejection leaves the viewport state untouched and fires no
/// notification. None of these are fatal: the host can ignore them and the
/// next frame renders the unchanged view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InputError {
    /// A scroll delta or distance was NaN or infinite.
    NonFiniteDelta,
    /// A pointer position had a NaN or infinite coordinate.
    NonFinitePosition,
    /// `update_pan` was called without an active pan gesture.
    NotPanning,
    /// The operation would have produced a non-finite distance or
    /// translation, or a scale that is not a finite, normal positive number.
    Overflow,
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Self::NonFiniteDelta => "zoom input is not a finite number",
            Self::NonFinitePosition => "pointer position is not finite",
            Self::NotPanning => "no pan gesture is active",
            Self::Overflow => "viewport state would overflow",
        };
        f.write_str(msg)
    }
}

impl core::error::Error for InputError {}
