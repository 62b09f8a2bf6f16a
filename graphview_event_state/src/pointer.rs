// Copyright 2025 the Graphview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Toolkit-neutral pointer vocabulary for viewport input.
//!
//! Hosts translate their native mouse and wheel events into [`ViewportEvent`]
//! values. Positions are in canvas pixel coordinates, with the origin at the
//! top-left corner of the canvas.
//!
//! ```
//! use kurbo::Point;
//! use graphview_event_state::pointer::{PointerButton, PointerButtons, ViewportEvent};
//!
//! let held = PointerButtons::PRIMARY | PointerButtons::MIDDLE;
//! assert!(held.contains(PointerButton::Middle.into()));
//!
//! let ev = ViewportEvent::PointerMove { buttons: held, position: Point::new(4.0, 2.0) };
//! assert_eq!(ev.position(), Some(Point::new(4.0, 2.0)));
//! ```

use kurbo::Point;

bitflags::bitflags! {
    /// Set of pointer buttons held down during an event.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct PointerButtons: u8 {
        /// Primary button, usually the left mouse button.
        const PRIMARY = 1;
        /// Secondary button, usually the right mouse button.
        const SECONDARY = 1 << 1;
        /// Auxiliary button, usually the wheel/middle button.
        const MIDDLE = 1 << 2;
        /// "Back" side button.
        const BACK = 1 << 3;
        /// "Forward" side button.
        const FORWARD = 1 << 4;
    }
}

/// A single pointer button, as reported by press and release events.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerButton {
    /// Primary button, usually the left mouse button.
    Primary,
    /// Secondary button, usually the right mouse button.
    Secondary,
    /// Auxiliary button, usually the wheel/middle button.
    Middle,
    /// "Back" side button.
    Back,
    /// "Forward" side button.
    Forward,
}

impl PointerButton {
    /// The single-bit mask for this button.
    #[must_use]
    pub const fn mask(self) -> PointerButtons {
        match self {
            Self::Primary => PointerButtons::PRIMARY,
            Self::Secondary => PointerButtons::SECONDARY,
            Self::Middle => PointerButtons::MIDDLE,
            Self::Back => PointerButtons::BACK,
            Self::Forward => PointerButtons::FORWARD,
        }
    }
}

impl From<PointerButton> for PointerButtons {
    #[inline]
    fn from(button: PointerButton) -> Self {
        button.mask()
    }
}

/// Input delivered by the host toolkit to a viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ViewportEvent {
    /// Vertical wheel movement.
    ///
    /// Positive values scroll "up"/away from the user, which zooms in. One
    /// notch on a typical mouse is `120` units (eighths of a degree).
    Wheel {
        /// Signed wheel delta; larger magnitude means a faster zoom.
        delta_y: f64,
    },
    /// A button was pressed.
    PointerDown {
        /// The button that changed state.
        button: PointerButton,
        /// Pointer position in canvas pixels.
        position: Point,
    },
    /// A button was released.
    PointerUp {
        /// The button that changed state.
        button: PointerButton,
        /// Pointer position in canvas pixels.
        position: Point,
    },
    /// The pointer moved.
    PointerMove {
        /// Buttons still held down during the move.
        buttons: PointerButtons,
        /// Pointer position in canvas pixels.
        position: Point,
    },
}

impl ViewportEvent {
    /// Pointer position carried by the event, if it has one.
    #[must_use]
    pub fn position(&self) -> Option<Point> {
        match *self {
            Self::Wheel { .. } => None,
            Self::PointerDown { position, .. }
            | Self::PointerUp { position, .. }
            | Self::PointerMove { position, .. } => Some(position),
        }
    }
}
