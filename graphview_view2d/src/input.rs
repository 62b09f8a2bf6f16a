// Copyright 2025 the Graphview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host input adapter: route [`ViewportEvent`]s to a [`ViewportTransform`].
//!
//! - Wheel events zoom.
//! - Pressing the pan button starts a pan, moving with it held pans, and
//!   releasing it ends the pan. A move that reports the pan button as no
//!   longer held also ends the pan, which covers releases the host missed.
//! - Releasing the context-menu button asks the host to open its menu.
//!
//! ```rust
//! use kurbo::Point;
//! use graphview_event_state::pointer::{PointerButton, PointerButtons, ViewportEvent};
//! use graphview_view2d::{ViewportInput, ViewportResponse, ViewportTransform};
//!
//! let input = ViewportInput::default();
//! let mut transform = ViewportTransform::default();
//!
//! input.handle(&mut transform, ViewportEvent::PointerDown {
//!     button: PointerButton::Middle,
//!     position: Point::new(0.0, 0.0),
//! });
//! let response = input.handle(&mut transform, ViewportEvent::PointerMove {
//!     buttons: PointerButtons::MIDDLE,
//!     position: Point::new(140.0, 0.0),
//! });
//! assert!(matches!(response, ViewportResponse::Panned { .. }));
//! assert!((transform.state().translation().x - 2.0).abs() < 1e-12);
//! ```

use graphview_event_state::pointer::{PointerButton, ViewportEvent};
use kurbo::{Point, Vec2};

use crate::error::InputError;
use crate::transform::ViewportTransform;

/// What a [`ViewportInput`] did with an event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ViewportResponse {
    /// The zoom changed.
    Zoomed {
        /// New scale in pixels per logical unit.
        scale: f64,
    },
    /// A pan gesture started.
    PanStarted,
    /// The translation changed.
    Panned {
        /// New logical translation.
        translation: Vec2,
    },
    /// A pan gesture ended.
    PanEnded,
    /// The host should open its context menu at this canvas position.
    ContextMenu(Point),
    /// The event is not one the viewport reacts to.
    Ignored,
    /// The event was meant for the viewport but carried unusable input.
    Rejected(InputError),
}

impl ViewportResponse {
    /// Returns `true` if the event changed the viewport's zoom or pan.
    #[must_use]
    pub fn changed_view(&self) -> bool {
        matches!(self, Self::Zoomed { .. } | Self::Panned { .. })
    }
}

/// Maps toolkit-neutral pointer events onto viewport operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ViewportInput {
    pan_button: PointerButton,
    context_menu_button: Option<PointerButton>,
}

impl ViewportInput {
    /// Pans with the middle button; opens the context menu on secondary release.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            pan_button: PointerButton::Middle,
            context_menu_button: Some(PointerButton::Secondary),
        }
    }

    /// Sets the button that drives pan gestures.
    #[must_use]
    pub const fn with_pan_button(mut self, button: PointerButton) -> Self {
        self.pan_button = button;
        self
    }

    /// Sets the button whose release requests a context menu, or `None` to
    /// never request one.
    #[must_use]
    pub const fn with_context_menu_button(mut self, button: Option<PointerButton>) -> Self {
        self.context_menu_button = button;
        self
    }

    /// The button that drives pan gestures.
    #[must_use]
    pub fn pan_button(&self) -> PointerButton {
        self.pan_button
    }

    /// The button whose release requests a context menu.
    #[must_use]
    pub fn context_menu_button(&self) -> Option<PointerButton> {
        self.context_menu_button
    }

    /// Applies `event` to `transform`.
    pub fn handle(
        &self,
        transform: &mut ViewportTransform,
        event: ViewportEvent,
    ) -> ViewportResponse {
        let response = match event {
            ViewportEvent::Wheel { delta_y } => into_response(
                transform
                    .handle_scroll(delta_y)
                    .map(|scale| ViewportResponse::Zoomed { scale }),
            ),
            ViewportEvent::PointerDown { button, position } if button == self.pan_button => {
                into_response(
                    transform
                        .begin_pan(position)
                        .map(|()| ViewportResponse::PanStarted),
                )
            }
            ViewportEvent::PointerMove { buttons, position } => {
                if buttons.contains(self.pan_button.mask()) {
                    into_response(
                        transform
                            .update_pan(position)
                            .map(|translation| ViewportResponse::Panned { translation }),
                    )
                } else if transform.end_pan() {
                    log::debug!("pan button no longer held; ending pan");
                    ViewportResponse::PanEnded
                } else {
                    ViewportResponse::Ignored
                }
            }
            ViewportEvent::PointerUp { button, .. } if button == self.pan_button => {
                if transform.end_pan() {
                    ViewportResponse::PanEnded
                } else {
                    ViewportResponse::Ignored
                }
            }
            ViewportEvent::PointerUp { button, position }
                if Some(button) == self.context_menu_button =>
            {
                if position.is_finite() {
                    ViewportResponse::ContextMenu(position)
                } else {
                    ViewportResponse::Rejected(InputError::NonFinitePosition)
                }
            }
            ViewportEvent::PointerDown { .. } | ViewportEvent::PointerUp { .. } => {
                ViewportResponse::Ignored
            }
        };
        if let ViewportResponse::Rejected(err) = response {
            log::debug!("viewport rejected {event:?}: {err}");
        }
        response
    }
}

impl Default for ViewportInput {
    fn default() -> Self {
        Self::new()
    }
}

fn into_response(result: Result<ViewportResponse, InputError>) -> ViewportResponse {
    result.unwrap_or_else(ViewportResponse::Rejected)
}
