// Copyright 2025 the Graphview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

/// Handle returned when registering a change handler.
///
/// Pass it to [`crate::ViewportTransform::unsubscribe`] to remove the handler.
/// An id names the transform that issued it, so it only ever removes a
/// handler from that transform. Ids are never reused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId {
    pub(crate) transform: u64,
    pub(crate) index: u64,
}

type Handler<T> = Box<dyn FnMut(T)>;

/// Ordered list of change handlers for one kind of notification.
///
/// Handlers run synchronously in registration order. They receive only the
/// new value, so they cannot reach back into the list while it dispatches.
pub(crate) struct Observers<T> {
    handlers: Vec<(SubscriptionId, Handler<T>)>,
}

impl<T: Copy> Observers<T> {
    pub(crate) fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    pub(crate) fn subscribe(&mut self, id: SubscriptionId, handler: Handler<T>) {
        self.handlers.push((id, handler));
    }

    /// Removes the handler registered under `id`, preserving the order of the rest.
    pub(crate) fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        match self.handlers.iter().position(|(h, _)| *h == id) {
            Some(idx) => {
                self.handlers.remove(idx);
                true
            }
            None => false,
        }
    }

    pub(crate) fn notify(&mut self, value: T) {
        for (_, handler) in &mut self.handlers {
            handler(value);
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.handlers.len()
    }
}

impl<T> fmt::Debug for Observers<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.handlers.iter().map(|(id, _)| id))
            .finish()
    }
}
