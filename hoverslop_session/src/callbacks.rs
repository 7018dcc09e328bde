// Copyright 2026 the Hoverslop Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Optional hover callbacks.
//!
//! A session owns one [`HoverCallbacks`] set for its lifetime. Every handler
//! is optional; a missing handler means the corresponding event is simply not
//! dispatched (never an error).

use alloc::boxed::Box;
use core::fmt;

use hoverslop_state::tracker::HoverEvent;

/// Handlers invoked on hover transitions.
#[derive(Default)]
pub struct HoverCallbacks {
    on_enter: Option<Box<dyn FnMut()>>,
    on_leave: Option<Box<dyn FnMut()>>,
    on_over: Option<Box<dyn FnMut()>>,
}

impl HoverCallbacks {
    /// A callback set with no handlers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the enter handler.
    #[must_use]
    pub fn on_enter(mut self, handler: impl FnMut() + 'static) -> Self {
        self.on_enter = Some(Box::new(handler));
        self
    }

    /// Set the leave handler.
    #[must_use]
    pub fn on_leave(mut self, handler: impl FnMut() + 'static) -> Self {
        self.on_leave = Some(Box::new(handler));
        self
    }

    /// Set the over handler (fires on every qualifying move, not just
    /// transitions).
    #[must_use]
    pub fn on_over(mut self, handler: impl FnMut() + 'static) -> Self {
        self.on_over = Some(Box::new(handler));
        self
    }

    /// Whether a handler is registered for `event`.
    pub(crate) fn has(&self, event: HoverEvent) -> bool {
        match event {
            HoverEvent::Enter => self.on_enter.is_some(),
            HoverEvent::Leave => self.on_leave.is_some(),
            HoverEvent::Over => self.on_over.is_some(),
        }
    }

    /// Invoke the handler for `event`, if one is registered.
    ///
    /// Returns `true` when a handler ran.
    pub(crate) fn dispatch(&mut self, event: HoverEvent) -> bool {
        let slot = match event {
            HoverEvent::Enter => &mut self.on_enter,
            HoverEvent::Leave => &mut self.on_leave,
            HoverEvent::Over => &mut self.on_over,
        };
        if let Some(handler) = slot {
            handler();
            true
        } else {
            false
        }
    }
}

impl fmt::Debug for HoverCallbacks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HoverCallbacks")
            .field("on_enter", &self.on_enter.is_some())
            .field("on_leave", &self.on_leave.is_some())
            .field("on_over", &self.on_over.is_some())
            .finish()
    }
}
