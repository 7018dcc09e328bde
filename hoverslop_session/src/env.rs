// Copyright 2026 the Hoverslop Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The injected capability interface over the host environment.
//!
//! Sessions never talk to a concrete windowing or document API. Instead the
//! embedder supplies a [`HostEnv`]: geometry queries plus subscriptions for
//! the four signals a session cares about (pointer moves; scroll, resize,
//! and element mutation for overlay refresh). Each subscription returns a
//! [`Subscription`] handle whose cancellation is idempotent and also runs on
//! drop, so teardown can never double-unregister.

use alloc::boxed::Box;
use core::fmt;
use kurbo::{Point, Rect};

/// RAII cancellation handle for one host-event subscription.
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    /// Wrap a teardown closure.
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    /// A subscription with nothing to cancel.
    #[must_use]
    pub fn inert() -> Self {
        Self { cancel: None }
    }

    /// Returns `true` until the subscription has been canceled.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.cancel.is_some()
    }

    /// Cancel now. Calling again is a no-op.
    pub fn cancel(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.cancel();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.is_active())
            .finish()
    }
}

/// Capabilities a host environment injects into sessions.
///
/// `Element` is whatever reference type the host framework uses for the
/// tracked element; the environment owns its lifecycle. An element that has
/// gone away is reported through `query_bounds` returning `None`, which a
/// session treats as "never hovered" rather than an error.
pub trait HostEnv {
    /// Opaque element reference type owned by the host framework.
    type Element;

    /// The element's current viewport-space bounding box, or `None` when the
    /// element is absent or detached.
    fn query_bounds(&self, element: &Self::Element) -> Option<Rect>;

    /// Subscribe to global pointer-move events (viewport coordinates).
    fn subscribe_pointer_move(&self, handler: Box<dyn FnMut(Point)>) -> Subscription;

    /// Subscribe to scroll, captured: fires for scrolls of nested scrollable
    /// ancestors, not just the viewport.
    fn subscribe_scroll(&self, handler: Box<dyn FnMut()>) -> Subscription;

    /// Subscribe to viewport resize.
    fn subscribe_resize(&self, handler: Box<dyn FnMut()>) -> Subscription;

    /// Subscribe to attribute/child/subtree mutation of `element`.
    fn subscribe_mutation(&self, element: &Self::Element, handler: Box<dyn FnMut()>)
    -> Subscription;
}
