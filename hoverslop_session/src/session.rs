// Copyright 2026 the Hoverslop Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The hover session: tracker, callbacks, and overlay wired to a host env.
//!
//! A [`HoverSession`] subscribes to the environment's pointer-move stream for
//! its whole active lifetime. On every move it queries the element's current
//! bounds, feeds the tracker, dispatches whatever transitions came out, and
//! keeps the debug overlay styled to the live hovered flag. Scroll, resize,
//! and element-mutation subscriptions exist only while the overlay is bound;
//! they do nothing but re-render it.
//!
//! ## Lifecycle
//!
//! - Construction derives the element's display name once, resets tracker
//!   state, and (with [`HoverSession::with_overlay`], element present, and
//!   `debug_mode` set) acquires one box in the shared overlay registry.
//! - [`HoverSession::teardown`] cancels every subscription and releases the
//!   overlay box; it is synchronous and idempotent, and also runs on drop.
//! - Event handlers hold only weak references to the session state, so a
//!   dropped session cannot be kept alive by the environment.

use alloc::boxed::Box;
use alloc::rc::{Rc, Weak};
use alloc::string::String;
use alloc::vec::Vec;
use core::cell::RefCell;
use core::fmt;

use kurbo::{Point, Rect};

use hoverslop_overlay::binding::{OverlayBinding, RefreshTrigger, SharedRegistry};
use hoverslop_overlay::frame::OverlayFrame;
use hoverslop_overlay::host::{OverlayHost, RecordingHost};
use hoverslop_state::label::{ElementIdentity, display_name};
use hoverslop_state::margin::Slop;
use hoverslop_state::trace::{HoverTrace, NoTrace};
use hoverslop_state::tracker::{HoverEvent, HoverTracker, TrackerOptions};

use crate::callbacks::HoverCallbacks;
use crate::env::{HostEnv, Subscription};

/// A live hover-slop tracking session over one element.
///
/// The session's result is the continuously re-evaluated
/// [`is_hovered`](Self::is_hovered) flag, not a one-shot value.
pub struct HoverSession<Env: HostEnv, H: OverlayHost = RecordingHost> {
    inner: Rc<RefCell<SessionInner<Env, H>>>,
}

struct SessionInner<Env: HostEnv, H: OverlayHost> {
    env: Env,
    element: Option<Env::Element>,
    tracker: HoverTracker,
    callbacks: HoverCallbacks,
    name: String,
    overlay: OverlayBinding<H>,
    trace: Box<dyn HoverTrace>,
    subs: Vec<Subscription>,
}

impl<Env, H> HoverSession<Env, H>
where
    Env: HostEnv + 'static,
    Env::Element: ElementIdentity + 'static,
    H: OverlayHost + 'static,
{
    /// Start tracking without the debug overlay.
    ///
    /// An absent `element` is not an error: the session reports not-hovered
    /// forever and dispatches nothing.
    pub fn new(
        env: Env,
        element: Option<Env::Element>,
        slop: impl Into<Slop>,
        callbacks: HoverCallbacks,
        options: TrackerOptions,
    ) -> Self {
        Self::build(
            env,
            element,
            slop.into(),
            callbacks,
            options,
            None,
            Box::new(NoTrace),
        )
    }

    /// Start tracking with the debug overlay bound into `registry`.
    ///
    /// The overlay only activates when `options.debug_mode` is set and the
    /// element is present; otherwise the binding is inert and `trace` is
    /// never consulted.
    pub fn with_overlay(
        env: Env,
        element: Option<Env::Element>,
        slop: impl Into<Slop>,
        callbacks: HoverCallbacks,
        options: TrackerOptions,
        registry: &SharedRegistry<H>,
        trace: Box<dyn HoverTrace>,
    ) -> Self {
        Self::build(
            env,
            element,
            slop.into(),
            callbacks,
            options,
            Some(registry),
            trace,
        )
    }

    fn build(
        env: Env,
        element: Option<Env::Element>,
        slop: Slop,
        callbacks: HoverCallbacks,
        options: TrackerOptions,
        registry: Option<&SharedRegistry<H>>,
        trace: Box<dyn HoverTrace>,
    ) -> Self {
        let name = display_name(element.as_ref());
        let tracker = HoverTracker::new(slop, options);

        let overlay = match (options.debug_mode, registry, element.as_ref()) {
            (true, Some(registry), Some(el)) => {
                let rect = env.query_bounds(el).unwrap_or(Rect::ZERO);
                let frame = OverlayFrame::compute(rect, tracker.margins(), false, name.clone());
                OverlayBinding::bind(registry, &frame)
            }
            _ => OverlayBinding::inert(),
        };
        let overlay_active = !overlay.is_inert();

        let inner = Rc::new(RefCell::new(SessionInner {
            env,
            element,
            tracker,
            callbacks,
            name,
            overlay,
            trace,
            subs: Vec::new(),
        }));

        let mut subs = Vec::new();
        {
            let weak = Rc::downgrade(&inner);
            let guard = inner.borrow();
            subs.push(guard.env.subscribe_pointer_move(Box::new(move |pos| {
                if let Some(inner) = weak.upgrade() {
                    SessionInner::on_pointer_move(&inner, pos);
                }
            })));
        }

        if overlay_active {
            let guard = inner.borrow();

            let weak = Rc::downgrade(&inner);
            subs.push(guard.env.subscribe_scroll(Box::new(move || {
                SessionInner::refresh_overlay(&weak, RefreshTrigger::SCROLL);
            })));

            let weak = Rc::downgrade(&inner);
            subs.push(guard.env.subscribe_resize(Box::new(move || {
                SessionInner::refresh_overlay(&weak, RefreshTrigger::RESIZE);
            })));

            if let Some(el) = guard.element.as_ref() {
                let weak = Rc::downgrade(&inner);
                subs.push(guard.env.subscribe_mutation(
                    el,
                    Box::new(move || {
                        SessionInner::refresh_overlay(&weak, RefreshTrigger::MUTATION);
                    }),
                ));
            }
        }

        inner.borrow_mut().subs = subs;
        Self { inner }
    }
}

impl<Env, H> HoverSession<Env, H>
where
    Env: HostEnv,
    H: OverlayHost,
{
    /// Whether the pointer is currently inside the slop rect.
    #[must_use]
    pub fn is_hovered(&self) -> bool {
        self.inner.borrow().tracker.is_hovered()
    }

    /// The element's display name, derived once at construction.
    #[must_use]
    pub fn name(&self) -> String {
        self.inner.borrow().name.clone()
    }

    /// Stop tracking: cancel all subscriptions and release the overlay box.
    ///
    /// Idempotent and synchronous; also runs on drop.
    pub fn teardown(&mut self) {
        let subs: Vec<Subscription> = {
            let mut guard = self.inner.borrow_mut();
            guard.subs.drain(..).collect()
        };
        // Cancellation calls back into the environment, so the session state
        // must not be borrowed while it runs.
        for mut sub in subs {
            sub.cancel();
        }
        self.inner.borrow_mut().overlay.teardown();
    }
}

impl<Env, H> SessionInner<Env, H>
where
    Env: HostEnv,
    H: OverlayHost,
{
    fn on_pointer_move(inner: &Rc<RefCell<Self>>, pos: Point) {
        let (mut callbacks, mut events, suppressed, hover_flipped, debug) = {
            let mut guard = inner.borrow_mut();
            let s = &mut *guard;

            let bounds = s.element.as_ref().and_then(|el| s.env.query_bounds(el));
            let was_hovered = s.tracker.is_hovered();
            let outcome = s.tracker.on_pointer_move(pos, bounds);
            (
                core::mem::take(&mut s.callbacks),
                outcome.events,
                outcome.suppressed,
                s.tracker.is_hovered() != was_hovered,
                s.tracker.options().debug_mode,
            )
        };

        // Handlers may call back into the session (query its hovered state,
        // tear it down), so dispatch runs with the session state unborrowed
        // and the callbacks moved out. `events` keeps only what was actually
        // dispatched.
        events.retain(|event| callbacks.dispatch(*event));
        // Suppression is only observable where a handler would have run.
        let suppressed = suppressed.filter(|event| callbacks.has(*event));

        let mut guard = inner.borrow_mut();
        let s = &mut *guard;
        s.callbacks = callbacks;

        if debug {
            for event in events.iter().copied() {
                if matches!(event, HoverEvent::Enter | HoverEvent::Leave) {
                    s.trace.fired(&s.name, event);
                }
            }
            if let Some(event) = suppressed {
                s.trace.suppressed(&s.name, event);
            }
        }

        if hover_flipped {
            s.refresh_overlay_now(RefreshTrigger::HOVER_CHANGED);
        }
    }

    fn refresh_overlay(inner: &Weak<RefCell<Self>>, trigger: RefreshTrigger) {
        if let Some(inner) = inner.upgrade() {
            inner.borrow_mut().refresh_overlay_now(trigger);
        }
    }

    fn refresh_overlay_now(&mut self, trigger: RefreshTrigger) {
        if self.overlay.is_inert() {
            return;
        }
        let Some(rect) = self.element.as_ref().and_then(|el| self.env.query_bounds(el)) else {
            return;
        };
        let frame = OverlayFrame::compute(
            rect,
            self.tracker.margins(),
            self.tracker.is_hovered(),
            self.name.clone(),
        );
        self.overlay.refresh(&frame, trigger);
    }
}

impl<Env, H> Drop for HoverSession<Env, H>
where
    Env: HostEnv,
    H: OverlayHost,
{
    fn drop(&mut self) {
        self.teardown();
    }
}

impl<Env, H> fmt::Debug for HoverSession<Env, H>
where
    Env: HostEnv,
    H: OverlayHost,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("HoverSession")
            .field("name", &inner.name)
            .field("is_hovered", &inner.tracker.is_hovered())
            .field("overlay", &!inner.overlay.is_inert())
            .field("subscriptions", &inner.subs.len())
            .finish_non_exhaustive()
    }
}
