// Copyright 2026 the Hoverslop Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A simulated host environment for tests and demos.
//!
//! [`SimEnv`] implements [`HostEnv`] over an in-memory table of element
//! bounds and four subscriber lists. Tests script it directly: create
//! elements, move the pointer with [`SimEnv::emit_pointer_move`], scroll or
//! resize the viewport, mutate or detach elements, and observe what sessions
//! do. Handlers registered by sessions may cancel their own subscriptions
//! while an emit is in flight; the dispatcher tolerates that.

use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::string::String;
use alloc::vec::Vec;
use core::cell::RefCell;
use core::fmt;

use hashbrown::{HashMap, HashSet};
use kurbo::{Point, Rect};

use hoverslop_state::label::ElementIdentity;

use crate::env::{HostEnv, Subscription};

/// Element stand-in for the simulated environment.
///
/// Carries the identity attributes used for display names; geometry lives in
/// the environment, keyed by the element.
#[derive(Clone, Debug)]
pub struct SimElement {
    key: u64,
    id: Option<String>,
    class_name: Option<String>,
    tag_name: String,
}

impl SimElement {
    /// The environment-assigned element key.
    #[must_use]
    pub fn key(&self) -> u64 {
        self.key
    }
}

impl ElementIdentity for SimElement {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn class_name(&self) -> Option<&str> {
        self.class_name.as_deref()
    }

    fn tag_name(&self) -> &str {
        &self.tag_name
    }
}

#[derive(Default)]
struct SimInner {
    next_sub: u64,
    next_element: u64,
    bounds: HashMap<u64, Rect>,
    pointer_move: HashMap<u64, Box<dyn FnMut(Point)>>,
    scroll: HashMap<u64, Box<dyn FnMut()>>,
    resize: HashMap<u64, Box<dyn FnMut()>>,
    mutation: HashMap<u64, (u64, Box<dyn FnMut()>)>,
    // Tombstones for subscriptions canceled while their channel is mid-dispatch.
    dead: HashSet<u64>,
}

impl SimInner {
    fn remove_sub(&mut self, sub: u64) {
        self.pointer_move.remove(&sub);
        self.scroll.remove(&sub);
        self.resize.remove(&sub);
        self.mutation.remove(&sub);
        self.dead.insert(sub);
    }
}

/// Simulated host environment. Clones share the same underlying state.
#[derive(Clone, Default)]
pub struct SimEnv {
    inner: Rc<RefCell<SimInner>>,
}

impl fmt::Debug for SimEnv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("SimEnv")
            .field("elements", &inner.bounds.len())
            .field(
                "subscriptions",
                &(inner.pointer_move.len()
                    + inner.scroll.len()
                    + inner.resize.len()
                    + inner.mutation.len()),
            )
            .finish_non_exhaustive()
    }
}

impl SimEnv {
    /// Creates an empty environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an element with the given identity attributes and bounds.
    pub fn create_element(
        &self,
        id: Option<&str>,
        class_name: Option<&str>,
        tag_name: &str,
        bounds: Rect,
    ) -> SimElement {
        let mut inner = self.inner.borrow_mut();
        let key = inner.next_element;
        inner.next_element += 1;
        inner.bounds.insert(key, bounds);
        SimElement {
            key,
            id: id.map(String::from),
            class_name: class_name.map(String::from),
            tag_name: String::from(tag_name),
        }
    }

    /// Move or resize an element. Observers are not notified automatically;
    /// pair with [`SimEnv::emit_mutation`] to mimic a real host.
    pub fn set_bounds(&self, element: &SimElement, bounds: Rect) {
        self.inner.borrow_mut().bounds.insert(element.key, bounds);
    }

    /// Detach an element: bounds queries return `None` from now on.
    pub fn detach(&self, element: &SimElement) {
        self.inner.borrow_mut().bounds.remove(&element.key);
    }

    /// Deliver a pointer-move to every subscriber, in registration order of
    /// the underlying map (unspecified but stable within one emit).
    pub fn emit_pointer_move(&self, pos: Point) {
        let drained: Vec<(u64, Box<dyn FnMut(Point)>)> = {
            let mut inner = self.inner.borrow_mut();
            inner.pointer_move.drain().collect()
        };
        let mut kept = Vec::with_capacity(drained.len());
        for (sub, mut handler) in drained {
            if self.inner.borrow().dead.contains(&sub) {
                continue;
            }
            handler(pos);
            if !self.inner.borrow().dead.contains(&sub) {
                kept.push((sub, handler));
            }
        }
        let mut inner = self.inner.borrow_mut();
        for (sub, handler) in kept {
            inner.pointer_move.insert(sub, handler);
        }
        inner.dead.clear();
    }

    /// Deliver a (captured) scroll to every subscriber.
    pub fn emit_scroll(&self) {
        let drained: Vec<(u64, Box<dyn FnMut()>)> = {
            let mut inner = self.inner.borrow_mut();
            inner.scroll.drain().collect()
        };
        let kept = self.dispatch_unit(drained);
        let mut inner = self.inner.borrow_mut();
        for (sub, handler) in kept {
            inner.scroll.insert(sub, handler);
        }
        inner.dead.clear();
    }

    /// Deliver a viewport resize to every subscriber.
    pub fn emit_resize(&self) {
        let drained: Vec<(u64, Box<dyn FnMut()>)> = {
            let mut inner = self.inner.borrow_mut();
            inner.resize.drain().collect()
        };
        let kept = self.dispatch_unit(drained);
        let mut inner = self.inner.borrow_mut();
        for (sub, handler) in kept {
            inner.resize.insert(sub, handler);
        }
        inner.dead.clear();
    }

    /// Fire the mutation observers watching `element`.
    pub fn emit_mutation(&self, element: &SimElement) {
        let drained: Vec<(u64, (u64, Box<dyn FnMut()>))> = {
            let mut inner = self.inner.borrow_mut();
            inner.mutation.drain().collect()
        };
        let mut kept = Vec::with_capacity(drained.len());
        for (sub, (watched, mut handler)) in drained {
            if self.inner.borrow().dead.contains(&sub) {
                continue;
            }
            if watched == element.key {
                handler();
            }
            if !self.inner.borrow().dead.contains(&sub) {
                kept.push((sub, (watched, handler)));
            }
        }
        let mut inner = self.inner.borrow_mut();
        for (sub, entry) in kept {
            inner.mutation.insert(sub, entry);
        }
        inner.dead.clear();
    }

    fn dispatch_unit(
        &self,
        drained: Vec<(u64, Box<dyn FnMut()>)>,
    ) -> Vec<(u64, Box<dyn FnMut()>)> {
        let mut kept = Vec::with_capacity(drained.len());
        for (sub, mut handler) in drained {
            if self.inner.borrow().dead.contains(&sub) {
                continue;
            }
            handler();
            if !self.inner.borrow().dead.contains(&sub) {
                kept.push((sub, handler));
            }
        }
        kept
    }

    fn alloc_sub(&self) -> u64 {
        let mut inner = self.inner.borrow_mut();
        let sub = inner.next_sub;
        inner.next_sub += 1;
        sub
    }

    fn subscription(&self, sub: u64) -> Subscription {
        let inner = Rc::clone(&self.inner);
        Subscription::new(move || inner.borrow_mut().remove_sub(sub))
    }
}

impl HostEnv for SimEnv {
    type Element = SimElement;

    fn query_bounds(&self, element: &SimElement) -> Option<Rect> {
        self.inner.borrow().bounds.get(&element.key).copied()
    }

    fn subscribe_pointer_move(&self, handler: Box<dyn FnMut(Point)>) -> Subscription {
        let sub = self.alloc_sub();
        self.inner.borrow_mut().pointer_move.insert(sub, handler);
        self.subscription(sub)
    }

    fn subscribe_scroll(&self, handler: Box<dyn FnMut()>) -> Subscription {
        let sub = self.alloc_sub();
        self.inner.borrow_mut().scroll.insert(sub, handler);
        self.subscription(sub)
    }

    fn subscribe_resize(&self, handler: Box<dyn FnMut()>) -> Subscription {
        let sub = self.alloc_sub();
        self.inner.borrow_mut().resize.insert(sub, handler);
        self.subscription(sub)
    }

    fn subscribe_mutation(
        &self,
        element: &SimElement,
        handler: Box<dyn FnMut()>,
    ) -> Subscription {
        let sub = self.alloc_sub();
        self.inner
            .borrow_mut()
            .mutation
            .insert(sub, (element.key, handler));
        self.subscription(sub)
    }
}
