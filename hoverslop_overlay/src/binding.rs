// Copyright 2026 the Hoverslop Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-tracker overlay handles over a shared registry.
//!
//! An [`OverlayBinding`] is what a tracker holds while its debug mode is on:
//! a shared registry plus the key of the one box it owns. Teardown releases
//! the box (and, through the registry, the host container when it was the
//! last) and is safe to call any number of times. Bindings for absent
//! elements are [inert](OverlayBinding::inert): every operation is a no-op.

use alloc::rc::Rc;
use core::cell::RefCell;

use crate::frame::OverlayFrame;
use crate::host::{BoxKey, OverlayHost};
use crate::registry::HostRegistry;

bitflags::bitflags! {
    /// The signal(s) that caused an overlay refresh.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct RefreshTrigger: u8 {
        /// A (captured) scroll anywhere in the host environment.
        const SCROLL = 1 << 0;
        /// A viewport resize.
        const RESIZE = 1 << 1;
        /// Attribute/child/subtree mutation of the tracked element.
        const MUTATION = 1 << 2;
        /// The hovered flag flipped; restyle hovered vs. muted.
        const HOVER_CHANGED = 1 << 3;
    }
}

/// Registry shared across bindings on one UI thread.
pub type SharedRegistry<H> = Rc<RefCell<HostRegistry<H>>>;

/// Wrap a host in a shareable registry.
pub fn shared_registry<H: OverlayHost>(host: H) -> SharedRegistry<H> {
    Rc::new(RefCell::new(HostRegistry::new(host)))
}

/// Handle to one tracker's box in the shared overlay host.
#[derive(Debug)]
pub struct OverlayBinding<H: OverlayHost> {
    slot: Option<(SharedRegistry<H>, BoxKey)>,
}

impl<H: OverlayHost> OverlayBinding<H> {
    /// Acquire a box in the shared host, drawn from `frame`.
    pub fn bind(registry: &SharedRegistry<H>, frame: &OverlayFrame) -> Self {
        let key = registry.borrow_mut().acquire(frame);
        Self {
            slot: Some((Rc::clone(registry), key)),
        }
    }

    /// The inert binding used when the tracked element is absent.
    #[must_use]
    pub fn inert() -> Self {
        Self { slot: None }
    }

    /// Returns `true` when this binding owns no box.
    #[must_use]
    pub fn is_inert(&self) -> bool {
        self.slot.is_none()
    }

    /// Re-draw this binding's box from `frame`.
    pub fn refresh(&self, frame: &OverlayFrame, trigger: RefreshTrigger) {
        if let Some((registry, key)) = &self.slot {
            registry.borrow_mut().refresh(*key, frame, trigger);
        }
    }

    /// Release this binding's box. Idempotent; also runs on drop.
    pub fn teardown(&mut self) {
        if let Some((registry, key)) = self.slot.take() {
            registry.borrow_mut().release(key);
        }
    }
}

impl<H: OverlayHost> Drop for OverlayBinding<H> {
    fn drop(&mut self) {
        self.teardown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::RecordingHost;
    use alloc::string::String;
    use hoverslop_state::margin::{MarginBox, Slop};
    use kurbo::Rect;

    fn frame(name: &str, hovered: bool) -> OverlayFrame {
        OverlayFrame::compute(
            Rect::new(10.0, 10.0, 60.0, 40.0),
            Slop::from(4.0).normalize(),
            hovered,
            String::from(name),
        )
    }

    #[test]
    fn two_bindings_share_one_host() {
        let registry = shared_registry(RecordingHost::new());

        let a = OverlayBinding::bind(&registry, &frame("#a", false));
        let mut b = OverlayBinding::bind(&registry, &frame("#b", false));

        {
            let reg = registry.borrow();
            assert_eq!(reg.host().mount_count(), 1);
            assert_eq!(reg.box_count(), 2);
        }

        b.teardown();
        {
            let reg = registry.borrow();
            assert!(reg.host().is_mounted());
            assert_eq!(reg.box_count(), 1);
        }

        drop(a);
        let reg = registry.borrow();
        assert!(!reg.host().is_mounted());
        assert_eq!(reg.box_count(), 0);
    }

    #[test]
    fn teardown_twice_is_a_no_op() {
        let registry = shared_registry(RecordingHost::new());
        let mut binding = OverlayBinding::bind(&registry, &frame("#a", false));

        binding.teardown();
        binding.teardown();
        assert!(binding.is_inert());
        assert_eq!(registry.borrow().box_count(), 0);
    }

    #[test]
    fn inert_binding_does_nothing() {
        let mut binding: OverlayBinding<RecordingHost> = OverlayBinding::inert();
        assert!(binding.is_inert());
        binding.refresh(&frame("", false), RefreshTrigger::SCROLL);
        binding.teardown();
    }

    #[test]
    fn refresh_restyles_on_hover_change() {
        let registry = shared_registry(RecordingHost::new());
        let binding = OverlayBinding::bind(&registry, &frame("#a", false));

        binding.refresh(&frame("#a", true), RefreshTrigger::HOVER_CHANGED);

        let reg = registry.borrow();
        let drawn = reg.host().frame(crate::host::BoxKey(0)).unwrap();
        assert!(drawn.hovered);
    }

    #[test]
    fn drop_releases_even_without_explicit_teardown() {
        let registry = shared_registry(RecordingHost::new());
        {
            let _binding = OverlayBinding::bind(&registry, &frame("#a", true));
            assert_eq!(registry.borrow().box_count(), 1);
        }
        assert_eq!(registry.borrow().box_count(), 0);
    }

    #[test]
    fn frame_uses_margin_expansion() {
        // Sanity link between frame geometry and the margin box.
        let f = OverlayFrame::compute(
            Rect::new(0.0, 0.0, 10.0, 10.0),
            MarginBox {
                top: 1.0,
                right: 2.0,
                bottom: 3.0,
                left: 4.0,
            },
            false,
            String::new(),
        );
        assert_eq!(f.rect, Rect::new(-4.0, -1.0, 12.0, 13.0));
    }
}
