// Copyright 2026 the Hoverslop Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reference-counted owner of the shared overlay host.
//!
//! All debug-enabled trackers share one host container. Instead of querying
//! ambient state for an existing container, the registry makes the sharing
//! explicit: it owns the host, mounts it when the first box is acquired, and
//! unmounts it when the last box is released. The live box set doubles as
//! the reference count.
//!
//! ## Invariants
//!
//! - The host is mounted exactly while at least one box is live.
//! - The box count never exceeds the number of acquired, unreleased keys.
//! - `release` of an unknown or already-released key is a no-op, which makes
//!   binding teardown idempotent.

use hashbrown::HashSet;

use crate::binding::RefreshTrigger;
use crate::frame::OverlayFrame;
use crate::host::{BoxKey, OverlayHost};

/// Owner of the shared overlay host and the live box set.
#[derive(Clone, Debug)]
pub struct HostRegistry<H> {
    host: H,
    next_key: u64,
    live: HashSet<BoxKey>,
}

impl<H: OverlayHost> HostRegistry<H> {
    /// Wrap a host. Nothing is mounted until the first box is acquired.
    pub fn new(host: H) -> Self {
        Self {
            host,
            next_key: 0,
            live: HashSet::new(),
        }
    }

    /// Acquire one box, mounting the host if this is the first.
    pub fn acquire(&mut self, frame: &OverlayFrame) -> BoxKey {
        if self.live.is_empty() {
            self.host.mount();
        }
        let key = BoxKey(self.next_key);
        self.next_key += 1;
        self.live.insert(key);
        self.host.create_box(key, frame);
        key
    }

    /// Re-draw the box for `key`. Unknown keys are ignored.
    pub fn refresh(&mut self, key: BoxKey, frame: &OverlayFrame, trigger: RefreshTrigger) {
        if self.live.contains(&key) {
            self.host.update_box(key, frame, trigger);
        }
    }

    /// Release the box for `key`, unmounting the host if it was the last.
    ///
    /// Unknown or already-released keys are a no-op.
    pub fn release(&mut self, key: BoxKey) {
        if self.live.remove(&key) {
            self.host.remove_box(key);
            if self.live.is_empty() {
                self.host.unmount();
            }
        }
    }

    /// Number of live boxes.
    #[must_use]
    pub fn box_count(&self) -> usize {
        self.live.len()
    }

    /// Read access to the wrapped host.
    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::RecordingHost;
    use alloc::string::String;
    use hoverslop_state::margin::MarginBox;
    use kurbo::Rect;

    fn frame(name: &str, hovered: bool) -> OverlayFrame {
        OverlayFrame::compute(
            Rect::new(0.0, 0.0, 50.0, 50.0),
            MarginBox::ZERO,
            hovered,
            String::from(name),
        )
    }

    #[test]
    fn first_acquire_mounts_last_release_unmounts() {
        let mut reg = HostRegistry::new(RecordingHost::new());
        assert!(!reg.host().is_mounted());

        let a = reg.acquire(&frame("#a", false));
        assert!(reg.host().is_mounted());
        assert_eq!(reg.box_count(), 1);

        let b = reg.acquire(&frame("#b", false));
        // Second acquire reuses the mounted host.
        assert_eq!(reg.host().mount_count(), 1);
        assert_eq!(reg.box_count(), 2);

        reg.release(a);
        assert!(reg.host().is_mounted());
        assert_eq!(reg.box_count(), 1);
        assert!(reg.host().frame(b).is_some());
        assert!(reg.host().frame(a).is_none());

        reg.release(b);
        assert!(!reg.host().is_mounted());
        assert_eq!(reg.box_count(), 0);
    }

    #[test]
    fn release_is_idempotent() {
        let mut reg = HostRegistry::new(RecordingHost::new());
        let a = reg.acquire(&frame("#a", false));

        reg.release(a);
        reg.release(a);
        assert_eq!(reg.box_count(), 0);
        assert!(!reg.host().is_mounted());
    }

    #[test]
    fn remount_after_everything_released() {
        let mut reg = HostRegistry::new(RecordingHost::new());
        let a = reg.acquire(&frame("#a", false));
        reg.release(a);

        let b = reg.acquire(&frame("#b", false));
        assert!(reg.host().is_mounted());
        assert_eq!(reg.host().mount_count(), 2);
        // Keys are never reused.
        assert_ne!(a, b);
    }

    #[test]
    fn refresh_updates_live_boxes_only() {
        let mut reg = HostRegistry::new(RecordingHost::new());
        let a = reg.acquire(&frame("#a", false));

        reg.refresh(a, &frame("#a", true), RefreshTrigger::HOVER_CHANGED);
        assert!(reg.host().frame(a).is_some_and(|f| f.hovered));
        assert_eq!(
            reg.host().last_trigger(),
            Some(RefreshTrigger::HOVER_CHANGED)
        );

        reg.release(a);
        reg.refresh(a, &frame("#a", false), RefreshTrigger::SCROLL);
        assert!(reg.host().frame(a).is_none());
    }
}
