// Copyright 2026 the Hoverslop Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The overlay host backend trait and an in-memory recording implementation.
//!
//! A host is whatever actually draws the overlay: a layer of positioned
//! nodes in a document, an immediate-mode draw pass, or the in-memory
//! [`RecordingHost`] used by tests and demos. The
//! [`registry`](crate::registry) drives the host; embedders only implement
//! this trait.

use hashbrown::HashMap;

use crate::binding::RefreshTrigger;
use crate::frame::OverlayFrame;

/// Handle to one rectangle node inside the shared overlay host.
///
/// Keys are allocated by the registry and never reused, so a stale key can
/// never alias a live box.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct BoxKey(pub(crate) u64);

impl BoxKey {
    /// The raw key value, for host-side bookkeeping.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// Rendering backend for the debug overlay.
///
/// The registry guarantees the call discipline: `mount` before any box call,
/// `create_box` at most once per key, `update_box`/`remove_box` only for
/// live keys, and `unmount` only after the last box was removed. Hosts can
/// therefore be dumb renderers with no defensive bookkeeping of their own.
pub trait OverlayHost {
    /// Create the shared container. Called when the first box is acquired.
    fn mount(&mut self);

    /// Remove the shared container. Called after the last box is released.
    fn unmount(&mut self);

    /// Insert one rectangle node drawn from `frame`.
    fn create_box(&mut self, key: BoxKey, frame: &OverlayFrame);

    /// Re-draw an existing rectangle node from `frame`. `trigger` names the
    /// signal that caused the refresh, for hosts that log or animate.
    fn update_box(&mut self, key: BoxKey, frame: &OverlayFrame, trigger: RefreshTrigger);

    /// Remove one rectangle node.
    fn remove_box(&mut self, key: BoxKey);
}

/// In-memory host that records mounted state and live frames.
///
/// Useful for tests asserting the sharing and teardown properties, and for
/// demos that print overlay state instead of drawing it.
#[derive(Clone, Debug, Default)]
pub struct RecordingHost {
    mounted: bool,
    mount_count: u32,
    boxes: HashMap<BoxKey, OverlayFrame>,
    last_trigger: Option<RefreshTrigger>,
}

impl RecordingHost {
    /// Creates an unmounted host with no boxes.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the shared container currently exists.
    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// How many times the container has been created.
    #[must_use]
    pub fn mount_count(&self) -> u32 {
        self.mount_count
    }

    /// Number of live rectangle nodes.
    #[must_use]
    pub fn box_count(&self) -> usize {
        self.boxes.len()
    }

    /// The last frame drawn for `key`, if the box is live.
    #[must_use]
    pub fn frame(&self, key: BoxKey) -> Option<&OverlayFrame> {
        self.boxes.get(&key)
    }

    /// Iterate over the live frames, in unspecified order.
    pub fn frames(&self) -> impl Iterator<Item = &OverlayFrame> {
        self.boxes.values()
    }

    /// The trigger of the most recent `update_box` call, if any.
    #[must_use]
    pub fn last_trigger(&self) -> Option<RefreshTrigger> {
        self.last_trigger
    }
}

impl OverlayHost for RecordingHost {
    fn mount(&mut self) {
        self.mounted = true;
        self.mount_count += 1;
    }

    fn unmount(&mut self) {
        self.mounted = false;
    }

    fn create_box(&mut self, key: BoxKey, frame: &OverlayFrame) {
        self.boxes.insert(key, frame.clone());
    }

    fn update_box(&mut self, key: BoxKey, frame: &OverlayFrame, trigger: RefreshTrigger) {
        self.boxes.insert(key, frame.clone());
        self.last_trigger = Some(trigger);
    }

    fn remove_box(&mut self, key: BoxKey) {
        self.boxes.remove(&key);
    }
}
