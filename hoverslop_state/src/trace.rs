// Copyright 2026 the Hoverslop Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Observational sinks for debug-mode hover tracing.
//!
//! The tracker itself does not store why an event fired or was withheld. When
//! debug mode is on, embedders often want to answer "did this gated enter get
//! suppressed, and for which element?". This module provides a minimal,
//! additive hook: a [`HoverTrace`] sink consulted by the session layer, a
//! no-op implementation, and a small recorder for tests and inspection.
//!
//! Tracing is observational only; it never affects dispatch.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::tracker::HoverEvent;

/// A callback sink for hover event tracing.
///
/// `name` is the element's display name as derived by
/// [`label::display_name`](crate::label::display_name).
pub trait HoverTrace {
    /// Called when `event` was dispatched for the element named `name`.
    fn fired(&mut self, name: &str, event: HoverEvent);

    /// Called when a once-gated `event` was withheld for `name`.
    fn suppressed(&mut self, name: &str, event: HoverEvent);
}

/// The no-op sink; tracing compiles away to nothing.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoTrace;

impl HoverTrace for NoTrace {
    fn fired(&mut self, _name: &str, _event: HoverEvent) {}

    fn suppressed(&mut self, _name: &str, _event: HoverEvent) {}
}

/// One recorded trace entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TraceEntry {
    /// Display name of the element the event belongs to.
    pub name: String,
    /// The event that fired or was withheld.
    pub event: HoverEvent,
    /// `true` when the event was withheld by a once gate.
    pub suppressed: bool,
}

/// Records every fired and suppressed event, in order.
#[derive(Clone, Debug, Default)]
pub struct EventRecorder {
    entries: Vec<TraceEntry>,
}

impl EventRecorder {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// The recorded entries, oldest first.
    #[must_use]
    pub fn entries(&self) -> &[TraceEntry] {
        &self.entries
    }

    /// Clears all recorded entries.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl HoverTrace for EventRecorder {
    fn fired(&mut self, name: &str, event: HoverEvent) {
        self.entries.push(TraceEntry {
            name: name.to_string(),
            event,
            suppressed: false,
        });
    }

    fn suppressed(&mut self, name: &str, event: HoverEvent) {
        self.entries.push(TraceEntry {
            name: name.to_string(),
            event,
            suppressed: true,
        });
    }
}
