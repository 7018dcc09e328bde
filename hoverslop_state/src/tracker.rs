// Copyright 2026 the Hoverslop Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hover transition state machine over a slop-expanded hit region.
//!
//! [`HoverTracker`] owns the hovered/not-hovered state for one tracked
//! element. On every pointer move it recomputes whether the pointer lies
//! inside the element's bounding box expanded by the configured margins, and
//! reports transitions:
//!
//! - not hovered → inside: [`HoverEvent::Enter`] then [`HoverEvent::Over`]
//! - hovered → outside: [`HoverEvent::Leave`]
//! - hovered → still inside: [`HoverEvent::Over`] on every qualifying move
//! - not hovered → still outside: nothing
//!
//! Enter and leave can each be once-gated via [`TrackerOptions`]: after the
//! first fire, later occurrences are withheld and reported through
//! [`MoveOutcome::suppressed`] so debug tooling can observe them. The gates
//! never re-arm for the lifetime of the tracker (only [`HoverTracker::reset`]
//! restores them).
//!
//! ## Usage
//!
//! ```
//! use kurbo::{Point, Rect};
//! use hoverslop_state::tracker::{HoverEvent, HoverTracker, TrackerOptions};
//!
//! let mut tracker = HoverTracker::new(
//!     10.0,
//!     TrackerOptions {
//!         enter_once: true,
//!         ..TrackerOptions::default()
//!     },
//! );
//! let bounds = Some(Rect::new(0.0, 0.0, 100.0, 100.0));
//!
//! // First entry fires normally.
//! let first = tracker.on_pointer_move(Point::new(50.0, 50.0), bounds);
//! assert_eq!(&first.events[..], &[HoverEvent::Enter, HoverEvent::Over]);
//!
//! // Leave, then re-enter: the gated enter is withheld.
//! tracker.on_pointer_move(Point::new(500.0, 500.0), bounds);
//! let again = tracker.on_pointer_move(Point::new(50.0, 50.0), bounds);
//! assert_eq!(&again.events[..], &[HoverEvent::Over]);
//! assert_eq!(again.suppressed, Some(HoverEvent::Enter));
//! ```

use kurbo::{Point, Rect};
use smallvec::SmallVec;

use crate::margin::{MarginBox, Slop};

/// Options controlling tracker behavior, with every default explicit.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct TrackerOptions {
    /// Drive the debug overlay and trace sink for this tracker.
    pub debug_mode: bool,
    /// Fire enter at most once for the tracker's lifetime.
    pub enter_once: bool,
    /// Fire leave at most once for the tracker's lifetime.
    pub leave_once: bool,
}

/// A hover transition produced by a pointer move.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum HoverEvent {
    /// The pointer entered the slop rect.
    Enter,
    /// The pointer moved while inside the slop rect.
    Over,
    /// The pointer left the slop rect.
    Leave,
}

/// Everything one pointer move produced.
///
/// `events` holds the transitions to dispatch, in dispatch order. At most two
/// are produced per move (enter followed by over). `suppressed` reports a
/// once-gated event that was withheld on this move; it is observational and
/// never carries a dispatchable event.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MoveOutcome {
    /// Transitions to dispatch, in order.
    pub events: SmallVec<[HoverEvent; 2]>,
    /// A once-gated event withheld on this move, if any.
    pub suppressed: Option<HoverEvent>,
}

impl MoveOutcome {
    /// Returns `true` when the move produced nothing at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty() && self.suppressed.is_none()
    }
}

/// Hover-slop state machine for one tracked element.
///
/// The tracker does not observe any event source. Callers feed it pointer
/// positions together with the element's current bounding box (`None` when
/// the element is absent, which always counts as not-inside) and dispatch the
/// returned events.
#[derive(Clone, Debug)]
pub struct HoverTracker {
    margins: MarginBox,
    options: TrackerOptions,
    is_hovered: bool,
    enter_armed: bool,
    leave_armed: bool,
}

impl HoverTracker {
    /// Create a tracker with the given slop specification and options.
    pub fn new(slop: impl Into<Slop>, options: TrackerOptions) -> Self {
        Self {
            margins: slop.into().normalize(),
            options,
            is_hovered: false,
            enter_armed: true,
            leave_armed: true,
        }
    }

    /// Whether the pointer is currently inside the slop rect.
    #[must_use]
    pub fn is_hovered(&self) -> bool {
        self.is_hovered
    }

    /// The normalized margins currently in effect.
    #[must_use]
    pub fn margins(&self) -> MarginBox {
        self.margins
    }

    /// The options this tracker was configured with.
    #[must_use]
    pub fn options(&self) -> TrackerOptions {
        self.options
    }

    /// Replace the slop specification; the margins are renormalized.
    ///
    /// Hovered state and the once gates are unaffected; the new margins take
    /// effect on the next pointer move.
    pub fn set_slop(&mut self, slop: impl Into<Slop>) {
        self.margins = slop.into().normalize();
    }

    /// Restore the initial state: not hovered, both once gates re-armed.
    pub fn reset(&mut self) {
        self.is_hovered = false;
        self.enter_armed = true;
        self.leave_armed = true;
    }

    /// Process one pointer move.
    ///
    /// `bounds` is the element's current bounding box, or `None` when the
    /// element is absent; absence is treated as not-inside and is never an
    /// error. Transitions are evaluated against the state left by the
    /// previous move.
    pub fn on_pointer_move(&mut self, pos: Point, bounds: Option<Rect>) -> MoveOutcome {
        let inside = bounds.is_some_and(|b| self.margins.hit(b, pos));
        let mut outcome = MoveOutcome::default();

        match (self.is_hovered, inside) {
            (false, true) => {
                if !self.options.enter_once || self.enter_armed {
                    outcome.events.push(HoverEvent::Enter);
                } else {
                    outcome.suppressed = Some(HoverEvent::Enter);
                }
                self.enter_armed = false;
                // Over accompanies every entry, gated or not.
                outcome.events.push(HoverEvent::Over);
            }
            (true, false) => {
                if !self.options.leave_once || self.leave_armed {
                    outcome.events.push(HoverEvent::Leave);
                } else {
                    outcome.suppressed = Some(HoverEvent::Leave);
                }
                self.leave_armed = false;
            }
            (true, true) => outcome.events.push(HoverEvent::Over),
            (false, false) => {}
        }

        self.is_hovered = inside;
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    const BOUNDS: Rect = Rect::new(100.0, 100.0, 200.0, 150.0);

    fn events(outcome: &MoveOutcome) -> &[HoverEvent] {
        &outcome.events
    }

    #[test]
    fn new_tracker_is_not_hovered() {
        let tracker = HoverTracker::new(10.0, TrackerOptions::default());
        assert!(!tracker.is_hovered());
    }

    #[test]
    fn entering_fires_enter_then_over() {
        let mut tracker = HoverTracker::new(10.0, TrackerOptions::default());

        let outcome = tracker.on_pointer_move(Point::new(95.0, 95.0), Some(BOUNDS));

        assert_eq!(events(&outcome), &[HoverEvent::Enter, HoverEvent::Over]);
        assert_eq!(outcome.suppressed, None);
        assert!(tracker.is_hovered());
    }

    #[test]
    fn staying_inside_fires_over_per_move() {
        let mut tracker = HoverTracker::new(10.0, TrackerOptions::default());
        tracker.on_pointer_move(Point::new(95.0, 95.0), Some(BOUNDS));

        for i in 0..5 {
            let pos = Point::new(100.0 + f64::from(i), 120.0);
            let outcome = tracker.on_pointer_move(pos, Some(BOUNDS));
            assert_eq!(events(&outcome), &[HoverEvent::Over]);
        }
        assert!(tracker.is_hovered());
    }

    #[test]
    fn leaving_fires_leave_once() {
        let mut tracker = HoverTracker::new(10.0, TrackerOptions::default());
        tracker.on_pointer_move(Point::new(95.0, 95.0), Some(BOUNDS));

        let outcome = tracker.on_pointer_move(Point::new(0.0, 0.0), Some(BOUNDS));
        assert_eq!(events(&outcome), &[HoverEvent::Leave]);
        assert!(!tracker.is_hovered());

        // Staying outside is silent.
        let outcome = tracker.on_pointer_move(Point::new(1.0, 1.0), Some(BOUNDS));
        assert!(outcome.is_empty());
    }

    #[test]
    fn full_sequence_counts_match() {
        let mut tracker = HoverTracker::new(10.0, TrackerOptions::default());
        let mut enters = 0;
        let mut overs = 0;
        let mut leaves = 0;

        let path = [
            Point::new(0.0, 0.0),     // outside
            Point::new(95.0, 95.0),   // enter + over
            Point::new(120.0, 120.0), // over
            Point::new(130.0, 125.0), // over
            Point::new(140.0, 130.0), // over
            Point::new(0.0, 0.0),     // leave
        ];
        for pos in path {
            for event in tracker.on_pointer_move(pos, Some(BOUNDS)).events {
                match event {
                    HoverEvent::Enter => enters += 1,
                    HoverEvent::Over => overs += 1,
                    HoverEvent::Leave => leaves += 1,
                }
            }
        }

        assert_eq!(enters, 1);
        assert_eq!(overs, 4);
        assert_eq!(leaves, 1);
    }

    #[test]
    fn absent_element_never_hovers() {
        let mut tracker = HoverTracker::new(10.0, TrackerOptions::default());

        let outcome = tracker.on_pointer_move(Point::new(95.0, 95.0), None);
        assert!(outcome.is_empty());
        assert!(!tracker.is_hovered());
    }

    #[test]
    fn element_disappearing_while_hovered_fires_leave() {
        let mut tracker = HoverTracker::new(10.0, TrackerOptions::default());
        tracker.on_pointer_move(Point::new(120.0, 120.0), Some(BOUNDS));
        assert!(tracker.is_hovered());

        let outcome = tracker.on_pointer_move(Point::new(120.0, 120.0), None);
        assert_eq!(events(&outcome), &[HoverEvent::Leave]);
        assert!(!tracker.is_hovered());
    }

    #[test]
    fn enter_once_fires_exactly_once() {
        let mut tracker = HoverTracker::new(
            10.0,
            TrackerOptions {
                enter_once: true,
                ..TrackerOptions::default()
            },
        );

        // Enter, leave, re-enter.
        let first = tracker.on_pointer_move(Point::new(120.0, 120.0), Some(BOUNDS));
        tracker.on_pointer_move(Point::new(0.0, 0.0), Some(BOUNDS));
        let second = tracker.on_pointer_move(Point::new(120.0, 120.0), Some(BOUNDS));

        assert_eq!(events(&first), &[HoverEvent::Enter, HoverEvent::Over]);
        assert_eq!(events(&second), &[HoverEvent::Over]);
        assert_eq!(second.suppressed, Some(HoverEvent::Enter));
        // Hovered state still tracks the pointer.
        assert!(tracker.is_hovered());
    }

    #[test]
    fn leave_once_fires_exactly_once() {
        let mut tracker = HoverTracker::new(
            10.0,
            TrackerOptions {
                leave_once: true,
                ..TrackerOptions::default()
            },
        );

        tracker.on_pointer_move(Point::new(120.0, 120.0), Some(BOUNDS));
        let first = tracker.on_pointer_move(Point::new(0.0, 0.0), Some(BOUNDS));
        tracker.on_pointer_move(Point::new(120.0, 120.0), Some(BOUNDS));
        let second = tracker.on_pointer_move(Point::new(0.0, 0.0), Some(BOUNDS));

        assert_eq!(events(&first), &[HoverEvent::Leave]);
        assert!(second.events.is_empty());
        assert_eq!(second.suppressed, Some(HoverEvent::Leave));
    }

    #[test]
    fn ungated_events_repeat_across_sessions() {
        let mut tracker = HoverTracker::new(10.0, TrackerOptions::default());

        for _ in 0..3 {
            let entered = tracker.on_pointer_move(Point::new(120.0, 120.0), Some(BOUNDS));
            assert_eq!(events(&entered), &[HoverEvent::Enter, HoverEvent::Over]);
            let left = tracker.on_pointer_move(Point::new(0.0, 0.0), Some(BOUNDS));
            assert_eq!(events(&left), &[HoverEvent::Leave]);
        }
    }

    #[test]
    fn reset_rearms_once_gates() {
        let mut tracker = HoverTracker::new(
            10.0,
            TrackerOptions {
                enter_once: true,
                ..TrackerOptions::default()
            },
        );

        tracker.on_pointer_move(Point::new(120.0, 120.0), Some(BOUNDS));
        tracker.on_pointer_move(Point::new(0.0, 0.0), Some(BOUNDS));
        tracker.reset();

        let outcome = tracker.on_pointer_move(Point::new(120.0, 120.0), Some(BOUNDS));
        assert_eq!(
            outcome,
            MoveOutcome {
                events: smallvec![HoverEvent::Enter, HoverEvent::Over],
                suppressed: None,
            }
        );
    }

    #[test]
    fn set_slop_takes_effect_on_next_move() {
        let mut tracker = HoverTracker::new(0.0, TrackerOptions::default());

        // Just outside the bare bounds.
        let outcome = tracker.on_pointer_move(Point::new(95.0, 120.0), Some(BOUNDS));
        assert!(outcome.is_empty());

        tracker.set_slop(10.0);
        let outcome = tracker.on_pointer_move(Point::new(95.0, 120.0), Some(BOUNDS));
        assert_eq!(events(&outcome), &[HoverEvent::Enter, HoverEvent::Over]);
    }
}
