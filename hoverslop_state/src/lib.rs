// Copyright 2026 the Hoverslop Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hoverslop State: a hover state machine with a configurable slop margin.
//!
//! "Slop" is the extra margin around an element's native bounding box that
//! still counts as hovered. This crate owns the geometry and the transition
//! logic; it does not subscribe to any event source itself. Feed it pointer
//! positions and the current element bounds, and it produces enter/over/leave
//! transitions:
//!
//! - [`margin`]: slop specifications and their normalized [`MarginBox`](margin::MarginBox) form
//! - [`tracker`]: the [`HoverTracker`](tracker::HoverTracker) transition state machine
//! - [`label`]: short display names for tracked elements (`#id`, `.class`, tag)
//! - [`trace`]: observational sinks for debug-mode event logging
//!
//! ## Design Philosophy
//!
//! Like the rest of the workspace, this crate assumes no particular windowing
//! system or UI framework. The tracker accepts pre-computed information (raw
//! pointer positions and an optional bounding box) and returns transition
//! events that callers dispatch however they like. Absent elements are not an
//! error: a `None` bounding box simply means "never hovered".
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use hoverslop_state::tracker::{HoverEvent, HoverTracker, TrackerOptions};
//!
//! // Uniform 10px slop on all four sides.
//! let mut tracker = HoverTracker::new(10.0, TrackerOptions::default());
//! let bounds = Some(Rect::new(100.0, 100.0, 200.0, 150.0));
//!
//! // (95, 95) is outside the element but inside the slop rect.
//! let outcome = tracker.on_pointer_move(Point::new(95.0, 95.0), bounds);
//! assert_eq!(&outcome.events[..], &[HoverEvent::Enter, HoverEvent::Over]);
//! assert!(tracker.is_hovered());
//!
//! // Moving beyond the slop rect leaves.
//! let outcome = tracker.on_pointer_move(Point::new(50.0, 50.0), bounds);
//! assert_eq!(&outcome.events[..], &[HoverEvent::Leave]);
//! ```
//!
//! This crate is `no_std` compatible (with `alloc`) for all modules.

#![no_std]

extern crate alloc;

pub mod label;
pub mod margin;
pub mod trace;
pub mod tracker;
