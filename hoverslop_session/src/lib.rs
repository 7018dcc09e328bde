// Copyright 2026 the Hoverslop Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hoverslop Session: wires the hover state machine to a host environment.
//!
//! The state machine in `hoverslop_state` is deliberately passive; something
//! has to feed it pointer positions and element bounds. This crate is that
//! something. A [`HoverSession`](session::HoverSession) subscribes to an
//! externally supplied event source through the injected
//! [`HostEnv`](env::HostEnv) capability interface, updates the tracker on
//! every pointer move, dispatches the configured callbacks, and (in debug
//! mode) keeps a `hoverslop_overlay` box in sync.
//!
//! - [`env`]: the capability interface and RAII [`Subscription`](env::Subscription) handles
//! - [`sim`]: a simulated host environment for tests and demos
//! - [`callbacks`]: optional enter/leave/over handlers
//! - [`session`]: the session itself
//!
//! ## Concurrency model
//!
//! Everything is single-threaded and event-loop driven. The session shares
//! state with its event handlers through `Rc<RefCell<...>>`; each host
//! callback runs to completion before the next, so every read-modify-write
//! of tracker state is effectively atomic. Teardown is synchronous,
//! immediate, and idempotent.
//!
//! ## Minimal example
//!
//! ```
//! use core::cell::Cell;
//! use std::rc::Rc;
//! use kurbo::{Point, Rect};
//! use hoverslop_session::callbacks::HoverCallbacks;
//! use hoverslop_session::session::HoverSession;
//! use hoverslop_session::sim::SimEnv;
//! use hoverslop_state::tracker::TrackerOptions;
//!
//! let env = SimEnv::new();
//! let button = env.create_element(Some("save"), None, "BUTTON", Rect::new(100.0, 100.0, 200.0, 150.0));
//!
//! let enters = Rc::new(Cell::new(0));
//! let counter = Rc::clone(&enters);
//! let session: HoverSession<SimEnv> = HoverSession::new(
//!     env.clone(),
//!     Some(button),
//!     10.0,
//!     HoverCallbacks::new().on_enter(move || counter.set(counter.get() + 1)),
//!     TrackerOptions::default(),
//! );
//!
//! env.emit_pointer_move(Point::new(95.0, 95.0)); // inside the slop rect
//! assert!(session.is_hovered());
//! assert_eq!(enters.get(), 1);
//! ```
//!
//! This crate is `no_std` compatible (with `alloc`) for all modules.

#![no_std]

extern crate alloc;

pub mod callbacks;
pub mod env;
pub mod session;
pub mod sim;
