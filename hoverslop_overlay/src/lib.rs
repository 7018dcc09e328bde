// Copyright 2026 the Hoverslop Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hoverslop Overlay: a visual debug layer for slop-expanded hover regions.
//!
//! The overlay draws one rectangle per debug-enabled tracker, matching the
//! expanded hit region, restyled as the hovered flag flips, and annotated
//! with the element's display name plus a numeric label per non-zero margin
//! side. It is purely observational: best-effort, cosmetic, and never an
//! error source.
//!
//! The crate is split along its seams:
//!
//! - [`frame`]: the pure geometry of one overlay rectangle and its labels
//! - [`host`]: the [`OverlayHost`](host::OverlayHost) backend trait the
//!   embedder implements (plus an in-memory recording host)
//! - [`registry`]: the explicit, reference-counted owner of the shared host
//!   container
//! - [`binding`]: the per-tracker handle with idempotent teardown
//!
//! ## Sharing model
//!
//! All debug-enabled trackers in a process share one host container. The
//! [`registry`](registry::HostRegistry) mounts the host when the first box is
//! acquired and unmounts it when the last box is released; each binding only
//! ever touches the one box it owns. Everything runs on a single UI thread,
//! so the registry is shared via `Rc<RefCell<...>>` rather than any ambient
//! global state.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Rect;
//! use hoverslop_overlay::binding::{OverlayBinding, shared_registry};
//! use hoverslop_overlay::frame::OverlayFrame;
//! use hoverslop_overlay::host::RecordingHost;
//! use hoverslop_state::margin::Slop;
//!
//! let registry = shared_registry(RecordingHost::new());
//! let margins = Slop::from(10.0).normalize();
//!
//! let frame = OverlayFrame::compute(
//!     Rect::new(100.0, 100.0, 200.0, 150.0),
//!     margins,
//!     false,
//!     "#sidebar".into(),
//! );
//! let mut binding = OverlayBinding::bind(&registry, &frame);
//! assert_eq!(registry.borrow().box_count(), 1);
//!
//! binding.teardown();
//! binding.teardown(); // idempotent
//! assert_eq!(registry.borrow().box_count(), 0);
//! assert!(!registry.borrow().host().is_mounted());
//! ```
//!
//! This crate is `no_std` compatible (with `alloc`) for all modules.

#![no_std]

extern crate alloc;

pub mod binding;
pub mod frame;
pub mod host;
pub mod registry;
