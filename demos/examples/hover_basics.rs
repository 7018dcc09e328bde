// Copyright 2026 the Hoverslop Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hover-slop basics.
//!
//! Drive two debug-enabled hover sessions over a simulated environment,
//! sweep the pointer across both slop boundaries, and print the transitions
//! and the shared overlay state as they happen.
//!
//! Run:
//! - `cargo run -p hoverslop_demos --example hover_basics`

use std::cell::Cell;
use std::rc::Rc;

use kurbo::{Point, Rect};

use hoverslop_overlay::binding::shared_registry;
use hoverslop_overlay::host::RecordingHost;
use hoverslop_session::callbacks::HoverCallbacks;
use hoverslop_session::session::HoverSession;
use hoverslop_session::sim::SimEnv;
use hoverslop_state::trace::NoTrace;
use hoverslop_state::tracker::TrackerOptions;

fn callbacks(name: &'static str, transitions: &Rc<Cell<u32>>) -> HoverCallbacks {
    let on_enter = Rc::clone(transitions);
    let on_leave = Rc::clone(transitions);
    HoverCallbacks::new()
        .on_enter(move || {
            on_enter.set(on_enter.get() + 1);
            println!("  enter {name}");
        })
        .on_leave(move || {
            on_leave.set(on_leave.get() + 1);
            println!("  leave {name}");
        })
}

fn main() {
    let env = SimEnv::new();
    let registry = shared_registry(RecordingHost::new());

    // Two buttons side by side, each with 10px of slop.
    let save = env.create_element(Some("save"), None, "BUTTON", Rect::new(20.0, 20.0, 120.0, 60.0));
    let cancel =
        env.create_element(Some("cancel"), None, "BUTTON", Rect::new(160.0, 20.0, 260.0, 60.0));

    let transitions = Rc::new(Cell::new(0));
    let options = TrackerOptions {
        debug_mode: true,
        ..TrackerOptions::default()
    };

    let save_session = HoverSession::with_overlay(
        env.clone(),
        Some(save),
        10.0,
        callbacks("#save", &transitions),
        options,
        &registry,
        Box::new(NoTrace),
    );
    let cancel_session = HoverSession::with_overlay(
        env.clone(),
        Some(cancel),
        10.0,
        callbacks("#cancel", &transitions),
        options,
        &registry,
        Box::new(NoTrace),
    );

    {
        let reg = registry.borrow();
        println!(
            "overlay mounted: {}, boxes: {}",
            reg.host().is_mounted(),
            reg.box_count()
        );
    }

    // Sweep the pointer left to right through both slop rects.
    for x in [0.0, 15.0, 70.0, 135.0, 155.0, 210.0, 300.0] {
        let pos = Point::new(x, 40.0);
        println!("pointer at ({}, {})", pos.x, pos.y);
        env.emit_pointer_move(pos);
        println!(
            "  hovered: save={} cancel={}",
            save_session.is_hovered(),
            cancel_session.is_hovered()
        );
    }

    println!("total transitions: {}", transitions.get());

    for frame in registry.borrow().host().frames() {
        println!(
            "overlay box {}: rect={:?} hovered={}",
            frame.name, frame.rect, frame.hovered
        );
    }

    drop(save_session);
    drop(cancel_session);
    let reg = registry.borrow();
    println!(
        "after teardown, overlay mounted: {}, boxes: {}",
        reg.host().is_mounted(),
        reg.box_count()
    );
}
