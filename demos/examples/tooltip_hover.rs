// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A tooltip driven by a simulated clock.
//!
//! Feeds pointer events with timestamps, wakes at the popup's deadlines, and
//! shows that touch input is filtered when only the mouse is accepted.
//!
//! Run:
//! - `cargo run -p understory_demos --example tooltip_hover`

use understory_interaction::containment::NoParent;
use understory_interaction::types::{ElementEvent, EventName, PointerType, PointerTypes, Region};
use understory_popup::{Popup, PopupOptions};

fn main() {
    let mut tooltip: Popup<u32> = Popup::new(PopupOptions {
        pointer_types: PointerTypes::MOUSE,
        ..PopupOptions::tooltip()
    });
    tooltip.set_reference(Some(1));
    tooltip.set_floating(Some(2));

    let touch = ElementEvent::new(EventName::PointerEnter).with_pointer(PointerType::Touch);
    let out = tooltip.handle_event(Region::Reference, &touch, 0, &NoParent);
    println!("== Touch enter ==\n  invoked: {}", out.invoked);
    assert_eq!(tooltip.next_deadline(), None);

    let enter = ElementEvent::new(EventName::PointerEnter).with_pointer(PointerType::Mouse);
    let leave = ElementEvent::new(EventName::PointerLeave).with_pointer(PointerType::Mouse);
    let _ = tooltip.handle_event(Region::Reference, &enter, 10, &NoParent);

    let mut now = 10;
    while let Some(deadline) = tooltip.next_deadline() {
        now = deadline;
        let change = tooltip.poll(now);
        println!("== t={now} ==\n  {:?}", change.map(|c| c.active));
    }
    assert!(tooltip.is_open());

    let _ = tooltip.handle_event(Region::Reference, &leave, now + 50, &NoParent);
    let wake = tooltip.next_deadline().unwrap_or(now);
    let _ = tooltip.poll(wake);
    println!("== t={wake} ==\n  open: {}", tooltip.is_open());

    for event in tooltip.drain_events() {
        println!("  {:?}", event);
    }
}
