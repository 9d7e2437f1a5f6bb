// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A click-toggled popover with nested content.
//!
//! Shows subtree containment (focus moving into the popover keeps it open),
//! positioning through a host rect map, and the emitted events.
//!
//! Run:
//! - `cargo run -p understory_demos --example popover_click`

use std::collections::BTreeMap;

use kurbo::Rect;
use understory_floating::compute::DefaultEngine;
use understory_interaction::containment::ParentLookup;
use understory_interaction::types::{ElementEvent, EventName, PointerType, Region};
use understory_popup::{Popup, PopupOptions, Triggers};

#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
struct Node(u32);

const BUTTON: Node = Node(1);
const PANEL: Node = Node(2);
const PANEL_INPUT: Node = Node(3);
const ELSEWHERE: Node = Node(9);

struct Parents;
impl ParentLookup<Node> for Parents {
    fn parent_of(&self, node: &Node) -> Option<Node> {
        (*node == PANEL_INPUT).then_some(PANEL)
    }
}

fn main() {
    let mut popover = Popup::new(PopupOptions {
        triggers: Triggers::CLICK | Triggers::FOCUS,
        ..PopupOptions::popover()
    });
    popover.set_reference(Some(BUTTON));
    popover.set_floating(Some(PANEL));

    let mut rects = BTreeMap::new();
    rects.insert(BUTTON, Rect::new(20.0, 20.0, 100.0, 44.0));
    rects.insert(PANEL, Rect::new(0.0, 0.0, 200.0, 120.0));
    let viewport = Rect::new(0.0, 0.0, 400.0, 300.0);

    println!("== Listeners ==");
    for listener in popover.element_props().iter() {
        println!("  {:?}", listener);
    }

    let click = ElementEvent::new(EventName::Click).with_pointer(PointerType::Mouse);
    let _ = popover.handle_event(Region::Reference, &click, 0, &Parents);
    let _ = popover.run_positioning(&DefaultEngine, &rects, viewport);
    let data = popover.floating_data();
    println!("== Opened ==\n  at ({}, {}) {:?}", data.x, data.y, data.placement);

    // Focus moves from the button into the panel: stays open.
    let blur = ElementEvent::new(EventName::Blur).with_related_target(PANEL_INPUT);
    let _ = popover.handle_event(Region::Reference, &blur, 10, &Parents);
    assert!(popover.is_open());

    // Focus leaves the panel entirely: closes.
    let blur = ElementEvent::new(EventName::Blur).with_related_target(ELSEWHERE);
    let _ = popover.handle_event(Region::Floating, &blur, 20, &Parents);
    assert!(!popover.is_open());

    println!("== Events ==");
    for event in popover.drain_events() {
        println!("  {:?}", event);
    }
}
