// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_popup --heading-base-level=0

//! Understory Popup: host-agnostic popups, popovers, and tooltips.
//!
//! A [`Popup`] ties together three pieces:
//! - an [`InteractionContext`](understory_interaction::context::InteractionContext) that owns
//!   the open flag and arbitrates delayed transitions,
//! - the hover/click/focus handlers selected by [`Triggers`],
//! - a [`PositioningAdapter`](understory_floating::adapter::PositioningAdapter) that is enabled
//!   while the popup is open.
//!
//! The host stays in charge of elements, clocks, and rendering:
//! 1) Report element handles with [`Popup::set_reference`] and [`Popup::set_floating`].
//! 2) Bind listeners for [`Popup::element_props`] and forward events to [`Popup::handle_event`].
//! 3) Wake up at [`Popup::next_deadline`] and call [`Popup::poll`].
//! 4) Complete positioning with [`Popup::run_positioning`] (or drain
//!    [`Popup::take_requests`] into your own engine and call [`Popup::resolve`]).
//! 5) React to [`PopupEvent`]s from [`Popup::drain_events`].
//!
//! ```
//! use std::collections::BTreeMap;
//! use kurbo::Rect;
//! use understory_floating::compute::DefaultEngine;
//! use understory_interaction::containment::NoParent;
//! use understory_interaction::types::{ElementEvent, EventName, PointerType, Region};
//! use understory_popup::{Popup, PopupEvent};
//!
//! let mut tooltip: Popup<u32> = Popup::tooltip();
//! tooltip.set_reference(Some(1));
//! tooltip.set_floating(Some(2));
//!
//! let enter = ElementEvent::new(EventName::PointerEnter).with_pointer(PointerType::Mouse);
//! let _ = tooltip.handle_event(Region::Reference, &enter, 1_000, &NoParent);
//! let wake = tooltip.next_deadline().unwrap();
//! let _ = tooltip.poll(wake);
//! assert!(tooltip.is_open());
//!
//! let mut rects = BTreeMap::new();
//! rects.insert(1, Rect::new(100.0, 100.0, 160.0, 120.0));
//! rects.insert(2, Rect::new(0.0, 0.0, 80.0, 24.0));
//! tooltip.run_positioning(&DefaultEngine, &rects, Rect::new(0.0, 0.0, 640.0, 480.0));
//!
//! let events = tooltip.drain_events();
//! assert!(matches!(events[0], PopupEvent::Open(_)));
//! assert!(matches!(events.last(), Some(PopupEvent::FloatingDataUpdate(_))));
//! ```
//!
//! ## Features
//!
//! - `std` (default) / `libm`: forwarded to Kurbo.
//! - `tracing`: spans around open-state transitions, plus the component crates' events.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod events;
mod options;
mod popup;

pub use events::PopupEvent;
pub use options::{AppendTarget, PopupOptions, Triggers};
pub use popup::Popup;
