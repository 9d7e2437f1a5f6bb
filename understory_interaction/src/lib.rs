// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_interaction --heading-base-level=0

//! Understory Interaction: deterministic, `no_std` interaction state for popups, tooltips, and menus.
//!
//! ## Overview
//!
//! This crate owns the "is it open?" flag of a floating UI element and the rules for changing it.
//! It does not read clocks, own timers, or subscribe to platform events.
//! Instead, the host feeds it element events with millisecond timestamps and polls for due
//! transitions, and it answers with listener sets and state changes.
//!
//! ## Pieces
//!
//! - [`DelayController`](crate::delay::DelayController): a single-slot, polled, cancelable timer.
//! - [`InteractionContext`](crate::context::InteractionContext): the owned active flag with
//!   [`set_active`](crate::context::InteractionContext::set_active) and
//!   [`delay_set_active`](crate::context::InteractionContext::delay_set_active). Delayed requests
//!   are arbitrated so the transition that completes soonest wins.
//! - Handlers: [`Hover`](crate::hover::Hover), [`Click`](crate::click::Click), and
//!   [`Focus`](crate::focus::Focus) translate element events into context calls. Each produces an
//!   [`ElementProps`](crate::props::ElementProps) listener set, empty when disabled.
//! - [`Interactions`](crate::interactions::Interactions): composes handlers, merging their
//!   listener sets (same event names stack rather than overwrite) and routing events.
//! - [`Containment`](crate::containment::Containment): decides whether a related target is inside
//!   the reference or floating element, so leaving one for the other does not close.
//!
//! ## Workflow
//!
//! 1) Build an [`Interactions`](crate::interactions::Interactions) and an
//!    [`InteractionContext`](crate::context::InteractionContext).
//! 2) Subscribe host listeners for the merged [`ElementProps`](crate::props::ElementProps).
//! 3) Forward events to [`Interactions::dispatch`](crate::interactions::Interactions::dispatch).
//! 4) Schedule a wake-up at [`InteractionContext::next_deadline`](crate::context::InteractionContext::next_deadline)
//!    and call [`InteractionContext::poll`](crate::context::InteractionContext::poll) then.
//!
//! ```
//! use understory_interaction::containment::NoContainment;
//! use understory_interaction::context::InteractionContext;
//! use understory_interaction::hover::{Hover, HoverOptions};
//! use understory_interaction::interactions::Interactions;
//! use understory_interaction::types::{Delay, ElementEvent, EventName, PointerType, Region};
//!
//! let interactions: Interactions<u32> = Interactions::new().with(Hover::new(HoverOptions {
//!     delay: Delay { open: Some(300), close: Some(100) },
//!     ..Default::default()
//! }));
//! let mut cx = InteractionContext::new(false);
//!
//! let enter = ElementEvent::new(EventName::PointerEnter).with_pointer(PointerType::Mouse);
//! let _ = interactions.dispatch(&mut cx, Region::Reference, &enter, 0, &NoContainment);
//! assert_eq!(cx.next_deadline(), Some(300));
//!
//! // The pointer leaves and comes back quickly: the close never happens.
//! let leave = ElementEvent::new(EventName::PointerLeave).with_pointer(PointerType::Mouse);
//! assert!(cx.poll(300).is_some());
//! let _ = interactions.dispatch(&mut cx, Region::Reference, &leave, 400, &NoContainment);
//! let _ = interactions.dispatch(&mut cx, Region::Reference, &enter, 450, &NoContainment);
//! assert!(cx.poll(500).is_none());
//! assert!(cx.is_active());
//! ```
//!
//! ## Features
//!
//! - `tracing`: emit arbitration decisions and fired timers as `tracing` debug events.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod click;
pub mod containment;
pub mod context;
pub mod delay;
pub mod focus;
pub mod hover;
pub mod interactions;
pub mod props;
pub mod types;
