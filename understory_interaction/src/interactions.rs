// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Handler trait and composition.
//!
//! ## Overview
//!
//! An [`InteractionHandler`] is a pure description of `(options) → listeners` plus a
//! reaction to events that reach those listeners. [`Interactions`] keeps an ordered
//! list of handlers, merges their [`ElementProps`], and routes incoming events to
//! every handler that listens for them.
//!
//! ## Workflow
//!
//! 1) Build an [`Interactions`] from the handlers you want (hover, click, focus, or your own).
//! 2) Subscribe host listeners for [`ElementProps::event_names`] on each [`Region`].
//! 3) Forward each event to [`Interactions::dispatch`] together with the shared
//!    [`InteractionContext`] and a [`Containment`] for the current elements.
//! 4) Apply the returned [`ActiveChange`]s (show, hide, emit events).
//!
//! ```
//! use understory_interaction::containment::NoContainment;
//! use understory_interaction::context::InteractionContext;
//! use understory_interaction::hover::{Hover, HoverOptions};
//! use understory_interaction::focus::{Focus, FocusOptions};
//! use understory_interaction::interactions::Interactions;
//! use understory_interaction::types::{ElementEvent, EventName, Region};
//!
//! let interactions: Interactions<u32> = Interactions::new()
//!     .with(Hover::new(HoverOptions::default()))
//!     .with(Focus::new(FocusOptions::default()));
//! let mut cx = InteractionContext::new(false);
//!
//! let out = interactions.dispatch(
//!     &mut cx,
//!     Region::Reference,
//!     &ElementEvent::new(EventName::Focus),
//!     0,
//!     &NoContainment,
//! );
//! assert_eq!(out.invoked, 1);
//! assert!(cx.is_active());
//! ```

use alloc::boxed::Box;
use alloc::vec::Vec;

use crate::containment::Containment;
use crate::context::{ActiveChange, InteractionContext};
use crate::props::ElementProps;
use crate::types::{ElementEvent, InteractionType, Region};

/// Result of offering an event to a handler.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Handled<K> {
    /// The handler filtered the event out (disabled, wrong pointer type, movement
    /// between regions, or no listener for it).
    Ignored,
    /// The handler acted on the context; carries the change if the flag flipped.
    Invoked(Option<ActiveChange<K>>),
}

impl<K> Handled<K> {
    /// Whether the handler acted.
    pub fn is_invoked(&self) -> bool {
        matches!(self, Self::Invoked(_))
    }
}

/// A source of listeners plus the reaction to their events.
pub trait InteractionHandler<K>: core::fmt::Debug {
    /// Provenance tag recorded on changes made by this handler.
    fn kind(&self) -> InteractionType;

    /// Listeners this handler needs. Empty when the handler is disabled.
    fn element_props(&self) -> ElementProps;

    /// React to an event that reached one of this handler's listeners.
    fn handle(
        &self,
        cx: &mut InteractionContext<K>,
        region: Region,
        event: &ElementEvent<K>,
        now: u64,
        containment: &dyn Containment<K>,
    ) -> Handled<K>;
}

/// Outcome of [`Interactions::dispatch`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Dispatched<K> {
    /// Number of handlers that acted on the event.
    pub invoked: usize,
    /// Flag transitions, in the order they happened.
    pub changes: Vec<ActiveChange<K>>,
}

/// Ordered collection of handlers sharing one context.
#[derive(Debug)]
pub struct Interactions<K> {
    handlers: Vec<Box<dyn InteractionHandler<K>>>,
}

impl<K> Default for Interactions<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Interactions<K> {
    /// An empty collection.
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    /// Builder form of [`Interactions::push`].
    #[must_use]
    pub fn with(mut self, handler: impl InteractionHandler<K> + 'static) -> Self {
        self.push(handler);
        self
    }

    /// Append a handler. Later handlers see the context after earlier ones ran.
    pub fn push(&mut self, handler: impl InteractionHandler<K> + 'static) {
        self.handlers.push(Box::new(handler));
    }

    /// Number of handlers.
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Whether no handlers are present.
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Provenance tags of the handlers, in order.
    pub fn kinds(&self) -> impl Iterator<Item = InteractionType> + '_ {
        self.handlers.iter().map(|h| h.kind())
    }

    /// Merged listeners of every handler, in handler order.
    pub fn element_props(&self) -> ElementProps {
        let mut props = ElementProps::new();
        for h in &self.handlers {
            props.merge(h.element_props());
        }
        props
    }

    /// Route `event` on `region` to every handler that listens for it.
    pub fn dispatch(
        &self,
        cx: &mut InteractionContext<K>,
        region: Region,
        event: &ElementEvent<K>,
        now: u64,
        containment: &dyn Containment<K>,
    ) -> Dispatched<K> {
        let mut out = Dispatched {
            invoked: 0,
            changes: Vec::new(),
        };
        for h in &self.handlers {
            if h.element_props().listeners(region, event.name).next().is_none() {
                continue;
            }
            if let Handled::Invoked(change) = h.handle(cx, region, event, now, containment) {
                out.invoked += 1;
                out.changes.extend(change);
            }
        }
        out
    }
}
