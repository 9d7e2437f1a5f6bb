// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Listener sets produced by handlers.
//!
//! An [`ElementProps`] lists which events each handler wants on the reference and
//! floating elements. The host subscribes to [`ElementProps::event_names`] per region
//! and forwards what arrives to [`Interactions::dispatch`](crate::interactions::Interactions::dispatch).
//!
//! Merging appends. When two handlers listen to the same event on the same region,
//! both listeners survive:
//!
//! ```
//! use understory_interaction::props::{ElementProps, Listener};
//! use understory_interaction::types::{EventName, InteractionType, Region};
//!
//! let mut a = ElementProps::new();
//! a.push(Listener::new(Region::Reference, EventName::PointerDown, InteractionType::Click));
//! let mut b = ElementProps::new();
//! b.push(Listener::new(Region::Reference, EventName::PointerDown, InteractionType::Hover));
//!
//! a.merge(b);
//! assert_eq!(a.listeners(Region::Reference, EventName::PointerDown).count(), 2);
//! assert_eq!(a.event_names(Region::Reference), vec![EventName::PointerDown]);
//! ```

use alloc::vec::Vec;

use crate::types::{EventName, InteractionType, Region};

/// One event subscription owned by a handler.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Listener {
    /// Element the listener is attached to.
    pub region: Region,
    /// Event it listens for.
    pub event: EventName,
    /// Handler that owns it.
    pub handler: InteractionType,
}

impl Listener {
    /// Create a listener.
    pub const fn new(region: Region, event: EventName, handler: InteractionType) -> Self {
        Self {
            region,
            event,
            handler,
        }
    }
}

/// Ordered set of listeners to attach to the reference and floating elements.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ElementProps {
    listeners: Vec<Listener>,
}

impl ElementProps {
    /// An empty set.
    pub fn new() -> Self {
        Self {
            listeners: Vec::new(),
        }
    }

    /// Add a listener at the end.
    pub fn push(&mut self, listener: Listener) {
        self.listeners.push(listener);
    }

    /// Append every listener from `other`, keeping duplicates by event name.
    pub fn merge(&mut self, other: Self) {
        self.listeners.extend(other.listeners);
    }

    /// Whether no listeners are present.
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    /// Number of listeners.
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    /// All listeners in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Listener> + '_ {
        self.listeners.iter()
    }

    /// Listeners bound to `event` on `region`, in insertion order.
    pub fn listeners(&self, region: Region, event: EventName) -> impl Iterator<Item = &Listener> + '_ {
        self.listeners
            .iter()
            .filter(move |l| l.region == region && l.event == event)
    }

    /// Whether `handler` has a listener for `event` on `region`.
    pub fn has(&self, region: Region, event: EventName, handler: InteractionType) -> bool {
        self.listeners(region, event).any(|l| l.handler == handler)
    }

    /// Distinct event names to subscribe to on `region`, in first-seen order.
    pub fn event_names(&self, region: Region) -> Vec<EventName> {
        let mut out: Vec<EventName> = Vec::new();
        for l in self.listeners.iter().filter(|l| l.region == region) {
            if !out.contains(&l.event) {
                out.push(l.event);
            }
        }
        out
    }
}

impl Extend<Listener> for ElementProps {
    fn extend<I: IntoIterator<Item = Listener>>(&mut self, iter: I) {
        self.listeners.extend(iter);
    }
}

impl FromIterator<Listener> for ElementProps {
    fn from_iter<I: IntoIterator<Item = Listener>>(iter: I) -> Self {
        Self {
            listeners: iter.into_iter().collect(),
        }
    }
}
