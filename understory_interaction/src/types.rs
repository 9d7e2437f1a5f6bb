// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types for interactions: regions, event names, pointer types, and provenance.
//!
//! ## Overview
//!
//! These types describe the inputs fed to the [handlers](crate::interactions) and the
//! provenance recorded by the [`InteractionContext`](crate::context::InteractionContext).
//! Node keys `K` are toolkit-defined (a box tree `NodeId`, a widget id, and so on).

/// The element a listener is attached to.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Region {
    /// The anchor the floating element is positioned against.
    Reference,
    /// The floating element itself (popup body, tooltip bubble).
    Floating,
}

/// Element events the handlers understand.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum EventName {
    /// Pointer entered the element.
    PointerEnter,
    /// Pointer left the element.
    PointerLeave,
    /// Pointer button pressed over the element.
    PointerDown,
    /// A completed click (press and release) on the element.
    Click,
    /// The element gained keyboard focus.
    Focus,
    /// The element lost keyboard focus.
    Blur,
}

/// Kind of pointer that produced an event.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum PointerType {
    /// Mouse or trackpad.
    Mouse,
    /// Touch screen contact.
    Touch,
    /// Stylus.
    Pen,
}

impl PointerType {
    /// The [`PointerTypes`] flag matching this pointer type.
    pub const fn flag(self) -> PointerTypes {
        match self {
            Self::Mouse => PointerTypes::MOUSE,
            Self::Touch => PointerTypes::TOUCH,
            Self::Pen => PointerTypes::PEN,
        }
    }
}

bitflags::bitflags! {
    /// Set of pointer types a handler responds to.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct PointerTypes: u8 {
        /// Mouse or trackpad.
        const MOUSE = 0b0000_0001;
        /// Touch screen contact.
        const TOUCH = 0b0000_0010;
        /// Stylus.
        const PEN   = 0b0000_0100;
    }
}

impl Default for PointerTypes {
    fn default() -> Self {
        Self::all()
    }
}

impl PointerTypes {
    /// Whether an event with the given pointer type passes this filter.
    ///
    /// Events that carry no pointer type (synthetic or keyboard-driven) always pass.
    pub fn accepts(self, pointer_type: Option<PointerType>) -> bool {
        pointer_type.is_none_or(|pt| self.contains(pt.flag()))
    }
}

/// An element event as seen by the handlers.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct ElementEvent<K> {
    /// Which event occurred.
    pub name: EventName,
    /// Pointer type for pointer events; `None` for focus and synthetic events.
    pub pointer_type: Option<PointerType>,
    /// For leave/blur, the node the pointer or focus moved to (if known).
    pub related_target: Option<K>,
}

impl<K> ElementEvent<K> {
    /// An event with no pointer type and no related target.
    pub const fn new(name: EventName) -> Self {
        Self {
            name,
            pointer_type: None,
            related_target: None,
        }
    }

    /// Attach a pointer type.
    #[must_use]
    pub fn with_pointer(mut self, pointer_type: PointerType) -> Self {
        self.pointer_type = Some(pointer_type);
        self
    }

    /// Attach the node the pointer or focus moved to.
    #[must_use]
    pub fn with_related_target(mut self, related: K) -> Self {
        self.related_target = Some(related);
        self
    }
}

/// Where a state-change attempt came from.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum InteractionType {
    /// Pointer hover handler.
    Hover,
    /// Click handler.
    Click,
    /// Focus handler.
    Focus,
    /// Direct calls from application code.
    Programmatic,
}

/// Provenance of the most recent state-change attempt.
///
/// This is an immutable snapshot; the [context](crate::context::InteractionContext)
/// replaces it on each attempt.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct InteractionInfo<K> {
    /// Which handler (or caller) made the attempt.
    pub kind: InteractionType,
    /// The event that triggered the attempt, if any.
    pub event: Option<ElementEvent<K>>,
}

impl<K> InteractionInfo<K> {
    /// Provenance for a programmatic change without an event.
    pub const fn programmatic() -> Self {
        Self {
            kind: InteractionType::Programmatic,
            event: None,
        }
    }

    /// Provenance for a handler reacting to `event`.
    pub const fn from_event(kind: InteractionType, event: ElementEvent<K>) -> Self {
        Self {
            kind,
            event: Some(event),
        }
    }
}

/// Open and close delays in milliseconds.
///
/// `None` and `Some(0)` both mean "apply immediately".
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Delay {
    /// Delay before opening.
    pub open: Option<u64>,
    /// Delay before closing.
    pub close: Option<u64>,
}

impl Delay {
    /// Apply every transition immediately.
    pub const NONE: Self = Self {
        open: None,
        close: None,
    };

    /// The same delay in both directions.
    pub const fn uniform(ms: u64) -> Self {
        Self {
            open: Some(ms),
            close: Some(ms),
        }
    }

    /// The delay for a transition towards `active`.
    pub const fn for_target(self, active: bool) -> Option<u64> {
        if active { self.open } else { self.close }
    }
}
