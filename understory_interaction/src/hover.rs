// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hover handler: open on pointer enter, close on pointer leave.
//!
//! ## Behavior
//!
//! - Listens for `PointerEnter`/`PointerLeave` on the reference, and also on the floating
//!   element when [`HoverOptions::interactive`] is set so the pointer can travel into it.
//! - Enter requests `true` after [`Delay::open`]; leave requests `false` after [`Delay::close`].
//!   Both go through [`InteractionContext::delay_set_active`], so a quick re-entry cancels a
//!   pending close.
//! - A leave whose related target is still inside the reference (or inside the floating
//!   element, when interactive) is ignored.
//! - Events from pointer types outside [`HoverOptions::pointer_types`] are ignored.
//!
//! ## Minimal example
//!
//! ```
//! use understory_interaction::containment::NoContainment;
//! use understory_interaction::context::InteractionContext;
//! use understory_interaction::hover::{Hover, HoverOptions};
//! use understory_interaction::interactions::InteractionHandler;
//! use understory_interaction::types::{Delay, ElementEvent, EventName, PointerType, Region};
//!
//! let hover = Hover::new(HoverOptions { delay: Delay { open: Some(200), close: None }, ..Default::default() });
//! let mut cx: InteractionContext<u32> = InteractionContext::new(false);
//! let enter = ElementEvent::new(EventName::PointerEnter).with_pointer(PointerType::Mouse);
//!
//! let _ = hover.handle(&mut cx, Region::Reference, &enter, 1_000, &NoContainment);
//! assert_eq!(cx.next_deadline(), Some(1_200));
//! assert!(cx.poll(1_200).is_some());
//! ```

use crate::containment::Containment;
use crate::context::InteractionContext;
use crate::interactions::{Handled, InteractionHandler};
use crate::props::{ElementProps, Listener};
use crate::types::{
    Delay, ElementEvent, EventName, InteractionInfo, InteractionType, PointerTypes, Region,
};

/// Configuration for [`Hover`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct HoverOptions {
    /// When `false`, the handler has no listeners.
    pub enabled: bool,
    /// Pointer types that trigger hover.
    pub pointer_types: PointerTypes,
    /// Open/close delays.
    pub delay: Delay,
    /// Keep open while the pointer is over the floating element.
    pub interactive: bool,
}

impl Default for HoverOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            pointer_types: PointerTypes::default(),
            delay: Delay::NONE,
            interactive: false,
        }
    }
}

/// Pointer hover handler.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Hover {
    options: HoverOptions,
}

impl Hover {
    /// Create a hover handler.
    pub const fn new(options: HoverOptions) -> Self {
        Self { options }
    }

    /// Current configuration.
    pub fn options(&self) -> &HoverOptions {
        &self.options
    }

    fn moved_within<K>(&self, event: &ElementEvent<K>, containment: &dyn Containment<K>) -> bool {
        event.related_target.as_ref().is_some_and(|t| {
            containment.contains(Region::Reference, t)
                || (self.options.interactive && containment.contains(Region::Floating, t))
        })
    }
}

impl<K: Copy> InteractionHandler<K> for Hover {
    fn kind(&self) -> InteractionType {
        InteractionType::Hover
    }

    fn element_props(&self) -> ElementProps {
        let mut props = ElementProps::new();
        if !self.options.enabled {
            return props;
        }
        let regions: &[Region] = if self.options.interactive {
            &[Region::Reference, Region::Floating]
        } else {
            &[Region::Reference]
        };
        for &region in regions {
            props.push(Listener::new(region, EventName::PointerEnter, InteractionType::Hover));
            props.push(Listener::new(region, EventName::PointerLeave, InteractionType::Hover));
        }
        props
    }

    fn handle(
        &self,
        cx: &mut InteractionContext<K>,
        region: Region,
        event: &ElementEvent<K>,
        now: u64,
        containment: &dyn Containment<K>,
    ) -> Handled<K> {
        if !self.options.enabled
            || (region == Region::Floating && !self.options.interactive)
            || !self.options.pointer_types.accepts(event.pointer_type)
        {
            return Handled::Ignored;
        }
        let info = InteractionInfo::from_event(InteractionType::Hover, *event);
        match event.name {
            EventName::PointerEnter => {
                Handled::Invoked(cx.delay_set_active(now, true, self.options.delay.open, info))
            }
            EventName::PointerLeave => {
                if self.moved_within(event, containment) {
                    return Handled::Ignored;
                }
                Handled::Invoked(cx.delay_set_active(now, false, self.options.delay.close, info))
            }
            _ => Handled::Ignored,
        }
    }
}
