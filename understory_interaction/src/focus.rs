// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Focus handler: open while the reference has keyboard focus.
//!
//! A blur is ignored when focus moves to a node inside the reference or the floating
//! element (for example tabbing from a trigger into an interactive popover), so moving
//! between the two regions never closes.

use crate::containment::Containment;
use crate::context::InteractionContext;
use crate::interactions::{Handled, InteractionHandler};
use crate::props::{ElementProps, Listener};
use crate::types::{Delay, ElementEvent, EventName, InteractionInfo, InteractionType, Region};

/// Configuration for [`Focus`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FocusOptions {
    /// When `false`, the handler has no listeners.
    pub enabled: bool,
    /// Open/close delays.
    pub delay: Delay,
}

impl Default for FocusOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            delay: Delay::NONE,
        }
    }
}

/// Keyboard focus handler.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Focus {
    options: FocusOptions,
}

impl Focus {
    /// Create a focus handler.
    pub const fn new(options: FocusOptions) -> Self {
        Self { options }
    }

    /// Current configuration.
    pub fn options(&self) -> &FocusOptions {
        &self.options
    }
}

impl<K: Copy> InteractionHandler<K> for Focus {
    fn kind(&self) -> InteractionType {
        InteractionType::Focus
    }

    fn element_props(&self) -> ElementProps {
        if !self.options.enabled {
            return ElementProps::new();
        }
        [
            Listener::new(Region::Reference, EventName::Focus, InteractionType::Focus),
            Listener::new(Region::Reference, EventName::Blur, InteractionType::Focus),
            Listener::new(Region::Floating, EventName::Blur, InteractionType::Focus),
        ]
        .into_iter()
        .collect()
    }

    fn handle(
        &self,
        cx: &mut InteractionContext<K>,
        region: Region,
        event: &ElementEvent<K>,
        now: u64,
        containment: &dyn Containment<K>,
    ) -> Handled<K> {
        if !self.options.enabled {
            return Handled::Ignored;
        }
        let info = InteractionInfo::from_event(InteractionType::Focus, *event);
        match (region, event.name) {
            (Region::Reference, EventName::Focus) => {
                Handled::Invoked(cx.delay_set_active(now, true, self.options.delay.open, info))
            }
            (_, EventName::Blur) => {
                if event
                    .related_target
                    .as_ref()
                    .is_some_and(|t| containment.contains_any(t))
                {
                    return Handled::Ignored;
                }
                Handled::Invoked(cx.delay_set_active(now, false, self.options.delay.close, info))
            }
            _ => Handled::Ignored,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::containment::{NoContainment, ParentLookup, SubtreeContainment};

    struct Parents;
    impl ParentLookup<u32> for Parents {
        fn parent_of(&self, node: &u32) -> Option<u32> {
            // 20 is a button inside the floating element 2.
            (*node == 20).then_some(2)
        }
    }

    #[test]
    fn focus_opens_blur_closes() {
        let f = Focus::new(FocusOptions::default());
        let mut cx: InteractionContext<u32> = InteractionContext::new(false);
        let _ = f.handle(&mut cx, Region::Reference, &ElementEvent::new(EventName::Focus), 0, &NoContainment);
        assert!(cx.is_active());
        let _ = f.handle(&mut cx, Region::Reference, &ElementEvent::new(EventName::Blur), 1, &NoContainment);
        assert!(!cx.is_active());
    }

    #[test]
    fn blur_into_floating_subtree_is_ignored() {
        let f = Focus::new(FocusOptions::default());
        let containment = SubtreeContainment::new(Some(1), Some(2), &Parents);
        let mut cx = InteractionContext::new(true);
        let blur = ElementEvent::new(EventName::Blur).with_related_target(20_u32);
        assert_eq!(
            f.handle(&mut cx, Region::Reference, &blur, 0, &containment),
            Handled::Ignored
        );
        assert!(cx.is_active());

        // Focus leaves the floating element for an unrelated node.
        let blur = ElementEvent::new(EventName::Blur).with_related_target(99_u32);
        assert!(f.handle(&mut cx, Region::Floating, &blur, 1, &containment).is_invoked());
        assert!(!cx.is_active());
    }

    #[test]
    fn delays_apply() {
        let f = Focus::new(FocusOptions {
            delay: Delay {
                open: Some(40),
                close: Some(10),
            },
            ..FocusOptions::default()
        });
        let mut cx: InteractionContext<u32> = InteractionContext::new(false);
        let _ = f.handle(&mut cx, Region::Reference, &ElementEvent::new(EventName::Focus), 0, &NoContainment);
        assert_eq!(cx.next_deadline(), Some(40));
        // Blur before the open fires cancels it.
        let _ = f.handle(&mut cx, Region::Reference, &ElementEvent::new(EventName::Blur), 5, &NoContainment);
        assert_eq!(cx.next_deadline(), None);
        assert!(cx.poll(100).is_none());
    }

    #[test]
    fn focus_on_floating_is_not_a_listener() {
        let f = Focus::new(FocusOptions::default());
        let props = InteractionHandler::<u32>::element_props(&f);
        assert!(!props.has(Region::Floating, EventName::Focus, InteractionType::Focus));
        let mut cx: InteractionContext<u32> = InteractionContext::new(false);
        assert_eq!(
            f.handle(&mut cx, Region::Floating, &ElementEvent::new(EventName::Focus), 0, &NoContainment),
            Handled::Ignored
        );
    }

    #[test]
    fn disabled_yields_no_listeners() {
        let f = Focus::new(FocusOptions {
            enabled: false,
            ..FocusOptions::default()
        });
        assert!(InteractionHandler::<u32>::element_props(&f).is_empty());
    }
}
