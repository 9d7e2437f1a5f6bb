// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Click handler: open (or toggle) on activation of the reference.
//!
//! Clicks apply immediately through [`InteractionContext::set_active`], which also
//! cancels any delayed hover or focus transition still pending.

use crate::containment::Containment;
use crate::context::InteractionContext;
use crate::interactions::{Handled, InteractionHandler};
use crate::props::{ElementProps, Listener};
use crate::types::{ElementEvent, EventName, InteractionInfo, InteractionType, PointerTypes, Region};

/// Which reference event activates the handler.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ClickTrigger {
    /// A completed click.
    #[default]
    Click,
    /// The pointer press, for menus that open before release.
    PointerDown,
}

impl ClickTrigger {
    const fn event(self) -> EventName {
        match self {
            Self::Click => EventName::Click,
            Self::PointerDown => EventName::PointerDown,
        }
    }
}

/// Configuration for [`Click`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ClickOptions {
    /// When `false`, the handler has no listeners.
    pub enabled: bool,
    /// Pointer types that activate the handler.
    pub pointer_types: PointerTypes,
    /// Close when activated while open.
    pub toggle: bool,
    /// Activation event.
    pub trigger: ClickTrigger,
}

impl Default for ClickOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            pointer_types: PointerTypes::default(),
            toggle: true,
            trigger: ClickTrigger::default(),
        }
    }
}

/// Click/press handler.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Click {
    options: ClickOptions,
}

impl Click {
    /// Create a click handler.
    pub const fn new(options: ClickOptions) -> Self {
        Self { options }
    }

    /// Current configuration.
    pub fn options(&self) -> &ClickOptions {
        &self.options
    }
}

impl<K: Copy> InteractionHandler<K> for Click {
    fn kind(&self) -> InteractionType {
        InteractionType::Click
    }

    fn element_props(&self) -> ElementProps {
        let mut props = ElementProps::new();
        if self.options.enabled {
            props.push(Listener::new(
                Region::Reference,
                self.options.trigger.event(),
                InteractionType::Click,
            ));
        }
        props
    }

    fn handle(
        &self,
        cx: &mut InteractionContext<K>,
        region: Region,
        event: &ElementEvent<K>,
        _now: u64,
        _containment: &dyn Containment<K>,
    ) -> Handled<K> {
        if !self.options.enabled
            || region != Region::Reference
            || event.name != self.options.trigger.event()
            || !self.options.pointer_types.accepts(event.pointer_type)
        {
            return Handled::Ignored;
        }
        let info = InteractionInfo::from_event(InteractionType::Click, *event);
        let target = !(cx.is_active() && self.options.toggle);
        Handled::Invoked(cx.set_active(target, info))
    }
}
