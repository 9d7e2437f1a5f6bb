// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Popup configuration and presets.

use alloc::vec;
use alloc::vec::Vec;
use bitflags::bitflags;
use understory_floating::types::{
    FlipOptions, Middleware, OffsetOptions, Placement, PositionOptions, ShiftOptions, Strategy,
};
use understory_interaction::click::ClickTrigger;
use understory_interaction::types::{Delay, PointerTypes};

bitflags! {
    /// Interactions that open and close a popup.
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
    pub struct Triggers: u8 {
        /// Pointer hover over the reference (and the floating element when interactive).
        const HOVER = 1 << 0;
        /// Click or press on the reference.
        const CLICK = 1 << 1;
        /// Keyboard focus on the reference.
        const FOCUS = 1 << 2;
    }
}

impl Default for Triggers {
    fn default() -> Self {
        Self::HOVER
    }
}

/// Where the host should mount the floating element.
///
/// Purely advisory: the popup never touches a tree, but hosts read this when creating
/// the floating element.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum AppendTarget<K> {
    /// Next to the reference element.
    #[default]
    Inline,
    /// At the root of the host's tree (an overlay layer).
    Root,
    /// Under a specific element.
    Element(K),
}

/// Configuration for a [`Popup`](crate::Popup).
#[derive(Clone, Debug, PartialEq)]
pub struct PopupOptions<K> {
    /// Preferred placement.
    pub placement: Placement,
    /// Coordinate space of the computed position.
    pub strategy: Strategy,
    /// Positioning pipeline, run in order.
    pub middleware: Vec<Middleware>,
    /// Interactions that toggle the popup.
    pub triggers: Triggers,
    /// Open/close delays for hover and focus.
    pub delay: Delay,
    /// Pointer types accepted by hover and click.
    pub pointer_types: PointerTypes,
    /// Keep a hover popup open while the pointer is over the floating element.
    pub interactive: bool,
    /// Close a click popup when the reference is activated again.
    pub toggle: bool,
    /// Event that activates a click popup.
    pub click_trigger: ClickTrigger,
    /// Where the host should mount the floating element.
    pub append_to: AppendTarget<K>,
    /// Controlled open state. `None` leaves the popup uncontrolled.
    pub open: Option<bool>,
    /// Force the popup closed and drop every listener.
    pub disabled: bool,
    /// Follow layout changes while open.
    pub auto_update: bool,
}

impl<K> Default for PopupOptions<K> {
    fn default() -> Self {
        Self {
            placement: Placement::Bottom,
            strategy: Strategy::Absolute,
            middleware: Vec::new(),
            triggers: Triggers::default(),
            delay: Delay::NONE,
            pointer_types: PointerTypes::default(),
            interactive: false,
            toggle: true,
            click_trigger: ClickTrigger::default(),
            append_to: AppendTarget::Inline,
            open: None,
            disabled: false,
            auto_update: true,
        }
    }
}

impl<K> PopupOptions<K> {
    /// A click-triggered, interactive panel below its reference.
    pub fn popover() -> Self {
        Self {
            placement: Placement::Bottom,
            middleware: vec![
                Middleware::Offset(OffsetOptions::main(8.0)),
                Middleware::Flip(FlipOptions::default()),
                Middleware::Shift(ShiftOptions {
                    padding: 8.0,
                    ..ShiftOptions::default()
                }),
            ],
            triggers: Triggers::CLICK,
            interactive: true,
            ..Self::default()
        }
    }

    /// A hover/focus label above its reference.
    pub fn tooltip() -> Self {
        Self {
            placement: Placement::Top,
            middleware: vec![
                Middleware::Offset(OffsetOptions::main(6.0)),
                Middleware::Flip(FlipOptions::default()),
                Middleware::Shift(ShiftOptions {
                    padding: 4.0,
                    ..ShiftOptions::default()
                }),
            ],
            triggers: Triggers::HOVER | Triggers::FOCUS,
            delay: Delay {
                open: Some(300),
                close: Some(100),
            },
            interactive: false,
            ..Self::default()
        }
    }

    /// The positioning subset of these options.
    pub fn position_options(&self) -> PositionOptions {
        PositionOptions {
            placement: self.placement,
            strategy: self.strategy,
            middleware: self.middleware.clone(),
        }
    }
}
