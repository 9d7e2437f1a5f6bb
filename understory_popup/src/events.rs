// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Events emitted by a popup.

use understory_floating::types::FloatingData;
use understory_interaction::types::InteractionInfo;

/// Something the host may want to react to.
///
/// Drained with [`Popup::drain_events`](crate::Popup::drain_events) in the order they happened.
#[derive(Clone, Debug, PartialEq)]
pub enum PopupEvent<K> {
    /// The popup opened.
    Open(InteractionInfo<K>),
    /// The popup closed.
    Close(InteractionInfo<K>),
    /// The open state changed through an interaction or a programmatic call.
    ///
    /// Controlled hosts mirror this back into [`PopupOptions::open`](crate::PopupOptions::open).
    /// Not emitted when the change came from that field.
    UpdateOpen(bool),
    /// New coordinates were published.
    FloatingDataUpdate(FloatingData),
}
