// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Positioning adapter: decides *when* a floating element needs new coordinates.
//!
//! The adapter never measures anything. It tracks the two element handles, the
//! [`PositionOptions`], and whether positioning is enabled, and turns changes into
//! [`ComputeRequest`]s. The host completes each request (with [`run_pending`] or its own
//! engine) and hands the result back through [`resolve`].
//!
//! Requests are issued when:
//! - either element handle changes and both are present afterwards,
//! - the options change by value,
//! - the adapter is re-enabled while both elements are present,
//! - [`update`] is called,
//! - [`notify_layout_change`] is called while auto-updating.
//!
//! Resolutions are last-write-wins: a newer request does not cancel an older one that is
//! still in flight. Use [`is_stale`] to detect an out-of-order completion.
//!
//! [`run_pending`]: PositioningAdapter::run_pending
//! [`resolve`]: PositioningAdapter::resolve
//! [`update`]: PositioningAdapter::update
//! [`notify_layout_change`]: PositioningAdapter::notify_layout_change
//! [`is_stale`]: PositioningAdapter::is_stale
//!
//! ```
//! use std::collections::BTreeMap;
//! use kurbo::Rect;
//! use understory_floating::adapter::PositioningAdapter;
//! use understory_floating::compute::DefaultEngine;
//! use understory_floating::types::{Placement, PositionOptions};
//!
//! let mut adapter: PositioningAdapter<u32> = PositioningAdapter::new(PositionOptions::default());
//! adapter.set_reference(Some(1));
//! adapter.set_floating(Some(2));
//!
//! let mut rects = BTreeMap::new();
//! rects.insert(1, Rect::new(10.0, 10.0, 30.0, 20.0));
//! rects.insert(2, Rect::new(0.0, 0.0, 40.0, 10.0));
//! let viewport = Rect::new(0.0, 0.0, 200.0, 200.0);
//!
//! assert_eq!(adapter.run_pending(&DefaultEngine, &rects, viewport), 1);
//! assert!(adapter.is_positioned());
//! assert_eq!((adapter.data().x, adapter.data().y), (0.0, 20.0));
//!
//! // Same options by value: nothing to do.
//! adapter.set_options(PositionOptions::default());
//! assert!(adapter.take_requests().is_empty());
//!
//! adapter.set_options(PositionOptions { placement: Placement::Top, ..Default::default() });
//! assert_eq!(adapter.take_requests().len(), 1);
//! ```

use alloc::vec::Vec;
use kurbo::{Rect, Vec2};

use crate::compute::PositionEngine;
use crate::rects::ElementRects;
use crate::types::{FloatingData, PositionOptions, Strategy};

/// A computation the host should perform.
#[derive(Clone, Debug, PartialEq)]
pub struct ComputeRequest<K> {
    /// Identifier to pass back to [`PositioningAdapter::resolve`] or [`PositioningAdapter::reject`].
    pub id: u64,
    /// Reference element.
    pub reference: K,
    /// Floating element.
    pub floating: K,
    /// Element whose origin [`Strategy::Absolute`] coordinates are relative to.
    pub offset_parent: Option<K>,
    /// Options snapshot at the time of the request.
    pub options: PositionOptions,
}

/// Tracks positioning inputs and publishes computed [`FloatingData`].
#[derive(Clone, Debug)]
pub struct PositioningAdapter<K> {
    options: PositionOptions,
    reference: Option<K>,
    floating: Option<K>,
    offset_parent: Option<K>,
    enabled: bool,
    auto_update: bool,
    next_id: u64,
    latest: Option<u64>,
    outbox: Vec<ComputeRequest<K>>,
    data: FloatingData,
    positioned: bool,
}

impl<K: Copy + PartialEq> PositioningAdapter<K> {
    /// Create an enabled adapter with auto-update on and no elements.
    pub fn new(options: PositionOptions) -> Self {
        Self {
            data: FloatingData::unpositioned(&options),
            options,
            reference: None,
            floating: None,
            offset_parent: None,
            enabled: true,
            auto_update: true,
            next_id: 0,
            latest: None,
            outbox: Vec::new(),
            positioned: false,
        }
    }

    /// Current options.
    pub fn options(&self) -> &PositionOptions {
        &self.options
    }

    /// Current reference element.
    pub fn reference(&self) -> Option<K> {
        self.reference
    }

    /// Current floating element.
    pub fn floating(&self) -> Option<K> {
        self.floating
    }

    /// Whether requests are issued.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Set the reference element. Returns the id of the issued request, if any.
    pub fn set_reference(&mut self, reference: Option<K>) -> Option<u64> {
        if self.reference == reference {
            return None;
        }
        self.reference = reference;
        self.issue()
    }

    /// Set the floating element. Returns the id of the issued request, if any.
    pub fn set_floating(&mut self, floating: Option<K>) -> Option<u64> {
        if self.floating == floating {
            return None;
        }
        self.floating = floating;
        self.issue()
    }

    /// Set the element whose origin absolute coordinates are relative to.
    pub fn set_offset_parent(&mut self, offset_parent: Option<K>) -> Option<u64> {
        if self.offset_parent == offset_parent {
            return None;
        }
        self.offset_parent = offset_parent;
        self.issue()
    }

    /// Replace the options. Equal options (by value) are a no-op.
    pub fn set_options(&mut self, options: PositionOptions) -> Option<u64> {
        if self.options == options {
            return None;
        }
        self.options = options;
        self.issue()
    }

    /// Enable or disable the adapter.
    ///
    /// Disabling drops queued requests and clears [`is_positioned`](Self::is_positioned) but
    /// keeps the last published data. Re-enabling issues a fresh request.
    pub fn set_enabled(&mut self, enabled: bool) -> Option<u64> {
        if self.enabled == enabled {
            return None;
        }
        self.enabled = enabled;
        if enabled {
            self.issue()
        } else {
            self.outbox.clear();
            self.positioned = false;
            None
        }
    }

    /// Configure whether [`notify_layout_change`](Self::notify_layout_change) issues requests.
    pub fn set_auto_update(&mut self, auto_update: bool) {
        self.auto_update = auto_update;
    }

    /// Whether layout changes are currently being followed.
    ///
    /// Requires auto-update, the adapter enabled, and both elements present.
    pub fn is_auto_updating(&self) -> bool {
        self.auto_update && self.enabled && self.reference.is_some() && self.floating.is_some()
    }

    /// Force a recomputation.
    pub fn update(&mut self) -> Option<u64> {
        self.issue()
    }

    /// Called by the host when the reference or floating element moved or resized,
    /// or an ancestor scrolled.
    pub fn notify_layout_change(&mut self) -> Option<u64> {
        if !self.is_auto_updating() {
            return None;
        }
        self.issue()
    }

    /// Drain queued requests.
    pub fn take_requests(&mut self) -> Vec<ComputeRequest<K>> {
        core::mem::take(&mut self.outbox)
    }

    /// Id of the most recently issued request.
    pub fn latest_request(&self) -> Option<u64> {
        self.latest
    }

    /// Whether a newer request than `id` has been issued.
    pub fn is_stale(&self, id: u64) -> bool {
        self.latest.is_some_and(|latest| id < latest)
    }

    /// Publish the result of request `id`.
    ///
    /// Returns `false` (and keeps the previous data) while disabled.
    pub fn resolve(&mut self, id: u64, data: FloatingData) -> bool {
        if !self.enabled {
            return false;
        }
        if self.is_stale(id) {
            #[cfg(feature = "tracing")]
            tracing::warn!(
                target: "understory_floating",
                id,
                latest = ?self.latest,
                "stale positioning result published"
            );
        }
        self.data = data;
        self.positioned = true;
        true
    }

    /// Record that request `id` failed. The previous data stays in place.
    #[cfg_attr(
        not(feature = "tracing"),
        expect(unused_variables, reason = "the id is only logged")
    )]
    pub fn reject(&mut self, id: u64) {
        #[cfg(feature = "tracing")]
        tracing::debug!(target: "understory_floating", id, "positioning request rejected");
    }

    /// Last published data.
    pub fn data(&self) -> &FloatingData {
        &self.data
    }

    /// Whether data has been published since the adapter was last enabled.
    pub fn is_positioned(&self) -> bool {
        self.positioned
    }

    /// Complete every queued request synchronously.
    ///
    /// Requests whose element rects are unknown are skipped. With
    /// [`Strategy::Absolute`] and a known offset parent, coordinates are made relative to
    /// the offset parent's origin. Returns the number of results published.
    pub fn run_pending<E, R>(&mut self, engine: &E, rects: &R, boundary: Rect) -> usize
    where
        E: PositionEngine + ?Sized,
        R: ElementRects<K> + ?Sized,
    {
        let mut published = 0;
        for request in self.take_requests() {
            let (Some(reference), Some(floating)) =
                (rects.rect_of(&request.reference), rects.rect_of(&request.floating))
            else {
                continue;
            };
            let mut data = engine.compute_position(reference, floating, boundary, &request.options);
            if data.strategy == Strategy::Absolute
                && let Some(parent) = request.offset_parent.and_then(|p| rects.rect_of(&p))
            {
                let origin = Vec2::new(parent.x0, parent.y0);
                data.x -= origin.x;
                data.y -= origin.y;
            }
            if self.resolve(request.id, data) {
                published += 1;
            }
        }
        published
    }

    fn issue(&mut self) -> Option<u64> {
        if !self.enabled {
            return None;
        }
        let (reference, floating) = (self.reference?, self.floating?);
        let id = self.next_id;
        self.next_id += 1;
        self.latest = Some(id);
        #[cfg(feature = "tracing")]
        tracing::debug!(target: "understory_floating", id, "positioning request issued");
        self.outbox.push(ComputeRequest {
            id,
            reference,
            floating,
            offset_parent: self.offset_parent,
            options: self.options.clone(),
        });
        Some(id)
    }
}
