// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The popup state machine.

use alloc::vec::Vec;
use kurbo::Rect;
use understory_floating::adapter::{ComputeRequest, PositioningAdapter};
use understory_floating::compute::PositionEngine;
use understory_floating::rects::ElementRects;
use understory_floating::types::FloatingData;
use understory_interaction::click::{Click, ClickOptions};
use understory_interaction::containment::{ParentLookup, SubtreeContainment};
use understory_interaction::context::{ActiveChange, InteractionContext};
use understory_interaction::focus::{Focus, FocusOptions};
use understory_interaction::hover::{Hover, HoverOptions};
use understory_interaction::interactions::{Dispatched, Interactions};
use understory_interaction::props::ElementProps;
use understory_interaction::types::{ElementEvent, InteractionInfo, Region};

use crate::events::PopupEvent;
use crate::options::{AppendTarget, PopupOptions, Triggers};

/// A popup: open state, the interactions that drive it, and its positioning.
///
/// `K` is the host's element handle. The popup never owns elements; hosts report the
/// reference and floating handles, forward events, and act on [`PopupEvent`]s.
///
/// Positioning is enabled exactly while the popup is open and not disabled.
#[derive(Debug)]
pub struct Popup<K> {
    options: PopupOptions<K>,
    cx: InteractionContext<K>,
    interactions: Interactions<K>,
    adapter: PositioningAdapter<K>,
    events: Vec<PopupEvent<K>>,
}

impl<K: Copy + Eq + 'static> Popup<K> {
    /// Create a popup. It starts open only when `options.open` is `Some(true)`.
    pub fn new(options: PopupOptions<K>) -> Self {
        let open = !options.disabled && options.open.unwrap_or(false);
        let mut adapter = PositioningAdapter::new(options.position_options());
        adapter.set_auto_update(options.auto_update);
        let _ = adapter.set_enabled(open);
        Self {
            interactions: build_interactions(&options),
            cx: InteractionContext::new(open),
            adapter,
            options,
            events: Vec::new(),
        }
    }

    /// A popup with [`PopupOptions::popover`].
    pub fn popover() -> Self {
        Self::new(PopupOptions::popover())
    }

    /// A popup with [`PopupOptions::tooltip`].
    pub fn tooltip() -> Self {
        Self::new(PopupOptions::tooltip())
    }

    /// Current options.
    pub fn options(&self) -> &PopupOptions<K> {
        &self.options
    }

    /// Replace the options.
    ///
    /// Handlers are rebuilt, so [`element_props`](Self::element_props) reflects the new
    /// triggers right away. Positioning options are compared by value. A controlled
    /// [`open`](PopupOptions::open) that differs from the current state is applied.
    /// Disabling closes the popup and drops every listener.
    pub fn set_options(&mut self, options: PopupOptions<K>) {
        self.interactions = build_interactions(&options);
        self.adapter.set_auto_update(options.auto_update);
        let _ = self.adapter.set_options(options.position_options());
        self.options = options;

        if self.options.disabled {
            let _ = self.cx.cancel_pending();
            if let Some(change) = self.cx.set_active(false, InteractionInfo::programmatic()) {
                self.record(change, true);
            }
        } else if let Some(open) = self.options.open
            && open != self.cx.is_active()
            && let Some(change) = self.cx.set_active(open, InteractionInfo::programmatic())
        {
            self.record(change, false);
        }
        self.sync_positioning();
    }

    /// Report the reference element.
    pub fn set_reference(&mut self, reference: Option<K>) {
        let _ = self.adapter.set_reference(reference);
    }

    /// Report the floating element.
    pub fn set_floating(&mut self, floating: Option<K>) {
        let _ = self.adapter.set_floating(floating);
    }

    /// Report the element absolute coordinates are relative to.
    pub fn set_offset_parent(&mut self, offset_parent: Option<K>) {
        let _ = self.adapter.set_offset_parent(offset_parent);
    }

    /// Where the host should mount the floating element.
    pub fn append_to(&self) -> AppendTarget<K> {
        self.options.append_to
    }

    /// Listeners the host should bind. Empty while disabled.
    pub fn element_props(&self) -> ElementProps {
        self.interactions.element_props()
    }

    /// Route an element event through the handlers.
    ///
    /// `parents` resolves ancestry so moves between the reference and floating subtrees
    /// are recognized.
    pub fn handle_event<P: ParentLookup<K>>(
        &mut self,
        region: Region,
        event: &ElementEvent<K>,
        now: u64,
        parents: &P,
    ) -> Dispatched<K> {
        let containment =
            SubtreeContainment::new(self.adapter.reference(), self.adapter.floating(), parents);
        let out = self
            .interactions
            .dispatch(&mut self.cx, region, event, now, &containment);
        for change in &out.changes {
            self.record(*change, true);
        }
        self.sync_positioning();
        out
    }

    /// Apply a delayed transition that is due at `now`.
    pub fn poll(&mut self, now: u64) -> Option<ActiveChange<K>> {
        let change = self.cx.poll(now)?;
        self.record(change, true);
        self.sync_positioning();
        Some(change)
    }

    /// When the host should call [`poll`](Self::poll) next.
    pub fn next_deadline(&self) -> Option<u64> {
        self.cx.next_deadline()
    }

    /// Open immediately. Ignored while disabled.
    pub fn open(&mut self, info: InteractionInfo<K>) -> Option<ActiveChange<K>> {
        self.set_open(true, info)
    }

    /// Close immediately.
    pub fn close(&mut self, info: InteractionInfo<K>) -> Option<ActiveChange<K>> {
        self.set_open(false, info)
    }

    /// Whether the popup is open.
    pub fn is_open(&self) -> bool {
        self.cx.is_active()
    }

    /// The interaction state, for inspecting provenance and delay bookkeeping.
    pub fn context(&self) -> &InteractionContext<K> {
        &self.cx
    }

    /// Ask for a recomputation.
    pub fn update(&mut self) -> Option<u64> {
        self.adapter.update()
    }

    /// Called by the host when the reference or floating element moved or resized.
    pub fn notify_layout_change(&mut self) -> Option<u64> {
        self.adapter.notify_layout_change()
    }

    /// Drain positioning requests for a host-provided engine.
    pub fn take_requests(&mut self) -> Vec<ComputeRequest<K>> {
        self.adapter.take_requests()
    }

    /// Publish the result of a positioning request.
    pub fn resolve(&mut self, id: u64, data: FloatingData) -> bool {
        if !self.adapter.resolve(id, data) {
            return false;
        }
        self.events
            .push(PopupEvent::FloatingDataUpdate(self.adapter.data().clone()));
        true
    }

    /// Record that a positioning request failed; the previous data stays.
    pub fn reject(&mut self, id: u64) {
        self.adapter.reject(id);
    }

    /// Complete queued positioning requests with `engine`.
    ///
    /// Emits one [`PopupEvent::FloatingDataUpdate`] with the final data if anything was
    /// published. Returns the number of results published.
    pub fn run_positioning<E, R>(&mut self, engine: &E, rects: &R, boundary: Rect) -> usize
    where
        E: PositionEngine + ?Sized,
        R: ElementRects<K> + ?Sized,
    {
        let published = self.adapter.run_pending(engine, rects, boundary);
        if published > 0 {
            self.events
                .push(PopupEvent::FloatingDataUpdate(self.adapter.data().clone()));
        }
        published
    }

    /// Last published position.
    pub fn floating_data(&self) -> &FloatingData {
        self.adapter.data()
    }

    /// Whether a position was published since the popup last opened.
    pub fn is_positioned(&self) -> bool {
        self.adapter.is_positioned()
    }

    /// Take the events emitted since the last call.
    pub fn drain_events(&mut self) -> Vec<PopupEvent<K>> {
        core::mem::take(&mut self.events)
    }

    fn set_open(&mut self, open: bool, info: InteractionInfo<K>) -> Option<ActiveChange<K>> {
        if self.options.disabled {
            return None;
        }
        let change = self.cx.set_active(open, info)?;
        self.record(change, true);
        self.sync_positioning();
        Some(change)
    }

    fn record(&mut self, change: ActiveChange<K>, notify: bool) {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            target: "understory_popup",
            "transition",
            open = change.active,
            kind = ?change.info.kind,
        )
        .entered();
        self.events.push(if change.active {
            PopupEvent::Open(change.info)
        } else {
            PopupEvent::Close(change.info)
        });
        if notify {
            self.events.push(PopupEvent::UpdateOpen(change.active));
        }
    }

    fn sync_positioning(&mut self) {
        let enabled = self.cx.is_active() && !self.options.disabled;
        let _ = self.adapter.set_enabled(enabled);
    }
}

fn build_interactions<K: Copy + 'static>(options: &PopupOptions<K>) -> Interactions<K> {
    let mut interactions = Interactions::new();
    if options.disabled {
        return interactions;
    }
    if options.triggers.contains(Triggers::HOVER) {
        interactions.push(Hover::new(HoverOptions {
            enabled: true,
            pointer_types: options.pointer_types,
            delay: options.delay,
            interactive: options.interactive,
        }));
    }
    if options.triggers.contains(Triggers::CLICK) {
        interactions.push(Click::new(ClickOptions {
            enabled: true,
            pointer_types: options.pointer_types,
            toggle: options.toggle,
            trigger: options.click_trigger,
        }));
    }
    if options.triggers.contains(Triggers::FOCUS) {
        interactions.push(Focus::new(FocusOptions {
            enabled: true,
            delay: options.delay,
        }));
    }
    interactions
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::collections::BTreeMap;
    use understory_floating::compute::DefaultEngine;
    use understory_floating::types::Placement;
    use understory_interaction::containment::NoParent;
    use understory_interaction::types::{EventName, InteractionType, PointerType};

    const REF: u32 = 1;
    const FLOAT: u32 = 2;

    fn mounted(options: PopupOptions<u32>) -> Popup<u32> {
        let mut p = Popup::new(options);
        p.set_reference(Some(REF));
        p.set_floating(Some(FLOAT));
        p
    }

    fn ev(name: EventName) -> ElementEvent<u32> {
        ElementEvent::new(name).with_pointer(PointerType::Mouse)
    }

    fn rects() -> BTreeMap<u32, Rect> {
        let mut m = BTreeMap::new();
        m.insert(REF, Rect::new(100.0, 100.0, 140.0, 120.0));
        m.insert(FLOAT, Rect::new(0.0, 0.0, 60.0, 30.0));
        m
    }

    #[test]
    fn click_popover_opens_and_positions() {
        let mut p = mounted(PopupOptions::popover());
        assert!(p.take_requests().is_empty());

        let out = p.handle_event(Region::Reference, &ev(EventName::Click), 0, &NoParent);
        assert_eq!(out.invoked, 1);
        assert!(p.is_open());

        let viewport = Rect::new(0.0, 0.0, 800.0, 600.0);
        assert_eq!(p.run_positioning(&DefaultEngine, &rects(), viewport), 1);
        assert!(p.is_positioned());
        assert_eq!(p.floating_data().placement, Placement::Bottom);
        assert_eq!((p.floating_data().x, p.floating_data().y), (90.0, 128.0));

        let events = p.drain_events();
        assert!(matches!(events[0], PopupEvent::Open(info) if info.kind == InteractionType::Click));
        assert_eq!(events[1], PopupEvent::UpdateOpen(true));
        assert!(matches!(events[2], PopupEvent::FloatingDataUpdate(_)));
        assert_eq!(events.len(), 3);
    }

    #[test]
    fn closing_suspends_positioning_and_keeps_data() {
        let mut p = mounted(PopupOptions::popover());
        let _ = p.open(InteractionInfo::programmatic());
        let _ = p.run_positioning(&DefaultEngine, &rects(), Rect::new(0.0, 0.0, 800.0, 600.0));
        let held = p.floating_data().clone();

        let _ = p.close(InteractionInfo::programmatic());
        assert!(!p.is_positioned());
        assert_eq!(p.notify_layout_change(), None);
        assert_eq!(p.update(), None);
        assert_eq!(p.floating_data(), &held);
    }

    #[test]
    fn tooltip_hover_respects_delays() {
        let mut p = mounted(PopupOptions::tooltip());
        let _ = p.handle_event(Region::Reference, &ev(EventName::PointerEnter), 0, &NoParent);
        assert!(!p.is_open());
        assert_eq!(p.next_deadline(), Some(300));
        assert!(p.poll(299).is_none());
        assert!(p.poll(300).is_some());
        assert!(p.is_open());
        // Opening issued a positioning request.
        assert_eq!(p.take_requests().len(), 1);

        let _ = p.handle_event(Region::Reference, &ev(EventName::PointerLeave), 400, &NoParent);
        assert_eq!(p.next_deadline(), Some(500));
        let _ = p.poll(500);
        assert!(!p.is_open());
    }

    #[test]
    fn disabling_drops_listeners_and_closes() {
        let mut p = mounted(PopupOptions::tooltip());
        assert!(!p.element_props().is_empty());
        let _ = p.open(InteractionInfo::programmatic());
        let _ = p.drain_events();

        let mut options = p.options().clone();
        options.disabled = true;
        p.set_options(options);
        assert!(p.element_props().is_empty());
        assert!(!p.is_open());
        assert_eq!(
            p.drain_events(),
            [
                PopupEvent::Close(InteractionInfo::programmatic()),
                PopupEvent::UpdateOpen(false)
            ]
        );
        assert!(p.open(InteractionInfo::programmatic()).is_none());
        let out = p.handle_event(Region::Reference, &ev(EventName::PointerEnter), 0, &NoParent);
        assert_eq!(out.invoked, 0);
    }

    #[test]
    fn removing_a_trigger_removes_its_listeners() {
        let mut p = mounted(PopupOptions::tooltip());
        assert!(!p.element_props().event_names(Region::Reference).is_empty());
        let mut options = p.options().clone();
        options.triggers = Triggers::FOCUS;
        p.set_options(options);
        let names = p.element_props().event_names(Region::Reference);
        assert!(!names.contains(&EventName::PointerEnter));
        assert!(names.contains(&EventName::Focus));
    }

    #[test]
    fn controlled_open_syncs_without_update_event() {
        let mut p = mounted(PopupOptions::popover());
        let mut options = p.options().clone();
        options.open = Some(true);
        p.set_options(options.clone());
        assert!(p.is_open());
        assert_eq!(
            p.drain_events(),
            [PopupEvent::Open(InteractionInfo::programmatic())]
        );
        // Re-applying the same controlled value is quiet.
        p.set_options(options);
        assert!(p.drain_events().is_empty());
    }

    #[test]
    fn placement_change_while_open_issues_one_request() {
        let mut p = mounted(PopupOptions::popover());
        let _ = p.open(InteractionInfo::programmatic());
        let _ = p.take_requests();

        let mut options = p.options().clone();
        options.placement = Placement::Top;
        p.set_options(options);
        let requests = p.take_requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].options.placement, Placement::Top);
    }

    #[test]
    fn host_engine_resolution_emits_update() {
        let mut p = mounted(PopupOptions::popover());
        let _ = p.open(InteractionInfo::programmatic());
        let request = p.take_requests().remove(0);
        let mut data = FloatingData::unpositioned(&request.options);
        data.x = 12.0;
        assert!(p.resolve(request.id, data.clone()));
        assert_eq!(p.drain_events().last(), Some(&PopupEvent::FloatingDataUpdate(data)));

        // A failed computation changes nothing.
        let id = p.update().unwrap();
        p.reject(id);
        assert_eq!(p.floating_data().x, 12.0);
    }

    #[test]
    fn starts_open_when_controlled() {
        let p: Popup<u32> = Popup::new(PopupOptions {
            open: Some(true),
            ..PopupOptions::default()
        });
        assert!(p.is_open());
        let disabled: Popup<u32> = Popup::new(PopupOptions {
            open: Some(true),
            disabled: true,
            ..PopupOptions::default()
        });
        assert!(!disabled.is_open());
    }
}
