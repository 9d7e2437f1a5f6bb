// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Interaction context: the owned "active" flag and delay arbitration.
//!
//! ## Overview
//!
//! [`InteractionContext`] owns a single boolean (open/closed, shown/hidden) and is
//! the only place it changes. Handlers mutate it through two entry points:
//!
//! - [`InteractionContext::set_active`]: apply now, canceling any pending timer.
//! - [`InteractionContext::delay_set_active`]: apply after a delay, arbitrated
//!   against any transition already in flight.
//!
//! ## Arbitration
//!
//! A pending delayed transition towards state `S` is only replaced by a newer request
//! towards `S` when the newer one would complete no later than the pending one.
//! Requests towards the opposite state always replace the pending timer, and a
//! request towards the current state cancels it (the pending timer necessarily
//! targets the other state). This keeps a slow hover-leave from overriding a fast
//! pointer re-entry.
//!
//! ```
//! use understory_interaction::context::InteractionContext;
//! use understory_interaction::types::InteractionInfo;
//!
//! let mut cx: InteractionContext<u32> = InteractionContext::new(false);
//! let info = InteractionInfo::programmatic();
//!
//! // Open in 500ms, then ask again at t=100 for 300ms: 400 < 500, so the timer is reset.
//! assert!(cx.delay_set_active(0, true, Some(500), info).is_none());
//! assert!(cx.delay_set_active(100, true, Some(300), info).is_none());
//! assert_eq!(cx.next_deadline(), Some(400));
//!
//! let change = cx.poll(400).unwrap();
//! assert!(change.active);
//! assert!(cx.is_active());
//! ```

use crate::delay::DelayController;
use crate::types::InteractionInfo;

/// One call to [`InteractionContext::delay_set_active`].
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Attempt<K> {
    /// Requested state.
    pub active: bool,
    /// Requested delay in milliseconds; `None` when applied immediately.
    pub delay: Option<u64>,
    /// Timestamp of the request.
    pub started_at: u64,
    /// Provenance of the request.
    pub info: InteractionInfo<K>,
}

impl<K> Attempt<K> {
    /// Milliseconds left before this attempt fires, as seen at `now`.
    ///
    /// Returns `None` when the attempt had no delay recorded.
    pub fn remaining(&self, now: u64) -> Option<u64> {
        let elapsed = now.saturating_sub(self.started_at);
        self.delay.map(|d| d.saturating_sub(elapsed))
    }
}

/// Bookkeeping for delayed transitions.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct DelayInfo<K> {
    /// The attempt whose timer is currently scheduled.
    pub final_attempt: Option<Attempt<K>>,
    /// The most recent attempt seen, scheduled or not.
    pub last_try: Option<Attempt<K>>,
}

impl<K> Default for DelayInfo<K> {
    fn default() -> Self {
        Self {
            final_attempt: None,
            last_try: None,
        }
    }
}

/// A transition of the active flag.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct ActiveChange<K> {
    /// New value of the flag.
    pub active: bool,
    /// Provenance of the attempt that produced it.
    pub info: InteractionInfo<K>,
}

/// Owned active flag with delayed mutators.
///
/// Pass it by `&mut` to handlers; there is no shared or ambient state.
#[derive(Clone, Debug)]
pub struct InteractionContext<K> {
    active: bool,
    info: Option<InteractionInfo<K>>,
    delay_info: DelayInfo<K>,
    timer: DelayController<ActiveChange<K>>,
}

impl<K: Copy> InteractionContext<K> {
    /// Create a context with the given initial state.
    pub fn new(active: bool) -> Self {
        Self {
            active,
            info: None,
            delay_info: DelayInfo::default(),
            timer: DelayController::new(),
        }
    }

    /// Current value of the flag.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Provenance of the most recent attempt, if any.
    pub fn info(&self) -> Option<&InteractionInfo<K>> {
        self.info.as_ref()
    }

    /// Delay bookkeeping.
    pub fn delay_info(&self) -> &DelayInfo<K> {
        &self.delay_info
    }

    /// Deadline of the pending transition, if any.
    pub fn next_deadline(&self) -> Option<u64> {
        self.timer.deadline()
    }

    /// Target state of the pending transition, if any.
    pub fn pending_target(&self) -> Option<bool> {
        self.timer.pending().map(|c| c.active)
    }

    /// Set the flag immediately, canceling any pending delayed transition.
    ///
    /// Returns the change if the flag actually flipped.
    pub fn set_active(&mut self, active: bool, info: InteractionInfo<K>) -> Option<ActiveChange<K>> {
        if self.timer.clear() {
            #[cfg(feature = "tracing")]
            tracing::debug!(target: "understory_interaction", active, "pending transition canceled by set_active");
        }
        self.delay_info.final_attempt = None;
        self.apply(ActiveChange { active, info })
    }

    /// Request a transition to `active` after `delay` milliseconds.
    ///
    /// See the [module docs](self) for the arbitration rules. Returns the change
    /// when it was applied synchronously (zero or absent delay).
    pub fn delay_set_active(
        &mut self,
        now: u64,
        active: bool,
        delay: Option<u64>,
        info: InteractionInfo<K>,
    ) -> Option<ActiveChange<K>> {
        let attempt = Attempt {
            active,
            delay,
            started_at: now,
            info,
        };
        self.info = Some(info);
        self.delay_info.last_try = Some(attempt);

        if active == self.active {
            if self.timer.clear() {
                #[cfg(feature = "tracing")]
                tracing::debug!(target: "understory_interaction", active, "pending transition canceled");
            }
            self.delay_info.final_attempt = None;
            return None;
        }

        let should_reset = match (&self.delay_info.final_attempt, self.timer.is_pending()) {
            (Some(prev), true) => {
                prev.active != active
                    || match prev.remaining(now) {
                        None => true,
                        Some(remaining) => delay.unwrap_or(0) <= remaining,
                    }
            }
            _ => true,
        };

        if !should_reset {
            #[cfg(feature = "tracing")]
            tracing::debug!(target: "understory_interaction", active, ?delay, "in-flight transition kept");
            return None;
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(target: "understory_interaction", active, ?delay, "transition scheduled");
        self.delay_info.final_attempt = Some(attempt);
        let fired = self.timer.reset(now, delay, ActiveChange { active, info })?;
        self.delay_info.final_attempt = None;
        self.apply(fired)
    }

    /// Complete a due delayed transition.
    pub fn poll(&mut self, now: u64) -> Option<ActiveChange<K>> {
        let fired = self.timer.poll(now)?;
        #[cfg(feature = "tracing")]
        tracing::debug!(target: "understory_interaction", active = fired.active, now, "delayed transition fired");
        self.delay_info.final_attempt = None;
        self.apply(fired)
    }

    /// Cancel the pending delayed transition without applying it.
    pub fn cancel_pending(&mut self) -> bool {
        self.delay_info.final_attempt = None;
        self.timer.clear()
    }

    fn apply(&mut self, change: ActiveChange<K>) -> Option<ActiveChange<K>> {
        self.info = Some(change.info);
        if self.active == change.active {
            return None;
        }
        self.active = change.active;
        Some(change)
    }
}
