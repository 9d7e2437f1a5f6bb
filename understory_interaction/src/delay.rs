// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A single-slot, polled delay timer.
//!
//! [`DelayController`] holds at most one pending payload together with its deadline.
//! It never reads a clock: callers pass `now` in milliseconds and drive expiry with
//! [`DelayController::poll`], typically from the host's timer or frame callback
//! scheduled at [`DelayController::deadline`].
//!
//! ```
//! use understory_interaction::delay::DelayController;
//!
//! let mut timer = DelayController::new();
//! // Zero delay fires synchronously and schedules nothing.
//! assert_eq!(timer.reset(0, Some(0), "now"), Some("now"));
//! assert!(!timer.is_pending());
//!
//! // A positive delay is scheduled; resetting replaces it.
//! assert_eq!(timer.reset(0, Some(100), "first"), None);
//! assert_eq!(timer.reset(10, Some(50), "second"), None);
//! assert_eq!(timer.deadline(), Some(60));
//! assert_eq!(timer.poll(59), None);
//! assert_eq!(timer.poll(60), Some("second"));
//! ```

#[derive(Clone, Debug, PartialEq, Eq)]
struct Scheduled<T> {
    deadline: u64,
    payload: T,
}

/// Cancelable single-slot timer over a payload `T`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DelayController<T> {
    pending: Option<Scheduled<T>>,
}

impl<T> Default for DelayController<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> DelayController<T> {
    /// Create an idle controller.
    pub const fn new() -> Self {
        Self { pending: None }
    }

    /// Schedule `payload` to fire `delay` milliseconds after `now`.
    ///
    /// Any previously pending payload is dropped without firing. When `delay` is
    /// `None` or zero no timer is created and the payload is returned right away.
    pub fn reset(&mut self, now: u64, delay: Option<u64>, payload: T) -> Option<T> {
        self.pending = None;
        match delay {
            None | Some(0) => Some(payload),
            Some(ms) => {
                self.pending = Some(Scheduled {
                    deadline: now.saturating_add(ms),
                    payload,
                });
                None
            }
        }
    }

    /// Cancel the pending payload without firing it.
    ///
    /// Returns `true` if something was pending.
    pub fn clear(&mut self) -> bool {
        self.pending.take().is_some()
    }

    /// Fire the pending payload if its deadline has passed.
    pub fn poll(&mut self, now: u64) -> Option<T> {
        if self.pending.as_ref().is_some_and(|s| now >= s.deadline) {
            self.pending.take().map(|s| s.payload)
        } else {
            None
        }
    }

    /// Deadline of the pending payload, if any.
    pub fn deadline(&self) -> Option<u64> {
        self.pending.as_ref().map(|s| s.deadline)
    }

    /// Whether a payload is waiting to fire.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Borrow the pending payload.
    pub fn pending(&self) -> Option<&T> {
        self.pending.as_ref().map(|s| &s.payload)
    }
}
