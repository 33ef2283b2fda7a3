//! Single-slot debounce timer.
//!
//! The slot holds at most one pending value and its deadline. Arming the
//! slot again replaces both: the superseded value is dropped and the quiet
//! period restarts. Nothing accumulates, so a burst of edits costs one slot.
//! The owner drives the clock by sleeping until [`Debouncer::deadline`] and
//! then calling [`Debouncer::take_due`].

#[cfg(test)]
#[path = "debounce_test.rs"]
mod debounce_test;

use std::time::Duration;

use tokio::time::Instant;

#[derive(Debug)]
struct Pending<T> {
    deadline: Instant,
    value: T,
}

#[derive(Debug)]
pub struct Debouncer<T> {
    quiet: Duration,
    slot: Option<Pending<T>>,
}

impl<T> Debouncer<T> {
    #[must_use]
    pub fn new(quiet: Duration) -> Self {
        Self { quiet, slot: None }
    }

    #[must_use]
    pub fn quiet_period(&self) -> Duration {
        self.quiet
    }

    /// Store `value` and restart the quiet period from `now`.
    ///
    /// Returns the superseded value, if any.
    pub fn arm(&mut self, value: T, now: Instant) -> Option<T> {
        let previous = self.slot.replace(Pending { deadline: now + self.quiet, value });
        previous.map(|p| p.value)
    }

    /// When the pending value becomes due, if one is pending.
    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.slot.as_ref().map(|p| p.deadline)
    }

    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.slot.is_some()
    }

    /// Take the pending value if its quiet period has elapsed at `now`.
    pub fn take_due(&mut self, now: Instant) -> Option<T> {
        match &self.slot {
            Some(p) if p.deadline <= now => self.slot.take().map(|p| p.value),
            _ => None,
        }
    }

    /// Drop the pending value without firing.
    pub fn cancel(&mut self) -> Option<T> {
        self.slot.take().map(|p| p.value)
    }
}
