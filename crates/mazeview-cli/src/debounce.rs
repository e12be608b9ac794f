//! Delay-and-coalesce timing for bursty input.

use std::time::{Duration, Instant};

/// Collapses a burst of calls into a single delayed delivery.
///
/// [`call`](Self::call) schedules a value for delivery once the wait window
/// elapses with no further calls; calling again within the window discards
/// the earlier value and restarts the window. The owner polls on its event
/// loop tick and receives the value at most once per scheduled call.
/// Delivery is fire-and-forget; nothing is returned to the caller of
/// `call`.
///
/// A pending delivery keeps no background timer. Owners tearing down their
/// context must still [`cancel`](Self::cancel) so a later poll cannot
/// deliver into a context that is gone.
#[derive(Debug)]
pub struct Debouncer<T> {
    /// Wait window.
    wait: Duration,
    /// Delivery deadline and the value scheduled for it.
    pending: Option<(Instant, T)>,
}

impl<T> Debouncer<T> {
    /// Creates a debouncer with the given wait window.
    #[must_use]
    pub const fn new(wait: Duration) -> Self {
        Self {
            wait,
            pending: None,
        }
    }

    /// Schedules `value` for delivery after the wait window, replacing any
    /// pending value and restarting the window.
    pub fn call(&mut self, value: T) {
        self.call_at(Instant::now(), value);
    }

    /// [`call`](Self::call) with an explicit current time.
    #[allow(clippy::arithmetic_side_effects)]
    pub fn call_at(&mut self, now: Instant, value: T) {
        self.pending = Some((now + self.wait, value));
    }

    /// Delivers the pending value once its window has elapsed.
    pub fn poll(&mut self) -> Option<T> {
        self.poll_at(Instant::now())
    }

    /// [`poll`](Self::poll) with an explicit current time.
    pub fn poll_at(&mut self, now: Instant) -> Option<T> {
        let due = self
            .pending
            .as_ref()
            .is_some_and(|(deadline, _)| *deadline <= now);
        if due {
            self.pending.take().map(|(_, value)| value)
        } else {
            None
        }
    }

    /// Drops any pending value. No effect when none is pending.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// Returns true while a value awaits delivery.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}
