//! Owned single-shot timers driven by frame timestamps.
//!
//! Components hold a [`Timer`] per deferred action and poll it from their
//! `tick(frame_nanos)` step. Re-arming replaces the pending deadline, so at
//! most one firing is outstanding per timer.

use std::time::Duration;

/// A cancellable single-shot timer carrying a payload until it fires.
///
/// ```
/// use std::time::Duration;
/// use wheel_ui::Timer;
///
/// let mut timer = Timer::new();
/// timer.arm(1_000, Duration::from_millis(50), "settle");
/// assert_eq!(timer.poll(1_000), None);
/// assert_eq!(timer.poll(51_000_000), Some("settle"));
/// assert_eq!(timer.poll(60_000_000), None);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Timer<T> {
    pending: Option<Pending<T>>,
}

#[derive(Debug, Clone, PartialEq)]
struct Pending<T> {
    deadline_nanos: u64,
    payload: T,
}

impl<T> Timer<T> {
    /// Creates an idle timer.
    pub const fn new() -> Self {
        Self { pending: None }
    }

    /// Schedules `payload` to fire `delay` after `now_nanos`.
    ///
    /// A previously armed payload is dropped.
    pub fn arm(&mut self, now_nanos: u64, delay: Duration, payload: T) {
        let delay_nanos = u64::try_from(delay.as_nanos()).unwrap_or(u64::MAX);
        self.pending = Some(Pending {
            deadline_nanos: now_nanos.saturating_add(delay_nanos),
            payload,
        });
    }

    /// Cancels the pending firing. Returns whether one was pending.
    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }

    /// Returns whether a firing is pending.
    pub fn is_armed(&self) -> bool {
        self.pending.is_some()
    }

    /// Takes the payload if the deadline has been reached.
    pub fn poll(&mut self, now_nanos: u64) -> Option<T> {
        let due = self
            .pending
            .as_ref()
            .is_some_and(|p| now_nanos >= p.deadline_nanos);
        if due {
            self.pending.take().map(|p| p.payload)
        } else {
            None
        }
    }
}

impl<T> Default for Timer<T> {
    fn default() -> Self {
        Self::new()
    }
}
