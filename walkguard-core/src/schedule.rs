//! Recurring-tick scheduling
//!
//! The producers originally rescheduled themselves through host timer
//! callbacks. Here each one owns a [`RecurringTask`] instead: an armed
//! deadline that the composition loop polls with the current timestamp.
//! No host event-loop primitive leaks into the components, and tests
//! drive ticks by stepping a clock.
//!
//! `poll` reports at most one elapsed deadline per call. Movement is
//! tick-driven, not time-driven: a late poll advances the walker by one
//! waypoint, never several.

use crate::time::Timestamp;

/// An armed, repeating deadline owned by a producer
#[derive(Debug, Clone)]
pub struct RecurringTask {
    interval_ms: u64,
    next_due: Option<Timestamp>,
}

impl RecurringTask {
    /// Task firing every `interval_ms`, initially disarmed
    pub fn new(interval_ms: u64) -> Self {
        Self {
            interval_ms,
            next_due: None,
        }
    }

    /// Arm the task; first deadline is one interval from `now`
    pub fn start(&mut self, now: Timestamp) {
        self.next_due = Some(now + self.interval_ms);
    }

    /// Disarm the task. Idempotent; a pending deadline never fires.
    pub fn stop(&mut self) {
        self.next_due = None;
    }

    /// Whether the task is armed
    pub fn is_running(&self) -> bool {
        self.next_due.is_some()
    }

    /// Check the deadline against `now`.
    ///
    /// Returns `true` at most once per call when the deadline has
    /// elapsed, re-arming one interval from `now`.
    pub fn poll(&mut self, now: Timestamp) -> bool {
        match self.next_due {
            Some(due) if now >= due => {
                self.next_due = Some(now + self.interval_ms);
                true
            }
            _ => false,
        }
    }
}
