//! Typed observer registry shared by both producers
//!
//! The original dashboards registered bare callbacks with no way to
//! unregister and no protection from one another: a throwing callback
//! silenced every callback after it for that tick. This registry fixes
//! both. Registration hands back a [`SubscriptionId`] for cancellation,
//! and (with `std`) each delivery is unwind-guarded so a panicking
//! subscriber cannot block later subscribers.
//!
//! Delivery is synchronous and in subscription order; one immutable
//! update per tick, no retry, no buffering.

#[cfg(not(feature = "std"))]
use alloc::boxed::Box;

use heapless::Vec;

use crate::constants::MAX_OBSERVERS;

/// Receives one update per producer tick
pub trait Observer<T> {
    /// Called synchronously from the producer's tick
    fn on_update(&mut self, update: &T);
}

/// Closures subscribe directly
impl<T, F> Observer<T> for F
where
    F: FnMut(&T),
{
    fn on_update(&mut self, update: &T) {
        self(update)
    }
}

/// Handle returned at registration; pass to `unsubscribe` to cancel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriptionId(u32);

/// Fixed-capacity list of subscribers for one update type
pub struct ObserverRegistry<T> {
    entries: Vec<(SubscriptionId, Box<dyn Observer<T>>), MAX_OBSERVERS>,
    next_id: u32,
    faults: u32,
}

impl<T> ObserverRegistry<T> {
    /// Empty registry
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 0,
            faults: 0,
        }
    }

    /// Register a subscriber. Returns `None` when the registry is full.
    pub fn subscribe(&mut self, observer: Box<dyn Observer<T>>) -> Option<SubscriptionId> {
        let id = SubscriptionId(self.next_id);
        self.entries.push((id, observer)).ok()?;
        self.next_id += 1;
        Some(id)
    }

    /// Cancel a subscription. Returns whether the handle was live.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        match self.entries.iter().position(|(e, _)| *e == id) {
            Some(idx) => {
                self.entries.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Deliver one update to every subscriber, in subscription order.
    ///
    /// A subscriber that panics is logged and skipped; the remaining
    /// subscribers still receive the update.
    pub fn notify(&mut self, update: &T) {
        for (id, observer) in self.entries.iter_mut() {
            #[cfg(feature = "std")]
            {
                use std::panic::{catch_unwind, AssertUnwindSafe};
                if catch_unwind(AssertUnwindSafe(|| observer.on_update(update))).is_err() {
                    self.faults += 1;
                    log::warn!("observer {:?} panicked; update skipped", id);
                }
            }
            #[cfg(not(feature = "std"))]
            {
                let _ = id;
                observer.on_update(update);
            }
        }
    }

    /// Number of live subscriptions
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nobody is subscribed
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Deliveries lost to panicking subscribers since construction
    pub fn fault_count(&self) -> u32 {
        self.faults
    }
}

impl<T> Default for ObserverRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}
