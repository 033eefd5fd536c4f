//! Process-wide in-flight marker for risk notifications.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use common::OrderId;

/// Sentinel naming the single slot shared by every state-change notifier.
pub const GUARD_KEY: &str = "riskified-order";

/// Single-slot holder marking a risk post as in flight.
///
/// The risk API may synchronously save the order again while it is being
/// notified, which dispatches the save event back into the notifier. The
/// nested dispatch sees the slot occupied and skips posting.
///
/// The slot is process-wide, not per order: while one order is being posted,
/// notifications for every other order are skipped as well. Clones share the
/// same slot.
#[derive(Debug, Clone, Default)]
pub struct NotificationGuard {
    slot: Arc<Mutex<Option<OrderId>>>,
}

impl NotificationGuard {
    /// Creates an empty guard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the sentinel this guard is registered under.
    pub fn key(&self) -> &'static str {
        GUARD_KEY
    }

    /// Marks `order_id` as in flight if the slot is empty.
    ///
    /// Returns `None` when another post already holds the slot. The slot is
    /// released when the returned token is dropped.
    pub fn try_acquire(&self, order_id: OrderId) -> Option<InFlight> {
        let mut slot = self.lock();
        if slot.is_some() {
            return None;
        }
        *slot = Some(order_id);
        Some(InFlight {
            slot: Arc::clone(&self.slot),
            order_id,
        })
    }

    /// Returns the order currently in flight, if any.
    pub fn in_flight(&self) -> Option<OrderId> {
        *self.lock()
    }

    /// Returns true if a post is in flight.
    pub fn is_held(&self) -> bool {
        self.lock().is_some()
    }

    // A panic while holding the lock cannot leave the slot half-written, so a
    // poisoned mutex is still safe to read.
    fn lock(&self) -> MutexGuard<'_, Option<OrderId>> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Token proving a post is in flight; releases the guard on drop.
#[derive(Debug)]
#[must_use = "the guard is released as soon as the token is dropped"]
pub struct InFlight {
    slot: Arc<Mutex<Option<OrderId>>>,
    order_id: OrderId,
}

impl InFlight {
    /// The order this token was acquired for.
    pub fn order_id(&self) -> OrderId {
        self.order_id
    }
}

impl Drop for InFlight {
    fn drop(&mut self) {
        let mut slot = self.slot.lock().unwrap_or_else(PoisonError::into_inner);
        *slot = None;
    }
}
