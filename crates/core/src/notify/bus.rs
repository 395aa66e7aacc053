// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Synchronous notification bus

use std::fmt;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

/// Callback invoked with each published message
pub type Handler = Arc<dyn Fn(&str) + Send + Sync>;

/// Subscriber handle for unsubscribing
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriberId(pub u64);

impl fmt::Display for SubscriberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sub-{}", self.0)
    }
}

/// Delivers human-readable messages to every subscriber, in registration
/// order, on the publisher's thread
///
/// Clones share the same subscriber list.
#[derive(Clone)]
pub struct NotificationBus {
    subscribers: Arc<Mutex<Vec<(SubscriberId, Handler)>>>,
    next_id: Arc<AtomicU64>,
}

impl NotificationBus {
    pub fn new() -> Self {
        Self {
            subscribers: Arc::new(Mutex::new(Vec::new())),
            next_id: Arc::new(AtomicU64::new(1)),
        }
    }

    /// Register a handler; every call gets a fresh id, so registering the
    /// same handler twice delivers twice
    pub fn subscribe<F>(&self, handler: F) -> SubscriberId
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        let id = SubscriberId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.lock().push((id, Arc::new(handler)));
        id
    }

    /// Remove one subscriber; returns false if it was not registered
    pub fn unsubscribe(&self, id: &SubscriberId) -> bool {
        let mut subs = self.lock();
        let before = subs.len();
        subs.retain(|(sub_id, _)| sub_id != id);
        subs.len() != before
    }

    /// Remove every subscriber
    pub fn clear(&self) {
        self.lock().clear();
    }

    /// Deliver `text` to the subscribers registered at the time of the call
    ///
    /// Handlers run outside the registry lock, so they may subscribe,
    /// unsubscribe or publish themselves. A panicking handler is reported
    /// and skipped; the rest still receive the message. Returns the number
    /// of handlers that completed.
    ///
    /// Publishes are not serialized against each other: every handler sees
    /// one thread's messages in that thread's order, but messages from
    /// concurrent publishers may reach different handlers in different
    /// orders.
    pub fn publish(&self, text: &str) -> usize {
        let snapshot: Vec<(SubscriberId, Handler)> = self.lock().clone();

        let mut delivered = 0;
        for (id, handler) in snapshot {
            match catch_unwind(AssertUnwindSafe(|| handler(text))) {
                Ok(()) => delivered += 1,
                Err(panic) => {
                    tracing::warn!(
                        subscriber = %id,
                        panic = panic_message(panic.as_ref()),
                        "notification subscriber panicked"
                    );
                }
            }
        }
        delivered
    }

    /// Get count of active subscribers
    pub fn subscriber_count(&self) -> usize {
        self.lock().len()
    }

    /// List subscriber ids in delivery order
    pub fn list_subscriptions(&self) -> Vec<SubscriberId> {
        self.lock().iter().map(|(id, _)| *id).collect()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<(SubscriberId, Handler)>> {
        self.subscribers.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Default for NotificationBus {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for NotificationBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NotificationBus")
            .field("subscribers", &self.list_subscriptions())
            .finish()
    }
}

fn panic_message(panic: &(dyn std::any::Any + Send)) -> &str {
    if let Some(s) = panic.downcast_ref::<&str>() {
        s
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.as_str()
    } else {
        "non-string panic payload"
    }
}

#[cfg(test)]
#[path = "bus_tests.rs"]
mod tests;
