// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Collecting subscriber for assertions and message overlays

use super::bus::{NotificationBus, SubscriberId};
use std::sync::{Arc, Mutex, MutexGuard};

/// Records every message it receives, in delivery order
#[derive(Clone, Default, Debug)]
pub struct MessageRecorder {
    messages: Arc<Mutex<Vec<String>>>,
}

impl MessageRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe this recorder to `bus`
    pub fn attach(&self, bus: &NotificationBus) -> SubscriberId {
        let recorder = self.clone();
        bus.subscribe(move |text| recorder.record(text))
    }

    pub fn record(&self, text: &str) {
        self.lock().push(text.to_string());
    }

    /// Get all recorded messages
    pub fn messages(&self) -> Vec<String> {
        self.lock().clone()
    }

    /// Whether any recorded message contains `needle`
    pub fn contains(&self, needle: &str) -> bool {
        self.lock().iter().any(|m| m.contains(needle))
    }

    /// Whether a single recorded message contains every needle
    pub fn contains_all(&self, needles: &[&str]) -> bool {
        self.lock()
            .iter()
            .any(|m| needles.iter().all(|n| m.contains(n)))
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> MutexGuard<'_, Vec<String>> {
        self.messages.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[cfg(test)]
#[path = "recorder_tests.rs"]
mod tests;
