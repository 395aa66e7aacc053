// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Single call path from actor events to the bus and the behavior log

use crate::actor::ActorEvent;
use crate::clock::{Clock, SystemClock};
use crate::notify::NotificationBus;
use crate::trail::BehaviorLogger;
use std::sync::Arc;

/// Renders an actor event once, publishes it, then appends it to the log
#[derive(Clone)]
pub struct BehaviorReporter<C: Clock = SystemClock> {
    logger: Arc<BehaviorLogger<C>>,
    bus: NotificationBus,
}

impl<C: Clock> BehaviorReporter<C> {
    pub fn new(logger: Arc<BehaviorLogger<C>>, bus: NotificationBus) -> Self {
        Self { logger, bus }
    }

    /// Report a structured event; returns the rendered text
    pub fn report(&self, event: &ActorEvent) -> String {
        let text = event.describe();
        tracing::trace!(actor = %event.actor(), kind = event.kind(), "actor event");
        self.report_text(&text);
        text
    }

    /// Report free text, e.g. a message built by the caller
    pub fn report_text(&self, text: &str) {
        self.bus.publish(text);
        self.logger.log(text);
    }

    pub fn bus(&self) -> &NotificationBus {
        &self.bus
    }

    pub fn logger(&self) -> &BehaviorLogger<C> {
        &self.logger
    }
}

#[cfg(test)]
#[path = "reporter_tests.rs"]
mod tests;
