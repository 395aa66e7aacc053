// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! In-process notifications
//!
//! Producers publish plain-text messages; subscribers (UI overlays, test
//! harnesses) receive them synchronously in publish order.

mod bus;
mod recorder;

pub use bus::{Handler, NotificationBus, SubscriberId};
pub use recorder::MessageRecorder;
