// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! mobtrail-core: behavior trail for actor AI
//!
//! This crate provides:
//! - An append-only, timestamped behavior log and its reader
//! - A synchronous notification bus for UI overlays and test harnesses
//! - Rendering of actor lifecycle and transition events
//! - A key-echoing message lookup for builds without string tables

pub mod clock;
pub mod config;

pub mod actor;
pub mod messages;
pub mod notify;
pub mod reporter;
pub mod trail;

// Re-exports
pub use actor::{ActorEvent, ActorId};
pub use clock::{Clock, FakeClock, SystemClock};
pub use config::{ConfigError, TrailConfig};
pub use messages::{KeyEcho, Localizer};
pub use notify::{MessageRecorder, NotificationBus, SubscriberId};
pub use reporter::BehaviorReporter;
pub use trail::{read_entries, read_sessions, BehaviorLogger, LogEntry, ReadError, Session};
