// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Behavior trail: the durable, timestamped log of actor behavior
//!
//! This module provides:
//! - `BehaviorLogger` - Append-only, lock-serialized writer
//! - `read_entries` / `read_sessions` - Parse the log back
//! - Line format helpers shared by both sides

mod entry;
mod format;
mod logger;
mod reader;

pub use entry::{LogEntry, Session};
pub use format::{
    entry_line, format_timestamp, message_lines, parse_line, parse_timestamp, session_marker,
    LogLine, TIMESTAMP_FORMAT,
};
pub use logger::BehaviorLogger;
pub use reader::{read_entries, read_sessions, ReadError};
