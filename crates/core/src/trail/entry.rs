// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::format::format_timestamp;
use chrono::NaiveDateTime;
use serde::{Serialize, Serializer};
use std::fmt;

/// One timestamped line of the behavior log
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogEntry {
    #[serde(serialize_with = "serialize_timestamp")]
    pub timestamp: NaiveDateTime,
    pub message: String,
}

impl LogEntry {
    pub fn new(timestamp: NaiveDateTime, message: impl Into<String>) -> Self {
        Self {
            timestamp,
            message: message.into(),
        }
    }
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", format_timestamp(&self.timestamp), self.message)
    }
}

/// Entries between two session markers
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Session {
    /// None for entries written before the first marker
    #[serde(serialize_with = "serialize_optional_timestamp")]
    pub started_at: Option<NaiveDateTime>,
    pub entries: Vec<LogEntry>,
}

fn serialize_timestamp<S: Serializer>(ts: &NaiveDateTime, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&format_timestamp(ts))
}

fn serialize_optional_timestamp<S: Serializer>(
    ts: &Option<NaiveDateTime>,
    s: S,
) -> Result<S::Ok, S::Error> {
    match ts {
        Some(ts) => s.serialize_some(&format_timestamp(ts)),
        None => s.serialize_none(),
    }
}
