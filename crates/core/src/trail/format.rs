// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Line format of the behavior log
//!
//! Entry lines look like `[2026-01-01 12:00:00.000] message`. Each logger
//! session starts with a blank line followed by
//! `=== New Session Started at 2026-01-01 12:00:00.000 ===`.

use super::entry::LogEntry;
use chrono::NaiveDateTime;

/// Millisecond-precision timestamp layout used on every line
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

const MARKER_PREFIX: &str = "=== New Session Started at ";
const MARKER_SUFFIX: &str = " ===";

/// A classified line from the log file
#[derive(Debug, Clone, PartialEq)]
pub enum LogLine {
    Entry(LogEntry),
    SessionStart(NaiveDateTime),
    Blank,
    /// Anything else, e.g. text appended by another tool
    Unrecognized(String),
}

pub fn format_timestamp(timestamp: &NaiveDateTime) -> String {
    timestamp.format(TIMESTAMP_FORMAT).to_string()
}

pub fn parse_timestamp(text: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(text, TIMESTAMP_FORMAT).ok()
}

/// Render a complete entry line, including the trailing newline
pub fn entry_line(timestamp: &NaiveDateTime, message: &str) -> String {
    format!("[{}] {}\n", format_timestamp(timestamp), message)
}

/// Split a message into the lines it occupies in the log
///
/// `\n`, `\r\n` and a lone `\r` all break lines and one trailing break is
/// dropped. An empty message still occupies one (empty) line.
pub fn message_lines(message: &str) -> Vec<&str> {
    let body = message
        .strip_suffix("\r\n")
        .or_else(|| message.strip_suffix('\n'))
        .or_else(|| message.strip_suffix('\r'))
        .unwrap_or(message);
    body.split("\r\n")
        .flat_map(|part| part.split(['\n', '\r']))
        .collect()
}

/// Render the session marker, including its leading blank line
pub fn session_marker(timestamp: &NaiveDateTime) -> String {
    format!(
        "\n{}{}{}\n",
        MARKER_PREFIX,
        format_timestamp(timestamp),
        MARKER_SUFFIX
    )
}

/// Classify a single line (without its trailing newline)
pub fn parse_line(line: &str) -> LogLine {
    let line = line.strip_suffix('\r').unwrap_or(line);
    if line.trim().is_empty() {
        return LogLine::Blank;
    }

    if let Some(ts) = line
        .strip_prefix(MARKER_PREFIX)
        .and_then(|rest| rest.strip_suffix(MARKER_SUFFIX))
        .and_then(parse_timestamp)
    {
        return LogLine::SessionStart(ts);
    }

    if let Some((ts, message)) = line
        .strip_prefix('[')
        .and_then(|rest| rest.split_once("] "))
    {
        if let Some(timestamp) = parse_timestamp(ts) {
            return LogLine::Entry(LogEntry::new(timestamp, message));
        }
    }

    LogLine::Unrecognized(line.to_string())
}

#[cfg(test)]
#[path = "format_tests.rs"]
mod tests;
