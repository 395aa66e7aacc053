// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Read a behavior log back into entries and sessions

use super::entry::{LogEntry, Session};
use super::format::{parse_line, LogLine};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
#[error("failed to read behavior log {path}: {source}")]
pub struct ReadError {
    pub path: PathBuf,
    pub source: std::io::Error,
}

/// All entries in file order; a missing file reads as empty
pub fn read_entries(path: &Path) -> Result<Vec<LogEntry>, ReadError> {
    Ok(read_sessions(path)?
        .into_iter()
        .flat_map(|s| s.entries)
        .collect())
}

/// Group entries by the session marker that precedes them
///
/// Entries before the first marker form a session with no start time.
/// Unrecognized lines are skipped.
pub fn read_sessions(path: &Path) -> Result<Vec<Session>, ReadError> {
    let read_err = |source| ReadError {
        path: path.to_path_buf(),
        source,
    };

    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(vec![]),
        Err(e) => return Err(read_err(e)),
    };

    let mut sessions: Vec<Session> = Vec::new();
    for line in BufReader::new(file).lines() {
        match parse_line(&line.map_err(read_err)?) {
            LogLine::SessionStart(started_at) => sessions.push(Session {
                started_at: Some(started_at),
                entries: Vec::new(),
            }),
            LogLine::Entry(entry) => match sessions.last_mut() {
                Some(session) => session.entries.push(entry),
                None => sessions.push(Session {
                    started_at: None,
                    entries: vec![entry],
                }),
            },
            LogLine::Unrecognized(text) => {
                tracing::trace!(line = %text, "skipping unrecognized log line");
            }
            LogLine::Blank => {}
        }
    }

    Ok(sessions)
}

#[cfg(test)]
#[path = "reader_tests.rs"]
mod tests;
