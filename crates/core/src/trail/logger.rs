// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Append-only behavior logger
//!
//! The logger is a diagnostic side channel: it must never take down the
//! host it observes. Every I/O failure is reported through `tracing` and
//! then swallowed, leaving the logger disabled for the rest of its life.

use super::format::{entry_line, message_lines, session_marker};
use crate::clock::{Clock, SystemClock};
use crate::config::TrailConfig;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};
use thiserror::Error;

#[derive(Debug, Error)]
enum LogError {
    #[error("failed to open behavior log {path}: {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to write behavior log {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

enum State {
    /// Not opened yet; the first `init` or `log` opens the file
    Pending,
    Open(File),
    /// Open or write failed, or logging is disabled by config
    Disabled,
    /// `close` was called; terminal
    Closed,
}

/// Timestamped, append-only log of actor behavior
///
/// One instance owns the log file for its whole lifetime. Share it with
/// `Arc` when several threads report; writes are serialized by an internal
/// lock so lines never interleave.
pub struct BehaviorLogger<C: Clock = SystemClock> {
    config: TrailConfig,
    clock: C,
    state: Mutex<State>,
}

impl BehaviorLogger<SystemClock> {
    pub fn new(config: TrailConfig) -> Self {
        Self::with_clock(config, SystemClock)
    }
}

impl<C: Clock> BehaviorLogger<C> {
    /// Create a logger without touching the file system
    pub fn with_clock(config: TrailConfig, clock: C) -> Self {
        Self {
            config,
            clock,
            state: Mutex::new(State::Pending),
        }
    }

    /// Open the log file and write the session marker
    ///
    /// Called implicitly by the first `log`. Returns whether the logger is
    /// active afterwards. Never retries a failed open.
    pub fn init(&self) -> bool {
        let mut state = self.lock();
        self.ensure_open(&mut state);
        matches!(*state, State::Open(_))
    }

    /// Append `[timestamp] message` and flush before returning
    ///
    /// A message spanning several lines becomes one entry per line, all
    /// with the same timestamp and written together.
    pub fn log(&self, message: &str) {
        let mut state = self.lock();
        self.ensure_open(&mut state);

        let State::Open(file) = &mut *state else {
            return;
        };

        let now = self.clock.now();
        let text: String = message_lines(message)
            .into_iter()
            .map(|line| entry_line(&now, line))
            .collect();
        if let Err(e) = self.write(file, &text) {
            tracing::warn!(error = %e, "behavior logging disabled");
            *state = State::Disabled;
        }
    }

    /// Flush and release the file; later `log` calls do nothing
    pub fn close(&self) {
        let mut state = self.lock();
        if let State::Open(file) = &mut *state {
            if let Err(e) = file.flush() {
                tracing::warn!(path = %self.config.log_path.display(), error = %e, "failed to flush behavior log");
            }
            tracing::debug!(path = %self.config.log_path.display(), "behavior log closed");
        }
        *state = State::Closed;
    }

    /// Whether the file is currently open for writing
    pub fn is_active(&self) -> bool {
        matches!(*self.lock(), State::Open(_))
    }

    pub fn path(&self) -> &Path {
        &self.config.log_path
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn ensure_open(&self, state: &mut State) {
        if !matches!(state, State::Pending) {
            return;
        }

        if !self.config.enabled {
            tracing::debug!("behavior logging disabled by config");
            *state = State::Disabled;
            return;
        }

        *state = match self.open() {
            Ok(file) => {
                tracing::debug!(path = %self.config.log_path.display(), "behavior log opened");
                State::Open(file)
            }
            Err(e) => {
                tracing::warn!(error = %e, "behavior logging disabled");
                State::Disabled
            }
        };
    }

    fn open(&self) -> Result<File, LogError> {
        let path = &self.config.log_path;
        let open_err = |source| LogError::Open {
            path: path.clone(),
            source,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(open_err)?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(open_err)?;

        self.write(&mut file, &session_marker(&self.clock.now()))?;
        Ok(file)
    }

    /// One `write_all` per call so concurrent appenders never split an entry
    fn write(&self, file: &mut File, text: &str) -> Result<(), LogError> {
        let write_err = |source| LogError::Write {
            path: self.config.log_path.clone(),
            source,
        };

        file.write_all(text.as_bytes()).map_err(write_err)?;
        file.flush().map_err(write_err)?;
        if self.config.sync {
            file.sync_data().map_err(write_err)?;
        }
        Ok(())
    }
}

impl<C: Clock> Drop for BehaviorLogger<C> {
    fn drop(&mut self) {
        self.close();
    }
}

#[cfg(test)]
#[path = "logger_tests.rs"]
mod tests;
