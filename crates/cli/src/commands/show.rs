// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `mobtrail show` - Print trail entries

use crate::output::{print_list, OutputFormat};
use anyhow::{bail, Result};
use clap::Args;
use mobtrail_core::{read_sessions, LogEntry, Session, TrailConfig};

#[derive(Args, Default)]
pub struct ShowArgs {
    /// Only entries from this session index (see `mobtrail sessions`)
    #[arg(long, conflicts_with = "last")]
    pub session: Option<usize>,

    /// Only entries from the most recent session
    #[arg(long)]
    pub last: bool,

    /// Only entries whose message contains this text
    #[arg(long)]
    pub grep: Option<String>,

    /// Only the final N matching entries
    #[arg(long, short = 'n')]
    pub lines: Option<usize>,

    #[arg(long, value_enum, default_value_t)]
    pub format: OutputFormat,
}

pub fn show(args: ShowArgs, config: TrailConfig) -> Result<()> {
    let sessions = read_sessions(&config.log_path)?;
    let entries = select_entries(sessions, &args)?;
    print_list(&entries, args.format)
}

/// Apply session, text and count filters, in that order
pub fn select_entries(sessions: Vec<Session>, args: &ShowArgs) -> Result<Vec<LogEntry>> {
    let count = sessions.len();
    let scoped: Vec<Session> = match (args.session, args.last) {
        (Some(index), _) => match sessions.into_iter().nth(index) {
            Some(session) => vec![session],
            None => bail!("no session {} (trail has {})", index, count),
        },
        (None, true) => sessions.into_iter().last().into_iter().collect(),
        (None, false) => sessions,
    };

    let mut entries: Vec<LogEntry> = scoped
        .into_iter()
        .flat_map(|s| s.entries)
        .filter(|e| {
            args.grep
                .as_deref()
                .map_or(true, |needle| e.message.contains(needle))
        })
        .collect();

    if let Some(n) = args.lines {
        let skip = entries.len().saturating_sub(n);
        entries.drain(..skip);
    }

    Ok(entries)
}

#[cfg(test)]
#[path = "show_tests.rs"]
mod tests;
