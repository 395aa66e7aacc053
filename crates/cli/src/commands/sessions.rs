// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `mobtrail sessions` - List logger sessions in a trail

use crate::output::{print_list, OutputFormat};
use anyhow::Result;
use clap::Args;
use mobtrail_core::trail::format_timestamp;
use mobtrail_core::{read_sessions, Session, TrailConfig};
use serde::Serialize;
use std::fmt;

#[derive(Args)]
pub struct SessionsArgs {
    #[arg(long, value_enum, default_value_t)]
    pub format: OutputFormat,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct SessionSummary {
    pub index: usize,
    pub started_at: Option<String>,
    pub entries: usize,
}

impl SessionSummary {
    pub fn from_session(index: usize, session: &Session) -> Self {
        Self {
            index,
            started_at: session.started_at.as_ref().map(format_timestamp),
            entries: session.entries.len(),
        }
    }
}

impl fmt::Display for SessionSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<4} {:<23} {} entries",
            self.index,
            self.started_at.as_deref().unwrap_or("-"),
            self.entries
        )
    }
}

pub fn sessions(args: SessionsArgs, config: TrailConfig) -> Result<()> {
    let summaries: Vec<_> = read_sessions(&config.log_path)?
        .iter()
        .enumerate()
        .map(|(i, s)| SessionSummary::from_session(i, s))
        .collect();

    if summaries.is_empty() && matches!(args.format, OutputFormat::Text) {
        println!("No sessions");
        return Ok(());
    }
    print_list(&summaries, args.format)
}
