// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `mobtrail append <message>...` - Append lines as a new session

use anyhow::{bail, Result};
use clap::Args;
use mobtrail_core::trail::message_lines;
use mobtrail_core::{BehaviorLogger, TrailConfig};
use std::io::BufRead;

#[derive(Args)]
pub struct AppendArgs {
    /// Messages to append, one line each (read from stdin when omitted)
    pub messages: Vec<String>,
}

pub fn append(args: AppendArgs, config: TrailConfig) -> Result<()> {
    if !config.enabled {
        bail!("behavior logging is disabled by config");
    }

    let messages = if args.messages.is_empty() {
        std::io::stdin().lock().lines().collect::<Result<Vec<_>, _>>()?
    } else {
        args.messages
    };

    let logger = BehaviorLogger::new(config);
    if !logger.init() {
        bail!(
            "behavior log is not writable: {}",
            logger.path().display()
        );
    }

    let mut written = 0;
    for message in &messages {
        logger.log(message);
        written += message_lines(message).len();
    }

    // A failed write disables the logger without surfacing an error
    if !logger.is_active() {
        bail!(
            "writing behavior log failed: {} (see warnings above)",
            logger.path().display()
        );
    }
    logger.close();

    tracing::info!(lines = written, path = %logger.path().display(), "appended");
    Ok(())
}
