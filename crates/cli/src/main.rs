// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! mobtrail - inspect and append to actor behavior trails

mod commands;
mod output;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use commands::{append, sessions, show};
use mobtrail_core::TrailConfig;
use std::path::PathBuf;

/// Env var holding the tracing filter for diagnostics on stderr
const LOG_FILTER_ENV: &str = "MOBTRAIL_DEBUG";

#[derive(Parser)]
#[command(
    name = "mobtrail",
    version,
    about = "Mob behavior trail - append-only AI diagnostics log"
)]
struct Cli {
    /// Behavior log file (overrides config and MOBTRAIL_LOG_PATH)
    #[arg(long, global = true)]
    log: Option<PathBuf>,

    /// TOML config file
    #[arg(long, global = true, env = "MOBTRAIL_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Append messages to the trail as a new session
    Append(append::AppendArgs),
    /// List sessions in the trail
    Sessions(sessions::SessionsArgs),
    /// Show trail entries
    Show(show::ShowArgs),
}

fn main() -> Result<()> {
    setup_logging();
    let cli = Cli::parse();

    let mut config = TrailConfig::resolve(cli.config.as_deref()).context("loading config")?;
    if let Some(log) = cli.log {
        config.log_path = log;
    }
    tracing::debug!(path = %config.log_path.display(), "using behavior log");

    match cli.command {
        Commands::Append(args) => append::append(args, config),
        Commands::Sessions(args) => sessions::sessions(args, config),
        Commands::Show(args) => show::show(args, config),
    }
}

fn setup_logging() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter =
        EnvFilter::try_from_env(LOG_FILTER_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}
