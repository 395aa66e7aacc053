// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration modules

mod trail;

pub use trail::{ConfigError, TrailConfig, DEFAULT_LOG_FILE, ENV_LOG_PATH, ENV_SYNC};
