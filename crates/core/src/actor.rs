// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Actor lifecycle and transition descriptions
//!
//! The state machine driving actors lives outside this crate. Its states,
//! causes and targets arrive here as opaque names and are only rendered.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique actor identifier, displayed as `Mob#<n>`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActorId(pub u64);

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Mob#{}", self.0)
    }
}

/// Something an actor did that is worth recording
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ActorEvent {
    Spawned {
        actor: ActorId,
        pos: i64,
    },
    StateChanged {
        actor: ActorId,
        name: String,
        /// Unknown when the previous state was not observed
        from: Option<String>,
        to: String,
        cause: String,
    },
    TargetChanged {
        actor: ActorId,
        name: String,
        target: String,
    },
    Note {
        actor: ActorId,
        text: String,
    },
}

impl ActorEvent {
    pub fn actor(&self) -> ActorId {
        match self {
            ActorEvent::Spawned { actor, .. }
            | ActorEvent::StateChanged { actor, .. }
            | ActorEvent::TargetChanged { actor, .. }
            | ActorEvent::Note { actor, .. } => *actor,
        }
    }

    /// Short event kind, e.g. `state_changed`
    pub fn kind(&self) -> &'static str {
        match self {
            ActorEvent::Spawned { .. } => "spawned",
            ActorEvent::StateChanged { .. } => "state_changed",
            ActorEvent::TargetChanged { .. } => "target_changed",
            ActorEvent::Note { .. } => "note",
        }
    }

    /// Render the line that gets published and logged
    pub fn describe(&self) -> String {
        match self {
            ActorEvent::Spawned { actor, pos } => {
                format!("onAdd {} spawned at {}", actor, pos)
            }
            ActorEvent::StateChanged {
                actor,
                name,
                from: Some(from),
                to,
                cause,
            } => format!(
                "{} {} State changed {} → {} ({})",
                actor, name, from, to, cause
            ),
            ActorEvent::StateChanged {
                actor,
                name,
                from: None,
                to,
                cause,
            } => format!("{} {} State changed → {} ({})", actor, name, to, cause),
            ActorEvent::TargetChanged {
                actor,
                name,
                target,
            } => format!("{} {} is now targeting {}", actor, name, target),
            ActorEvent::Note { actor, text } => format!("{} {}", actor, text),
        }
    }
}

impl fmt::Display for ActorEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

#[cfg(test)]
#[path = "actor_tests.rs"]
mod tests;
