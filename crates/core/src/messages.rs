// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Message lookup seam
//!
//! Real builds resolve keys against string tables. `KeyEcho` hands the key
//! back instead, so assertions can match on keys without any resource files.

use std::fmt::Display;

/// Resolves a message key for an owner (a type or instance name)
pub trait Localizer: Send + Sync {
    fn get(&self, owner: &str, key: &str, args: &[&dyn Display]) -> String;
}

/// Returns the key unchanged, ignoring owner and arguments
#[derive(Clone, Copy, Debug, Default)]
pub struct KeyEcho;

impl Localizer for KeyEcho {
    fn get(&self, _owner: &str, key: &str, _args: &[&dyn Display]) -> String {
        key.to_string()
    }
}

/// Literal printf-style substitution without locale rules
///
/// `%s` and `%d` take the next argument in order, `%%` is a percent sign
/// and `%n` a newline. A placeholder with no argument left stays verbatim;
/// surplus arguments are ignored.
pub fn format(pattern: &str, args: &[&dyn Display]) -> String {
    let mut out = String::with_capacity(pattern.len());
    let mut args = args.iter();
    let mut chars = pattern.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }
        match chars.peek().copied() {
            Some(spec @ ('s' | 'd')) => {
                chars.next();
                match args.next() {
                    Some(arg) => out.push_str(&arg.to_string()),
                    None => {
                        out.push('%');
                        out.push(spec);
                    }
                }
            }
            Some('%') => {
                chars.next();
                out.push('%');
            }
            Some('n') => {
                chars.next();
                out.push('\n');
            }
            _ => out.push('%'),
        }
    }

    out
}

#[cfg(test)]
#[path = "messages_tests.rs"]
mod tests;
