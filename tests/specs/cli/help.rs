//! CLI help specs
//!
//! Verify help output lists every command.

use crate::prelude::*;

#[test]
fn help_lists_commands() {
    let temp = Project::empty();
    temp.mobtrail()
        .args(&["--help"])
        .passes()
        .stdout_has("append")
        .stdout_has("sessions")
        .stdout_has("show");
}

#[test]
fn show_help_lists_filters() {
    let temp = Project::empty();
    temp.mobtrail()
        .args(&["show", "--help"])
        .passes()
        .stdout_has("--grep")
        .stdout_has("--last")
        .stdout_has("--session");
}
