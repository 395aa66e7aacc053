//! Sessions specs
//!
//! Verify each append run shows up as its own session.

use crate::prelude::*;

#[test]
fn empty_trail_has_no_sessions() {
    let temp = Project::empty();
    temp.mobtrail()
        .args(&["sessions"])
        .passes()
        .stdout_eq("No sessions\n");
}

#[test]
fn each_append_is_a_session() {
    let temp = Project::empty();
    temp.mobtrail().args(&["append", "a", "b"]).passes();
    temp.mobtrail().args(&["append", "c"]).passes();

    let out = temp.mobtrail().args(&["sessions"]).passes();
    let lines: Vec<_> = out.stdout().lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("0 "));
    assert!(lines[0].ends_with("2 entries"));
    assert!(lines[1].starts_with("1 "));
    assert!(lines[1].ends_with("1 entries"));
}

#[test]
fn sessions_as_json() {
    let temp = Project::empty();
    temp.mobtrail().args(&["append", "a"]).passes();

    temp.mobtrail()
        .args(&["sessions", "--format", "json"])
        .passes()
        .stdout_has("\"index\": 0")
        .stdout_has("\"entries\": 1")
        .stdout_has("\"started_at\": \"");
}
