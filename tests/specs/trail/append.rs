//! Append specs
//!
//! Verify lines land in the trail file with a session marker.

use crate::prelude::*;

#[test]
fn append_writes_marker_and_entries() {
    let temp = Project::empty();
    temp.mobtrail()
        .args(&["append", "onAdd Mob#3 spawned at 100", "Mob#3 rat State changed → HUNTING (Amok)"])
        .passes();

    let content = temp.read(TRAIL_FILE);
    let lines: Vec<_> = content.lines().collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], "");
    assert!(lines[1].starts_with("=== New Session Started at "));
    assert!(lines[2].ends_with("] onAdd Mob#3 spawned at 100"));
    assert!(lines[3].ends_with("] Mob#3 rat State changed → HUNTING (Amok)"));
}

#[test]
fn append_reads_stdin_when_no_messages() {
    let temp = Project::empty();
    temp.mobtrail()
        .args(&["append"])
        .stdin("first line\nsecond line\n")
        .passes();

    temp.mobtrail()
        .args(&["show"])
        .passes()
        .stdout_has("] first line")
        .stdout_has("] second line");
}

#[test]
fn multiline_message_becomes_separate_entries() {
    let temp = Project::empty();
    temp.mobtrail().args(&["append", "top\nbottom"]).passes();

    let out = temp.mobtrail().args(&["show"]).passes();
    similar_asserts::assert_eq!(strip_timestamps(out.stdout()), "top\nbottom");
}

#[test]
fn append_preserves_existing_content() {
    let temp = Project::empty();
    temp.file(TRAIL_FILE, "[2020-01-01 00:00:00.000] from an earlier run\n");

    temp.mobtrail().args(&["append", "fresh"]).passes();

    let content = temp.read(TRAIL_FILE);
    assert!(content.starts_with("[2020-01-01 00:00:00.000] from an earlier run\n"));
    assert!(content.trim_end().ends_with("] fresh"));
}

#[test]
fn append_creates_parent_directories() {
    let temp = Project::empty();
    temp.mobtrail()
        .args(&["--log", "logs/ai/trail.log", "append", "nested"])
        .passes();

    assert!(temp.path().join("logs/ai/trail.log").is_file());
}

#[test]
fn empty_message_is_kept_as_an_empty_entry() {
    let temp = Project::empty();
    temp.mobtrail().args(&["append", ""]).passes();

    temp.mobtrail()
        .args(&["sessions"])
        .passes()
        .stdout_has(" 1 entries");
    temp.mobtrail()
        .args(&["show", "--format", "json"])
        .passes()
        .stdout_has(r#""message": """#);
}

#[test]
fn crlf_message_leaves_no_carriage_returns() {
    let temp = Project::empty();
    temp.mobtrail().args(&["append", "left\r\nright\r"]).passes();

    let content = temp.read(TRAIL_FILE);
    assert!(!content.contains('\r'));
    let out = temp.mobtrail().args(&["show"]).passes();
    similar_asserts::assert_eq!(strip_timestamps(out.stdout()), "left\nright");
}

#[cfg(target_os = "linux")]
#[test]
fn failed_writes_fail_append() {
    if !std::path::Path::new("/dev/full").exists() {
        return;
    }
    let temp = Project::empty();
    temp.mobtrail()
        .args(&["--log", "/dev/full", "append", "dropped"])
        .fails()
        .stderr_has("/dev/full");
}
