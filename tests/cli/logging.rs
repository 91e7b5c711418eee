use crate::cli::support::{graphkit, write_file, LINE_GRAPH};
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// Logging tests
// ============================================================================

#[test]
fn test_log_level_debug_shows_debug_messages() {
    graphkit()
        .args(["--log-level", "debug", "nine-tail", "TTTTTTTTT"])
        .assert()
        .success()
        .stderr(predicate::str::contains("parse_args"));
}

#[test]
fn test_default_log_level_hides_debug_messages() {
    graphkit()
        .args(["nine-tail", "TTTTTTTTT"])
        .assert()
        .success()
        .stderr(predicate::str::contains("parse_args").not());
}

#[test]
fn test_log_level_warn_hides_debug_messages() {
    graphkit()
        .args(["--log-level", "warn", "nine-tail", "TTTTTTTTT"])
        .assert()
        .success()
        .stderr(predicate::str::contains("parse_args").not());
}

#[test]
fn test_verbose_shows_debug_messages() {
    graphkit()
        .args(["--verbose", "nine-tail", "TTTTTTTTT"])
        .assert()
        .success()
        .stderr(predicate::str::contains("parse_args"));
}

#[test]
fn test_env_var_enables_logging() {
    graphkit()
        .env("GRAPHKIT_LOG", "graphkit=debug")
        .args(["nine-tail", "TTTTTTTTT"])
        .assert()
        .success()
        .stderr(predicate::str::contains("parse_args"));
}

#[test]
fn test_core_directive_shows_traversal_events() {
    let dir = tempdir().unwrap();
    let graph = write_file(dir.path(), "line.json", LINE_GRAPH);

    graphkit()
        .current_dir(dir.path())
        .args(["--log-level", "graphkit_core=debug", "traverse"])
        .arg(&graph)
        .assert()
        .success()
        .stderr(predicate::str::contains("dfs complete"))
        .stderr(predicate::str::contains("parse_args").not());
}

#[test]
fn test_log_json_emits_structured_lines() {
    graphkit()
        .args(["--log-level", "debug", "--log-json", "nine-tail", "TTTTTTTTT"])
        .assert()
        .success()
        .stderr(predicate::str::contains("\"message\":\"parse_args\""));
}

#[test]
fn test_logging_keeps_stdout_clean() {
    let output = graphkit()
        .args(["--format", "json", "--log-level", "debug", "nine-tail", "TTTTTTTTT"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["flips"], 0.0);
}
