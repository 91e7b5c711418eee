use crate::cli::support::{graphkit, write_file, LINE_GRAPH};
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// Config discovery tests
// ============================================================================

#[test]
fn test_config_in_working_directory_sets_defaults() {
    let dir = tempdir().unwrap();
    let graph = write_file(dir.path(), "line.json", LINE_GRAPH);
    write_file(
        dir.path(),
        "graphkit.toml",
        "[traversal]\nstrategy = \"bfs\"\nstart = 1\n",
    );

    graphkit()
        .current_dir(dir.path())
        .arg("traverse")
        .arg(&graph)
        .assert()
        .success()
        .stdout(predicate::str::contains("Root is: B"))
        .stdout(predicate::str::contains("Found 3 of 3 vertices (bfs)"));
}

#[test]
fn test_command_line_overrides_config() {
    let dir = tempdir().unwrap();
    let graph = write_file(dir.path(), "line.json", LINE_GRAPH);
    write_file(
        dir.path(),
        "graphkit.toml",
        "[traversal]\nstrategy = \"bfs\"\nstart = 1\n",
    );

    graphkit()
        .current_dir(dir.path())
        .args(["traverse", "--strategy", "dfs", "--start", "0"])
        .arg(&graph)
        .assert()
        .success()
        .stdout(predicate::str::contains("Root is: A"))
        .stdout(predicate::str::contains("(dfs)"));
}

#[test]
fn test_explicit_config_flag() {
    let dir = tempdir().unwrap();
    let graph = write_file(dir.path(), "line.json", LINE_GRAPH);
    let config = write_file(dir.path(), "custom.toml", "[traversal]\nstart = 2\n");

    graphkit()
        .current_dir(dir.path())
        .arg("--config")
        .arg(&config)
        .arg("traverse")
        .arg(&graph)
        .assert()
        .success()
        .stdout(predicate::str::contains("Root is: C"));
}

#[test]
fn test_config_from_environment() {
    let dir = tempdir().unwrap();
    let graph = write_file(dir.path(), "line.json", LINE_GRAPH);
    let config = write_file(dir.path(), "env.toml", "[traversal]\nstart = 2\n");

    graphkit()
        .current_dir(dir.path())
        .env("GRAPHKIT_CONFIG", &config)
        .arg("traverse")
        .arg(&graph)
        .assert()
        .success()
        .stdout(predicate::str::contains("Root is: C"));
}

#[test]
fn test_dijkstra_default_strategy_rejected() {
    let dir = tempdir().unwrap();
    let graph = write_file(dir.path(), "line.json", LINE_GRAPH);
    write_file(
        dir.path(),
        "graphkit.toml",
        "[traversal]\nstrategy = \"dijkstra\"\n",
    );

    graphkit()
        .current_dir(dir.path())
        .arg("traverse")
        .arg(&graph)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("traversal.strategy"));
}

#[test]
fn test_negative_default_cost_rejected() {
    let dir = tempdir().unwrap();
    let graph = write_file(dir.path(), "line.json", LINE_GRAPH);
    write_file(
        dir.path(),
        "graphkit.toml",
        "[weighted]\ndefault_cost = -1.0\n",
    );

    graphkit()
        .current_dir(dir.path())
        .arg("shortest")
        .arg(&graph)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("weighted.default_cost"));
}

#[test]
fn test_malformed_config_exit_code_1() {
    let dir = tempdir().unwrap();
    let graph = write_file(dir.path(), "line.json", LINE_GRAPH);
    write_file(dir.path(), "graphkit.toml", "[traversal\nstart = ");

    graphkit()
        .current_dir(dir.path())
        .arg("traverse")
        .arg(&graph)
        .assert()
        .code(1);
}

#[test]
fn test_missing_explicit_config_exit_code_1() {
    let dir = tempdir().unwrap();
    let graph = write_file(dir.path(), "line.json", LINE_GRAPH);

    graphkit()
        .current_dir(dir.path())
        .args(["--config", "nowhere.toml", "traverse"])
        .arg(&graph)
        .assert()
        .code(1);
}

#[test]
fn test_malformed_nine_tail_goal_rejected_for_any_command() {
    let dir = tempdir().unwrap();
    let graph = write_file(dir.path(), "line.json", LINE_GRAPH);
    write_file(dir.path(), "graphkit.toml", "[nine_tail]\ngoal = \"HHX\"\n");

    graphkit()
        .current_dir(dir.path())
        .arg("traverse")
        .arg(&graph)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("nine_tail.goal"));
}

#[test]
fn test_uppercase_strategy_in_config() {
    let dir = tempdir().unwrap();
    let graph = write_file(dir.path(), "line.json", LINE_GRAPH);
    write_file(dir.path(), "graphkit.toml", "[traversal]\nstrategy = \"BFS\"\n");

    graphkit()
        .current_dir(dir.path())
        .arg("traverse")
        .arg(&graph)
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 3 of 3 vertices (bfs)"));
}
