use crate::cli::support::{graphkit, stdout_json, write_file, LINE_GRAPH, LINE_WITH_ISOLATED};
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// Traverse command tests
// ============================================================================

#[test]
fn test_traverse_bfs_human_output() {
    let dir = tempdir().unwrap();
    let graph = write_file(dir.path(), "line.json", LINE_GRAPH);

    graphkit()
        .current_dir(dir.path())
        .args(["traverse", "--strategy", "bfs"])
        .arg(&graph)
        .assert()
        .success()
        .stdout(predicate::str::contains("Root is: A"))
        .stdout(predicate::str::contains("Edges: (A, B) (B, C)"))
        .stdout(predicate::str::contains("Search order: A B C"))
        .stdout(predicate::str::contains("Found 3 of 3 vertices (bfs)"));
}

#[test]
fn test_traverse_defaults_to_dfs() {
    let dir = tempdir().unwrap();
    let graph = write_file(dir.path(), "line.json", LINE_GRAPH);

    graphkit()
        .current_dir(dir.path())
        .arg("traverse")
        .arg(&graph)
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 3 of 3 vertices (dfs)"));
}

#[test]
fn test_traverse_from_middle_vertex() {
    let dir = tempdir().unwrap();
    let graph = write_file(dir.path(), "line.json", LINE_GRAPH);

    graphkit()
        .current_dir(dir.path())
        .args(["traverse", "-s", "dfs", "--start", "1"])
        .arg(&graph)
        .assert()
        .success()
        .stdout(predicate::str::contains("Root is: B"))
        .stdout(predicate::str::contains("Search order: B A C"));
}

#[test]
fn test_traverse_path_to() {
    let dir = tempdir().unwrap();
    let graph = write_file(dir.path(), "line.json", LINE_GRAPH);

    graphkit()
        .current_dir(dir.path())
        .args(["traverse", "--path-to", "2"])
        .arg(&graph)
        .assert()
        .success()
        .stdout(predicate::str::contains("Path to 2: A -> B -> C"));
}

#[test]
fn test_traverse_quiet_hides_summary() {
    let dir = tempdir().unwrap();
    let graph = write_file(dir.path(), "line.json", LINE_GRAPH);

    graphkit()
        .current_dir(dir.path())
        .args(["--quiet", "traverse"])
        .arg(&graph)
        .assert()
        .success()
        .stdout(predicate::str::contains("Search order: A B C"))
        .stdout(predicate::str::contains("Found").not());
}

#[test]
fn test_traverse_isolated_vertex_not_found() {
    let dir = tempdir().unwrap();
    let graph = write_file(dir.path(), "isolated.json", LINE_WITH_ISOLATED);

    graphkit()
        .current_dir(dir.path())
        .args(["traverse", "--strategy", "bfs"])
        .arg(&graph)
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 3 of 4 vertices (bfs)"));
}

#[test]
fn test_traverse_path_to_unreached_exit_code_3() {
    let dir = tempdir().unwrap();
    let graph = write_file(dir.path(), "isolated.json", LINE_WITH_ISOLATED);

    graphkit()
        .current_dir(dir.path())
        .args(["traverse", "--path-to", "3"])
        .arg(&graph)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("was not reached"));
}

#[test]
fn test_traverse_invalid_start_exit_code_3() {
    let dir = tempdir().unwrap();
    let graph = write_file(dir.path(), "line.json", LINE_GRAPH);

    graphkit()
        .current_dir(dir.path())
        .args(["traverse", "--start", "9"])
        .arg(&graph)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("no such index: 9"));
}

#[test]
fn test_traverse_dijkstra_is_unsupported() {
    let dir = tempdir().unwrap();
    let graph = write_file(dir.path(), "line.json", LINE_GRAPH);

    graphkit()
        .current_dir(dir.path())
        .args(["traverse", "--strategy", "dijkstra"])
        .arg(&graph)
        .assert()
        .code(2);
}

#[test]
fn test_traverse_unknown_strategy_exit_code_2() {
    let dir = tempdir().unwrap();
    let graph = write_file(dir.path(), "line.json", LINE_GRAPH);

    graphkit()
        .current_dir(dir.path())
        .args(["traverse", "--strategy", "zigzag"])
        .arg(&graph)
        .assert()
        .code(2);
}

#[test]
fn test_traverse_missing_file_exit_code_1() {
    let dir = tempdir().unwrap();

    graphkit()
        .current_dir(dir.path())
        .args(["traverse", "missing.json"])
        .assert()
        .code(1);
}

#[test]
fn test_traverse_json_output() {
    let dir = tempdir().unwrap();
    let graph = write_file(dir.path(), "line.json", LINE_GRAPH);

    let output = graphkit()
        .current_dir(dir.path())
        .args(["--format", "json", "traverse", "--strategy", "bfs", "--path-to", "2"])
        .arg(&graph)
        .output()
        .unwrap();

    assert!(output.status.success());
    let json = stdout_json(&output);
    assert_eq!(json["strategy"], "bfs");
    assert_eq!(json["root"], 0);
    assert_eq!(json["order"], serde_json::json!([0, 1, 2]));
    assert_eq!(json["found"], 3);
    assert_eq!(json["parents"], serde_json::json!([null, 0, 1]));
    assert_eq!(json["path"]["vertices"], serde_json::json!(["A", "B", "C"]));
}

#[test]
fn test_traverse_json_error_envelope() {
    let dir = tempdir().unwrap();
    let graph = write_file(dir.path(), "isolated.json", LINE_WITH_ISOLATED);

    graphkit()
        .current_dir(dir.path())
        .args(["--format", "json", "traverse", "--path-to", "3"])
        .arg(&graph)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("\"type\":\"unreached\""));
}
