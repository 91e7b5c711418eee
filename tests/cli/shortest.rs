use crate::cli::support::{graphkit, stdout_json, write_file, WEIGHTED_GRAPH};
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_shortest_human_output() {
    let dir = tempdir().unwrap();
    let graph = write_file(dir.path(), "weighted.json", WEIGHTED_GRAPH);

    graphkit()
        .current_dir(dir.path())
        .args(["shortest", "--path-to", "3"])
        .arg(&graph)
        .assert()
        .success()
        .stdout(predicate::str::contains("Root is: A"))
        .stdout(predicate::str::contains("A (0): cost 0"))
        .stdout(predicate::str::contains("C (2): cost 2"))
        .stdout(predicate::str::contains("D (3): cost 3"))
        .stdout(predicate::str::contains("Path to 3 (cost 3): A -> B -> C -> D"))
        .stdout(predicate::str::contains("Settled 4 of 4 vertices"));
}

#[test]
fn test_shortest_unreached_vertices_reported() {
    let dir = tempdir().unwrap();
    let graph = write_file(dir.path(), "weighted.json", WEIGHTED_GRAPH);

    graphkit()
        .current_dir(dir.path())
        .args(["shortest", "--source", "2"])
        .arg(&graph)
        .assert()
        .success()
        .stdout(predicate::str::contains("A (0): unreached"))
        .stdout(predicate::str::contains("D (3): cost 1"))
        .stdout(predicate::str::contains("Settled 2 of 4 vertices"));
}

#[test]
fn test_shortest_default_cost_from_config() {
    let dir = tempdir().unwrap();
    let graph = write_file(dir.path(), "weighted.json", WEIGHTED_GRAPH);
    write_file(dir.path(), "graphkit.toml", "[weighted]\ndefault_cost = 4.0\n");

    graphkit()
        .current_dir(dir.path())
        .arg("shortest")
        .arg(&graph)
        .assert()
        .success()
        .stdout(predicate::str::contains("D (3): cost 6"));
}

#[test]
fn test_shortest_negative_cost_exit_code_2() {
    let dir = tempdir().unwrap();
    let graph = write_file(
        dir.path(),
        "negative.json",
        r#"{"vertices":["A","B"],"edges":[[0,1,-2]]}"#,
    );

    graphkit()
        .current_dir(dir.path())
        .arg("shortest")
        .arg(&graph)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid cost"));
}

#[test]
fn test_shortest_invalid_source_exit_code_3() {
    let dir = tempdir().unwrap();
    let graph = write_file(dir.path(), "weighted.json", WEIGHTED_GRAPH);

    graphkit()
        .current_dir(dir.path())
        .args(["shortest", "--source", "7"])
        .arg(&graph)
        .assert()
        .code(3);
}

#[test]
fn test_shortest_json_output() {
    let dir = tempdir().unwrap();
    let graph = write_file(dir.path(), "weighted.json", WEIGHTED_GRAPH);

    let output = graphkit()
        .current_dir(dir.path())
        .args(["--format", "json", "shortest", "--path-to", "2"])
        .arg(&graph)
        .output()
        .unwrap();

    assert!(output.status.success());
    let json = stdout_json(&output);
    assert_eq!(json["strategy"], "dijkstra");
    assert_eq!(json["costs"], serde_json::json!([0.0, 1.0, 2.0, 3.0]));
    assert_eq!(json["parents"], serde_json::json!([null, 0, 1, 2]));
    assert_eq!(json["path"]["cost"], 2.0);
    assert_eq!(json["path"]["vertices"], serde_json::json!(["A", "B", "C"]));
}

#[test]
fn test_shortest_large_cost_printed_exactly() {
    let dir = tempdir().unwrap();
    let graph = write_file(
        dir.path(),
        "large.json",
        r#"{"vertices":["A","B"],"edges":[[0,1,1e20]]}"#,
    );

    graphkit()
        .current_dir(dir.path())
        .arg("shortest")
        .arg(&graph)
        .assert()
        .success()
        .stdout(predicate::str::contains("B (1): cost 100000000000000000000"));
}
