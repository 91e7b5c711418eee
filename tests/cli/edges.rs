use crate::cli::support::{graphkit, stdout_json, write_file, LINE_GRAPH};
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_edges_human_output() {
    let dir = tempdir().unwrap();
    let graph = write_file(dir.path(), "line.json", LINE_GRAPH);

    graphkit()
        .current_dir(dir.path())
        .arg("edges")
        .arg(&graph)
        .assert()
        .success()
        .stdout("A (0): (A, B)\nB (1): (B, A) (B, C)\nC (2): (C, B)\n");
}

#[test]
fn test_edges_duplicate_edges_ignored() {
    let dir = tempdir().unwrap();
    let graph = write_file(
        dir.path(),
        "dupes.json",
        r#"{"vertices":["A","B"],"edges":[[0,1],[0,1],[0,1]]}"#,
    );

    graphkit()
        .current_dir(dir.path())
        .arg("edges")
        .arg(&graph)
        .assert()
        .success()
        .stdout("A (0): (A, B)\nB (1):\n");
}

#[test]
fn test_edges_out_of_range_endpoint_exit_code_3() {
    let dir = tempdir().unwrap();
    let graph = write_file(
        dir.path(),
        "bad.json",
        r#"{"vertices":["A","B"],"edges":[[0,5]]}"#,
    );

    graphkit()
        .current_dir(dir.path())
        .arg("edges")
        .arg(&graph)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("no such index: 5"));
}

#[test]
fn test_edges_malformed_document_exit_code_1() {
    let dir = tempdir().unwrap();
    let graph = write_file(dir.path(), "broken.json", "{ not json");

    graphkit()
        .current_dir(dir.path())
        .arg("edges")
        .arg(&graph)
        .assert()
        .code(1);
}

#[test]
fn test_edges_json_output() {
    let dir = tempdir().unwrap();
    let graph = write_file(dir.path(), "line.json", LINE_GRAPH);

    let output = graphkit()
        .current_dir(dir.path())
        .args(["--format", "json", "edges"])
        .arg(&graph)
        .output()
        .unwrap();

    assert!(output.status.success());
    let json = stdout_json(&output);
    assert_eq!(json["edge_count"], 4);
    assert_eq!(json["vertices"][1]["vertex"], "B");
    assert_eq!(json["vertices"][1]["degree"], 2);
    assert_eq!(json["vertices"][1]["neighbors"], serde_json::json!([0, 2]));
}
