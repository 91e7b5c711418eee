use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Output;

/// Get a Command for graphkit
pub fn graphkit() -> Command {
    let mut cmd = cargo_bin_cmd!("graphkit");
    cmd.env_remove("RUST_LOG")
        .env_remove("GRAPHKIT_LOG")
        .env_remove("GRAPHKIT_CONFIG");
    cmd
}

/// Write `content` to `name` inside `dir` and return the full path
pub fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

/// Three vertices joined in a line: A - B - C
pub const LINE_GRAPH: &str =
    r#"{"vertices":["A","B","C"],"edges":[[0,1],[1,2]],"undirected":true}"#;

/// Line graph plus an isolated vertex D
pub const LINE_WITH_ISOLATED: &str =
    r#"{"vertices":["A","B","C","D"],"edges":[[0,1],[1,2]],"undirected":true}"#;

/// Directed weighted graph where A -> B -> C is cheaper than A -> C
pub const WEIGHTED_GRAPH: &str =
    r#"{"vertices":["A","B","C","D"],"edges":[[0,1,1],[1,2,1],[0,2,5],[2,3]]}"#;

/// Parse stdout as a JSON value
pub fn stdout_json(output: &Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).unwrap()
}
