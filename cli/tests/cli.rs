use std::io::Write;

use assert_cmd::Command;
use tempfile::NamedTempFile;

fn edge_file(text: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("tempfile");
    file.write_all(text.as_bytes()).expect("write edge list");
    file
}

fn run_json(file: &NamedTempFile, args: &[&str]) -> serde_json::Value {
    let output = Command::cargo_bin("csr-graph")
        .expect("binary")
        .env_remove("CSR_GRAPH_INPUT")
        .env_remove("CSR_GRAPH_MAX_MEMORY_MB")
        .arg("--input")
        .arg(file.path())
        .args(args)
        .arg("--format")
        .arg("json")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    serde_json::from_slice(&output).expect("valid JSON on stdout")
}

#[test]
fn stats_reports_counts() {
    let file = edge_file("# triangle\n0 1\n1 2\n0 2\n");
    let stats = run_json(&file, &["stats"]);
    assert_eq!(stats["node_count"], 3);
    assert_eq!(stats["edge_count"], 3);
    assert!(stats["memory_bytes"].as_u64().unwrap() > 0);
}

#[test]
fn bfs_returns_edges_in_visit_order() {
    let file = edge_file("0 1\n1 2\n0 2\n");
    let report = run_json(&file, &["bfs", "0", "--depth", "1"]);
    assert_eq!(report["edges"], serde_json::json!([[0, 1], [0, 2]]));
    assert_eq!(report["node_count"], 3);
}

#[test]
fn bfs_negative_start_is_empty() {
    let file = edge_file("0 1\n");
    let report = run_json(&file, &["bfs", "-1"]);
    assert_eq!(report["edges"], serde_json::json!([]));
}

#[test]
fn neighbors_out_of_range_is_empty() {
    let file = edge_file("0 1\n1 2\n");
    let report = run_json(&file, &["neighbors", "3"]);
    assert_eq!(report["neighbors"], serde_json::json!([]));
    let report = run_json(&file, &["neighbors", "0"]);
    assert_eq!(report["neighbors"], serde_json::json!([1]));
}

#[test]
fn max_degree_on_empty_file() {
    let file = edge_file("");
    let report = run_json(&file, &["max-degree"]);
    assert!(report["node"].is_null());
}

#[test]
fn degree_ranking_top_n() {
    let file = edge_file("3 0\n3 1\n3 2\n1 0\n");
    let report = run_json(&file, &["degree", "--top", "2"]);
    assert_eq!(
        report,
        serde_json::json!([
            { "node_id": 3, "out_degree": 3 },
            { "node_id": 1, "out_degree": 1 }
        ])
    );
}

#[test]
fn text_output_for_max_degree() {
    let file = edge_file("0 1\n2 0\n2 1\n");
    let output = Command::cargo_bin("csr-graph")
        .expect("binary")
        .arg("-i")
        .arg(file.path())
        .arg("max-degree")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    assert_eq!(String::from_utf8(output).unwrap(), "node 2 (out-degree 2)\n");
}

#[test]
fn missing_file_fails() {
    let dir = tempfile::tempdir().expect("tempdir");
    let output = Command::cargo_bin("csr-graph")
        .expect("binary")
        .arg("--input")
        .arg(dir.path().join("absent.txt"))
        .arg("stats")
        .assert()
        .failure()
        .get_output()
        .stderr
        .clone();
    let stderr = String::from_utf8_lossy(&output);
    assert!(stderr.contains("cannot open edge list"), "stderr: {stderr}");
}

#[test]
fn memory_limit_fails() {
    let file = edge_file("0 300000000\n");
    Command::cargo_bin("csr-graph")
        .expect("binary")
        .arg("--input")
        .arg(file.path())
        .arg("--max-memory-mb")
        .arg("1")
        .arg("stats")
        .assert()
        .failure();
}
