//! Phase 3 tests: input reading and CLI end-to-end flows.

use std::io::Write;
use std::process::{Command, Output};

use tempfile::NamedTempFile;

use packet_decay::cli::{read_input, NetworkInput};
use packet_decay::engine::ExpirationQuery;
use packet_decay::types::{GraphError, VertexLabel};

const SAMPLE_INPUT: &str = "A BC B CADE C AB D B E B\nA 1 D 1\n\nE 3\n";

// ==================== Helpers ====================

/// Run the `pdecay` CLI with the given arguments and return the output.
fn run_pdecay(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_pdecay"))
        .args(args)
        .output()
        .expect("Failed to run pdecay")
}

/// Helper: assert that the CLI ran successfully (exit code 0).
fn assert_success(output: &Output) {
    assert!(
        output.status.success(),
        "pdecay failed with status {:?}\nstdout: {}\nstderr: {}",
        output.status,
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr),
    );
}

fn stdout_str(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn input_file(contents: &str) -> NamedTempFile {
    let mut tmp = NamedTempFile::new().unwrap();
    tmp.write_all(contents.as_bytes()).unwrap();
    tmp.flush().unwrap();
    tmp
}

fn label(c: char) -> VertexLabel {
    VertexLabel::from_char(c).unwrap()
}

// ==================== Input Tests ====================

#[test]
fn test_network_input_parse() {
    let input = NetworkInput::parse(SAMPLE_INPUT).unwrap();
    assert_eq!(input.network, "A BC B CADE C AB D B E B");
    assert_eq!(input.query_lines, vec!["A 1 D 1", "E 3"]);

    let groups = input.query_groups().unwrap();
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[1], vec![ExpirationQuery::new(label('E'), 3)]);

    let graph = input.to_graph().unwrap();
    assert_eq!(graph.count_vertices(), 5);
}

#[test]
fn test_network_input_requires_network_line() {
    assert!(matches!(
        NetworkInput::parse("\n   \n"),
        Err(GraphError::MalformedInput(_))
    ));
}

#[test]
fn test_read_input_from_file() {
    let tmp = input_file(SAMPLE_INPUT);
    let input = read_input(tmp.path()).unwrap();
    assert_eq!(input.query_lines.len(), 2);
}

#[test]
fn test_read_input_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.txt");
    assert!(matches!(read_input(&missing), Err(GraphError::Io(_))));
}

// ==================== CLI Tests ====================

#[test]
fn test_cli_show() {
    let tmp = input_file(SAMPLE_INPUT);
    let output = run_pdecay(&["show", tmp.path().to_str().unwrap()]);
    assert_success(&output);
    let stdout = stdout_str(&output);
    assert!(stdout.contains("{A=[B, C], B=[A, C, D, E], C=[A, B], D=[B], E=[B]}"));
    assert!(stdout.contains("Vertices: 5"));
    assert!(stdout.contains("Edges: 5"));
}

#[test]
fn test_cli_show_json() {
    let tmp = input_file(SAMPLE_INPUT);
    let output = run_pdecay(&["--format", "json", "show", tmp.path().to_str().unwrap()]);
    assert_success(&output);
    let value: serde_json::Value = serde_json::from_str(&stdout_str(&output)).unwrap();
    assert_eq!(value["vertices"], 5);
    assert_eq!(value["adjacency"]["B"], serde_json::json!(["A", "C", "D", "E"]));
}

#[test]
fn test_cli_neighbors() {
    let tmp = input_file(SAMPLE_INPUT);
    let output = run_pdecay(&["neighbors", tmp.path().to_str().unwrap(), "B"]);
    assert_success(&output);
    assert_eq!(stdout_str(&output).trim(), "B: ACDE");
}

#[test]
fn test_cli_traverse() {
    let tmp = input_file(SAMPLE_INPUT);
    let output = run_pdecay(&["traverse", tmp.path().to_str().unwrap(), "A"]);
    assert_success(&output);
    let stdout = stdout_str(&output);
    assert!(stdout.contains("Traversal from A: ABCDE"));
    assert!(stdout.contains("Distances: 1:BC 2:DE"));
}

#[test]
fn test_cli_expire() {
    let tmp = input_file(SAMPLE_INPUT);
    let output = run_pdecay(&["expire", tmp.path().to_str().unwrap(), "A", "1"]);
    assert_success(&output);
    assert_eq!(
        stdout_str(&output).trim(),
        "Can't reach 2 nodes starting at A with expiration of 1"
    );
}

#[test]
fn test_cli_run() {
    let tmp = input_file(SAMPLE_INPUT);
    let output = run_pdecay(&["run", tmp.path().to_str().unwrap()]);
    assert_success(&output);
    let lines: Vec<String> = stdout_str(&output).lines().map(str::to_string).collect();
    assert_eq!(
        lines,
        vec![
            "{A=[B, C], B=[A, C, D, E], C=[A, B], D=[B], E=[B]}",
            "Can't reach 2 nodes starting at A with expiration of 1",
            "Can't reach 3 nodes starting at D with expiration of 1",
            "Can't reach 0 nodes starting at E with expiration of 3",
        ]
    );
}

#[test]
fn test_cli_run_json() {
    let tmp = input_file(SAMPLE_INPUT);
    let output = run_pdecay(&["--format", "json", "run", tmp.path().to_str().unwrap()]);
    assert_success(&output);
    let value: serde_json::Value = serde_json::from_str(&stdout_str(&output)).unwrap();
    assert_eq!(value["queries"][0][1]["unreachable"], 3);
    assert_eq!(value["queries"][1][0]["start"], "E");
}

#[test]
fn test_cli_run_from_stdin() {
    let mut child = Command::new(env!("CARGO_BIN_EXE_pdecay"))
        .args(["run", "-"])
        .stdin(std::process::Stdio::piped())
        .stdout(std::process::Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"A B B C\nA 1\n")
        .unwrap();
    let output = child.wait_with_output().unwrap();
    assert_success(&output);
    assert!(stdout_str(&output).contains("Can't reach 1 nodes starting at A with expiration of 1"));
}

// ==================== CLI Error Tests ====================

#[test]
fn test_cli_missing_vertex_exit_code() {
    let tmp = input_file(SAMPLE_INPUT);
    let output = run_pdecay(&["traverse", tmp.path().to_str().unwrap(), "Q"]);
    assert_eq!(output.status.code(), Some(4));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Vertex Q not found"));
}

#[test]
fn test_cli_invalid_label_exit_code() {
    let tmp = input_file(SAMPLE_INPUT);
    let output = run_pdecay(&["expire", tmp.path().to_str().unwrap(), "q", "1"]);
    assert_eq!(output.status.code(), Some(4));
}

#[test]
fn test_cli_malformed_input_exit_code() {
    let tmp = input_file("A BC B\n");
    let output = run_pdecay(&["show", tmp.path().to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_cli_bad_query_line_prints_nothing() {
    let tmp = input_file("A B\nA x\n");
    let output = run_pdecay(&["run", tmp.path().to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(2));
    assert!(stdout_str(&output).is_empty());
}

#[test]
fn test_cli_missing_file_exit_code() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.txt");
    let output = run_pdecay(&["show", missing.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(1));
}
