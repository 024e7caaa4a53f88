use std::fs;

use predicates::prelude::predicate;
use serde_json::{Value, json};
use tempfile::tempdir;

#[test]
fn fingerprints_stdin_when_no_path_given() {
    assert_cmd::cargo::cargo_bin_cmd!("contentprint")
        .arg("fingerprint")
        .write_stdin("h e l l o\n")
        .assert()
        .code(0)
        .stdout(predicate::str::contains(
            r#"{"mode":"raw","files":[{"path":"-","fingerprint":2788266382,"size":10}]}"#,
        ))
        .stderr(predicate::str::is_empty());
}

#[test]
fn fingerprints_files_in_argument_order() {
    let dir = tempdir().expect("temp dir");
    let world = dir.path().join("world.txt");
    let hello = dir.path().join("hello.txt");
    fs::write(&world, "world").expect("write world");
    fs::write(&hello, "hel lo\r\n").expect("write hello");

    let output = assert_cmd::cargo::cargo_bin_cmd!("contentprint")
        .args([
            "fingerprint",
            "--normalize",
            world.to_str().expect("utf8 path"),
            hello.to_str().expect("utf8 path"),
        ])
        .output()
        .expect("run fingerprint");

    assert_eq!(output.status.code(), Some(0));
    let payload: Value = serde_json::from_slice(&output.stdout).expect("stdout json");
    assert_eq!(payload["mode"], json!("normalized"));
    assert_eq!(payload["files"][0]["fingerprint"], json!(759578642));
    assert_eq!(payload["files"][1]["fingerprint"], json!(2788266382u64));
    assert_eq!(payload["files"][1]["size"], json!(8));
}

#[test]
fn missing_file_is_reported_as_usage_error() {
    let dir = tempdir().expect("temp dir");
    let missing = dir.path().join("missing.jar");

    let output = assert_cmd::cargo::cargo_bin_cmd!("contentprint")
        .args(["fingerprint", missing.to_str().expect("utf8 path")])
        .output()
        .expect("run fingerprint");

    assert_eq!(output.status.code(), Some(3));
    assert!(output.stdout.is_empty());
    let payload: Value = serde_json::from_slice(&output.stderr).expect("stderr json");
    assert_eq!(payload["error"], json!("input_usage_error"));
    assert_eq!(payload["details"]["command"], json!("fingerprint"));
    assert!(
        payload["message"]
            .as_str()
            .expect("message")
            .contains("missing.jar")
    );
}

#[test]
fn emit_pipeline_reports_steps_on_stderr() {
    let output = assert_cmd::cargo::cargo_bin_cmd!("contentprint")
        .args(["fingerprint", "--emit-pipeline", "--normalize"])
        .write_stdin("abc")
        .output()
        .expect("run fingerprint");

    assert_eq!(output.status.code(), Some(0));
    let report: Value = serde_json::from_slice(&output.stderr).expect("stderr json");
    assert_eq!(report["command"], json!("fingerprint"));
    assert_eq!(
        report["input"]["sources"],
        json!([{"label": "input", "source": "stdin"}])
    );
    assert_eq!(
        report["steps"],
        json!([
            "read_fingerprint_input",
            "normalize_line_endings",
            "filter_whitespace",
            "compute_murmur2",
            "write_fingerprint_report"
        ])
    );
}
