use std::fs;

use serde_json::{Value, json};
use tempfile::tempdir;

#[test]
fn find_lists_matching_files() {
    let dir = tempdir().expect("temp dir");
    fs::write(dir.path().join("greeting.txt"), "hello\n").expect("write");
    fs::write(dir.path().join("other.txt"), "world").expect("write");

    let output = assert_cmd::cargo::cargo_bin_cmd!("contentprint")
        .args([
            "find",
            "--fingerprint",
            "2788266382",
            "--path",
            dir.path().to_str().expect("utf8 path"),
        ])
        .output()
        .expect("run find");

    assert_eq!(output.status.code(), Some(0));
    let payload: Value = serde_json::from_slice(&output.stdout).expect("stdout json");
    assert_eq!(payload["fingerprint"], json!(2788266382u64));
    assert_eq!(
        payload["matches"],
        json!([{"path": "greeting.txt", "fingerprint": 2788266382u64, "size": 6}])
    );
}

#[test]
fn find_without_match_exits_with_two() {
    let dir = tempdir().expect("temp dir");
    fs::write(dir.path().join("a.txt"), "a").expect("write");

    let output = assert_cmd::cargo::cargo_bin_cmd!("contentprint")
        .args([
            "find",
            "--fingerprint",
            "1",
            "--path",
            dir.path().to_str().expect("utf8 path"),
        ])
        .output()
        .expect("run find");

    assert_eq!(output.status.code(), Some(2));
    let payload: Value = serde_json::from_slice(&output.stdout).expect("stdout json");
    assert_eq!(payload["matches"], json!([]));
}

#[test]
fn find_rejects_non_numeric_fingerprint() {
    let dir = tempdir().expect("temp dir");

    assert_cmd::cargo::cargo_bin_cmd!("contentprint")
        .args([
            "find",
            "--fingerprint",
            "abc",
            "--path",
            dir.path().to_str().expect("utf8 path"),
        ])
        .assert()
        .code(3);
}
