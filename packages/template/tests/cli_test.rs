//! Command-line tests for the `regelrecht-template` binary.

use std::io::Write;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;

fn fixture_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("household")
        .join("template.xml")
}

fn cli() -> Command {
    Command::cargo_bin("regelrecht-template").expect("binary should be built")
}

#[test]
fn test_show_yaml() {
    cli()
        .arg("show")
        .arg(fixture_path())
        .assert()
        .success()
        .stdout(predicate::str::starts_with("---\n"))
        .stdout(predicate::str::contains("display: output/diagram"))
        .stdout(predicate::str::contains("currency: EUR"));
}

#[test]
fn test_show_json() {
    let output = cli()
        .args(["show", "--format", "json"])
        .arg(fixture_path())
        .output()
        .expect("command should run");

    assert!(output.status.success());
    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    assert_eq!(value["articles"].as_array().map(Vec::len), Some(3));
    assert_eq!(value["terminology"][0]["name"], "vat_high");
}

#[test]
fn test_summary() {
    cli()
        .arg("summary")
        .arg(fixture_path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Articles: 3"))
        .stdout(predicate::str::contains("Terminology: 3"))
        .stdout(predicate::str::contains("Inkomen"));
}

#[test]
fn test_malformed_input_fails() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    write!(file, "<issue><article></issue>").expect("write temp file");

    cli()
        .arg("show")
        .arg(file.path())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error: XML parsing failed"));
}

#[test]
fn test_max_size_enforced() {
    cli()
        .args(["show", "--max-size", "10"])
        .arg(fixture_path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("exceeds the limit of 10 bytes"));
}

#[test]
fn test_missing_file_fails() {
    cli()
        .args(["summary", "/nonexistent/template.xml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: IO error"));
}
