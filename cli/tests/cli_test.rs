//! Integration tests for the pospdf binary.

use std::process::Command;
use tempfile::tempdir;

fn pospdf() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_pospdf"));
    cmd.env_remove("POSPDF_UNCOMPRESSED");
    cmd
}

#[test]
fn test_renders_and_prints_path() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("out.pdf");
    let payload = r#"{"address":"Via Roma 1","workType":"Demolition","numWorkers":5,"date":"2024-01-01","content":"Safety notes.\nWear helmets."}"#;

    let result = pospdf().arg(payload).arg(&output).output().unwrap();

    assert!(result.status.success());
    let stdout = String::from_utf8_lossy(&result.stdout);
    assert_eq!(stdout.trim_end(), output.display().to_string());

    let bytes = std::fs::read(&output).unwrap();
    assert!(bytes.starts_with(b"%PDF-"));
}

#[test]
fn test_malformed_payload_fails_without_output() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("out.pdf");

    let result = pospdf().arg("{not json").arg(&output).output().unwrap();

    assert_eq!(result.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(stderr.contains("Malformed input"));
    assert!(!output.exists());
}

#[test]
fn test_missing_directory_fails() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("missing").join("out.pdf");

    let result = pospdf().arg("{}").arg(&output).output().unwrap();

    assert_eq!(result.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&result.stderr).contains("I/O error"));
    assert!(!output.exists());
}

#[test]
fn test_story_snapshot_and_uncompressed() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("plan.pdf");
    let story = dir.path().join("story.json");

    let result = pospdf()
        .arg(r#"{"content":"uno\n\ndue"}"#)
        .arg(&output)
        .arg("--story")
        .arg(&story)
        .arg("--uncompressed")
        .output()
        .unwrap();

    assert!(result.status.success());
    let snapshot = std::fs::read_to_string(&story).unwrap();
    assert!(snapshot.contains("\"page_break\""));
    assert!(snapshot.contains("\"uno\""));

    let bytes = std::fs::read(&output).unwrap();
    let pdf = String::from_utf8_lossy(&bytes);
    assert!(pdf.contains("(uno) Tj"));
    assert!(!pdf.contains("FlateDecode"));
}

#[test]
fn test_missing_arguments() {
    let result = pospdf().output().unwrap();
    assert_eq!(result.status.code(), Some(2));
}
