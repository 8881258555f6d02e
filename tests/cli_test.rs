//! End-to-end tests driving the compiled binary through stdin.

#![allow(clippy::expect_used)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::process::Stdio;
use tempfile::TempDir;

fn processor() -> Command {
    let mut cmd = Command::cargo_bin("file-processor").expect("binary built");
    cmd.env_remove("FILE_PROCESSOR_FORMAT");
    cmd.env_remove("FILE_PROCESSOR_LOG");
    cmd
}

#[test]
fn test_full_run_writes_output() {
    let temp = TempDir::new().expect("temp dir");
    let input = temp.path().join("in.txt");
    let output = temp.path().join("out.txt");
    std::fs::write(&input, "x  y\n\n\nz").expect("write input");

    processor()
        .write_stdin(format!("{}\n{}\nn\n", input.display(), output.display()))
        .assert()
        .success()
        .stdout(predicate::str::contains("File Processor - Read, Modify, and Write Files"))
        .stdout(predicate::str::contains("Program completed successfully!"));

    assert_eq!(
        std::fs::read_to_string(&output).expect("output written"),
        "/* Processed by File Processor - 6 characters */\n\nx y\n\nz"
    );
}

#[test]
fn test_closed_stdin_says_goodbye_and_exits_zero() {
    processor()
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("Program interrupted by user. Goodbye!"));
}

#[test]
fn test_json_format_report() {
    let temp = TempDir::new().expect("temp dir");
    let input = temp.path().join("in.txt");
    let output = temp.path().join("out.txt");
    std::fs::write(&input, "abc").expect("write input");

    processor()
        .args(["--format", "json"])
        .write_stdin(format!("{}\n{}\nn\n", input.display(), output.display()))
        .assert()
        .success()
        .stdout(predicate::str::contains("\"original_chars\": 3"));
}

#[test]
fn test_verbose_logs_to_stderr_only() {
    let temp = TempDir::new().expect("temp dir");
    let input = temp.path().join("in.txt");
    let output = temp.path().join("out.txt");
    std::fs::write(&input, "abc").expect("write input");

    processor()
        .arg("--verbose")
        .write_stdin(format!("{}\n{}\nn\n", input.display(), output.display()))
        .assert()
        .success()
        .stderr(predicate::str::contains("file processed"))
        .stdout(predicate::str::contains("file processed").not());
}

#[test]
fn test_unknown_argument_rejected() {
    processor().arg("--bogus").assert().failure();
}

#[test]
fn test_closed_stdout_exits_cleanly() {
    let bin = assert_cmd::cargo::cargo_bin("file-processor");
    let mut child = std::process::Command::new(bin)
        .env_remove("FILE_PROCESSOR_FORMAT")
        .env_remove("FILE_PROCESSOR_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn binary");

    drop(child.stdout.take());
    drop(child.stdin.take());

    let output = child.wait_with_output().expect("wait for binary");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(output.status.code(), Some(0), "stderr: {stderr}");
    assert!(!stderr.contains("panicked"));
}
