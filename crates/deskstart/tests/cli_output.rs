//! Integration tests for CLI output behavior
//!
//! The default behavior is quiet (warnings only). Use -v/--verbose to
//! enable info logs. Every test points the binary at its own temp startup
//! folder so nothing is ever actually launched.

use std::process::Command;

use tempfile::TempDir;

fn run_deskstart(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_deskstart"))
        .args(args)
        .output()
        .expect("Failed to execute deskstart")
}

fn empty_startup_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

#[test]
fn test_empty_startup_dir_reports_no_items() {
    let dir = empty_startup_dir();
    let output = run_deskstart(&[dir.path().to_str().unwrap()]);

    assert!(
        output.status.success(),
        "deskstart failed with exit code {:?}. stderr: {}",
        output.status.code(),
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("No startup items found"),
        "stdout should report an empty startup folder, got: {}",
        stdout
    );
}

/// Verify that stdout contains only user-facing output (no JSON logs)
#[test]
fn test_stdout_is_clean() {
    let dir = empty_startup_dir();
    let output = run_deskstart(&[dir.path().to_str().unwrap()]);

    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(
        !stdout.contains(r#""event":"#),
        "stdout should not contain JSON logs, got: {}",
        stdout
    );

    // No line should be a JSON log (starting with '{')
    for line in stdout.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        assert!(
            !trimmed.starts_with('{'),
            "stdout contains JSON line: {}",
            line
        );
    }
}

/// Verify that default mode (no flags) suppresses INFO-level logs
#[test]
fn test_default_mode_suppresses_info_logs() {
    let dir = empty_startup_dir();
    let output = run_deskstart(&[dir.path().to_str().unwrap()]);

    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(
        !stderr.contains(r#""level":"INFO""#),
        "Default mode should suppress INFO logs, but stderr contains: {}",
        stderr
    );
    assert!(
        !stderr.contains(r#""level":"DEBUG""#),
        "Default mode should suppress DEBUG logs, but stderr contains: {}",
        stderr
    );
}

/// Verify verbose mode (-v) emits INFO logs
#[test]
fn test_verbose_flag_emits_info_logs() {
    let dir = empty_startup_dir();
    let output = run_deskstart(&["-v", dir.path().to_str().unwrap()]);

    assert!(
        output.status.success(),
        "deskstart -v failed with exit code {:?}. stderr: {}",
        output.status.code(),
        String::from_utf8_lossy(&output.stderr)
    );

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains(r#""level":"INFO""#),
        "Verbose mode should emit INFO logs, but stderr is: {}",
        stderr
    );
}

/// Verify verbose mode works with --verbose long form
#[test]
fn test_verbose_flag_long_form_emits_logs() {
    let dir = empty_startup_dir();
    let output = run_deskstart(&["--verbose", dir.path().to_str().unwrap()]);

    assert!(output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains(r#""level":"INFO""#),
        "--verbose long form should emit INFO logs, but stderr is: {}",
        stderr
    );
}

/// A missing startup folder is created rather than treated as an error
#[test]
fn test_missing_startup_dir_is_created() {
    let parent = empty_startup_dir();
    let startup = parent.path().join("Desktop-Startup");
    assert!(!startup.exists());

    let output = run_deskstart(&[startup.to_str().unwrap()]);

    assert!(
        output.status.success(),
        "deskstart should succeed for a missing startup folder. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(
        startup.is_dir(),
        "deskstart should create the startup folder for next time"
    );
}

/// A negative launch delay is rejected before anything runs
#[test]
fn test_negative_delay_is_rejected() {
    let dir = empty_startup_dir();
    let output = run_deskstart(&["--delay=-1", dir.path().to_str().unwrap()]);

    assert!(
        !output.status.success(),
        "deskstart should reject a negative delay"
    );
}
