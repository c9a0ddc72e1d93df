//! Tests for CLI argument parsing against the built binary.

use std::fs;
use std::process::Command;
use tempfile::TempDir;

fn carousel_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_reviews-carousel"))
}

#[test]
fn test_help_lists_options() {
    let output = carousel_cmd()
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--base-url"));
    assert!(stdout.contains("--config"));
    assert!(stdout.contains("--log-file"));
}

#[test]
fn test_version_flag() {
    let output = carousel_cmd()
        .arg("--version")
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_invalid_config_exits_with_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[carousel]\nauto_scroll_ms = 0\n").unwrap();

    let output = carousel_cmd()
        .arg("--config")
        .arg(&path)
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Error: Config validation failed: carousel.auto_scroll_ms must be greater than zero"),
        "unexpected stderr: {}",
        stderr
    );
}

#[test]
fn test_unsupported_base_url_exits_with_error() {
    let dir = TempDir::new().unwrap();
    let output = carousel_cmd()
        .arg("--config")
        .arg(dir.path().join("absent.toml"))
        .arg("--base-url")
        .arg("ftp://reviews.example.com")
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Unsupported scheme 'ftp'"));
}

#[test]
fn test_unknown_flag_is_rejected() {
    let output = carousel_cmd()
        .arg("--backend")
        .arg("x")
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unexpected argument"));
}
