//! Integration tests for the `vpnkey` CLI binary.
//!
//! These tests run the CLI as a subprocess and check exit codes, stdout, and
//! written files. Actual clipboard writes need a desktop session and are not
//! exercised here; only `copy` argument handling is.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::fs;
use std::path::Path;
use std::process::Command;

/// Helper: locate the `vpnkey` binary built by `cargo test`.
fn vpnkey_bin() -> String {
    let path = env!("CARGO_BIN_EXE_vpnkey");
    assert!(Path::new(path).exists(), "vpnkey binary not found at {path}");
    path.to_owned()
}

/// Helper: run vpnkey with args and return (`exit_code`, stdout, stderr).
fn run(args: &[&str]) -> (i32, String, String) {
    let output = Command::new(vpnkey_bin())
        .args(args)
        .env_remove("VPNKEY_KEY")
        .env_remove("VPNKEY_QR_SCRIPT_URL")
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to execute vpnkey");

    let code = output.status.code().unwrap_or(-1);
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    (code, stdout, stderr)
}

// ── Version & help ───────────────────────────────────────────────────

#[test]
fn test_version_flag() {
    let (code, stdout, _) = run(&["--version"]);
    assert_eq!(code, 0, "vpnkey --version should exit 0");
    assert!(stdout.contains("vpnkey"), "version output: {stdout}");
}

#[test]
fn test_help_lists_subcommands() {
    let (code, stdout, _) = run(&["--help"]);
    assert_eq!(code, 0);
    for sub in ["render", "steps", "copy"] {
        assert!(stdout.contains(sub), "help should mention {sub}: {stdout}");
    }
}

// ── render ───────────────────────────────────────────────────────────

#[test]
fn test_render_defaults_to_stdout() {
    let (code, stdout, _) = run(&["render"]);
    assert_eq!(code, 0);
    assert!(stdout.starts_with("<!DOCTYPE html>"));
    assert!(stdout.contains(">nit8e67o</code>"));
    assert!(stdout.contains("<span id=\"expires-in\">4 дня</span>"));
    assert!(stdout.contains("<html lang=\"ru\">"));
}

#[test]
fn test_render_with_key_language_and_tab() {
    let (code, stdout, _) = run(&[
        "render", "--key", "abc123", "--expires", "7 days", "--lang", "en", "--tab", "clash",
    ]);
    assert_eq!(code, 0);
    assert!(stdout.contains(">abc123</code>"));
    assert!(stdout.contains("<span id=\"expires-in\">7 days</span>"));
    assert!(stdout.contains("<html lang=\"en\">"));
    assert!(stdout.contains("data-active-tab=\"clash\""));
    assert!(stdout.contains("Download Clash Verge"));
}

#[test]
fn test_render_writes_file() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("page.html");
    let (code, _, stderr) = run(&["render", "--key", "filekey", "--out", out.to_str().unwrap()]);
    assert_eq!(code, 0, "stderr: {stderr}");
    assert!(stderr.contains("wrote"));

    let html = fs::read_to_string(&out).unwrap();
    assert!(html.contains(">filekey</code>"));
    assert!(html.contains("src=\"https://cdnjs.cloudflare.com/ajax/libs/qrious/4.0.2/qrious.min.js\""));
}

#[test]
fn test_render_rejects_unknown_language() {
    let (code, _, stderr) = run(&["render", "--lang", "de"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("unknown language code 'de'"), "stderr: {stderr}");
}

#[test]
fn test_render_to_missing_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("missing").join("page.html");
    let (code, _, stderr) = run(&["render", "--out", out.to_str().unwrap()]);
    assert_eq!(code, 1);
    assert!(stderr.contains("failed to write"), "stderr: {stderr}");
}

// ── copy ─────────────────────────────────────────────────────────────

#[test]
fn test_copy_help_documents_hold() {
    let (code, stdout, _) = run(&["copy", "--help"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("--hold <SECS>"), "help: {stdout}");
    assert!(stdout.contains("[default: 60]"), "help: {stdout}");
}

#[test]
fn test_copy_rejects_non_numeric_hold() {
    let (code, _, stderr) = run(&["copy", "--hold", "forever"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("--hold <SECS>"), "stderr: {stderr}");
}

// ── steps ────────────────────────────────────────────────────────────

#[test]
fn test_steps_hiddify_in_english() {
    let (code, stdout, _) = run(&["steps", "--lang", "en"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("1."));
    assert!(stdout.contains("4."));
    assert!(!stdout.contains("5."));
    assert!(stdout.contains("Download Hiddify"));
    assert!(stdout.contains("hiddify-app/releases"));
}

#[test]
fn test_steps_clash_in_russian() {
    let (code, stdout, _) = run(&["steps", "--tab", "clash"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("3."));
    assert!(!stdout.contains("4."));
    assert!(stdout.contains("Импортируйте конфиг"));
}
