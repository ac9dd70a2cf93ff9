//! Configuration integration tests.
//!
//! These tests verify config discovery, format parsing, and precedence
//! from an end-to-end perspective using the compiled binary. Tests use
//! `info --json` to assert actual config values, not just process success.

use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

/// Returns a Command configured to run our binary.
#[allow(deprecated)]
fn cmd() -> Command {
    Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap()
}

/// Run `info --json` from a directory and parse the JSON output.
fn info_json(dir: &std::path::Path) -> Value {
    let output = cmd()
        .args(["-C", dir.to_str().unwrap(), "info", "--json"])
        .output()
        .expect("failed to run command");
    assert!(
        output.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("invalid JSON output")
}

#[test]
fn defaults_without_config_file() {
    let tmp = TempDir::new().unwrap();
    let info = info_json(tmp.path());
    assert_eq!(info["config"]["log_level"], "info");
    assert_eq!(info["config"]["save_counts"], false);
    assert!(info["config_sources"].get("project_files").is_none());
}

#[test]
fn project_config_toml_discovered() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join(".lesbar.toml"),
        "log_level = \"debug\"\nsave_counts = true\n",
    )
    .unwrap();

    let info = info_json(tmp.path());
    assert_eq!(info["config"]["log_level"], "debug");
    assert_eq!(info["config"]["save_counts"], true);
    assert_eq!(info["config_sources"]["project_files"].as_array().unwrap().len(), 1);
}

#[test]
fn project_config_yaml_discovered() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("lesbar.yaml"), "log_level: warn\n").unwrap();

    let info = info_json(tmp.path());
    assert_eq!(info["config"]["log_level"], "warn");
}

#[test]
fn explicit_config_overrides_project_config() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".lesbar.toml"), "log_level = \"warn\"\n").unwrap();
    fs::write(tmp.path().join("override.toml"), "log_level = \"error\"\n").unwrap();

    let output = cmd()
        .args([
            "-C",
            tmp.path().to_str().unwrap(),
            "--config",
            "override.toml",
            "info",
            "--json",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());
    let info: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(info["config"]["log_level"], "error");
}

#[test]
fn env_var_overrides_file_config() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".lesbar.toml"), "log_level = \"warn\"\n").unwrap();

    let output = cmd()
        .env("LESBAR_LOG_LEVEL", "debug")
        .args(["-C", tmp.path().to_str().unwrap(), "info", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let info: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(info["config"]["log_level"], "debug");
}

#[test]
fn configured_counts_file_restricts_schema() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("counts.txt"), "num_sentences\nnum_tokens\n").unwrap();
    fs::write(
        tmp.path().join(".lesbar.toml"),
        "counts_file = \"counts.txt\"\n",
    )
    .unwrap();
    fs::write(tmp.path().join("probe.txt"), "Der Hund läuft. Ja.").unwrap();

    let output = cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "--json", "counts", "probe.txt"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let counts: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(counts.as_object().unwrap().len(), 2);
    assert_eq!(counts["COUNTS_num_sentences"], 2.0);
    assert_eq!(counts["COUNTS_num_tokens"], 6.0);
}

#[test]
fn unknown_counter_in_counts_file_is_fatal() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("counts.txt"), "num_emoji\n").unwrap();
    fs::write(
        tmp.path().join(".lesbar.toml"),
        "counts_file = \"counts.txt\"\n",
    )
    .unwrap();
    fs::write(tmp.path().join("probe.txt"), "Ja.").unwrap();

    let output = cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "counts", "probe.txt"])
        .output()
        .unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unknown counter"), "stderr: {stderr}");
}

#[test]
fn missing_counts_file_is_fatal() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join(".lesbar.toml"),
        "counts_file = \"no_such_counts.txt\"\n",
    )
    .unwrap();
    fs::write(tmp.path().join("probe.txt"), "Ja.").unwrap();

    let output = cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "score", "probe.txt"])
        .output()
        .unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("count definitions"), "stderr: {stderr}");
}
