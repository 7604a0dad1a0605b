//! Integration tests for `hostconf sources`.

mod common;

use common::hostconf_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Sources are listed in registration order: environment, then user secrets,
/// then command-line overrides.
#[test]
fn test_sources_registration_order() {
    let temp_dir = TempDir::new().unwrap();
    let secrets = temp_dir.path().join("secrets.json");
    fs::write(&secrets, r#"{ "token": "t" }"#).unwrap();

    let output = hostconf_cmd()
        .env("HOSTCONF_USER_SECRETS_PATH", &secrets)
        .args([
            "--user-secrets-id",
            "cli-test",
            "--set",
            "a=1",
            "--output",
            "json",
            "sources",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let sources = parsed["sources"].as_array().unwrap();
    let names: Vec<&str> = sources.iter().map(|s| s["name"].as_str().unwrap()).collect();
    assert_eq!(names, vec!["environment", "user-secrets", "command-line"]);
    assert_eq!(sources[1]["sensitive"], true);
    assert_eq!(sources[1]["entries"], 1);
    assert_eq!(sources[2]["priority"], 100);
    assert!(parsed["duplicate_names"].as_array().unwrap().is_empty());
}

/// Table output has a header row.
#[test]
fn test_sources_table() {
    hostconf_cmd()
        .args(["sources"])
        .assert()
        .success()
        .stdout(predicate::str::contains("NAME"))
        .stdout(predicate::str::contains("environment"));
}

/// An invalid user secrets id is rejected as a source failure.
#[test]
fn test_invalid_user_secrets_id() {
    hostconf_cmd()
        .args(["--user-secrets-id", "../escape", "sources"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Invalid user secrets id"));
}
