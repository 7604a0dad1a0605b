//! Integration tests for `hostconf get`.

mod common;

use common::hostconf_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// A defined key prints its bare value.
#[test]
fn test_get_prints_value() {
    hostconf_cmd()
        .env("HOSTCONF_TEST_db__host", "localhost")
        .args(["get", "db.host"])
        .assert()
        .success()
        .stdout("localhost\n");
}

/// An undefined key exits with code 4 and prints nothing on stdout.
#[test]
fn test_get_missing_key_exit_code() {
    hostconf_cmd()
        .args(["get", "missing"])
        .assert()
        .code(4)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Key not found: missing"));
}

/// Keys are case-sensitive.
#[test]
fn test_get_is_case_sensitive() {
    hostconf_cmd()
        .env("HOSTCONF_TEST_db__host", "localhost")
        .args(["get", "DB.HOST"])
        .assert()
        .code(4);
}

/// `--lowercase-env` normalizes environment keys only.
#[test]
fn test_lowercase_env_keys() {
    hostconf_cmd()
        .env("HOSTCONF_TEST_DB__HOST", "localhost")
        .args(["--lowercase-env", "get", "db.host"])
        .assert()
        .success()
        .stdout("localhost\n");
}

/// Command-line overrides win over environment variables.
#[test]
fn test_set_overrides_environment() {
    hostconf_cmd()
        .env("HOSTCONF_TEST_db__host", "localhost")
        .args(["--set", "db.host=override", "--output", "json", "get", "db.host"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"value\": \"override\""))
        .stdout(predicate::str::contains("\"source\": \"command-line\""));
}

/// A malformed settings file aborts with the source-failure exit code.
#[test]
fn test_broken_settings_file_exit_code() {
    let temp_dir = TempDir::new().unwrap();
    let settings = temp_dir.path().join("broken.json");
    fs::write(&settings, "{ not json").unwrap();

    hostconf_cmd()
        .args(["--settings"])
        .arg(&settings)
        .args(["get", "anything"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Failed to load configuration"));
}

/// `--lenient` skips the broken source and keeps going.
#[test]
fn test_lenient_skips_broken_source() {
    let temp_dir = TempDir::new().unwrap();
    let settings = temp_dir.path().join("broken.json");
    fs::write(&settings, "{ not json").unwrap();

    hostconf_cmd()
        .env("HOSTCONF_TEST_db__host", "localhost")
        .args(["--lenient", "--settings"])
        .arg(&settings)
        .args(["get", "db.host"])
        .assert()
        .success()
        .stdout("localhost\n");
}

/// A missing settings file given explicitly is an error.
#[test]
fn test_missing_settings_file_exit_code() {
    let temp_dir = TempDir::new().unwrap();

    hostconf_cmd()
        .args(["--settings"])
        .arg(temp_dir.path().join("absent.json"))
        .args(["get", "anything"])
        .assert()
        .code(3);
}

/// `--set` without `=` is a usage error, not a silently missing key.
#[test]
fn test_set_without_equals_is_usage_error() {
    hostconf_cmd()
        .args(["--set", "db.host", "get", "db.host"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("expected KEY=VALUE"));
}

/// An empty `--set` key fails the source without echoing the value.
#[test]
fn test_set_empty_key_does_not_leak_value() {
    hostconf_cmd()
        .args(["--set", "=hunter2", "get", "db.host"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("empty key"))
        .stderr(predicate::str::contains("hunter2").not());
}

/// A `--set` value may be an absolute path.
#[test]
fn test_set_value_may_be_absolute_path() {
    hostconf_cmd()
        .args(["--set", "log.dir=/var/log/app", "get", "log.dir"])
        .assert()
        .success()
        .stdout("/var/log/app\n");
}
