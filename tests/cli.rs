//! Integration tests for the `gbd` CLI.
//!
//! These exercise the real binary end-to-end for the non-interactive
//! subcommands: configuration management and persisted-state management.
//! The TUI subcommand needs a terminal and is not driven here.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const GBD_BIN: &str = env!("CARGO_BIN_EXE_gbd");

fn gbd() -> Command {
    Command::new(GBD_BIN)
}

#[test]
fn help_lists_subcommands() {
    gbd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("tui"))
        .stdout(predicate::str::contains("config"))
        .stdout(predicate::str::contains("state"));
}

#[test]
fn version_prints_crate_version() {
    gbd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

// ---------------------------------------------------------------------------
// config
// ---------------------------------------------------------------------------

#[test]
fn config_path_honors_xdg_config_home() {
    let dir = TempDir::new().expect("failed to create temp dir");
    gbd()
        .env("XDG_CONFIG_HOME", dir.path())
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("gridboard"))
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn config_init_creates_valid_file() {
    let dir = TempDir::new().expect("failed to create temp dir");

    gbd()
        .env("XDG_CONFIG_HOME", dir.path())
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created configuration"));

    let config_file = dir.path().join("gridboard").join("config.toml");
    assert!(config_file.exists());

    gbd()
        .env("XDG_CONFIG_HOME", dir.path())
        .args(["config", "validate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("is valid"));
}

#[test]
fn config_init_refuses_overwrite_without_force() {
    let dir = TempDir::new().expect("failed to create temp dir");

    gbd()
        .env("XDG_CONFIG_HOME", dir.path())
        .args(["config", "init"])
        .assert()
        .success();

    gbd()
        .env("XDG_CONFIG_HOME", dir.path())
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    gbd()
        .env("XDG_CONFIG_HOME", dir.path())
        .args(["config", "init", "--force"])
        .assert()
        .success();
}

#[test]
fn config_validate_reports_parse_errors() {
    let dir = TempDir::new().expect("failed to create temp dir");
    let config_dir = dir.path().join("gridboard");
    fs::create_dir_all(&config_dir).expect("mkdir");
    fs::write(config_dir.join("config.toml"), "[tui]\ntick_rate = 42\n").expect("write");

    gbd()
        .env("XDG_CONFIG_HOME", dir.path())
        .args(["config", "validate"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid configuration"));
}

#[test]
fn config_validate_without_file_mentions_defaults() {
    let dir = TempDir::new().expect("failed to create temp dir");
    gbd()
        .env("XDG_CONFIG_HOME", dir.path())
        .args(["config", "validate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("defaults apply"));
}

// ---------------------------------------------------------------------------
// state
// ---------------------------------------------------------------------------

#[test]
fn state_path_prints_both_records() {
    let dir = TempDir::new().expect("failed to create temp dir");
    gbd()
        .args(["state", "path", "--state-dir"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("layouts.json"))
        .stdout(predicate::str::contains("widgets.json"));
}

#[test]
fn state_reset_removes_records() {
    let dir = TempDir::new().expect("failed to create temp dir");
    fs::write(dir.path().join("layouts.json"), "{}").expect("write");
    fs::write(dir.path().join("widgets.json"), "[]").expect("write");

    gbd()
        .args(["state", "reset", "--state-dir"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed persisted state"));

    assert!(!dir.path().join("layouts.json").exists());
    assert!(!dir.path().join("widgets.json").exists());
}

#[test]
fn state_reset_succeeds_with_nothing_to_remove() {
    let dir = TempDir::new().expect("failed to create temp dir");
    gbd()
        .args(["state", "reset", "--state-dir"])
        .arg(dir.path())
        .assert()
        .success();
}
