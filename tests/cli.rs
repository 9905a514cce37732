//! Integration tests for the `pdash` CLI.
//!
//! These exercise the real binary end-to-end: catalog listing and the
//! config file lifecycle against an isolated `XDG_CONFIG_HOME`.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const PDASH_BIN: &str = env!("CARGO_BIN_EXE_pdash");

fn pdash_cmd() -> Command {
    Command::new(PDASH_BIN)
}

/// A command with `XDG_CONFIG_HOME` pointed at an isolated temp dir.
fn pdash_with_xdg(tmp: &TempDir) -> Command {
    let mut cmd = pdash_cmd();
    cmd.env("XDG_CONFIG_HOME", tmp.path());
    cmd
}

// ---------------------------------------------------------------------------
// catalog
// ---------------------------------------------------------------------------

#[test]
fn catalog_list_prints_all_widgets() {
    pdash_cmd()
        .args(["catalog", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("widget_cloud_accounts"))
        .stdout(predicate::str::contains("Cloud Account Risk Assessment"))
        .stdout(predicate::str::contains("widget_ticket_2"))
        .stdout(predicate::str::contains("placeholder"));
}

#[test]
fn catalog_list_honors_log_filter_env_var() {
    // Subcommands run with a stderr subscriber; a verbose filter must not
    // disturb the stdout table.
    pdash_cmd()
        .env("PDASH_LOG", "debug")
        .args(["catalog", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("widget_cloud_accounts"));
}

#[test]
fn catalog_list_prints_header_row() {
    pdash_cmd()
        .args(["catalog", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("RENDERER"));
}

// ---------------------------------------------------------------------------
// config
// ---------------------------------------------------------------------------

#[test]
fn config_path_respects_xdg_config_home() {
    let tmp = TempDir::new().expect("temp dir");
    pdash_with_xdg(&tmp)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("posture-dashboard"))
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn config_validate_succeeds_without_file() {
    // A missing file at the default location falls back to defaults
    let tmp = TempDir::new().expect("temp dir");
    pdash_with_xdg(&tmp)
        .args(["config", "validate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration is valid"));
}

#[test]
fn config_init_creates_file() {
    let tmp = TempDir::new().expect("temp dir");
    pdash_with_xdg(&tmp)
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created configuration at"));
    assert!(tmp
        .path()
        .join("posture-dashboard/config.toml")
        .exists());
}

#[test]
fn config_init_twice_fails_without_force() {
    let tmp = TempDir::new().expect("temp dir");
    pdash_with_xdg(&tmp).args(["config", "init"]).assert().success();
    pdash_with_xdg(&tmp)
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn config_init_force_overwrites_and_backs_up() {
    let tmp = TempDir::new().expect("temp dir");
    pdash_with_xdg(&tmp).args(["config", "init"]).assert().success();
    pdash_with_xdg(&tmp)
        .args(["config", "init", "--force"])
        .assert()
        .success();
    assert!(tmp
        .path()
        .join("posture-dashboard/config.toml.backup")
        .exists());
}

#[test]
fn config_init_then_validate_roundtrips() {
    let tmp = TempDir::new().expect("temp dir");
    pdash_with_xdg(&tmp).args(["config", "init"]).assert().success();
    pdash_with_xdg(&tmp)
        .args(["config", "validate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration is valid"));
}

#[test]
fn config_validate_reports_invalid_toml() {
    let tmp = TempDir::new().expect("temp dir");
    let dir = tmp.path().join("posture-dashboard");
    std::fs::create_dir_all(&dir).expect("create config dir");
    std::fs::write(dir.join("config.toml"), "[log]\nlevel = \"loud\"\n")
        .expect("write config");
    pdash_with_xdg(&tmp)
        .args(["config", "validate"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Config error"));
}

// ---------------------------------------------------------------------------
// argument handling
// ---------------------------------------------------------------------------

#[test]
fn unknown_subcommand_fails() {
    pdash_cmd().arg("unknown").assert().failure();
}

#[test]
fn missing_subcommand_fails() {
    pdash_cmd().assert().failure();
}

#[test]
fn help_lists_subcommands() {
    pdash_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("tui"))
        .stdout(predicate::str::contains("catalog"))
        .stdout(predicate::str::contains("config"));
}
