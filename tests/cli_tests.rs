//! CLI integration tests
//!
//! All clipboard runs use --dry-run so no test touches the OS clipboard,
//! and every invocation gets a scratch XDG config dir.

use assert_cmd::Command;
use predicates::prelude::*;

fn clipact(config_dir: &tempfile::TempDir) -> Command {
    let mut cmd = Command::cargo_bin("clipact").expect("binary exists");
    cmd.env("XDG_CONFIG_HOME", config_dir.path());
    cmd.env("HOME", config_dir.path());
    cmd
}

fn scratch() -> tempfile::TempDir {
    tempfile::tempdir().expect("tempdir")
}

#[test]
fn help_output() {
    let dir = scratch();
    clipact(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("clipboard"))
        .stdout(predicate::str::contains("--action"))
        .stdout(predicate::str::contains("--file"))
        .stdout(predicate::str::contains("--dry-run"))
        .stdout(predicate::str::contains("--json"));
}

#[test]
fn version_output() {
    let dir = scratch();
    clipact(&dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("clipact"))
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn no_input_is_a_usage_error() {
    let dir = scratch();
    clipact(&dir)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Nothing to copy"));
}

#[test]
fn unknown_action_is_rejected() {
    let dir = scratch();
    clipact(&dir)
        .args(["-a", "paste", "hello"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("paste"));
}

#[test]
fn dry_run_copy_emits_success_json() {
    let dir = scratch();
    clipact(&dir)
        .args(["hello", "--dry-run", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"event\":\"success\""))
        .stdout(predicate::str::contains("\"action\":\"copy\""))
        .stdout(predicate::str::contains("\"text\":\"hello\""));
}

#[test]
fn dry_run_cut_emits_cut_action() {
    let dir = scratch();
    clipact(&dir)
        .args(["-a", "cut", "hello", "--dry-run", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"action\":\"cut\""));
}

#[test]
fn quiet_dry_run_prints_nothing() {
    let dir = scratch();
    clipact(&dir)
        .args(["hello", "--dry-run", "--quiet"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::is_empty());
}

#[test]
fn file_content_is_copied() {
    let dir = scratch();
    let file = dir.path().join("notes.txt");
    std::fs::write(&file, "world").unwrap();

    clipact(&dir)
        .args(["--file"])
        .arg(&file)
        .args(["--dry-run", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"text\":\"world\""));
}

#[test]
fn missing_file_fails() {
    let dir = scratch();
    clipact(&dir)
        .args(["--file", "/nonexistent/notes.txt", "--dry-run"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to read"));
}

#[test]
fn text_and_file_conflict() {
    let dir = scratch();
    clipact(&dir)
        .args(["hello", "--file", "notes.txt"])
        .assert()
        .code(2);
}

#[test]
fn config_path_command() {
    let dir = scratch();
    clipact(&dir)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("clipact"))
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn config_help() {
    let dir = scratch();
    clipact(&dir)
        .args(["config", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("init"))
        .stdout(predicate::str::contains("set"))
        .stdout(predicate::str::contains("get"))
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("path"));
}

#[test]
fn config_set_then_get() {
    let dir = scratch();
    clipact(&dir)
        .args(["config", "set", "action", "cut"])
        .assert()
        .success();

    clipact(&dir)
        .args(["config", "get", "action"])
        .assert()
        .success()
        .stdout(predicate::str::contains("cut"));
}

#[test]
fn configured_action_applies_to_runs() {
    let dir = scratch();
    clipact(&dir)
        .args(["config", "set", "action", "cut"])
        .assert()
        .success();

    clipact(&dir)
        .args(["hello", "--dry-run", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"action\":\"cut\""));
}

#[test]
fn cli_action_overrides_config() {
    let dir = scratch();
    clipact(&dir)
        .args(["config", "set", "action", "cut"])
        .assert()
        .success();

    clipact(&dir)
        .args(["-a", "copy", "hello", "--dry-run", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"action\":\"copy\""));
}

#[test]
fn config_set_unknown_key() {
    let dir = scratch();
    clipact(&dir)
        .args(["config", "set", "unknown_key", "value"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Unknown"));
}

#[test]
fn config_get_unknown_key() {
    let dir = scratch();
    clipact(&dir)
        .args(["config", "get", "unknown_key"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Unknown"));
}

#[test]
fn config_set_invalid_action_value() {
    let dir = scratch();
    clipact(&dir)
        .args(["config", "set", "action", "paste"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("copy"));
}

#[test]
fn config_init_refuses_second_run() {
    let dir = scratch();
    clipact(&dir).args(["config", "init"]).assert().success();

    clipact(&dir)
        .args(["config", "init"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("already exists"));
}
