//! End-to-end CLI tests.
//!
//! Each test gets its own data directory, so the register/login/write flow
//! runs against a fresh database every time.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

// Helper function to set up a test Command instance
fn set_up_command(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("daybook").unwrap();
    cmd.env_clear()
        .env("HOME", "/tmp")
        .env("DAYBOOK_DIR", data_dir.path());
    cmd
}

fn register_and_login(data_dir: &TempDir) {
    set_up_command(data_dir)
        .args([
            "register",
            "--username",
            "alice",
            "--email",
            "alice@example.com",
            "--password",
            "Secret123!",
        ])
        .assert()
        .success();

    set_up_command(data_dir)
        .args(["login", "--username", "alice", "--password", "Secret123!"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Logged in as 'alice'"));
}

#[test]
fn test_cli_requires_subcommand() {
    let data_dir = TempDir::new().unwrap();
    set_up_command(&data_dir).assert().failure();
}

#[test]
fn test_register_rejects_weak_password() {
    let data_dir = TempDir::new().unwrap();

    set_up_command(&data_dir)
        .args([
            "register",
            "--username",
            "alice",
            "--email",
            "alice@example.com",
            "--password",
            "weak",
        ])
        .assert()
        .failure();
}

#[test]
fn test_write_requires_login() {
    let data_dir = TempDir::new().unwrap();

    set_up_command(&data_dir)
        .args(["write", "--content", "hello"])
        .assert()
        .failure();
}

#[test]
fn test_login_wrong_password_fails() {
    let data_dir = TempDir::new().unwrap();
    register_and_login(&data_dir);

    set_up_command(&data_dir)
        .args(["login", "--username", "alice", "--password", "Wrong456?"])
        .assert()
        .failure();
}

#[test]
fn test_write_show_and_delete_flow() {
    let data_dir = TempDir::new().unwrap();
    register_and_login(&data_dir);

    set_up_command(&data_dir)
        .args([
            "write",
            "--date",
            "2026-02-01",
            "--title",
            "A good day",
            "--mood",
            "Positive",
            "--tags",
            "Work, Yoga",
            "--content",
            "Shipped the release.",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved entry for 2026-02-01"));

    set_up_command(&data_dir)
        .args(["show", "--date", "2026-02-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("A good day"))
        .stdout(predicate::str::contains("Mood: Positive"))
        .stdout(predicate::str::contains("Shipped the release."));

    set_up_command(&data_dir)
        .args(["delete", "--date", "2026-02-01"])
        .assert()
        .success();

    set_up_command(&data_dir)
        .args(["show", "--date", "2026-02-01"])
        .assert()
        .failure();
}

#[test]
fn test_whoami_and_logout() {
    let data_dir = TempDir::new().unwrap();
    register_and_login(&data_dir);

    set_up_command(&data_dir)
        .arg("whoami")
        .assert()
        .success()
        .stdout(predicate::str::contains("alice <alice@example.com>"));

    set_up_command(&data_dir).arg("logout").assert().success();

    set_up_command(&data_dir).arg("whoami").assert().failure();
}

#[test]
fn test_insights_report() {
    let data_dir = TempDir::new().unwrap();
    register_and_login(&data_dir);

    set_up_command(&data_dir)
        .args([
            "write",
            "--date",
            "2026-02-01",
            "--mood",
            "Positive",
            "--tags",
            "Work",
            "--content",
            "one two three",
        ])
        .assert()
        .success();

    set_up_command(&data_dir)
        .args([
            "write",
            "--date",
            "2026-02-02",
            "--mood",
            "Negative",
            "--tags",
            "Health",
            "--content",
            "four five",
        ])
        .assert()
        .success();

    set_up_command(&data_dir)
        .args(["insights", "--from", "2026-02-01", "--to", "2026-02-03"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Insights 2026-02-01 to 2026-02-03"))
        .stdout(predicate::str::contains("Entries: 2"))
        .stdout(predicate::str::contains("Work (1)"))
        .stdout(predicate::str::contains("Missed days (1): 2026-02-03"));
}

#[test]
fn test_insights_json_output() {
    let data_dir = TempDir::new().unwrap();
    register_and_login(&data_dir);

    set_up_command(&data_dir)
        .args([
            "write",
            "--date",
            "2026-02-01",
            "--mood",
            "Positive",
            "--content",
            "hello world",
        ])
        .assert()
        .success();

    set_up_command(&data_dir)
        .args([
            "insights",
            "--from",
            "2026-02-01",
            "--to",
            "2026-02-01",
            "--json",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"total_entries\": 1"))
        .stdout(predicate::str::contains("\"most_frequent_mood\": \"Positive\""));
}

#[test]
fn test_compact_date_format_accepted() {
    let data_dir = TempDir::new().unwrap();
    register_and_login(&data_dir);

    set_up_command(&data_dir)
        .args(["write", "--date", "20260201", "--content", "compact"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2026-02-01"));
}
