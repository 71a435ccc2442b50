// ABOUTME: Integration tests for the launchpad CLI commands.
// ABOUTME: Validates --help output, init, env, and deploy argument/config failures.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

fn launchpad_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("launchpad"));
    cmd.env_clear();
    cmd
}

#[test]
fn help_shows_commands() {
    launchpad_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("deploy"))
        .stdout(predicate::str::contains("init"))
        .stdout(predicate::str::contains("env"));
}

#[test]
fn init_creates_config_file() {
    let temp_dir = tempfile::tempdir().unwrap();
    let config_path = temp_dir.path().join("launchpad.yml");

    launchpad_cmd()
        .current_dir(temp_dir.path())
        .args(["init", "--name", "billing"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created"));

    let content = fs::read_to_string(&config_path).unwrap();
    assert!(content.contains("name: billing"));
    assert!(content.contains("LAUNCHPAD_API_KEY"));
}

#[test]
fn init_refuses_to_overwrite_existing_config() {
    let temp_dir = tempfile::tempdir().unwrap();
    fs::write(temp_dir.path().join("launchpad.yml"), "existing: config").unwrap();

    launchpad_cmd()
        .current_dir(temp_dir.path())
        .arg("init")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn env_prints_prefixed_variables() {
    launchpad_cmd()
        .arg("env")
        .env("LP_ENV_MODE", "production")
        .env("LP_ENV_DATABASE_URL", "postgres://db")
        .env("UNRELATED", "ignored")
        .assert()
        .success()
        .stdout("LP_ENV_DATABASE_URL=postgres://db,LP_ENV_MODE=production\n");
}

#[test]
fn env_json_output() {
    launchpad_cmd()
        .args(["--json", "env"])
        .env("LP_ENV_MODE", "production")
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""event":"result""#))
        .stdout(predicate::str::contains(r#""value":"LP_ENV_MODE=production""#));
}

#[test]
fn deploy_without_config_fails() {
    let temp_dir = tempfile::tempdir().unwrap();

    launchpad_cmd()
        .current_dir(temp_dir.path())
        .arg("deploy")
        .assert()
        .failure()
        .stderr(predicate::str::contains("configuration file not found"));
}

#[test]
fn deploy_outside_ci_reports_missing_context() {
    let temp_dir = tempfile::tempdir().unwrap();
    fs::write(
        temp_dir.path().join("launchpad.yml"),
        "name: api\napi_key: k\nservice_account_key: s\n",
    )
    .unwrap();

    launchpad_cmd()
        .current_dir(temp_dir.path())
        .arg("deploy")
        .assert()
        .failure()
        .stderr(predicate::str::contains("GITHUB_SHA"));
}

#[test]
fn deploy_reports_missing_credentials() {
    let temp_dir = tempfile::tempdir().unwrap();

    launchpad_cmd()
        .current_dir(temp_dir.path())
        .arg("init")
        .assert()
        .success();

    launchpad_cmd()
        .current_dir(temp_dir.path())
        .arg("deploy")
        .env("GITHUB_SHA", "abc123")
        .env("GITHUB_REPOSITORY", "acme/widgets")
        .env("GITHUB_REF", "refs/heads/main")
        .assert()
        .failure()
        .stderr(predicate::str::contains("LAUNCHPAD_API_KEY"));
}

#[test]
fn deploy_rejects_invalid_name_override() {
    let temp_dir = tempfile::tempdir().unwrap();
    fs::write(
        temp_dir.path().join("launchpad.yml"),
        "name: api\napi_key: k\nservice_account_key: s\n",
    )
    .unwrap();

    launchpad_cmd()
        .current_dir(temp_dir.path())
        .args(["deploy", "--name", "Not Valid"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid configuration"));
}

#[test]
fn quiet_and_json_conflict() {
    launchpad_cmd()
        .args(["--quiet", "--json", "env"])
        .assert()
        .failure();
}
