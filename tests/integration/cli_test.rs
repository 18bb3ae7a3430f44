use predicates::prelude::*;

use super::fake_op::FakeOp;

const USAGE: &str = "\
Usage:
  1psa -l [item_name]         List credentials (optionally for specific item)
  1psa -f item_name field     Get specific field value from item
  1psa -u item_name           Get username from item
  1psa -p item_name           Get password from item
";

#[test]
fn test_help() {
    let op = FakeOp::new();
    op.cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("service account"));
}

#[test]
fn test_version() {
    let op = FakeOp::new();
    op.cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("1psa"));
}

#[test]
fn test_no_flags_prints_usage() {
    let op = FakeOp::new();
    op.cmd().assert().success().stdout(USAGE);
    assert!(op.calls().is_empty());
}

#[test]
fn test_two_flags_rejected_without_backend() {
    let op = FakeOp::new();
    op.cmd()
        .args(["-l", "-f"])
        .assert()
        .success()
        .stdout(format!(
            "Error: Only one flag can be used at a time\n{}",
            USAGE
        ));
    assert!(op.calls().is_empty());
}

#[test]
fn test_username_and_password_together_rejected() {
    let op = FakeOp::new();
    op.cmd()
        .args(["-u", "My Login", "-p", "My Login"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "Error: Only one flag can be used at a time",
        ));
    assert!(op.calls().is_empty());
}

#[test]
fn test_field_flag_needs_two_args() {
    let op = FakeOp::new();
    op.cmd()
        .args(["-f", "My Login"])
        .assert()
        .success()
        .stdout(format!(
            "Error: -f flag requires both item name and field name\n{}",
            USAGE
        ));
    assert!(op.calls().is_empty());
}

#[test]
fn test_token_trimmed_before_use() {
    let op = FakeOp::new();
    op.expect_token("abc123");
    op.write_token("abc123\n");
    op.cmd()
        .arg("-l")
        .assert()
        .success()
        .stdout("No vaults accessible to this service account\n");
}

#[test]
fn test_token_and_integration_passed_via_environment() {
    let op = FakeOp::new();
    op.cmd().arg("-l").assert().success();

    let calls = op.calls();
    assert!(calls.contains("1psa/v1.0.0 whoami --format json"));
    assert!(calls.contains("1psa/v1.0.0 vault list --format json"));
    assert!(!calls.contains(super::fake_op::TOKEN));
}

#[test]
fn test_inherited_account_overrides_not_passed_to_op() {
    let op = FakeOp::new();
    op.cmd()
        .arg("-l")
        .env("OP_CONNECT_HOST", "https://connect.example")
        .env("OP_CONNECT_TOKEN", "connect-token")
        .env("OP_ACCOUNT", "personal.1password.com")
        .env("OP_SESSION_myteam", "session-token")
        .assert()
        .success();

    let env_log = op.env_log();
    assert_eq!(env_log.lines().count(), 3); // --version, whoami, vault list
    for line in env_log.lines() {
        assert_eq!(line, "connect=| account= session=");
    }
}

#[test]
fn test_flags_after_positionals_are_arguments() {
    let op = super::fake_op::sample_account();
    op.cmd()
        .args(["-f", "My Login", "password", "-l"])
        .assert()
        .success()
        .stdout("hunter2\n");
}
