use predicates::prelude::*;

use super::fake_op::{sample_account, FakeOp};

#[test]
fn test_exit_code_missing_token_file() {
    let op = FakeOp::new();
    std::fs::remove_file(op.token_file()).unwrap();

    let output = op.cmd().arg("-l").output().unwrap();
    assert_eq!(output.status.code(), Some(7)); // ConfigError
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to create 1Password client"));
    assert!(stderr.contains(&op.token_file().display().to_string()));
    assert!(op.calls().is_empty());
}

#[test]
fn test_exit_code_rejected_token() {
    let op = FakeOp::new();
    op.write_token("ops_wrong_token\n");

    op.cmd()
        .args(["-p", "My Login"])
        .assert()
        .code(2) // AuthError
        .stderr(predicate::str::contains("Failed to create 1Password client"))
        .stderr(predicate::str::contains("invalid service account token"));
    assert!(!op.calls().contains("item"));
}

#[test]
fn test_exit_code_blank_token_file() {
    let op = FakeOp::new();
    op.expect_token("");
    op.write_token("   \n");

    op.cmd()
        .arg("-l")
        .assert()
        .code(2) // AuthError
        .stdout("")
        .stderr(predicate::str::contains("is empty"));
    assert!(op.calls().is_empty());
}

#[test]
fn test_exit_code_item_fetch_failure() {
    let op = FakeOp::new();
    op.vaults(r#"[{"id":"v1","name":"Private"},{"id":"v2","name":"Shared"}]"#);
    op.items("v1", r#"[{"id":"gone","title":"Router"}]"#);
    op.items("v2", r#"[{"id":"ok","title":"Router"}]"#);
    op.item("v2", "ok", r#"{"id":"ok","title":"Router","fields":[{"label":"password","value":"x"}]}"#);

    op.cmd()
        .args(["-p", "Router"])
        .assert()
        .code(1) // BackendError
        .stdout("")
        .stderr(predicate::str::contains("failed to get item details"));
    assert!(!op.calls().contains("--vault v2"));
}

#[test]
fn test_exit_code_missing_field() {
    let op = sample_account();
    op.cmd()
        .args(["-u", "My Login"])
        .assert()
        .code(3) // NotFoundError
        .stdout("")
        .stderr(predicate::str::contains(
            "Command failed: field 'username' not found in item 'My Login'",
        ));
}

#[test]
fn test_exit_code_missing_item() {
    let op = sample_account();
    op.cmd()
        .args(["-f", "GitLab", "password"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("item 'GitLab' not found"));
}

#[test]
fn test_exit_code_vault_listing_failure() {
    let op = FakeOp::new();
    op.vaults("not json");
    op.cmd()
        .arg("-l")
        .assert()
        .code(1) // BackendError
        .stderr(predicate::str::contains("Command failed: failed to list vaults"));
}

#[test]
fn test_json_error_on_stderr() {
    let op = sample_account();
    let output = op
        .cmd()
        .args(["--json", "-p", "Nothing Here"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(3));
    let json: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(json["error"]["code"], "not_found");
    assert_eq!(json["error"]["exit_code"], 3);
}
