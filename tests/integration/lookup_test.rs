use predicates::prelude::*;

use super::fake_op::{sample_account, FakeOp};

#[test]
fn test_field_value_printed_raw() {
    let op = sample_account();
    op.cmd()
        .args(["-f", "My Login", "Password"])
        .assert()
        .success()
        .stdout("hunter2\n");
}

#[test]
fn test_password_shortcut() {
    let op = sample_account();
    op.cmd()
        .args(["-p", "MY LOGIN"])
        .assert()
        .success()
        .stdout("hunter2\n");
}

#[test]
fn test_first_vault_wins_and_stops_scanning() {
    let op = sample_account();
    op.cmd()
        .args(["-f", "my login", "website"])
        .assert()
        .success()
        .stdout("https://example.com\n");

    let calls = op.calls();
    assert!(calls.contains("item get ilogin --vault vpriv"));
    assert!(!calls.contains("--vault vshared"));
}

#[test]
fn test_unreadable_vault_skipped_during_resolution() {
    let op = FakeOp::new();
    op.vaults(r#"[{"id":"vlock","name":"Locked"},{"id":"vok","name":"Team"}]"#);
    op.items("vok", r#"[{"id":"db","title":"Database"}]"#);
    op.item(
        "vok",
        "db",
        r#"{"id":"db","title":"Database","fields":[{"label":"username","value":"postgres"}]}"#,
    );

    op.cmd()
        .args(["-u", "database"])
        .assert()
        .success()
        .stdout("postgres\n");
}

#[test]
fn test_list_all() {
    let op = sample_account();
    let expected = "\
Found 3 vault(s) accessible to the service account:

Vault: Private (ID: vpriv)
---------------------------
  Found 2 item(s):
  1. My Login (ID: ilogin) Category: LOGIN Tags: web, personal
  2. Wifi (ID: inote)

Vault: Locked (ID: vlock)
--------------------------
  Error listing items in vault Locked: failed to list items: [ERROR] 2026/01/01 00:00:00 You do not have permission to access this vault

Vault: Shared (ID: vshared)
--------------------------
  Found 1 item(s):
  1. my login (ID: idup) Category: LOGIN

";
    op.cmd().arg("-l").assert().success().stdout(expected);
}

#[test]
fn test_list_all_empty_vault() {
    let op = FakeOp::new();
    op.vaults(r#"[{"id":"v1","name":"Empty"}]"#);
    op.items("v1", "[]");
    op.cmd()
        .arg("-l")
        .assert()
        .success()
        .stdout(predicate::str::contains("  No items found in this vault\n"));
}

#[test]
fn test_list_all_no_vaults() {
    let op = FakeOp::new();
    op.cmd()
        .arg("-l")
        .assert()
        .success()
        .stdout("No vaults accessible to this service account\n");
}

#[test]
fn test_list_fields_of_item() {
    let op = sample_account();
    op.cmd()
        .args(["-l", "my login"])
        .assert()
        .success()
        .stdout("Fields for item 'My Login':\n----------------------------\n1. password\n2. website\n");
}

#[test]
fn test_json_field_value() {
    let op = sample_account();
    let output = op
        .cmd()
        .args(["--json", "-f", "My Login", "password"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["item"], "My Login");
    assert_eq!(json["field"], "password");
    assert_eq!(json["value"], "hunter2");
}

#[test]
fn test_json_list_all() {
    let op = sample_account();
    let output = op.cmd().args(["-l", "--json"]).output().unwrap();
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let vaults = json["vaults"].as_array().unwrap();
    assert_eq!(vaults.len(), 3);
    assert_eq!(vaults[0]["items"][0]["tags"][1], "personal");
    assert!(vaults[1]["items"].is_null());
    assert!(vaults[1]["error"].is_string());
}
