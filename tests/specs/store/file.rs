//! Account store file specs

use crate::prelude::*;

#[test]
fn store_flag_selects_file() {
    let temp = Project::empty();
    temp.ew()
        .args(&["--store", "data/accounts.json", "signup", "alice", "--password", "p1"])
        .passes();

    assert!(temp.path().join("data/accounts.json").is_file());
    assert!(!temp.store().exists());
}

#[test]
fn store_env_selects_file() {
    let temp = Project::empty();
    temp.ew()
        .args(&["signup", "alice", "--password", "p1"])
        .env("EW_STORE", "other.json")
        .passes();

    assert!(temp.path().join("other.json").is_file());
}

#[test]
fn config_file_store_is_relative_to_config() {
    let temp = Project::empty();
    temp.file("conf/ew.toml", "store = \"accounts.json\"\n");
    temp.ew()
        .args(&["--config", "conf/ew.toml", "signup", "alice", "--password", "p1"])
        .passes();

    assert!(temp.path().join("conf/accounts.json").is_file());
}

#[test]
fn existing_store_is_loaded() {
    let temp = Project::empty();
    temp.file(
        "users.json",
        r#"{"bob": {"password": "pw", "coins": 40, "referrals": 2, "clicks": 1}}"#,
    );

    temp.ew()
        .args(&["status", "bob", "--password", "pw"])
        .passes()
        .stdout_has("Your Balance: 40 coins")
        .stdout_has("Referrals: 2/10")
        .stdout_has("Clicks: 1/5");
}

#[test]
fn corrupted_store_is_reported() {
    let temp = Project::empty();
    temp.file("users.json", "{not json");

    temp.ew()
        .args(&["login", "alice", "--password", "p1"])
        .fails()
        .stderr_has("Cannot read account store");

    assert_eq!(temp.read("users.json"), "{not json");
}

#[test]
fn empty_store_file_is_empty_ledger() {
    let temp = Project::empty();
    temp.file("users.json", "");

    temp.signup("alice", "p1");
    assert_eq!(temp.store_json()["alice"]["coins"], 0);
}

#[test]
fn log_file_from_config() {
    let temp = Project::empty();
    temp.file("ew.toml", "log_file = \"logs/ew.log\"\nlog_filter = \"info\"\n");
    temp.signup("alice", "p1");

    assert!(temp.read("logs/ew.log").contains("account created"));
}
