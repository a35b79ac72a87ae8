//! Sign-up and log-in specs

use crate::prelude::*;

#[test]
fn signup_creates_a_zeroed_account() {
    let temp = Project::empty();
    temp.ew()
        .args(&["signup", "alice", "--password", "p1"])
        .passes()
        .stdout_has("Account created successfully! Please log in now.");

    let store = temp.store_json();
    similar_asserts::assert_eq!(
        store,
        serde_json::json!({
            "alice": {"password": "p1", "coins": 0, "referrals": 0, "clicks": 0}
        })
    );
}

#[test]
fn signup_twice_is_rejected() {
    let temp = Project::empty();
    temp.signup("alice", "p1");

    temp.ew()
        .args(&["signup", "alice", "--password", "other"])
        .fails()
        .stderr_has("Username already exists! Try another.");

    assert_eq!(temp.store_json()["alice"]["password"], "p1");
}

#[test]
fn usernames_are_case_sensitive() {
    let temp = Project::empty();
    temp.signup("alice", "p1");
    temp.signup("Alice", "p2");

    let store = temp.store_json();
    assert_eq!(store.as_object().unwrap().len(), 2);
}

#[test]
fn login_checks_password() {
    let temp = Project::empty();
    temp.signup("alice", "p1");

    temp.ew()
        .args(&["login", "alice", "--password", "p1"])
        .passes()
        .stdout_has("Welcome, alice!");
    temp.ew()
        .args(&["login", "alice", "--password", "P1"])
        .fails()
        .stderr_has("Invalid username or password.");
    temp.ew()
        .args(&["login", "ghost", "--password", "p1"])
        .fails()
        .stderr_has("Invalid username or password.");
}

#[test]
fn password_can_come_from_environment() {
    let temp = Project::empty();
    temp.ew()
        .args(&["signup", "alice"])
        .env("EW_PASSWORD", "secret")
        .passes();

    temp.ew()
        .args(&["login", "alice"])
        .env("EW_PASSWORD", "secret")
        .passes()
        .stdout_has("Welcome, alice!");
}
