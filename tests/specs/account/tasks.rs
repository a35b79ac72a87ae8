//! Task reward specs

use crate::prelude::*;

#[test]
fn task_credits_and_status_reports() {
    let temp = Project::empty();
    temp.signup("alice", "p1");

    temp.ew()
        .args(&["task", "watch-video", "alice", "--password", "p1"])
        .passes()
        .stdout_has("You earned 20 coins! Balance: 20");
    for _ in 0..3 {
        temp.ew()
            .args(&["task", "play-game", "alice", "--password", "p1"])
            .passes();
    }

    temp.ew()
        .args(&["status", "alice", "--password", "p1"])
        .passes()
        .stdout_has("Your Balance: 35 coins")
        .stdout_has("Referrals: 0/10")
        .stdout_has("You do not meet the withdrawal requirements yet.");
}

#[test]
fn task_link_is_printed_by_default() {
    let temp = Project::empty();
    temp.signup("alice", "p1");

    temp.ew()
        .args(&["task", "install-app", "alice", "--password", "p1"])
        .passes()
        .stderr_has("Open: https://");
}

#[test]
fn subscribe_awards_nothing() {
    let temp = Project::empty();
    temp.signup("alice", "p1");

    temp.ew()
        .args(&["task", "subscribe", "alice", "--password", "p1"])
        .passes()
        .stdout_has("Please subscribe, then run the 'watch-video' task.");
    assert_eq!(temp.store_json()["alice"]["coins"], 0);
}

#[test]
fn referral_bumps_counter_and_coins() {
    let temp = Project::empty();
    temp.signup("alice", "p1");

    temp.ew()
        .args(&["task", "refer-friend", "alice", "--password", "p1"])
        .passes()
        .stdout_has("You earned 5 coins for referral! Balance: 5");

    let store = temp.store_json();
    assert_eq!(store["alice"]["referrals"], 1);
    assert_eq!(store["alice"]["coins"], 5);
}

#[test]
fn task_requires_valid_credentials() {
    let temp = Project::empty();
    temp.signup("alice", "p1");

    temp.ew()
        .args(&["task", "play-game", "alice", "--password", "wrong"])
        .fails()
        .stderr_has("Invalid username or password.");
    assert_eq!(temp.store_json()["alice"]["coins"], 0);
}

#[test]
fn status_as_json() {
    let temp = Project::empty();
    temp.signup("alice", "p1");

    let run = temp
        .ew()
        .args(&["status", "alice", "--password", "p1", "--format", "json"])
        .passes();
    let status: serde_json::Value = serde_json::from_str(&run.stdout()).unwrap();
    assert_eq!(status["coins"], 0);
    assert_eq!(status["eligible"], false);
    assert_eq!(status["required_referrals"], 10);
}
