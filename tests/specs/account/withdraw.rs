//! Withdrawal specs

use crate::prelude::*;

fn eligible_store(temp: &Project, coins: u64) {
    temp.file(
        "users.json",
        &serde_json::json!({
            "alice": {"password": "p1", "coins": coins, "referrals": 10, "clicks": 5}
        })
        .to_string(),
    );
}

#[test]
fn new_account_cannot_withdraw() {
    let temp = Project::empty();
    temp.signup("alice", "p1");

    temp.ew()
        .args(&[
            "withdraw", "alice", "--password", "p1", "--amount", "15000", "--method", "paypal",
        ])
        .fails()
        .stderr_has("You do not meet the withdrawal requirements yet.")
        .stderr_has("Minimum: 15000 coins + 10 referrals + 5 clicks required for withdrawal.");
}

#[test]
fn eligible_account_gets_acknowledgement() {
    let temp = Project::empty();
    eligible_store(&temp, 20_000);

    temp.ew()
        .args(&[
            "withdraw", "alice", "--password", "p1", "--amount", "15500", "--method", "jazzcash",
        ])
        .passes()
        .stdout_has("Withdrawal request of 15500 coins via JazzCash submitted!");

    // Requests are acknowledged only
    assert_eq!(temp.store_json()["alice"]["coins"], 20_000);
}

#[test]
fn amount_must_follow_steps() {
    let temp = Project::empty();
    eligible_store(&temp, 20_000);

    temp.ew()
        .args(&[
            "withdraw", "alice", "--password", "p1", "--amount", "15100", "--method", "paypal",
        ])
        .fails()
        .stderr_has("Withdrawal rejected");
}

#[test]
fn unknown_method_is_a_usage_error() {
    let temp = Project::empty();
    eligible_store(&temp, 20_000);

    temp.ew()
        .args(&[
            "withdraw", "alice", "--password", "p1", "--amount", "15000", "--method", "bitcoin",
        ])
        .fails()
        .stderr_has("unknown payment method 'bitcoin'");
}
