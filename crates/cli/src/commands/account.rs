// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `ew signup`, `ew login`, `ew status`

use crate::error::EwError;
use clap::Args;
use ew_core::WithdrawalPolicy;
use ew_storage::{Ledger, RecordStore};
use serde::Serialize;
use std::fmt;
use tracing::warn;

#[derive(Args, Debug)]
pub struct Credentials {
    /// Account username (case-sensitive)
    pub username: String,

    /// Account password
    #[arg(long, env = "EW_PASSWORD", hide_env_values = true)]
    pub password: String,
}

/// Register a new account. Checks for the username before creating it.
pub fn signup<S: RecordStore>(
    ledger: &mut Ledger<S>,
    username: &str,
    password: &str,
) -> anyhow::Result<()> {
    if ledger.exists(username) {
        return Err(EwError::username_taken(username).into());
    }
    ledger.create(username, password)?;
    Ok(())
}

/// Check credentials, existence first.
pub fn login<S: RecordStore>(
    ledger: &Ledger<S>,
    username: &str,
    password: &str,
) -> Result<(), EwError> {
    let valid = ledger.exists(username)
        && ledger
            .verify_credentials(username, password)
            .unwrap_or(false);
    if !valid {
        warn!(username, "rejected login");
        return Err(EwError::invalid_credentials());
    }
    Ok(())
}

/// The settings view: balance, counters, and withdrawal standing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccountStatus {
    pub username: String,
    pub coins: u64,
    pub referrals: u64,
    pub clicks: u64,
    pub required_referrals: u64,
    pub required_clicks: u64,
    pub requirements: String,
    pub eligible: bool,
}

pub fn status<S: RecordStore>(
    ledger: &Ledger<S>,
    policy: &WithdrawalPolicy,
    username: &str,
) -> anyhow::Result<AccountStatus> {
    let record = ledger.get(username)?;
    Ok(AccountStatus {
        username: username.to_string(),
        coins: record.coins,
        referrals: record.referrals,
        clicks: record.clicks,
        required_referrals: policy.min_referrals,
        required_clicks: policy.min_clicks,
        requirements: policy.requirements(),
        eligible: policy.is_eligible(record),
    })
}

impl fmt::Display for AccountStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Account: {}", self.username)?;
        writeln!(f, "Your Balance: {} coins", self.coins)?;
        writeln!(f, "Referrals: {}/{}", self.referrals, self.required_referrals)?;
        writeln!(f, "Clicks: {}/{}", self.clicks, self.required_clicks)?;
        writeln!(f, "{}", self.requirements)?;
        if self.eligible {
            write!(f, "You can request a withdrawal.")
        } else {
            write!(f, "You do not meet the withdrawal requirements yet.")
        }
    }
}
