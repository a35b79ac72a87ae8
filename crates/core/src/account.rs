// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Account records
//!
//! One record per registered username. The username itself is the key of the
//! ledger map and is not repeated inside the record, which keeps the persisted
//! document shaped as `{ "<username>": { "password": .., "coins": .., .. } }`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Every account keyed by username, in stable key order
pub type Accounts = BTreeMap<String, AccountRecord>;

/// Persisted state for a single username
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountRecord {
    /// Stored and compared verbatim
    pub password: String,
    pub coins: u64,
    pub referrals: u64,
    pub clicks: u64,
}

impl AccountRecord {
    /// A fresh record with every counter at zero
    pub fn new(password: impl Into<String>) -> Self {
        Self {
            password: password.into(),
            coins: 0,
            referrals: 0,
            clicks: 0,
        }
    }

    /// Exact, case-sensitive password comparison
    pub fn password_matches(&self, candidate: &str) -> bool {
        self.password == candidate
    }
}

/// The per-account counters that tasks can bump by one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Counter {
    Referrals,
    Clicks,
}

impl std::fmt::Display for Counter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Counter::Referrals => write!(f, "referrals"),
            Counter::Clicks => write!(f, "clicks"),
        }
    }
}

#[cfg(test)]
#[path = "account_tests.rs"]
mod tests;
