// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Account ledger
//!
//! The ledger owns the in-memory account map and is the only thing that
//! mutates it. Every mutation is written through to the record store before
//! the call returns. If that write fails the mutation is undone, so memory
//! always matches the last snapshot that reached the store.
//!
//! Counters only ever go up and accounts are never removed.

use crate::store::{RecordStore, StorageError};
use ew_core::{AccountRecord, Accounts, Counter, TaskKind, TaskReceipt};
use thiserror::Error;
use tracing::{debug, info};

/// Errors returned by ledger operations
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("username '{0}' already exists")]
    DuplicateUser(String),
    #[error("unknown username '{0}'")]
    UnknownUser(String),
    #[error("invalid coin amount: {0}")]
    InvalidAmount(i64),
    #[error("{counter} counter overflow for '{username}'")]
    CounterOverflow { username: String, counter: Counter },
}

/// Write-through map of username to account record
pub struct Ledger<S: RecordStore> {
    store: S,
    accounts: Accounts,
}

impl<S: RecordStore> Ledger<S> {
    /// Load every account from `store`. Called once at process start.
    pub fn open(store: S) -> Result<Self, LedgerError> {
        let accounts = store.load()?;
        debug!(accounts = accounts.len(), "ledger opened");
        Ok(Self { store, accounts })
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Read-only view of every account
    pub fn records(&self) -> &Accounts {
        &self.accounts
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    pub fn exists(&self, username: &str) -> bool {
        self.accounts.contains_key(username)
    }

    pub fn get(&self, username: &str) -> Result<&AccountRecord, LedgerError> {
        self.accounts
            .get(username)
            .ok_or_else(|| LedgerError::UnknownUser(username.to_string()))
    }

    /// Register a new account with zeroed counters. Never overwrites.
    pub fn create(&mut self, username: &str, password: &str) -> Result<(), LedgerError> {
        if self.exists(username) {
            return Err(LedgerError::DuplicateUser(username.to_string()));
        }

        self.accounts
            .insert(username.to_string(), AccountRecord::new(password));
        if let Err(e) = self.store.save(&self.accounts) {
            self.accounts.remove(username);
            return Err(e.into());
        }

        info!(username, "account created");
        Ok(())
    }

    /// Exact comparison against the stored password
    pub fn verify_credentials(&self, username: &str, password: &str) -> Result<bool, LedgerError> {
        Ok(self.get(username)?.password_matches(password))
    }

    pub fn get_coins(&self, username: &str) -> Result<u64, LedgerError> {
        Ok(self.get(username)?.coins)
    }

    pub fn get_referrals(&self, username: &str) -> Result<u64, LedgerError> {
        Ok(self.get(username)?.referrals)
    }

    pub fn get_clicks(&self, username: &str) -> Result<u64, LedgerError> {
        Ok(self.get(username)?.clicks)
    }

    /// Credit `amount` coins. Negative amounts are rejected.
    ///
    /// Returns the new balance.
    pub fn add_coins(&mut self, username: &str, amount: i64) -> Result<u64, LedgerError> {
        let credit = u64::try_from(amount).map_err(|_| LedgerError::InvalidAmount(amount))?;
        self.mutate(username, |record| {
            record.coins = record
                .coins
                .checked_add(credit)
                .ok_or(LedgerError::InvalidAmount(amount))?;
            Ok(record.coins)
        })
    }

    /// Returns the new referral count.
    pub fn add_referral(&mut self, username: &str) -> Result<u64, LedgerError> {
        self.bump(username, Counter::Referrals)
    }

    /// Returns the new click count.
    pub fn add_click(&mut self, username: &str) -> Result<u64, LedgerError> {
        self.bump(username, Counter::Clicks)
    }

    /// Apply a catalog task: the counter first, then the reward.
    ///
    /// Each step goes through the public mutation and is flushed on its own,
    /// the same as a caller issuing them one after the other.
    pub fn complete_task(
        &mut self,
        username: &str,
        task: TaskKind,
    ) -> Result<TaskReceipt, LedgerError> {
        // Surface unknown users before touching anything
        let mut balance = self.get_coins(username)?;

        if let Some(counter) = task.counter() {
            self.bump(username, counter)?;
        }
        if task.reward() > 0 {
            let reward = i64::try_from(task.reward())
                .map_err(|_| LedgerError::InvalidAmount(i64::MAX))?;
            balance = self.add_coins(username, reward)?;
        }

        info!(username, task = %task, balance, "task completed");
        Ok(TaskReceipt {
            task,
            coins_awarded: task.reward(),
            counter: task.counter(),
            balance,
        })
    }

    fn bump(&mut self, username: &str, counter: Counter) -> Result<u64, LedgerError> {
        self.mutate(username, |record| {
            let slot = match counter {
                Counter::Referrals => &mut record.referrals,
                Counter::Clicks => &mut record.clicks,
            };
            *slot = slot
                .checked_add(1)
                .ok_or_else(|| LedgerError::CounterOverflow {
                    username: username.to_string(),
                    counter,
                })?;
            Ok(*slot)
        })
    }

    /// Mutate one record in place, then flush the whole map.
    ///
    /// A failed edit leaves the record untouched; a failed flush restores it.
    fn mutate<F>(&mut self, username: &str, edit: F) -> Result<u64, LedgerError>
    where
        F: FnOnce(&mut AccountRecord) -> Result<u64, LedgerError>,
    {
        let record = self
            .accounts
            .get_mut(username)
            .ok_or_else(|| LedgerError::UnknownUser(username.to_string()))?;
        let previous = record.clone();

        let value = match edit(record) {
            Ok(value) => value,
            Err(e) => {
                *record = previous;
                return Err(e);
            }
        };

        if let Err(e) = self.store.save(&self.accounts) {
            self.accounts.insert(username.to_string(), previous);
            return Err(e.into());
        }
        Ok(value)
    }
}

#[cfg(test)]
#[path = "ledger_tests.rs"]
mod tests;
