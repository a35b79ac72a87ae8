// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Whole-dataset record stores
//!
//! A store reads and writes every account at once. There are no partial
//! writes and no locking: two processes saving the same file race, and the
//! last rename wins.

use ew_core::Accounts;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::PathBuf;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur while loading or saving the dataset
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("cannot access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed account data in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("cannot encode account data: {0}")]
    Encode(#[source] serde_json::Error),
}

/// Durable persistence for the full set of accounts
pub trait RecordStore {
    /// Read the entire dataset. A store with nothing persisted yet is empty.
    fn load(&self) -> Result<Accounts, StorageError>;

    /// Replace the entire dataset with `accounts`.
    fn save(&mut self, accounts: &Accounts) -> Result<(), StorageError>;
}

/// Single JSON document on disk, keyed by username
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Sibling file the next snapshot is staged in before the rename
    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.clone().into_os_string();
        name.push(".tmp");
        PathBuf::from(name)
    }

    fn io_error(&self, source: io::Error) -> StorageError {
        StorageError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl RecordStore for JsonFileStore {
    fn load(&self) -> Result<Accounts, StorageError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no account store yet, starting empty");
                return Ok(Accounts::new());
            }
            Err(e) => return Err(self.io_error(e)),
        };

        if content.trim().is_empty() {
            return Ok(Accounts::new());
        }

        let accounts: Accounts =
            serde_json::from_str(&content).map_err(|source| StorageError::Parse {
                path: self.path.clone(),
                source,
            })?;
        debug!(path = %self.path.display(), accounts = accounts.len(), "loaded account store");
        Ok(accounts)
    }

    fn save(&mut self, accounts: &Accounts) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|source| StorageError::Io {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
        }

        let json = serde_json::to_string_pretty(accounts).map_err(StorageError::Encode)?;

        // Write the snapshot beside the target, then swap it in
        let temp_path = self.temp_path();
        {
            let mut file = File::create(&temp_path).map_err(|e| self.io_error(e))?;
            file.write_all(json.as_bytes())
                .and_then(|()| file.write_all(b"\n"))
                .and_then(|()| file.sync_all())
                .map_err(|e| self.io_error(e))?;
        }

        // Atomic replace (rename is atomic on POSIX)
        if let Err(e) = fs::rename(&temp_path, &self.path) {
            let _ = fs::remove_file(&temp_path);
            return Err(self.io_error(e));
        }

        debug!(path = %self.path.display(), accounts = accounts.len(), "saved account store");
        Ok(())
    }
}

/// In-memory store for tests and dry runs
#[cfg(any(test, feature = "test-support"))]
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    accounts: Accounts,
    saves: usize,
}

#[cfg(any(test, feature = "test-support"))]
impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing dataset
    pub fn with_accounts(accounts: Accounts) -> Self {
        Self { accounts, saves: 0 }
    }

    /// What the last save wrote
    pub fn accounts(&self) -> &Accounts {
        &self.accounts
    }

    /// Number of saves so far
    pub fn saves(&self) -> usize {
        self.saves
    }
}

#[cfg(any(test, feature = "test-support"))]
impl RecordStore for MemoryStore {
    fn load(&self) -> Result<Accounts, StorageError> {
        Ok(self.accounts.clone())
    }

    fn save(&mut self, accounts: &Accounts) -> Result<(), StorageError> {
        self.accounts = accounts.clone();
        self.saves += 1;
        Ok(())
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
