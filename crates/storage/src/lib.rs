// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! ew-storage: Record store and account ledger
//!
//! The record store persists the full account map as one JSON document; the
//! ledger enforces account invariants and writes through to the store on
//! every mutation.

#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

mod ledger;
mod store;

pub use ledger::{Ledger, LedgerError};
pub use store::{JsonFileStore, RecordStore, StorageError};

#[cfg(any(test, feature = "test-support"))]
pub use store::MemoryStore;
