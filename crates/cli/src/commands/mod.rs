// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI command implementations

pub mod account;
pub mod shell;
pub mod task;
pub mod withdraw;

use crate::opener::LinkOpener;
use ew_core::WithdrawalPolicy;
use ew_storage::{Ledger, RecordStore};

/// Everything a command needs, built once in `main`
pub struct App<S: RecordStore> {
    pub ledger: Ledger<S>,
    pub opener: Box<dyn LinkOpener>,
    pub policy: WithdrawalPolicy,
}

impl<S: RecordStore> App<S> {
    pub fn new(ledger: Ledger<S>, opener: Box<dyn LinkOpener>) -> Self {
        Self {
            ledger,
            opener,
            policy: WithdrawalPolicy::default(),
        }
    }
}
