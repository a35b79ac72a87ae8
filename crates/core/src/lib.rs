// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! ew-core: Domain types for the Earn & Win (ew) reward app
//!
//! This crate provides:
//! - Account records and the counters tasks can bump
//! - The fixed task catalog (rewards, counters, links)
//! - Withdrawal eligibility and request validation
//! - Process-local session context for front ends
//!
//! Nothing in here performs I/O; persistence lives in `ew-storage`.

#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

pub mod account;
pub mod session;
pub mod task;
pub mod withdrawal;

// Re-exports
pub use account::{AccountRecord, Accounts, Counter};
pub use session::{Page, ParseChoiceError, Session, Theme};
pub use task::{TaskKind, TaskReceipt, UnknownTask};
pub use withdrawal::{
    PaymentMethod, UnknownPaymentMethod, WithdrawalError, WithdrawalPolicy, WithdrawalRequest,
};
