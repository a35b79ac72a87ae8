// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `ew withdraw` - acknowledge a withdrawal request

use super::account::Credentials;
use super::App;
use crate::error::EwError;
use clap::Args;
use ew_core::{PaymentMethod, WithdrawalRequest};
use ew_storage::RecordStore;
use tracing::info;

#[derive(Args, Debug)]
pub struct WithdrawArgs {
    #[command(flatten)]
    pub credentials: Credentials,

    /// Coins to withdraw (at least 15000, in steps of 500)
    #[arg(long)]
    pub amount: u64,

    /// Payment method: jazzcash, easypaisa, payoneer or paypal
    #[arg(long)]
    pub method: PaymentMethod,
}

/// Validate and acknowledge a request. The balance is left as it is.
pub fn request<S: RecordStore>(
    app: &App<S>,
    username: &str,
    amount: u64,
    method: PaymentMethod,
) -> anyhow::Result<WithdrawalRequest> {
    let record = app.ledger.get(username)?;
    let request = app
        .policy
        .request(record, amount, method)
        .map_err(|e| EwError::withdrawal_rejected(e, &app.policy, record))?;

    info!(
        username,
        id = %request.id,
        amount,
        method = %method,
        "withdrawal request acknowledged"
    );
    Ok(request)
}
