// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Withdrawal eligibility and requests
//!
//! A request is only acknowledged. Nothing here deducts coins from the
//! account, and nothing is written back to the record store.

use crate::account::AccountRecord;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

/// Thresholds an account must meet before it may request a withdrawal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WithdrawalPolicy {
    pub min_coins: u64,
    pub min_referrals: u64,
    pub min_clicks: u64,
    /// Requested amounts must be `min_coins + k * step`
    pub step: u64,
}

impl Default for WithdrawalPolicy {
    fn default() -> Self {
        Self {
            min_coins: 15_000,
            min_referrals: 10,
            min_clicks: 5,
            step: 500,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WithdrawalError {
    #[error("withdrawal requirements not met")]
    NotEligible,
    #[error("amount {amount} is below the minimum of {minimum} coins")]
    BelowMinimum { amount: u64, minimum: u64 },
    #[error("amount {amount} exceeds the balance of {balance} coins")]
    ExceedsBalance { amount: u64, balance: u64 },
    #[error("amount {amount} must be {minimum} plus a multiple of {step}")]
    OffStep { amount: u64, minimum: u64, step: u64 },
}

impl WithdrawalPolicy {
    pub fn is_eligible(&self, record: &AccountRecord) -> bool {
        record.coins >= self.min_coins
            && record.referrals >= self.min_referrals
            && record.clicks >= self.min_clicks
    }

    /// Validate a request against the account and acknowledge it.
    pub fn request(
        &self,
        record: &AccountRecord,
        amount: u64,
        method: PaymentMethod,
    ) -> Result<WithdrawalRequest, WithdrawalError> {
        if !self.is_eligible(record) {
            return Err(WithdrawalError::NotEligible);
        }
        if amount < self.min_coins {
            return Err(WithdrawalError::BelowMinimum {
                amount,
                minimum: self.min_coins,
            });
        }
        if amount > record.coins {
            return Err(WithdrawalError::ExceedsBalance {
                amount,
                balance: record.coins,
            });
        }
        if self.step > 0 && (amount - self.min_coins) % self.step != 0 {
            return Err(WithdrawalError::OffStep {
                amount,
                minimum: self.min_coins,
                step: self.step,
            });
        }

        Ok(WithdrawalRequest {
            id: Uuid::new_v4(),
            amount,
            method,
            requested_at: Utc::now(),
        })
    }

    /// One-line summary of the requirements
    pub fn requirements(&self) -> String {
        format!(
            "Minimum: {} coins + {} referrals + {} clicks required for withdrawal.",
            self.min_coins, self.min_referrals, self.min_clicks
        )
    }
}

/// Payout channels offered to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentMethod {
    JazzCash,
    EasyPaisa,
    Payoneer,
    PayPal,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown payment method '{0}' (expected one of: jazzcash, easypaisa, payoneer, paypal)")]
pub struct UnknownPaymentMethod(pub String);

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 4] = [
        PaymentMethod::JazzCash,
        PaymentMethod::EasyPaisa,
        PaymentMethod::Payoneer,
        PaymentMethod::PayPal,
    ];
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PaymentMethod::JazzCash => "JazzCash",
            PaymentMethod::EasyPaisa => "EasyPaisa",
            PaymentMethod::Payoneer => "Payoneer",
            PaymentMethod::PayPal => "PayPal",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for PaymentMethod {
    type Err = UnknownPaymentMethod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PaymentMethod::ALL
            .into_iter()
            .find(|method| method.to_string().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownPaymentMethod(s.to_string()))
    }
}

/// An acknowledged, unsettled withdrawal request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WithdrawalRequest {
    pub id: Uuid,
    pub amount: u64,
    pub method: PaymentMethod,
    pub requested_at: DateTime<Utc>,
}

impl std::fmt::Display for WithdrawalRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Withdrawal request of {} coins via {} submitted!",
            self.amount, self.method
        )
    }
}

#[cfg(test)]
#[path = "withdrawal_tests.rs"]
mod tests;
