// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! User-friendly error display with context and suggestions.
//!
//! This module provides enhanced error types that include:
//! - What went wrong (message)
//! - Why it might have happened (context)
//! - How to fix it (suggestions)

use ew_core::{AccountRecord, WithdrawalError, WithdrawalPolicy};
use std::fmt;
use std::path::Path;

/// Error with context and recovery suggestions for user-friendly display.
#[derive(Debug)]
pub struct EwError {
    /// What went wrong
    pub message: String,
    /// Why it might have happened
    pub context: Vec<String>,
    /// How to fix it
    pub suggestions: Vec<String>,
    /// Original error if any
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl EwError {
    /// Create a new error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            context: Vec::new(),
            suggestions: Vec::new(),
            source: None,
        }
    }

    /// Add context about why this error might have happened.
    pub fn with_context(mut self, ctx: impl Into<String>) -> Self {
        self.context.push(ctx.into());
        self
    }

    /// Add a suggestion for how to fix this error.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    /// Set the source error that caused this error.
    pub fn with_source<E: std::error::Error + Send + Sync + 'static>(mut self, source: E) -> Self {
        self.source = Some(Box::new(source));
        self
    }
}

impl fmt::Display for EwError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "error: {}", self.message)?;

        if !self.context.is_empty() {
            writeln!(f)?;
            for ctx in &self.context {
                writeln!(f, "  -> {}", ctx)?;
            }
        }

        if !self.suggestions.is_empty() {
            writeln!(f)?;
            writeln!(f, "suggestions:")?;
            for (i, suggestion) in self.suggestions.iter().enumerate() {
                writeln!(f, "  {}. {}", i + 1, suggestion)?;
            }
        }

        Ok(())
    }
}

impl std::error::Error for EwError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Common error builders for typical failure scenarios.
impl EwError {
    /// Sign-up with a username that is already registered.
    pub fn username_taken(username: &str) -> Self {
        EwError::new("Username already exists! Try another.")
            .with_context(format!("'{}' is already registered", username))
            .with_suggestion("Pick a different username")
            .with_suggestion(format!("Log in instead: ew login {}", username))
    }

    /// Unknown username or wrong password; the message does not say which.
    pub fn invalid_credentials() -> Self {
        EwError::new("Invalid username or password.")
            .with_suggestion("Usernames and passwords are case-sensitive")
            .with_suggestion("Create an account: ew signup <USERNAME> --password <PASSWORD>")
    }

    /// A session command was issued while logged out.
    pub fn login_required() -> Self {
        EwError::new("Please log in first.").with_suggestion("login <USERNAME> <PASSWORD>")
    }

    /// Sign-up or log-in attempted during an active session.
    pub fn already_logged_in(username: &str) -> Self {
        EwError::new(format!("Already logged in as {}.", username))
            .with_suggestion("logout")
    }

    /// The account store exists but could not be read.
    pub fn store_unreadable<E: std::error::Error + Send + Sync + 'static>(
        path: &Path,
        source: E,
    ) -> Self {
        EwError::new(format!("Cannot read account store '{}'", path.display()))
            .with_context(source.to_string())
            .with_context("The file may be corrupted or not an ew account store")
            .with_suggestion("Point at another store: ew --store <PATH> ...")
            .with_suggestion("Restore the file from a backup")
            .with_source(source)
    }

    /// A withdrawal request the policy refused.
    pub fn withdrawal_rejected(
        error: WithdrawalError,
        policy: &WithdrawalPolicy,
        record: &AccountRecord,
    ) -> Self {
        let message = match error {
            WithdrawalError::NotEligible => {
                "You do not meet the withdrawal requirements yet.".to_string()
            }
            ref other => format!("Withdrawal rejected: {}", other),
        };
        EwError::new(message)
            .with_context(format!(
                "Balance: {} coins, referrals: {}/{}, clicks: {}/{}",
                record.coins,
                record.referrals,
                policy.min_referrals,
                record.clicks,
                policy.min_clicks
            ))
            .with_context(policy.requirements())
            .with_suggestion(format!(
                "Request between {} and your balance, in steps of {}",
                policy.min_coins, policy.step
            ))
            .with_source(error)
    }

    /// Unparseable shell input.
    pub fn usage(usage: &str) -> Self {
        EwError::new(format!("usage: {}", usage))
    }
}
