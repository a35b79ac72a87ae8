// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Presentation session context
//!
//! Process-local state owned by whatever front end drives the ledger. None of
//! it is persisted, and the ledger has no notion of who is logged in.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Which view the logged-in user is looking at
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    #[default]
    Task,
    Settings,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
    Blue,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {kind} '{value}'")]
pub struct ParseChoiceError {
    kind: &'static str,
    value: String,
}

impl FromStr for Page {
    type Err = ParseChoiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "task" | "tasks" => Ok(Page::Task),
            "settings" => Ok(Page::Settings),
            _ => Err(ParseChoiceError {
                kind: "page",
                value: s.to_string(),
            }),
        }
    }
}

impl FromStr for Theme {
    type Err = ParseChoiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            "blue" => Ok(Theme::Blue),
            _ => Err(ParseChoiceError {
                kind: "theme",
                value: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for Page {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Page::Task => write!(f, "task"),
            Page::Settings => write!(f, "settings"),
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Theme::Light => write!(f, "Light"),
            Theme::Dark => write!(f, "Dark"),
            Theme::Blue => write!(f, "Blue"),
        }
    }
}

/// Ephemeral per-session state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    username: Option<String>,
    pub page: Page,
    pub theme: Theme,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn logged_in(&self) -> bool {
        self.username.is_some()
    }

    /// The logged-in username, if any
    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    /// Start a session for an already-verified user. Lands on the task page.
    pub fn login(&mut self, username: impl Into<String>) {
        self.username = Some(username.into());
        self.page = Page::Task;
    }

    /// Drop the user; the theme survives, as it belongs to the browser side.
    pub fn logout(&mut self) {
        self.username = None;
        self.page = Page::Task;
    }

    /// Switch pages. Returns false (and stays put) when logged out.
    pub fn navigate(&mut self, page: Page) -> bool {
        if !self.logged_in() {
            return false;
        }
        self.page = page;
        true
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
