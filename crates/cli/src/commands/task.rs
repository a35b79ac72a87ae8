// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `ew tasks` and `ew task <KIND>`

use super::account::Credentials;
use super::App;
use clap::Args;
use ew_core::{Counter, TaskKind, TaskReceipt};
use ew_storage::RecordStore;
use serde::Serialize;
use std::fmt;
use std::io::Write;
use tracing::warn;

#[derive(Args, Debug)]
pub struct TaskArgs {
    /// Task to complete (see `ew tasks`)
    pub kind: TaskKind,

    #[command(flatten)]
    pub credentials: Credentials,
}

/// One line of the task catalog
#[derive(Debug, Clone, Serialize)]
pub struct TaskEntry {
    pub name: &'static str,
    pub title: &'static str,
    pub reward: u64,
    pub counter: Option<Counter>,
    pub link: Option<&'static str>,
}

impl fmt::Display for TaskEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:<13} +{:<3} {}", self.name, self.reward, self.title)?;
        if let Some(counter) = self.counter {
            write!(f, " (+1 {})", counter)?;
        }
        Ok(())
    }
}

pub fn catalog() -> Vec<TaskEntry> {
    TaskKind::ALL
        .into_iter()
        .map(|kind| TaskEntry {
            name: kind.name(),
            title: kind.title(),
            reward: kind.reward(),
            counter: kind.counter(),
            link: kind.link(),
        })
        .collect()
}

/// Open the task's link, then credit the account.
///
/// Link and ad notices go to `out`. A link that fails to open is logged and
/// does not hold back the reward.
pub fn perform<S, W>(
    app: &mut App<S>,
    username: &str,
    kind: TaskKind,
    out: &mut W,
) -> anyhow::Result<TaskReceipt>
where
    S: RecordStore,
    W: Write,
{
    // Fail on unknown users before any side effect
    app.ledger.get(username)?;

    if let Some(link) = kind.link() {
        if let Err(e) = app.opener.open(link, out) {
            warn!(task = %kind, error = %e, "could not open task link");
        }
    }
    if kind == TaskKind::WatchAds {
        writeln!(out, "AdSense approval needed. Pretend you watched an ad.")?;
    }

    Ok(app.ledger.complete_task(username, kind)?)
}

#[cfg(test)]
#[path = "task_tests.rs"]
mod tests;
