// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Task catalog
//!
//! Every task has a fixed coin reward, an optional counter it bumps, and an
//! optional link the presentation layer opens before crediting the account.
//! The survey is split in two: `Subscribe` only opens the channel, and
//! `WatchVideo` is the step that pays out.

use crate::account::Counter;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// A user-triggered action that credits the current account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskKind {
    Subscribe,
    WatchVideo,
    PlayGame,
    InstallApp,
    WatchAds,
    ReferFriend,
    ClickAds,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown task '{0}'")]
pub struct UnknownTask(pub String);

impl TaskKind {
    /// Catalog order, as presented to the user
    pub const ALL: [TaskKind; 7] = [
        TaskKind::Subscribe,
        TaskKind::WatchVideo,
        TaskKind::PlayGame,
        TaskKind::InstallApp,
        TaskKind::WatchAds,
        TaskKind::ReferFriend,
        TaskKind::ClickAds,
    ];

    /// Name used on the command line and in JSON
    pub fn name(&self) -> &'static str {
        match self {
            TaskKind::Subscribe => "subscribe",
            TaskKind::WatchVideo => "watch-video",
            TaskKind::PlayGame => "play-game",
            TaskKind::InstallApp => "install-app",
            TaskKind::WatchAds => "watch-ads",
            TaskKind::ReferFriend => "refer-friend",
            TaskKind::ClickAds => "click-ads",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            TaskKind::Subscribe => "Complete Survey (subscribe to the channel)",
            TaskKind::WatchVideo => "Complete Survey (watch the video)",
            TaskKind::PlayGame => "Play Game & Earn",
            TaskKind::InstallApp => "Install App & Earn",
            TaskKind::WatchAds => "Watch Ads & Earn",
            TaskKind::ReferFriend => "Refer a Friend & Earn",
            TaskKind::ClickAds => "Click Ads & Earn",
        }
    }

    /// Coins credited on completion
    pub fn reward(&self) -> u64 {
        match self {
            TaskKind::Subscribe => 0,
            TaskKind::WatchVideo => 20,
            TaskKind::PlayGame
            | TaskKind::InstallApp
            | TaskKind::WatchAds
            | TaskKind::ReferFriend
            | TaskKind::ClickAds => 5,
        }
    }

    /// Counter bumped by one before the reward is credited
    pub fn counter(&self) -> Option<Counter> {
        match self {
            TaskKind::ReferFriend => Some(Counter::Referrals),
            TaskKind::ClickAds => Some(Counter::Clicks),
            _ => None,
        }
    }

    /// Fixed link opened as the external side of the task
    pub fn link(&self) -> Option<&'static str> {
        match self {
            TaskKind::Subscribe => {
                Some("https://www.youtube.com/@ToonCraftStudio-f7o?sub_confirmation=1")
            }
            TaskKind::WatchVideo => Some("https://youtu.be/trr3AC1jiEk?si=CKMZeDaMnLhFRUJ6"),
            TaskKind::PlayGame => Some("https://poki.com/en/g/gumball-darwin-s-yearbook"),
            TaskKind::InstallApp => {
                Some("https://play.google.com/store/apps/details?id=com.spotify.music")
            }
            TaskKind::WatchAds | TaskKind::ReferFriend | TaskKind::ClickAds => None,
        }
    }

    /// Whether completing the task touches the ledger at all
    pub fn mutates_ledger(&self) -> bool {
        self.reward() > 0 || self.counter().is_some()
    }
}

impl std::fmt::Display for TaskKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for TaskKind {
    type Err = UnknownTask;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TaskKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| UnknownTask(s.to_string()))
    }
}

/// What a completed task did to an account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskReceipt {
    pub task: TaskKind,
    pub coins_awarded: u64,
    pub counter: Option<Counter>,
    /// Balance after the reward was credited
    pub balance: u64,
}

impl std::fmt::Display for TaskReceipt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.coins_awarded == 0 {
            return write!(f, "Please subscribe, then run the 'watch-video' task.");
        }
        match self.counter {
            Some(Counter::Referrals) => write!(
                f,
                "You earned {} coins for referral! Balance: {}",
                self.coins_awarded, self.balance
            ),
            Some(Counter::Clicks) => write!(
                f,
                "You earned {} coins for clicking ads! Balance: {}",
                self.coins_awarded, self.balance
            ),
            None => write!(
                f,
                "You earned {} coins! Balance: {}",
                self.coins_awarded, self.balance
            ),
        }
    }
}

#[cfg(test)]
#[path = "task_tests.rs"]
mod tests;
