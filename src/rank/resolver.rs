//! Rank resolution for a viewer's watch time

use crate::config::normalize_user;
use crate::rank::{CustomRankStore, RankLadder};

/// Rank a viewer holds, as shown by the rank query command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RankResult {
    /// The viewer has a custom rank, which wins over the ladder
    Custom { user: String, name: String },
    /// The ladder has no entries at all
    NoRanksDefined,
    /// The viewer is below the first threshold
    NoRankYet {
        user: String,
        hours_remaining: u64,
        next_name: String,
    },
    /// The viewer holds the top rank of the ladder
    MaxRank { user: String, name: String },
    Ranked {
        user: String,
        name: String,
        next_name: String,
        hours_remaining: u64,
    },
}

/// Read-only view over the ladder and the custom rank store
#[derive(Debug, Clone, Copy)]
pub struct RankResolver<'a> {
    ladder: &'a RankLadder,
    customs: &'a CustomRankStore,
}

impl<'a> RankResolver<'a> {
    pub fn new(ladder: &'a RankLadder, customs: &'a CustomRankStore) -> Self {
        Self { ladder, customs }
    }

    /// Resolve the rank of `user` with `watched_hours` of watch time
    pub fn resolve(&self, user: &str, watched_hours: u64) -> RankResult {
        let user = normalize_user(user);
        let result = self.resolve_normalized(user, watched_hours);
        log::debug!("Resolved rank at {} hours: {:?}", watched_hours, result);
        result
    }

    fn resolve_normalized(&self, user: String, watched_hours: u64) -> RankResult {
        if let Some(custom) = self.customs.get(&user) {
            return RankResult::Custom {
                name: custom.name.clone(),
                user,
            };
        }

        if self.ladder.is_empty() {
            return RankResult::NoRanksDefined;
        }

        let current = self.ladder.highest_at_or_below(watched_hours);
        let Some(entry) = current else {
            // Non-empty ladder with nothing at or below means every threshold is above
            return match self.ladder.lowest_above(None, watched_hours) {
                Some(next) => RankResult::NoRankYet {
                    user,
                    hours_remaining: next.hours - watched_hours,
                    next_name: next.name.clone(),
                },
                None => RankResult::NoRanksDefined,
            };
        };

        if self.ladder.is_highest(entry) {
            return RankResult::MaxRank {
                user,
                name: entry.name.clone(),
            };
        }

        match self.ladder.lowest_above(Some(entry), watched_hours) {
            Some(next) => RankResult::Ranked {
                user,
                name: entry.name.clone(),
                next_name: next.name.clone(),
                hours_remaining: next.hours - watched_hours,
            },
            None => RankResult::MaxRank {
                user,
                name: entry.name.clone(),
            },
        }
    }

    /// Bare rank name shown next to a viewer in chat, if they have one
    pub fn display_name(&self, user: &str, watched_hours: u64) -> Option<&'a str> {
        if let Some(custom) = self.customs.get(user) {
            return Some(custom.name.as_str());
        }
        self.ladder
            .highest_at_or_below(watched_hours)
            .map(|entry| entry.name.as_str())
    }
}
