//! Rank entry and custom rank structures

use serde::{Deserialize, Serialize};

/// One step of the rank ladder: the name a viewer holds once they reach `hours`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankEntry {
    pub hours: u64,
    pub name: String,
}

impl RankEntry {
    pub fn new(hours: u64, name: impl Into<String>) -> Self {
        Self {
            hours,
            name: name.into(),
        }
    }
}

/// Per-user rank name that overrides the ladder
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomRank {
    pub user: String,
    pub name: String,
}

impl CustomRank {
    pub fn new(user: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            name: name.into(),
        }
    }
}

/// Normalize a chat user name into a store key: trimmed, without a leading
/// `@`, lowercased.
#[inline]
pub fn normalize_user(user: &str) -> String {
    let trimmed = user.trim();
    trimmed
        .strip_prefix('@')
        .unwrap_or(trimmed)
        .trim()
        .to_lowercase()
}

/// Trim a rank name, returning `None` when nothing is left
#[inline]
pub fn normalize_rank_name(name: &str) -> Option<&str> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}
