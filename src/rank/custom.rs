//! Per-user custom rank overrides

use crate::config::{normalize_user, CustomRank};
use crate::rank::Removed;
use ahash::AHashMap;

/// Map of normalized user name to that user's custom rank
#[derive(Debug, Clone, Default)]
pub struct CustomRankStore {
    ranks: AHashMap<String, CustomRank>,
}

impl CustomRankStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, user: &str) -> Option<&CustomRank> {
        self.ranks.get(&normalize_user(user))
    }

    /// Give `user` the custom rank `name`, replacing any previous one
    pub fn set(&mut self, user: &str, name: impl Into<String>) {
        let key = normalize_user(user);
        let rank = CustomRank::new(key.clone(), name);
        self.ranks.insert(key, rank);
    }

    pub fn delete(&mut self, user: &str) -> Removed {
        Removed {
            removed: self.ranks.remove(&normalize_user(user)).is_some(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }

    /// Custom ranks sorted by user name
    pub fn iter(&self) -> impl Iterator<Item = &CustomRank> {
        let mut ranks: Vec<&CustomRank> = self.ranks.values().collect();
        ranks.sort_unstable_by(|a, b| a.user.cmp(&b.user));
        ranks.into_iter()
    }
}
