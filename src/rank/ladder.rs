//! Hour-threshold rank ladder

use crate::config::RankEntry;
use std::collections::BTreeMap;
use std::ops::Bound::{Excluded, Unbounded};

/// Outcome of [`RankLadder::upsert`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Upserted {
    pub created: bool,
}

/// Outcome of [`RankLadder::remove`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Removed {
    pub removed: bool,
}

/// Ordered set of rank entries, at most one per hour threshold
#[derive(Debug, Clone, Default)]
pub struct RankLadder {
    entries: BTreeMap<u64, RankEntry>,
}

impl RankLadder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a rank, or rename the rank already sitting at `hours`
    pub fn upsert(&mut self, hours: u64, name: impl Into<String>) -> Upserted {
        let previous = self.entries.insert(hours, RankEntry::new(hours, name));
        Upserted {
            created: previous.is_none(),
        }
    }

    pub fn remove(&mut self, hours: u64) -> Removed {
        Removed {
            removed: self.entries.remove(&hours).is_some(),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn get(&self, hours: u64) -> Option<&RankEntry> {
        self.entries.get(&hours)
    }

    /// Entry with the greatest threshold that is `<= hours`
    #[inline]
    pub fn highest_at_or_below(&self, hours: u64) -> Option<&RankEntry> {
        self.entries.range(..=hours).next_back().map(|(_, entry)| entry)
    }

    /// Next entry above the current position.
    ///
    /// With `current` set this is the entry right after it. Without one, the
    /// position is `hours` itself, so the result is the first threshold above
    /// `hours`.
    #[inline]
    pub fn lowest_above(&self, current: Option<&RankEntry>, hours: u64) -> Option<&RankEntry> {
        let floor = current.map_or(hours, |entry| entry.hours);
        self.entries
            .range((Excluded(floor), Unbounded))
            .next()
            .map(|(_, entry)| entry)
    }

    /// True when no entry has a greater threshold than `entry`
    #[inline]
    pub fn is_highest(&self, entry: &RankEntry) -> bool {
        self.entries
            .last_key_value()
            .map_or(true, |(&hours, _)| hours <= entry.hours)
    }

    /// Entries in ascending threshold order
    pub fn entries(&self) -> impl Iterator<Item = &RankEntry> {
        self.entries.values()
    }
}
