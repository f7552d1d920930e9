//! Property tests for rank module
//!
//! Property: threshold lookup is inclusive at a threshold, exclusive before the next
//! Property: upsert never duplicates a threshold
//! Property: custom ranks always win, and resolution always yields a non-negative remainder

use proptest::prelude::*;
use std::collections::BTreeSet;

use crate::rank::{CustomRankStore, RankLadder, RankResolver, RankResult};

// ═══════════════════════════════════════════════════════════════════════════
// Strategy generators for property tests
// ═══════════════════════════════════════════════════════════════════════════

/// Generate a set of distinct thresholds
fn thresholds_strategy() -> impl Strategy<Value = BTreeSet<u64>> {
    prop::collection::btree_set(0..=1000u64, 1..=12)
}

/// Generate a ladder from distinct thresholds, named after their hours
fn ladder_strategy() -> impl Strategy<Value = RankLadder> {
    thresholds_strategy().prop_map(|thresholds| {
        let mut ladder = RankLadder::new();
        for hours in thresholds {
            ladder.upsert(hours, format!("Rank {}", hours));
        }
        ladder
    })
}

// ═══════════════════════════════════════════════════════════════════════════
// Property Tests
// ═══════════════════════════════════════════════════════════════════════════

proptest! {
    /// For thresholds h1 < h2, every x in [h1, h2) maps to h1
    #[test]
    fn prop_lookup_between_thresholds(
        h1 in 0..=500u64,
        gap in 1..=500u64,
        offset in 0..=499u64
    ) {
        let h2 = h1 + gap;
        let x = h1 + offset % gap;

        let mut ladder = RankLadder::new();
        ladder.upsert(h1, "Low");
        ladder.upsert(h2, "High");

        prop_assert_eq!(ladder.highest_at_or_below(x).map(|e| e.hours), Some(h1));
        prop_assert_eq!(ladder.highest_at_or_below(h2).map(|e| e.hours), Some(h2));
    }

    /// Repeated upserts at one threshold keep one entry with the last name
    #[test]
    fn prop_upsert_never_duplicates(
        hours in 0..=1000u64,
        names in prop::collection::vec("[A-Za-z]{1,10}", 1..=6)
    ) {
        let mut ladder = RankLadder::new();
        for (i, name) in names.iter().enumerate() {
            let created = ladder.upsert(hours, name.clone()).created;
            prop_assert_eq!(created, i == 0);
        }

        prop_assert_eq!(ladder.len(), 1);
        prop_assert_eq!(
            ladder.get(hours).map(|e| e.name.clone()),
            names.last().cloned()
        );
    }

    /// A removed threshold is never returned by the lookup at that threshold
    #[test]
    fn prop_removed_entry_not_found(ladder in ladder_strategy(), pick in 0..12usize) {
        let mut ladder = ladder;
        let thresholds: Vec<u64> = ladder.entries().map(|e| e.hours).collect();
        let target = thresholds[pick % thresholds.len()];

        prop_assert!(ladder.remove(target).removed);
        let found = ladder.highest_at_or_below(target).map(|e| e.hours);
        prop_assert_ne!(found, Some(target));
    }

    /// Custom ranks win whatever the watch time
    #[test]
    fn prop_custom_rank_always_wins(ladder in ladder_strategy(), hours in 0..=2000u64) {
        let mut customs = CustomRankStore::new();
        customs.set("alice", "Queen");
        let resolver = RankResolver::new(&ladder, &customs);

        let is_custom = matches!(resolver.resolve("alice", hours), RankResult::Custom { .. });
        prop_assert!(is_custom);
    }

    /// An empty ladder always reports that no ranks are defined
    #[test]
    fn prop_empty_ladder(hours in 0..=u64::MAX) {
        let ladder = RankLadder::new();
        let customs = CustomRankStore::new();
        let resolver = RankResolver::new(&ladder, &customs);

        prop_assert_eq!(resolver.resolve("bob", hours), RankResult::NoRanksDefined);
    }

    /// Resolution is consistent with the ladder: the remainder is the distance
    /// to the next threshold, and at least one hour
    #[test]
    fn prop_resolution_matches_ladder(ladder in ladder_strategy(), hours in 0..=1200u64) {
        let customs = CustomRankStore::new();
        let resolver = RankResolver::new(&ladder, &customs);
        let thresholds: Vec<u64> = ladder.entries().map(|e| e.hours).collect();
        let next = thresholds.iter().copied().find(|&t| t > hours);
        let current = thresholds.iter().copied().filter(|&t| t <= hours).last();

        match resolver.resolve("bob", hours) {
            RankResult::NoRankYet { hours_remaining, .. } => {
                prop_assert_eq!(current, None);
                prop_assert_eq!(Some(hours + hours_remaining), next);
            }
            RankResult::Ranked { name, hours_remaining, .. } => {
                prop_assert!(hours_remaining >= 1);
                prop_assert_eq!(Some(hours + hours_remaining), next);
                prop_assert_eq!(Some(name), current.map(|t| format!("Rank {}", t)));
            }
            RankResult::MaxRank { name, .. } => {
                prop_assert_eq!(next, None);
                prop_assert_eq!(Some(name), current.map(|t| format!("Rank {}", t)));
            }
            other => prop_assert!(false, "unexpected result {:?}", other),
        }
    }
}
