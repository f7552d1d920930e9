//! Owned rank state and per-command component views

use crate::admin::RankAdmin;
use crate::config::{normalize_rank_name, normalize_user, RankConfig, RankSettings};
use crate::purchase::RankSelfService;
use crate::rank::{CustomRankStore, RankLadder, RankResolver};

/// The ladder, custom ranks and purchase settings of one bot
#[derive(Debug, Clone, Default)]
pub struct RankState {
    ladder: RankLadder,
    customs: CustomRankStore,
    settings: RankSettings,
}

impl RankState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build state from a loaded configuration.
    ///
    /// Entries with an empty name are skipped. Later entries win over earlier
    /// ones with the same threshold or user.
    pub fn from_config(config: &RankConfig) -> Self {
        let mut state = Self {
            settings: config.settings,
            ..Self::default()
        };

        for entry in &config.ranks {
            let Some(name) = normalize_rank_name(&entry.name) else {
                log::warn!("Skipping rank at {} hours with an empty name", entry.hours);
                continue;
            };
            if !state.ladder.upsert(entry.hours, name).created {
                log::warn!("Duplicate rank at {} hours, keeping '{}'", entry.hours, name);
            }
        }

        for custom in &config.custom_ranks {
            let user = normalize_user(&custom.user);
            let Some(name) = normalize_rank_name(&custom.name) else {
                log::warn!("Skipping empty custom rank for '{}'", custom.user);
                continue;
            };
            if user.is_empty() {
                log::warn!("Skipping custom rank '{}' without a user", name);
                continue;
            }
            state.customs.set(&user, name);
        }

        log::info!(
            "Loaded {} ranks and {} custom ranks",
            state.ladder.len(),
            state.customs.len()
        );
        state
    }

    /// Snapshot of the current state, for persisting
    pub fn to_config(&self) -> RankConfig {
        RankConfig {
            settings: self.settings,
            ranks: self.ladder.entries().cloned().collect(),
            custom_ranks: self.customs.iter().cloned().collect(),
        }
    }

    pub fn ladder(&self) -> &RankLadder {
        &self.ladder
    }

    pub fn custom_ranks(&self) -> &CustomRankStore {
        &self.customs
    }

    pub fn custom_ranks_mut(&mut self) -> &mut CustomRankStore {
        &mut self.customs
    }

    pub fn settings(&self) -> &RankSettings {
        &self.settings
    }

    /// Read-only view for rank queries
    pub fn resolver(&self) -> RankResolver<'_> {
        RankResolver::new(&self.ladder, &self.customs)
    }

    /// Mutable view for privileged rank commands
    pub fn admin(&mut self) -> RankAdmin<'_> {
        RankAdmin::new(&mut self.ladder, &mut self.customs, &mut self.settings)
    }

    /// Mutable view for viewer rank commands
    pub fn self_service(&mut self) -> RankSelfService<'_> {
        RankSelfService::new(&mut self.customs, &self.settings)
    }
}
