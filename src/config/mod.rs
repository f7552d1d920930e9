//! Configuration module for rank data structures
//!
//! This module handles (de)serialization of the rank ladder, custom ranks and
//! purchase settings. The same document doubles as the persisted snapshot of
//! a running rank system.

mod entry;
mod settings;

pub use entry::*;
pub use settings::*;

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Complete rank configuration
///
/// Expected format:
/// `{"settings": {"required_hours": 50, "required_cost": 200},
///   "ranks": [{"hours": 10, "name": "Bronze"}],
///   "custom_ranks": [{"user": "alice", "name": "Queen"}]}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankConfig {
    #[serde(default)]
    pub settings: RankSettings,
    #[serde(default)]
    pub ranks: Vec<RankEntry>,
    #[serde(default)]
    pub custom_ranks: Vec<CustomRank>,
}

impl RankConfig {
    /// Parse a configuration from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a JSON configuration file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&raw)
    }

    /// Serialize to pretty-printed JSON
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the configuration to `path` as JSON
    pub fn write_to_path(&self, path: impl AsRef<Path>) -> Result<()> {
        std::fs::write(path.as_ref(), self.to_json_string()?)?;
        Ok(())
    }
}
