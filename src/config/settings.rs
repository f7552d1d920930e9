//! Self-service purchase settings

use serde::{Deserialize, Serialize};

/// Requirements a viewer must meet to buy a custom rank.
///
/// Missing values mean "no requirement", so the default is zero hours and
/// zero points.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankSettings {
    #[serde(default)]
    required_hours: u64,
    #[serde(default)]
    required_cost: u64,
}

impl RankSettings {
    pub fn new(required_hours: u64, required_cost: u64) -> Self {
        Self {
            required_hours,
            required_cost,
        }
    }

    #[inline]
    pub fn required_hours(&self) -> u64 {
        self.required_hours
    }

    pub fn set_required_hours(&mut self, hours: u64) {
        self.required_hours = hours;
    }

    #[inline]
    pub fn required_cost(&self) -> u64 {
        self.required_cost
    }

    pub fn set_required_cost(&mut self, cost: u64) {
        self.required_cost = cost;
    }

    /// Whether buying a custom rank costs points at all
    #[inline]
    pub fn cost_applies(&self) -> bool {
        self.required_cost > 0
    }
}
