//! Mapping of command results to message catalog keys
//!
//! The bot renders replies from a localized catalog where each message has a
//! key and `$1`, `$2`, ... placeholders. Every result type here knows its key
//! and the positional values for those placeholders; the text itself lives in
//! the host.

use crate::admin::{
    AddOutcome, DeleteOutcome, GrantOutcome, RevokeOutcome, SetCostOutcome, SetTimeOutcome,
};
use crate::purchase::{DeleteOwnOutcome, PurchaseOutcome};
use crate::rank::RankResult;
use serde::Serialize;

/// Message key plus positional arguments, ready for the host formatter
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageRef {
    pub key: &'static str,
    pub args: Vec<String>,
}

/// A result that can be shown in chat
pub trait Message {
    /// Catalog key of the message
    fn key(&self) -> &'static str;

    /// Values for `$1`, `$2`, ... in catalog order
    fn args(&self) -> Vec<String>;

    fn to_message(&self) -> MessageRef {
        MessageRef {
            key: self.key(),
            args: self.args(),
        }
    }
}

impl Message for RankResult {
    fn key(&self) -> &'static str {
        match self {
            RankResult::Custom { .. } => "ranks.rank.customsuccess",
            RankResult::NoRanksDefined => "ranks.rank.404",
            RankResult::NoRankYet { .. } => "ranks.rank.norank.success",
            RankResult::MaxRank { .. } => "ranks.rank.maxsuccess",
            RankResult::Ranked { .. } => "ranks.rank.success",
        }
    }

    fn args(&self) -> Vec<String> {
        match self {
            RankResult::Custom { user, name } | RankResult::MaxRank { user, name } => {
                vec![user.clone(), name.clone()]
            }
            RankResult::NoRanksDefined => Vec::new(),
            RankResult::NoRankYet {
                user,
                hours_remaining,
                next_name,
            } => vec![user.clone(), hours_remaining.to_string(), next_name.clone()],
            RankResult::Ranked {
                user,
                name,
                next_name,
                hours_remaining,
            } => vec![
                user.clone(),
                name.clone(),
                hours_remaining.to_string(),
                next_name.clone(),
            ],
        }
    }
}

impl Message for AddOutcome {
    fn key(&self) -> &'static str {
        match self {
            AddOutcome::Created { .. } => "ranks.add.success-new",
            AddOutcome::Updated { .. } => "ranks.add.success-update",
            AddOutcome::Usage => "ranks.add.usage",
        }
    }

    fn args(&self) -> Vec<String> {
        match self {
            AddOutcome::Created { hours, name } | AddOutcome::Updated { hours, name } => {
                vec![hours.to_string(), name.clone()]
            }
            AddOutcome::Usage => Vec::new(),
        }
    }
}

impl Message for DeleteOutcome {
    fn key(&self) -> &'static str {
        match self {
            DeleteOutcome::Deleted { .. } => "ranks.del.success",
            DeleteOutcome::NotFound { .. } => "ranks.del.404",
            DeleteOutcome::Usage => "ranks.del.usage",
        }
    }

    fn args(&self) -> Vec<String> {
        match self {
            DeleteOutcome::Deleted { hours } | DeleteOutcome::NotFound { hours } => {
                vec![hours.to_string()]
            }
            DeleteOutcome::Usage => Vec::new(),
        }
    }
}

impl Message for GrantOutcome {
    fn key(&self) -> &'static str {
        match self {
            GrantOutcome::Granted { .. } => "ranks.custom.success",
            GrantOutcome::UserNotFound { .. } => "ranks.custom.404",
            GrantOutcome::Usage => "ranks.custom.usage",
        }
    }

    fn args(&self) -> Vec<String> {
        match self {
            GrantOutcome::Granted { user, name } => vec![user.clone(), name.clone()],
            GrantOutcome::UserNotFound { user } => vec![user.clone()],
            GrantOutcome::Usage => Vec::new(),
        }
    }
}

impl Message for RevokeOutcome {
    fn key(&self) -> &'static str {
        match self {
            RevokeOutcome::Revoked { .. } => "ranks.customdel.success",
            RevokeOutcome::NotFound { .. } => "ranks.customdel.404",
            RevokeOutcome::Usage => "ranks.customdel.usage",
        }
    }

    fn args(&self) -> Vec<String> {
        match self {
            RevokeOutcome::Revoked { user } | RevokeOutcome::NotFound { user } => {
                vec![user.clone()]
            }
            RevokeOutcome::Usage => Vec::new(),
        }
    }
}

impl Message for SetTimeOutcome {
    fn key(&self) -> &'static str {
        match self {
            SetTimeOutcome::Updated { .. } => "ranks.settime.success",
            SetTimeOutcome::Usage => "ranks.settime.usage",
        }
    }

    fn args(&self) -> Vec<String> {
        match self {
            SetTimeOutcome::Updated { hours } => vec![hours.to_string()],
            SetTimeOutcome::Usage => Vec::new(),
        }
    }
}

impl Message for SetCostOutcome {
    fn key(&self) -> &'static str {
        match self {
            SetCostOutcome::Updated { .. } => "ranks.setcost.success",
            SetCostOutcome::Usage { .. } => "ranks.setcost.usage",
        }
    }

    fn args(&self) -> Vec<String> {
        match self {
            SetCostOutcome::Updated { cost, currency } => vec![cost.to_string(), currency.clone()],
            SetCostOutcome::Usage { currency } => vec![currency.clone()],
        }
    }
}

impl Message for PurchaseOutcome {
    fn key(&self) -> &'static str {
        match self {
            PurchaseOutcome::Purchased { .. } => "ranks.set.success",
            PurchaseOutcome::Usage { price: Some(_), .. } => "ranks.set.usage",
            PurchaseOutcome::Usage { price: None, .. } => "ranks.set.usage.nopoints",
            PurchaseOutcome::Ineligible {
                balance: Some(_), ..
            } => "ranks.set.failure",
            PurchaseOutcome::Ineligible { balance: None, .. } => "ranks.set.failure.nopoints",
        }
    }

    fn args(&self) -> Vec<String> {
        match self {
            PurchaseOutcome::Purchased { name, .. } => vec![name.clone()],
            PurchaseOutcome::Usage {
                required_hours,
                price: Some(price),
            } => vec![
                required_hours.to_string(),
                price.amount.to_string(),
                price.currency.clone(),
            ],
            PurchaseOutcome::Usage {
                required_hours,
                price: None,
            } => vec![required_hours.to_string()],
            PurchaseOutcome::Ineligible {
                hours,
                balance: Some(balance),
            } => vec![
                hours.to_string(),
                balance.currency.clone(),
                balance.amount.to_string(),
            ],
            PurchaseOutcome::Ineligible {
                hours,
                balance: None,
            } => vec![hours.to_string()],
        }
    }
}

impl Message for DeleteOwnOutcome {
    fn key(&self) -> &'static str {
        match self {
            DeleteOwnOutcome::Deleted { .. } => "ranks.delself.success",
            DeleteOwnOutcome::NotFound { .. } => "ranks.delself.404",
        }
    }

    fn args(&self) -> Vec<String> {
        Vec::new()
    }
}
