//! Viewer-facing custom rank purchase and removal

use crate::config::{normalize_rank_name, normalize_user, RankSettings};
use crate::error::{LedgerError, Result};
use crate::host::{PointsLedger, WatchTime};
use crate::rank::CustomRankStore;

/// An amount of the bot's currency together with its display label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Price {
    pub amount: u64,
    pub currency: String,
}

/// Result of `rank set`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PurchaseOutcome {
    Purchased { user: String, name: String, cost: u64 },
    /// No rank name given; carries the requirements for the usage hint.
    /// `price` is `None` when buying is free.
    Usage {
        required_hours: u64,
        price: Option<Price>,
    },
    /// Requirements not met; carries the viewer's current hours and, when a
    /// cost applies, their current balance
    Ineligible { hours: u64, balance: Option<Price> },
}

/// Result of `rank delself`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOwnOutcome {
    Deleted { user: String },
    NotFound { user: String },
}

/// Mutable view used by viewer rank commands
#[derive(Debug)]
pub struct RankSelfService<'a> {
    customs: &'a mut CustomRankStore,
    settings: &'a RankSettings,
}

impl<'a> RankSelfService<'a> {
    pub fn new(customs: &'a mut CustomRankStore, settings: &'a RankSettings) -> Self {
        Self { customs, settings }
    }

    /// Buy `rank_name` as a custom rank for `user`.
    ///
    /// The points are debited before the rank is stored, so a refused debit
    /// leaves the store untouched. Only ledger failures other than
    /// insufficient funds are returned as errors.
    pub fn purchase(
        &mut self,
        user: &str,
        rank_name: &str,
        watch: &impl WatchTime,
        ledger: &mut impl PointsLedger,
    ) -> Result<PurchaseOutcome> {
        let required_hours = self.settings.required_hours();
        let cost = self.settings.required_cost();
        let cost_applies = self.settings.cost_applies();

        let user = normalize_user(user);
        let name = match normalize_rank_name(rank_name) {
            Some(name) if !user.is_empty() => name,
            _ => {
                let price = cost_applies.then(|| Price {
                    amount: cost,
                    currency: ledger.currency_label(),
                });
                return Ok(PurchaseOutcome::Usage {
                    required_hours,
                    price,
                });
            }
        };

        let hours = watch.watched_hours(&user);

        if !cost_applies {
            if hours < required_hours {
                log::debug!(
                    "{} cannot buy a custom rank: {} of {} hours",
                    user,
                    hours,
                    required_hours
                );
                return Ok(PurchaseOutcome::Ineligible {
                    hours,
                    balance: None,
                });
            }
            return Ok(self.grant(user, name, 0));
        }

        let points = ledger.balance(&user);
        if hours < required_hours || points < cost {
            log::debug!(
                "{} cannot buy a custom rank: {} of {} hours, {} of {} points",
                user,
                hours,
                required_hours,
                points,
                cost
            );
            return Ok(PurchaseOutcome::Ineligible {
                hours,
                balance: Some(Price {
                    amount: points,
                    currency: ledger.currency_label(),
                }),
            });
        }

        match ledger.debit(&user, cost) {
            Ok(()) => Ok(self.grant(user, name, cost)),
            Err(LedgerError::InsufficientFunds { balance, .. }) => {
                log::warn!(
                    "Debit of {} points from {} refused, balance is {}",
                    cost,
                    user,
                    balance
                );
                Ok(PurchaseOutcome::Ineligible {
                    hours,
                    balance: Some(Price {
                        amount: balance,
                        currency: ledger.currency_label(),
                    }),
                })
            }
            Err(e) => Err(e.into()),
        }
    }

    fn grant(&mut self, user: String, name: &str, cost: u64) -> PurchaseOutcome {
        self.customs.set(&user, name);
        log::info!("{} bought custom rank '{}' for {} points", user, name, cost);
        PurchaseOutcome::Purchased {
            user,
            name: name.to_string(),
            cost,
        }
    }

    /// Remove the caller's own custom rank
    pub fn delete_own(&mut self, user: &str) -> DeleteOwnOutcome {
        let user = normalize_user(user);
        if self.customs.delete(&user).removed {
            log::info!("{} removed their custom rank", user);
            DeleteOwnOutcome::Deleted { user }
        } else {
            DeleteOwnOutcome::NotFound { user }
        }
    }
}
