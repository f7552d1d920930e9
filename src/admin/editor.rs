//! Privileged rank editing: ladder CRUD, custom rank grants and settings

use crate::admin::parse_count;
use crate::config::{normalize_rank_name, normalize_user, RankSettings};
use crate::host::UserDirectory;
use crate::rank::{CustomRankStore, RankLadder};

/// Result of `rankedit add`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    Created { hours: u64, name: String },
    Updated { hours: u64, name: String },
    Usage,
}

/// Result of `rankedit del`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted { hours: u64 },
    NotFound { hours: u64 },
    Usage,
}

/// Result of `rankedit custom`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GrantOutcome {
    Granted { user: String, name: String },
    UserNotFound { user: String },
    Usage,
}

/// Result of `rankedit customdel`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RevokeOutcome {
    Revoked { user: String },
    NotFound { user: String },
    Usage,
}

/// Result of `rankedit settime`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetTimeOutcome {
    Updated { hours: u64 },
    Usage,
}

/// Result of `rankedit setcost`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetCostOutcome {
    Updated { cost: u64, currency: String },
    Usage { currency: String },
}

/// Mutable view used by privileged rank commands
#[derive(Debug)]
pub struct RankAdmin<'a> {
    ladder: &'a mut RankLadder,
    customs: &'a mut CustomRankStore,
    settings: &'a mut RankSettings,
}

impl<'a> RankAdmin<'a> {
    pub fn new(
        ladder: &'a mut RankLadder,
        customs: &'a mut CustomRankStore,
        settings: &'a mut RankSettings,
    ) -> Self {
        Self {
            ladder,
            customs,
            settings,
        }
    }

    /// Add a rank at `hours`, or rename the one already there
    pub fn add(&mut self, hours: &str, name: &str) -> AddOutcome {
        let (Some(hours), Some(name)) = (parse_count(hours), normalize_rank_name(name)) else {
            return AddOutcome::Usage;
        };

        let name = name.to_string();
        if self.ladder.upsert(hours, name.clone()).created {
            log::info!("Added rank '{}' at {} hours", name, hours);
            AddOutcome::Created { hours, name }
        } else {
            log::info!("Renamed rank at {} hours to '{}'", hours, name);
            AddOutcome::Updated { hours, name }
        }
    }

    pub fn del(&mut self, hours: &str) -> DeleteOutcome {
        let Some(hours) = parse_count(hours) else {
            return DeleteOutcome::Usage;
        };

        if self.ladder.remove(hours).removed {
            log::info!("Deleted rank at {} hours", hours);
            DeleteOutcome::Deleted { hours }
        } else {
            DeleteOutcome::NotFound { hours }
        }
    }

    /// Grant a custom rank. No watch time or points are required.
    pub fn custom(&mut self, user: &str, name: &str, users: &impl UserDirectory) -> GrantOutcome {
        let user = normalize_user(user);
        let Some(name) = normalize_rank_name(name) else {
            return GrantOutcome::Usage;
        };
        if user.is_empty() {
            return GrantOutcome::Usage;
        }

        if !users.is_known(&user) {
            return GrantOutcome::UserNotFound { user };
        }

        self.customs.set(&user, name);
        log::info!("Granted custom rank '{}' to {}", name, user);
        GrantOutcome::Granted {
            user,
            name: name.to_string(),
        }
    }

    pub fn customdel(&mut self, user: &str) -> RevokeOutcome {
        let user = normalize_user(user);
        if user.is_empty() {
            return RevokeOutcome::Usage;
        }

        if self.customs.delete(&user).removed {
            log::info!("Removed custom rank from {}", user);
            RevokeOutcome::Revoked { user }
        } else {
            RevokeOutcome::NotFound { user }
        }
    }

    /// Set the watch time required to buy a custom rank
    pub fn set_time(&mut self, hours: &str) -> SetTimeOutcome {
        let Some(hours) = parse_count(hours) else {
            return SetTimeOutcome::Usage;
        };

        self.settings.set_required_hours(hours);
        log::info!("Custom rank purchase now requires {} hours", hours);
        SetTimeOutcome::Updated { hours }
    }

    /// Set the points cost of a custom rank
    pub fn set_cost(&mut self, amount: &str, currency: &str) -> SetCostOutcome {
        let currency = currency.to_string();
        let Some(cost) = parse_count(amount) else {
            return SetCostOutcome::Usage { currency };
        };

        self.settings.set_required_cost(cost);
        log::info!("Custom rank purchase now costs {} {}", cost, currency);
        SetCostOutcome::Updated { cost, currency }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Stores {
        ladder: RankLadder,
        customs: CustomRankStore,
        settings: RankSettings,
    }

    impl Stores {
        fn new() -> Self {
            Self {
                ladder: RankLadder::new(),
                customs: CustomRankStore::new(),
                settings: RankSettings::default(),
            }
        }

        fn admin(&mut self) -> RankAdmin<'_> {
            RankAdmin::new(&mut self.ladder, &mut self.customs, &mut self.settings)
        }
    }

    fn known(user: &str) -> bool {
        user == "alice"
    }

    #[test]
    fn test_add_new_then_update() {
        let mut stores = Stores::new();

        assert_eq!(
            stores.admin().add("10", "Bronze"),
            AddOutcome::Created {
                hours: 10,
                name: "Bronze".to_string()
            }
        );
        assert_eq!(
            stores.admin().add("10", "  Copper Viewer "),
            AddOutcome::Updated {
                hours: 10,
                name: "Copper Viewer".to_string()
            }
        );
        assert_eq!(stores.ladder.len(), 1);
    }

    #[test]
    fn test_add_usage() {
        let mut stores = Stores::new();
        assert_eq!(stores.admin().add("-1", "Bronze"), AddOutcome::Usage);
        assert_eq!(stores.admin().add("ten", "Bronze"), AddOutcome::Usage);
        assert_eq!(stores.admin().add("10", "   "), AddOutcome::Usage);
        assert!(stores.ladder.is_empty());
    }

    #[test]
    fn test_del() {
        let mut stores = Stores::new();
        stores.admin().add("10", "Bronze");

        assert_eq!(stores.admin().del("11"), DeleteOutcome::NotFound { hours: 11 });
        assert_eq!(stores.admin().del("abc"), DeleteOutcome::Usage);
        assert_eq!(stores.admin().del("10"), DeleteOutcome::Deleted { hours: 10 });
        assert!(stores.ladder.is_empty());
    }

    #[test]
    fn test_custom_grant_requires_known_user() {
        let mut stores = Stores::new();

        assert_eq!(
            stores.admin().custom("bob", "King", &known),
            GrantOutcome::UserNotFound {
                user: "bob".to_string()
            }
        );
        assert!(stores.customs.is_empty());

        assert_eq!(
            stores.admin().custom("@Alice", "Queen", &known),
            GrantOutcome::Granted {
                user: "alice".to_string(),
                name: "Queen".to_string()
            }
        );
        assert_eq!(stores.customs.get("alice").unwrap().name, "Queen");
    }

    #[test]
    fn test_custom_grant_ignores_purchase_requirements() {
        let mut stores = Stores::new();
        stores.settings = RankSettings::new(1000, 5000);

        assert!(matches!(
            stores.admin().custom("alice", "Queen", &known),
            GrantOutcome::Granted { .. }
        ));
    }

    #[test]
    fn test_custom_usage() {
        let mut stores = Stores::new();
        assert_eq!(stores.admin().custom("alice", "", &known), GrantOutcome::Usage);
        assert_eq!(stores.admin().custom("@", "Queen", &known), GrantOutcome::Usage);
        assert!(stores.customs.is_empty());
    }

    #[test]
    fn test_customdel() {
        let mut stores = Stores::new();
        stores.admin().custom("alice", "Queen", &known);

        assert_eq!(
            stores.admin().customdel("bob"),
            RevokeOutcome::NotFound {
                user: "bob".to_string()
            }
        );
        assert_eq!(
            stores.admin().customdel("ALICE"),
            RevokeOutcome::Revoked {
                user: "alice".to_string()
            }
        );
        assert_eq!(stores.admin().customdel(""), RevokeOutcome::Usage);
        assert!(stores.customs.is_empty());
    }

    #[test]
    fn test_set_time_and_cost() {
        let mut stores = Stores::new();

        assert_eq!(stores.admin().set_time("25"), SetTimeOutcome::Updated { hours: 25 });
        assert_eq!(stores.admin().set_time("-3"), SetTimeOutcome::Usage);
        assert_eq!(
            stores.admin().set_cost("150", "points"),
            SetCostOutcome::Updated {
                cost: 150,
                currency: "points".to_string()
            }
        );
        assert_eq!(
            stores.admin().set_cost("lots", "points"),
            SetCostOutcome::Usage {
                currency: "points".to_string()
            }
        );

        assert_eq!(stores.settings, RankSettings::new(25, 150));
    }
}
