//! Services the chat bot host provides to the rank system

use crate::error::LedgerError;

/// Lookup of users the bot has seen in chat
pub trait UserDirectory {
    fn is_known(&self, user: &str) -> bool;
}

/// Watch time tracked by the host, in whole hours
pub trait WatchTime {
    fn watched_hours(&self, user: &str) -> u64;
}

/// Points balance and debit operations of the bot's currency
pub trait PointsLedger {
    fn balance(&self, user: &str) -> u64;

    /// Take `amount` points from `user`. Must leave the balance untouched on error.
    fn debit(&mut self, user: &str, amount: u64) -> Result<(), LedgerError>;

    /// Display name of the currency, e.g. "points"
    fn currency_label(&self) -> String;
}

impl<F> UserDirectory for F
where
    F: Fn(&str) -> bool,
{
    fn is_known(&self, user: &str) -> bool {
        self(user)
    }
}

/// Fixed watch time, for hosts that look the hours up before dispatching
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KnownHours(pub u64);

impl WatchTime for KnownHours {
    fn watched_hours(&self, _user: &str) -> u64 {
        self.0
    }
}
