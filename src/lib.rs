//! Rank System Core - watch-time ranks and custom ranks for chat bots
//!
//! Viewers climb a ladder of hour thresholds as they watch; a custom rank,
//! granted by a moderator or bought with points, overrides the ladder. The
//! crate resolves ranks and applies rank commands, returning structured
//! results that map to message catalog keys. Python bindings for the bot host
//! are available behind the `python` feature.

pub mod admin;
pub mod config;
pub mod error;
pub mod host;
pub mod message;
pub mod purchase;
pub mod rank;
pub mod state;

#[cfg(feature = "python")]
mod bindings;

pub use crate::error::{LedgerError, RankError, Result};
pub use crate::message::{Message, MessageRef};
pub use crate::state::RankState;
