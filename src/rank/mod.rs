//! Rank ladder, custom ranks and rank resolution

mod custom;
mod ladder;
mod resolver;

#[cfg(test)]
mod property_tests;

pub use custom::*;
pub use ladder::*;
pub use resolver::*;
