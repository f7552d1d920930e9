//! Privileged rank administration

mod args;
mod editor;

pub use args::*;
pub use editor::*;
