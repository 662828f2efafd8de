//! Terminal output for the `bfg` binary

pub mod context;
pub mod error;
pub mod icon;
pub mod json;
pub mod sinks;
pub mod terminal;
pub mod theme;
