//! Presentation Layer
//!
//! Command-line interface definition shared by the binary and its tests.

pub mod cli;

pub use cli::{Cli, ColorWhen, Commands};
