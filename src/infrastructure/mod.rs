//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//!
//! ## Structure
//!
//! - `cmdstan` - `ModelCompiler` backed by a CmdStan checkout

pub mod cmdstan;

pub use cmdstan::{CmdStanCompiler, CMDSTAN_ENV};
