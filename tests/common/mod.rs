//! Common test utilities for BFG CLI tests.
//!
//! - `TestEnv`: isolated tool root and home directory
//! - `list_dir` and `assert_output_contains!`
//! - Fixtures: reusable test content

#![allow(dead_code)]

pub mod assertions;
pub mod env;
pub mod fixtures;

pub use assertions::*;
pub use env::*;
pub use fixtures::*;
