//! Configuration module for BFG
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (BFG_*, CMDSTAN)
//! 3. Tool config (<tool root>/bfg.toml)
//! 4. User config (~/.config/bfg/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{
    load, load_from, with_env_overrides, ConfigWarning, LoadedConfig, TOOL_CONFIG_FILE,
};
pub use types::{ColorMode, CompilerConfig, Config, LayoutConfig, OutputConfig};
