//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{
    Layout, DEFAULT_EXTENSION, DEFAULT_MODELS_DIR,
};
use crate::error::BfgResult;

use super::loader::{self, ConfigWarning};

/// Where projects and the template live, relative to the tool root
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutConfig {
    #[serde(default = "default_models_dir")]
    pub models_dir: PathBuf,

    /// Seed template; the bundled one is used when unset and
    /// `<root>/__template__.stan` is absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<PathBuf>,

    #[serde(default = "default_extension")]
    pub extension: String,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            models_dir: default_models_dir(),
            template: None,
            extension: default_extension(),
        }
    }
}

fn default_models_dir() -> PathBuf {
    PathBuf::from(DEFAULT_MODELS_DIR)
}

fn default_extension() -> String {
    DEFAULT_EXTENSION.to_string()
}

/// External compiler settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompilerConfig {
    /// CmdStan checkout used by `bfg build`
    #[serde(default)]
    pub cmdstan: Option<PathBuf>,

    /// Make program, `make` when unset
    #[serde(default)]
    pub make: Option<String>,
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub color: ColorMode,

    #[serde(default = "default_true")]
    pub unicode: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::default(),
            unicode: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Tool root; only honoured from the user config
    #[serde(default)]
    pub root: Option<PathBuf>,

    #[serde(default)]
    pub layout: LayoutConfig,

    #[serde(default)]
    pub compiler: CompilerConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> BfgResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> BfgResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Resolve the layout for `tool_root`
    pub fn layout(&self, tool_root: &Path) -> Layout {
        let layout = Layout::new(tool_root)
            .with_models_dir(&self.layout.models_dir)
            .with_extension(&self.layout.extension);
        match &self.layout.template {
            Some(template) => layout.with_template(template),
            None => layout,
        }
    }
}
