//! Error types for BFG
//!
//! Library code returns `BfgResult`; the binary wraps it in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for BFG operations
pub type BfgResult<T> = Result<T, BfgError>;

/// Main error type for BFG operations
#[derive(Error, Debug)]
pub enum BfgError {
    /// Project name cannot be used as a single path segment
    #[error("invalid project name '{name}': {reason}")]
    InvalidProjectName { name: String, reason: &'static str },

    /// The seed template is not installed next to the tool
    #[error("template file missing: {path}")]
    MissingTemplate { path: PathBuf },

    /// `init` refused to overwrite an installed template
    #[error("template already exists at {path}")]
    TemplateExists { path: PathBuf },

    /// `package` was pointed at something other than a model file
    #[error("not a model file: {path} ({reason})")]
    NotAModelFile { path: PathBuf, reason: &'static str },

    /// Invalid configuration file
    #[error("invalid configuration in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// No CmdStan installation was configured
    #[error("no CmdStan installation configured")]
    CompilerNotConfigured,

    /// Configured CmdStan directory does not exist
    #[error("CmdStan not found at {path}")]
    CompilerNotFound { path: PathBuf },

    /// The compiler ran but exited unsuccessfully
    #[error(
        "compilation of {model} failed ({}): {stderr}",
        .code.map_or_else(|| "terminated by signal".to_string(), |c| format!("exit code {c}"))
    )]
    CompileFailed {
        model: PathBuf,
        code: Option<i32>,
        stderr: String,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
