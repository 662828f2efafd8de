//! Layout Value Object
//!
//! Everything BFG creates lives below an explicit tool root. Relative
//! `models_dir` and `template` values resolve against it.
//!
//! Without an explicit template, a missing `<root>/__template__.stan` falls
//! back to the template compiled into the binary.

use std::path::{Path, PathBuf};

/// Default directory holding all projects
pub const DEFAULT_MODELS_DIR: &str = "models";

/// Default template file name inside the tool root
pub const DEFAULT_TEMPLATE_NAME: &str = "__template__.stan";

/// Default model file extension (without the dot)
pub const DEFAULT_EXTENSION: &str = "stan";

/// Resolved on-disk layout for a scaffolder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    tool_root: PathBuf,
    models_dir: PathBuf,
    template: PathBuf,
    template_configured: bool,
    extension: String,
}

impl Layout {
    /// Layout with default models dir, template and extension under `tool_root`
    pub fn new(tool_root: impl Into<PathBuf>) -> Self {
        let tool_root = tool_root.into();
        Self {
            models_dir: tool_root.join(DEFAULT_MODELS_DIR),
            template: tool_root.join(DEFAULT_TEMPLATE_NAME),
            template_configured: false,
            extension: DEFAULT_EXTENSION.to_string(),
            tool_root,
        }
    }

    pub fn with_models_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.models_dir = self.resolve(dir.as_ref());
        self
    }

    pub fn with_template(mut self, template: impl AsRef<Path>) -> Self {
        self.template = self.resolve(template.as_ref());
        self.template_configured = true;
        self
    }

    /// Set the model extension; a leading dot is ignored
    pub fn with_extension(mut self, extension: &str) -> Self {
        let ext = extension.trim_start_matches('.');
        if !ext.is_empty() {
            self.extension = ext.to_string();
        }
        self
    }

    /// Directory containing every project
    pub fn models_dir(&self) -> &Path {
        &self.models_dir
    }

    pub fn template(&self) -> &Path {
        &self.template
    }

    /// `true` once a template path was set explicitly
    pub fn template_configured(&self) -> bool {
        self.template_configured
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// `true` if `file_name` carries the model extension
    pub fn is_model_file_name(&self, file_name: &str) -> bool {
        file_name.ends_with(&format!(".{}", self.extension))
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.tool_root.join(path)
        }
    }
}
