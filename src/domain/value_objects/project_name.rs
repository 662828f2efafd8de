//! Project Name Value Object
//!
//! A project name doubles as a directory name and a file stem, so it must be
//! exactly one normal path segment.

use std::fmt;

use crate::error::{BfgError, BfgResult};

/// Directory name reserved for packaged compiler artifacts
pub const BUNDLE_DIR_NAME: &str = "__compile__";

/// A validated project name
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProjectName(String);

impl ProjectName {
    /// Validate `name` as a single path segment
    pub fn new(name: impl Into<String>) -> BfgResult<Self> {
        let name = name.into();

        if let Some(reason) = rejection_reason(&name) {
            return Err(BfgError::InvalidProjectName { name, reason });
        }

        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn rejection_reason(name: &str) -> Option<&'static str> {
    if name.trim().is_empty() {
        return Some("must not be empty");
    }
    if name.contains('/') || name.contains('\\') {
        return Some("must not contain path separators");
    }
    if name == "." || name == ".." {
        return Some("must not be a relative directory reference");
    }
    if name.starts_with('.') {
        return Some("must not start with '.'");
    }
    if name == BUNDLE_DIR_NAME {
        return Some("is reserved for packaged artifacts");
    }
    if name.contains('\0') {
        return Some("must not contain NUL bytes");
    }
    None
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ProjectName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
