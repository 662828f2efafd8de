//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod layout;
mod project_name;

pub use layout::{Layout, DEFAULT_EXTENSION, DEFAULT_MODELS_DIR, DEFAULT_TEMPLATE_NAME};
pub use project_name::{ProjectName, BUNDLE_DIR_NAME};
