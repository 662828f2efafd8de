//! BFG - scaffolding for Stan model projects
//!
//! Creates `<tool root>/<models>/<name>/<name>.stan` from a template and
//! tidies the files an external Stan compiler leaves behind into a
//! `__compile__` folder next to the model.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{BuildReport, ProjectLock, ProjectScaffolder, BUNDLED_TEMPLATE};
pub use config::{Config, LoadedConfig};
pub use domain::entities::{CreatedProject, PackageReport, Project, ProjectStatus};
pub use domain::ports::{
    ModelCompiler, NoopEventSink, RecordingEventSink, ScaffoldEvent, ScaffoldEventSink,
};
pub use domain::value_objects::{Layout, ProjectName, BUNDLE_DIR_NAME};
pub use error::{BfgError, BfgResult};
pub use infrastructure::CmdStanCompiler;
