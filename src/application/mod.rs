//! Application Layer
//!
//! Use cases that orchestrate the scaffolding flow on top of the domain
//! types and ports.
//!
//! - `ProjectScaffolder` - create projects, package artifacts, build, install template
//! - `ProjectLock` - per-project exclusive lock around mutating steps

pub mod lock;
pub mod scaffolder;

pub use lock::ProjectLock;
pub use scaffolder::{BuildReport, ProjectScaffolder, BUNDLED_TEMPLATE};
