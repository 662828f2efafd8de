//! Domain Entities

mod project;

pub use project::{CreatedProject, PackageReport, Project, ProjectStatus};
