//! Project Entity
//!
//! A project is a directory under the models dir holding one model file
//! named after the project.

use std::path::{Path, PathBuf};

use crate::domain::value_objects::{Layout, ProjectName, BUNDLE_DIR_NAME};

/// Whether `create_project` seeded a new model file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectStatus {
    Created,
    AlreadyExists,
}

impl ProjectStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Created => "created",
            ProjectStatus::AlreadyExists => "already_exists",
        }
    }
}

/// Resolved paths of a single project
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    name: ProjectName,
    root_dir: PathBuf,
    project_dir: PathBuf,
    model_file: PathBuf,
}

impl Project {
    pub fn new(name: ProjectName, layout: &Layout) -> Self {
        let root_dir = layout.models_dir().to_path_buf();
        let project_dir = root_dir.join(name.as_str());
        let model_file = project_dir.join(format!("{}.{}", name, layout.extension()));
        Self {
            name,
            root_dir,
            project_dir,
            model_file,
        }
    }

    pub fn name(&self) -> &ProjectName {
        &self.name
    }

    /// Directory containing all projects
    pub fn root_dir(&self) -> &Path {
        &self.root_dir
    }

    pub fn project_dir(&self) -> &Path {
        &self.project_dir
    }

    pub fn model_file(&self) -> &Path {
        &self.model_file
    }

    /// `__compile__` folder for packaged artifacts
    pub fn bundle_dir(&self) -> PathBuf {
        self.project_dir.join(BUNDLE_DIR_NAME)
    }
}

/// Outcome of `create_project`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedProject {
    pub project: Project,
    pub status: ProjectStatus,
    /// The models root did not exist before this call
    pub root_created: bool,
}

impl CreatedProject {
    pub fn was_created(&self) -> bool {
        self.status == ProjectStatus::Created
    }
}

/// Outcome of `package_artifacts`
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PackageReport {
    pub bundle_dir: PathBuf,
    /// File names moved into the bundle, sorted
    pub moved: Vec<String>,
}
