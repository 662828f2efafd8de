//! Project Scaffolder
//!
//! Creates projects from the template and packages compiler output into
//! `__compile__`. All filesystem errors propagate unchanged; nothing is
//! retried, and a packaging run that fails partway leaves moved files moved.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::application::lock::ProjectLock;
use crate::domain::entities::{CreatedProject, PackageReport, Project, ProjectStatus};
use crate::domain::ports::{ModelCompiler, NoopEventSink, ScaffoldEvent, ScaffoldEventSink};
use crate::domain::value_objects::{Layout, ProjectName, BUNDLE_DIR_NAME};
use crate::error::{BfgError, BfgResult};

/// Template shipped inside the binary, installed by `install_template`
pub const BUNDLED_TEMPLATE: &str = include_str!("../../templates/__template__.stan");

/// Seed content for a new model file
enum TemplateSource<'a> {
    File(&'a Path),
    Bundled,
}

/// Outcome of `build`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildReport {
    pub created: CreatedProject,
    pub compiled: bool,
    pub package: PackageReport,
}

/// Scaffolds Stan projects below a `Layout`
pub struct ProjectScaffolder<E = NoopEventSink>
where
    E: ScaffoldEventSink,
{
    layout: Layout,
    events: E,
}

impl ProjectScaffolder {
    /// Scaffolder that reports nothing
    pub fn new(layout: Layout) -> Self {
        Self {
            layout,
            events: NoopEventSink,
        }
    }
}

impl<E> ProjectScaffolder<E>
where
    E: ScaffoldEventSink,
{
    /// Replace the event sink
    pub fn with_events<F: ScaffoldEventSink>(self, events: F) -> ProjectScaffolder<F> {
        ProjectScaffolder {
            layout: self.layout,
            events,
        }
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Resolve the paths of `name` without touching the disk
    pub fn project(&self, name: &str) -> BfgResult<Project> {
        Ok(Project::new(ProjectName::new(name)?, &self.layout))
    }

    /// Ensure `<models>/<name>/<name>.<ext>` exists, seeding it from the template
    ///
    /// Idempotent: an existing model file is never overwritten.
    pub fn create_project(&self, name: &str) -> BfgResult<CreatedProject> {
        let project = self.project(name)?;

        let root_created = !project.root_dir().exists();
        if root_created {
            fs::create_dir_all(project.root_dir())?;
            self.events.on_event(ScaffoldEvent::RootCreated {
                path: project.root_dir().to_path_buf(),
            });
        }

        if !project.project_dir().exists() {
            fs::create_dir_all(project.project_dir())?;
        }

        let source = if project.model_file().exists() {
            None
        } else {
            Some(self.template_source()?)
        };

        let _lock = ProjectLock::acquire(project.root_dir(), project.name())?;

        let status = match source {
            Some(source) if !project.model_file().exists() => {
                self.seed_model_file(&project, source)?
            }
            _ => ProjectStatus::AlreadyExists,
        };

        match status {
            ProjectStatus::Created => self.events.on_event(ScaffoldEvent::ProjectCreated {
                name: project.name().to_string(),
                project_dir: project.project_dir().to_path_buf(),
                model_file: project.model_file().to_path_buf(),
            }),
            ProjectStatus::AlreadyExists => self.events.on_event(ScaffoldEvent::ProjectExists {
                name: project.name().to_string(),
                model_file: project.model_file().to_path_buf(),
            }),
        }

        Ok(CreatedProject {
            project,
            status,
            root_created,
        })
    }

    /// Where the seed content comes from
    ///
    /// Fails with `MissingTemplate` only for an explicitly configured path.
    fn template_source(&self) -> BfgResult<TemplateSource<'_>> {
        let template = self.layout.template();
        if template.is_file() {
            Ok(TemplateSource::File(template))
        } else if self.layout.template_configured() {
            Err(BfgError::MissingTemplate {
                path: template.to_path_buf(),
            })
        } else {
            Ok(TemplateSource::Bundled)
        }
    }

    /// Stage the seed content next to the model file, then rename it into
    /// place without clobbering a model file that appeared in the meantime.
    fn seed_model_file(
        &self,
        project: &Project,
        source: TemplateSource<'_>,
    ) -> BfgResult<ProjectStatus> {
        let mut staged = tempfile::Builder::new()
            .prefix(".bfg-template")
            .tempfile_in(project.project_dir())?;

        match source {
            TemplateSource::File(path) => {
                let mut file = fs::File::open(path).map_err(|e| match e.kind() {
                    io::ErrorKind::NotFound => BfgError::MissingTemplate {
                        path: path.to_path_buf(),
                    },
                    _ => e.into(),
                })?;
                io::copy(&mut file, staged.as_file_mut())?;
            }
            TemplateSource::Bundled => staged.write_all(BUNDLED_TEMPLATE.as_bytes())?,
        }
        staged.as_file().sync_all()?;

        match staged.persist_noclobber(project.model_file()) {
            Ok(_) => Ok(ProjectStatus::Created),
            Err(e) if e.error.kind() == io::ErrorKind::AlreadyExists => {
                Ok(ProjectStatus::AlreadyExists)
            }
            Err(e) => Err(e.error.into()),
        }
    }

    /// Move every non-model entry next to `model_file` into a fresh `__compile__`
    ///
    /// `model_file` must be an existing regular file carrying the model
    /// extension; anything else is rejected before the disk is touched.
    /// Any previous bundle is deleted first. With no compiler output the
    /// result is an empty bundle.
    pub fn package_artifacts(&self, model_file: &Path) -> BfgResult<PackageReport> {
        let keep_suffix = self.model_suffix(model_file)?;

        let dir = match model_file.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };

        let _lock = self.lock_for_dir(&dir)?;

        let bundle_dir = dir.join(BUNDLE_DIR_NAME);
        if let Ok(meta) = fs::symlink_metadata(&bundle_dir) {
            if meta.is_dir() {
                fs::remove_dir_all(&bundle_dir)?;
            } else {
                fs::remove_file(&bundle_dir)?;
            }
            self.events.on_event(ScaffoldEvent::BundleReset {
                path: bundle_dir.clone(),
            });
        }
        fs::create_dir(&bundle_dir)?;

        let mut entries = fs::read_dir(&dir)?.collect::<Result<Vec<_>, _>>()?;
        entries.sort_by_key(|entry| entry.file_name());

        let detailed = self.events.wants_detailed_events();
        let mut moved = Vec::new();
        for entry in entries {
            let file_name = entry.file_name();
            let name = file_name.to_string_lossy();
            if name == BUNDLE_DIR_NAME || name.ends_with(&keep_suffix) {
                continue;
            }

            let to = bundle_dir.join(&file_name);
            fs::rename(entry.path(), &to)?;
            if detailed {
                self.events.on_event(ScaffoldEvent::ArtifactMoved {
                    from: entry.path(),
                    to,
                });
            }
            moved.push(name.into_owned());
        }

        self.events.on_event(ScaffoldEvent::ArtifactsPackaged {
            project_dir: dir,
            bundle_dir: bundle_dir.clone(),
            moved_count: moved.len(),
        });

        Ok(PackageReport { bundle_dir, moved })
    }

    /// `.<ext>` of a packageable model file
    fn model_suffix(&self, model_file: &Path) -> BfgResult<String> {
        let not_a_model = |reason: &'static str| BfgError::NotAModelFile {
            path: model_file.to_path_buf(),
            reason,
        };

        match fs::metadata(model_file) {
            Ok(meta) if meta.is_file() => {}
            Ok(_) => return Err(not_a_model("not a regular file")),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(not_a_model("no such file"))
            }
            Err(e) => return Err(e.into()),
        }

        let name = model_file
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default();
        if !self.layout.is_model_file_name(name) {
            return Err(not_a_model("missing the model extension"));
        }

        match model_file.extension().and_then(|e| e.to_str()) {
            Some(ext) => Ok(format!(".{ext}")),
            None => Err(not_a_model("missing the model extension")),
        }
    }

    /// Lock `dir` if it is a project directory of this layout
    fn lock_for_dir(&self, dir: &Path) -> BfgResult<Option<ProjectLock>> {
        if dir.parent() != Some(self.layout.models_dir()) {
            return Ok(None);
        }
        let Some(name) = dir.file_name().and_then(|n| n.to_str()) else {
            return Ok(None);
        };
        match ProjectName::new(name) {
            Ok(name) => ProjectLock::acquire(self.layout.models_dir(), &name).map(Some),
            Err(_) => Ok(None),
        }
    }

    /// Create the project, optionally compile it, then package the artifacts
    pub fn build(
        &self,
        name: &str,
        compiler: Option<&dyn ModelCompiler>,
    ) -> BfgResult<BuildReport> {
        let created = self.create_project(name)?;
        let model_file = created.project.model_file().to_path_buf();

        let compiled = match compiler {
            Some(compiler) => {
                self.events.on_event(ScaffoldEvent::CompileStarted {
                    model_file: model_file.clone(),
                });
                compiler.compile(&model_file)?;
                self.events.on_event(ScaffoldEvent::CompileFinished {
                    model_file: model_file.clone(),
                });
                true
            }
            None => false,
        };

        let package = self.package_artifacts(&model_file)?;

        Ok(BuildReport {
            created,
            compiled,
            package,
        })
    }

    /// Write the bundled template to the layout's template path
    pub fn install_template(&self, force: bool) -> BfgResult<PathBuf> {
        let path = self.layout.template().to_path_buf();
        if path.exists() && !force {
            return Err(BfgError::TemplateExists { path });
        }

        let parent = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&parent)?;

        let mut staged = tempfile::Builder::new()
            .prefix(".bfg-template")
            .tempfile_in(&parent)?;
        staged.write_all(BUNDLED_TEMPLATE.as_bytes())?;
        staged.persist(&path).map_err(|e| e.error)?;

        self.events
            .on_event(ScaffoldEvent::TemplateInstalled { path: path.clone() });
        Ok(path)
    }
}
