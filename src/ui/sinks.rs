//! Event sinks rendering scaffold events for the terminal

use std::path::Path;

use bfg::{ScaffoldEvent, ScaffoldEventSink};

use crate::ui::context::UiContext;
use crate::ui::icon::Icon;

/// Human-readable output, one line per event
pub struct TextEventSink {
    ui: UiContext,
}

impl TextEventSink {
    pub fn new(ui: UiContext) -> Self {
        Self { ui }
    }

    fn icon(&self, icon: Icon) -> String {
        icon.colored(self.ui.color, self.ui.unicode)
    }

    /// Rendered line for `event`, `None` if it is filtered out
    pub fn render(&self, event: &ScaffoldEvent) -> Option<String> {
        if event.is_detail() && self.ui.verbose == 0 {
            return None;
        }

        let line = match event {
            ScaffoldEvent::RootCreated { path } => {
                format!("{} Created directory '{}'", self.icon(Icon::Success), show(path))
            }
            ScaffoldEvent::ProjectCreated {
                name, model_file, ..
            } => format!(
                "{} Project '{}' created\n  {} {}",
                self.icon(Icon::Success),
                name,
                self.icon(Icon::Arrow),
                show(model_file)
            ),
            ScaffoldEvent::ProjectExists { name, model_file } => format!(
                "{} A project named '{}' already exists\n  {} {}",
                self.icon(Icon::Skip),
                name,
                self.icon(Icon::Arrow),
                show(model_file)
            ),
            ScaffoldEvent::BundleReset { path } => format!(
                "  {} Discarded previous bundle {}",
                self.icon(Icon::Arrow),
                show(path)
            ),
            ScaffoldEvent::ArtifactMoved { from, .. } => format!(
                "  {} {}",
                self.icon(Icon::Arrow),
                from.file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| show(from))
            ),
            ScaffoldEvent::ArtifactsPackaged {
                project_dir,
                moved_count,
                ..
            } => format!(
                "{} Packaged {} file(s) of '{}' into '__compile__'",
                self.icon(Icon::Package),
                moved_count,
                show(project_dir)
            ),
            ScaffoldEvent::CompileStarted { model_file } => format!(
                "{} Compiling {}",
                self.icon(Icon::Build),
                show(model_file)
            ),
            ScaffoldEvent::CompileFinished { model_file } => format!(
                "{} Compiled {}",
                self.icon(Icon::Success),
                show(model_file)
            ),
            ScaffoldEvent::TemplateInstalled { path } => format!(
                "{} Template installed at {}",
                self.icon(Icon::Success),
                show(path)
            ),
        };
        Some(line)
    }
}

impl ScaffoldEventSink for TextEventSink {
    fn on_event(&self, event: ScaffoldEvent) {
        if let Some(line) = self.render(&event) {
            println!("{line}");
        }
    }

    fn wants_detailed_events(&self) -> bool {
        self.ui.verbose > 0
    }
}

/// NDJSON event stream for scripts and CI
pub struct JsonEventSink {
    command: &'static str,
}

impl JsonEventSink {
    pub fn new(command: &'static str) -> Self {
        Self { command }
    }
}

impl ScaffoldEventSink for JsonEventSink {
    fn on_event(&self, event: ScaffoldEvent) {
        let _ = crate::ui::json::emit(crate::ui::json::scaffold_event(self.command, &event));
    }
}

/// Sink chosen from the UI context
pub enum ConsoleSink {
    Text(TextEventSink),
    Json(JsonEventSink),
}

impl ConsoleSink {
    pub fn for_command(ui: UiContext, command: &'static str) -> Self {
        if ui.json {
            ConsoleSink::Json(JsonEventSink::new(command))
        } else {
            ConsoleSink::Text(TextEventSink::new(ui))
        }
    }
}

impl ScaffoldEventSink for ConsoleSink {
    fn on_event(&self, event: ScaffoldEvent) {
        match self {
            ConsoleSink::Text(sink) => sink.on_event(event),
            ConsoleSink::Json(sink) => sink.on_event(event),
        }
    }

    fn wants_detailed_events(&self) -> bool {
        match self {
            ConsoleSink::Text(sink) => sink.wants_detailed_events(),
            ConsoleSink::Json(sink) => sink.wants_detailed_events(),
        }
    }
}

fn show(path: &Path) -> String {
    path.display().to_string()
}
