//! Subcommand implementations for the `bfg` binary

pub mod build;
pub mod init;
pub mod new;
pub mod package;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use bfg::config::LoadedConfig;
use bfg::presentation::ColorWhen;
use bfg::{Layout, ProjectScaffolder};

use crate::ui::context::UiContext;
use crate::ui::icon::Icon;
use crate::ui::sinks::ConsoleSink;

/// Flags shared by every subcommand
#[derive(Debug, Clone)]
pub struct GlobalArgs {
    pub root: Option<PathBuf>,
    pub json: bool,
    pub color: Option<ColorWhen>,
    pub verbose: u8,
}

/// Resolved configuration and output settings for one invocation
pub struct CommandContext {
    pub loaded: LoadedConfig,
    pub ui: UiContext,
}

impl CommandContext {
    pub fn load(globals: &GlobalArgs) -> Result<Self> {
        let loaded =
            bfg::config::load(globals.root.as_deref()).context("Failed to load configuration")?;
        let ui = UiContext::new(
            globals.json,
            globals.verbose,
            globals.color,
            &loaded.config.output,
        );

        let ctx = Self { loaded, ui };
        ctx.report_config();
        Ok(ctx)
    }

    /// Layout for this run, with an optional models dir override
    pub fn layout(&self, models_dir: Option<&Path>) -> Layout {
        let layout = self.loaded.config.layout(&self.loaded.tool_root);
        match models_dir {
            Some(dir) => layout.with_models_dir(dir),
            None => layout,
        }
    }

    pub fn scaffolder(&self, layout: Layout, command: &'static str) -> ProjectScaffolder<ConsoleSink> {
        ProjectScaffolder::new(layout).with_events(ConsoleSink::for_command(self.ui, command))
    }

    pub fn icon(&self, icon: Icon) -> String {
        icon.colored(self.ui.color, self.ui.unicode)
    }

    fn report_config(&self) {
        if self.ui.json || self.ui.verbose == 0 {
            return;
        }

        eprintln!("Tool root: {}", self.loaded.tool_root.display());
        if let Some(source) = &self.loaded.source {
            eprintln!("Config: {}", source.display());
        }
        for warning in &self.loaded.warnings {
            let location = match warning.line {
                Some(line) => format!("{}:{}", warning.file.display(), line),
                None => warning.file.display().to_string(),
            };
            let hint = warning
                .suggestion
                .as_ref()
                .map(|s| format!(" (did you mean '{}'?)", s))
                .unwrap_or_default();
            eprintln!(
                "{} Unknown config key '{}' in {}{}",
                self.icon(Icon::Warning),
                warning.key,
                location,
                hint
            );
        }
    }
}
