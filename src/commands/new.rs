//! New command - create a project from the template

use std::path::Path;

use anyhow::{Context, Result};

use super::CommandContext;
use crate::ui::icon::Icon;

pub fn cmd_new(ctx: &CommandContext, name: &str, models_dir: Option<&Path>) -> Result<()> {
    let scaffolder = ctx.scaffolder(ctx.layout(models_dir), "new");

    let created = scaffolder
        .create_project(name)
        .with_context(|| format!("Failed to create project '{}'", name))?;

    if ctx.ui.json {
        let _ = crate::ui::json::emit(serde_json::json!({
            "event": "complete",
            "command": "new",
            "name": created.project.name().as_str(),
            "status": created.status.as_str(),
            "project_dir": created.project.project_dir().display().to_string(),
            "model_file": created.project.model_file().display().to_string(),
        }));
    } else if created.was_created() {
        println!();
        println!(
            "{} Next: edit the model, then run `bfg build {}`",
            ctx.icon(Icon::Arrow),
            name
        );
    }

    Ok(())
}
