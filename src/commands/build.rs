//! Build command - create, compile with CmdStan, package
//!
//! The compiler is resolved before anything touches the disk, so a missing
//! CmdStan setup fails without creating a half-finished project.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use bfg::{CmdStanCompiler, ModelCompiler};

use super::CommandContext;

pub fn cmd_build(
    ctx: &CommandContext,
    name: &str,
    models_dir: Option<&Path>,
    no_compile: bool,
    cmdstan: Option<PathBuf>,
) -> Result<()> {
    let compiler = if no_compile {
        None
    } else {
        let settings = &ctx.loaded.config.compiler;
        let dir = cmdstan.or_else(|| settings.cmdstan.clone());
        Some(CmdStanCompiler::from_config(
            dir.as_deref(),
            settings.make.as_deref(),
        )?)
    };

    let scaffolder = ctx.scaffolder(ctx.layout(models_dir), "build");
    let report = scaffolder
        .build(name, compiler.as_ref().map(|c| c as &dyn ModelCompiler))
        .with_context(|| format!("Failed to build project '{}'", name))?;

    if ctx.ui.json {
        let _ = crate::ui::json::emit(serde_json::json!({
            "event": "complete",
            "command": "build",
            "name": report.created.project.name().as_str(),
            "status": report.created.status.as_str(),
            "compiled": report.compiled,
            "model_file": report.created.project.model_file().display().to_string(),
            "bundle_dir": report.package.bundle_dir.display().to_string(),
            "moved": report.package.moved,
        }));
    }

    Ok(())
}
