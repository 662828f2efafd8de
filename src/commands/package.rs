//! Package command - sweep compiler output into __compile__/

use std::path::Path;

use anyhow::{Context, Result};

use super::CommandContext;

pub fn cmd_package(ctx: &CommandContext, model: &Path) -> Result<()> {
    let scaffolder = ctx.scaffolder(ctx.layout(None), "package");

    let report = scaffolder
        .package_artifacts(model)
        .with_context(|| format!("Failed to package artifacts of {}", model.display()))?;

    if ctx.ui.json {
        let _ = crate::ui::json::emit(serde_json::json!({
            "event": "complete",
            "command": "package",
            "bundle_dir": report.bundle_dir.display().to_string(),
            "moved": report.moved,
        }));
    }

    Ok(())
}
