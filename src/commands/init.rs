//! Init command - install the bundled template into the tool root

use anyhow::{Context, Result};

use super::CommandContext;
use crate::ui::icon::Icon;

pub fn cmd_init(ctx: &CommandContext, force: bool) -> Result<()> {
    let scaffolder = ctx.scaffolder(ctx.layout(None), "init");

    let path = scaffolder
        .install_template(force)
        .context("Failed to install template")?;

    if ctx.ui.json {
        let _ = crate::ui::json::emit(serde_json::json!({
            "event": "complete",
            "command": "init",
            "path": path.display().to_string(),
        }));
    } else {
        println!();
        println!(
            "{} Next: run `bfg new <name>` to create a project",
            ctx.icon(Icon::Arrow)
        );
    }

    Ok(())
}
