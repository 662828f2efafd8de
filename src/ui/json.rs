use std::io::{self, Write};
use std::path::Path;

use bfg::ScaffoldEvent;

/// Write a single NDJSON event (one JSON object per line).
pub fn write_event(out: &mut impl Write, event: &serde_json::Value) -> io::Result<()> {
    let line = serde_json::to_string(event).unwrap_or_else(|_| "{}".to_string());
    out.write_all(line.as_bytes())?;
    out.write_all(b"\n")?;
    Ok(())
}

/// Convenience helper that writes to stdout.
pub fn emit(event: serde_json::Value) -> io::Result<()> {
    let mut out = io::stdout().lock();
    write_event(&mut out, &event)
}

fn path(p: &Path) -> String {
    p.display().to_string()
}

/// JSON shape of a scaffold event
pub fn scaffold_event(command: &str, event: &ScaffoldEvent) -> serde_json::Value {
    use serde_json::json;

    match event {
        ScaffoldEvent::RootCreated { path: p } => json!({
            "event": "root_created",
            "command": command,
            "path": path(p),
        }),
        ScaffoldEvent::ProjectCreated {
            name,
            project_dir,
            model_file,
        } => json!({
            "event": "project_created",
            "command": command,
            "name": name,
            "project_dir": path(project_dir),
            "model_file": path(model_file),
        }),
        ScaffoldEvent::ProjectExists { name, model_file } => json!({
            "event": "project_exists",
            "command": command,
            "name": name,
            "model_file": path(model_file),
        }),
        ScaffoldEvent::BundleReset { path: p } => json!({
            "event": "bundle_reset",
            "command": command,
            "path": path(p),
        }),
        ScaffoldEvent::ArtifactMoved { from, to } => json!({
            "event": "artifact_moved",
            "command": command,
            "from": path(from),
            "to": path(to),
        }),
        ScaffoldEvent::ArtifactsPackaged {
            project_dir,
            bundle_dir,
            moved_count,
        } => json!({
            "event": "artifacts_packaged",
            "command": command,
            "project_dir": path(project_dir),
            "bundle_dir": path(bundle_dir),
            "moved_count": moved_count,
        }),
        ScaffoldEvent::CompileStarted { model_file } => json!({
            "event": "compile_started",
            "command": command,
            "model_file": path(model_file),
        }),
        ScaffoldEvent::CompileFinished { model_file } => json!({
            "event": "compile_finished",
            "command": command,
            "model_file": path(model_file),
        }),
        ScaffoldEvent::TemplateInstalled { path: p } => json!({
            "event": "template_installed",
            "command": command,
            "path": path(p),
        }),
    }
}
