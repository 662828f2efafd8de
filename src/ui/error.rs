use bfg::BfgError;

use crate::ui::icon::Icon;

/// Suggested fix for errors the user can act on
fn fix_hint(err: &BfgError) -> Option<String> {
    match err {
        BfgError::MissingTemplate { .. } => Some(
            "Fix the configured template path, or run `bfg init` to install the bundled template."
                .to_string(),
        ),
        BfgError::NotAModelFile { .. } => {
            Some("Pass the model file itself, e.g. `models/<name>/<name>.stan`.".to_string())
        }
        BfgError::TemplateExists { .. } => Some("Use `bfg init --force` to overwrite it.".to_string()),
        BfgError::CompilerNotConfigured => Some(
            "Pass --cmdstan <DIR>, set CMDSTAN, or add `[compiler] cmdstan = ...` to bfg.toml."
                .to_string(),
        ),
        BfgError::CompilerNotFound { .. } => {
            Some("Check that the CmdStan directory exists and has been built.".to_string())
        }
        BfgError::InvalidConfig { file, .. } => {
            Some(format!("Fix the TOML syntax in {} and try again.", file.display()))
        }
        _ => None,
    }
}

pub fn format_error(err: &anyhow::Error, supports_color: bool, supports_unicode: bool) -> String {
    let icon = Icon::Error.colored(supports_color, supports_unicode);
    let mut out = format!("{} {}\n", icon, err);

    for cause in err.chain().skip(1) {
        out.push_str(&format!("  caused by: {}\n", cause));
    }

    let bfg_err = err.chain().find_map(|e| e.downcast_ref::<BfgError>());
    if let Some(fix) = bfg_err.and_then(fix_hint) {
        out.push_str(&format!("  FIX: {}\n", fix));
    }

    out
}

pub fn print_error(err: &anyhow::Error, json: bool) {
    if json {
        let kind = err
            .chain()
            .find_map(|e| e.downcast_ref::<BfgError>())
            .map(error_kind)
            .unwrap_or("error");
        let output = serde_json::json!({
            "event": "error",
            "kind": kind,
            "message": format!("{:#}", err),
        });
        let _ = crate::ui::json::emit(output);
        return;
    }

    let caps = crate::ui::terminal::detect_capabilities();
    eprint!(
        "{}",
        format_error(err, caps.supports_color && !caps.is_ci, caps.supports_unicode)
    );
}

fn error_kind(err: &BfgError) -> &'static str {
    match err {
        BfgError::InvalidProjectName { .. } => "invalid_project_name",
        BfgError::MissingTemplate { .. } => "missing_template",
        BfgError::TemplateExists { .. } => "template_exists",
        BfgError::NotAModelFile { .. } => "not_a_model_file",
        BfgError::InvalidConfig { .. } => "invalid_config",
        BfgError::CompilerNotConfigured => "compiler_not_configured",
        BfgError::CompilerNotFound { .. } => "compiler_not_found",
        BfgError::CompileFailed { .. } => "compile_failed",
        BfgError::Io(_) => "io",
    }
}
