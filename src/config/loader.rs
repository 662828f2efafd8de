//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{BfgError, BfgResult};
use crate::infrastructure::CMDSTAN_ENV;

use super::types::Config;

/// Config file looked up inside the tool root
pub const TOOL_CONFIG_FILE: &str = "bfg.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Fully resolved configuration for one invocation
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub tool_root: PathBuf,
    pub config: Config,
    /// File the config was read from, if any
    pub source: Option<PathBuf>,
    pub warnings: Vec<ConfigWarning>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> BfgResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| BfgError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Resolve tool root and configuration from the process environment
///
/// Priority:
/// 1. `cli_root` (the `--root` flag)
/// 2. `BFG_ROOT`
/// 3. `root` in the user config
/// 4. `<data dir>/bfg`
pub fn load(cli_root: Option<&Path>) -> BfgResult<LoadedConfig> {
    let user_config = dirs::config_dir().map(|d| d.join("bfg").join("config.toml"));
    let default_root = dirs::data_dir().map(|d| d.join("bfg"));
    load_from(
        cli_root,
        |key| std::env::var(key).ok(),
        user_config.as_deref(),
        default_root,
    )
}

/// Same as `load` with every external input injected
pub fn load_from(
    cli_root: Option<&Path>,
    get_env: impl Fn(&str) -> Option<String>,
    user_config: Option<&Path>,
    default_root: Option<PathBuf>,
) -> BfgResult<LoadedConfig> {
    let mut warnings = Vec::new();

    let user = match user_config.filter(|p| p.is_file()) {
        Some(path) => {
            let (config, w) = load_with_warnings(path)?;
            warnings.extend(w);
            Some((config, path.to_path_buf()))
        }
        None => None,
    };

    let tool_root = cli_root
        .map(Path::to_path_buf)
        .or_else(|| get_env("BFG_ROOT").map(PathBuf::from))
        .or_else(|| user.as_ref().and_then(|(c, _)| c.root.clone()))
        .or(default_root)
        .unwrap_or_else(|| PathBuf::from("."));

    let tool_config = tool_root.join(TOOL_CONFIG_FILE);
    let (config, source) = if tool_config.is_file() {
        let (config, w) = load_with_warnings(&tool_config)?;
        warnings.extend(w);
        (config, Some(tool_config))
    } else if let Some((config, path)) = user {
        (config, Some(path))
    } else {
        (Config::default(), None)
    };

    Ok(LoadedConfig {
        tool_root,
        config: with_env_overrides(config, get_env),
        source,
        warnings,
    })
}

/// Apply environment variable overrides
pub fn with_env_overrides(mut config: Config, get_env: impl Fn(&str) -> Option<String>) -> Config {
    if let Some(dir) = get_env("BFG_MODELS_DIR") {
        config.layout.models_dir = PathBuf::from(dir);
    }

    if let Some(template) = get_env("BFG_TEMPLATE") {
        config.layout.template = Some(PathBuf::from(template));
    }

    if let Some(ext) = get_env("BFG_EXTENSION") {
        config.layout.extension = ext;
    }

    if let Some(cmdstan) = get_env(CMDSTAN_ENV).filter(|v| !v.is_empty()) {
        config.compiler.cmdstan = Some(PathBuf::from(cmdstan));
    }

    if let Some(make) = get_env("BFG_MAKE") {
        config.compiler.make = Some(make);
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "root",
        "layout",
        "models_dir",
        "template",
        "extension",
        "compiler",
        "cmdstan",
        "make",
        "output",
        "color",
        "unicode",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
