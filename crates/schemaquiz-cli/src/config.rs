//! CLI configuration loading.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Top-level schemaquiz configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchemaquizConfig {
    /// Custom question set to use instead of the built-in one.
    #[serde(default)]
    pub question_set: Option<PathBuf>,
    /// Pause before the results panel appears once every question is answered.
    #[serde(default = "default_reveal_delay")]
    pub reveal_delay_ms: u64,
    /// Where saved reports go.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    /// Report format written after a quiz: none, json, html, markdown, all.
    #[serde(default = "default_format")]
    pub default_format: String,
}

fn default_reveal_delay() -> u64 {
    100
}
fn default_output_dir() -> PathBuf {
    PathBuf::from("./schemaquiz-results")
}
fn default_format() -> String {
    "none".to_string()
}

impl Default for SchemaquizConfig {
    fn default() -> Self {
        Self {
            question_set: None,
            reveal_delay_ms: default_reveal_delay(),
            output_dir: default_output_dir(),
            default_format: default_format(),
        }
    }
}

/// Resolve environment variable references like `${VAR_NAME}` in a string.
///
/// Single pass: substituted values are copied as-is, never re-expanded.
/// Unset variables expand to the empty string; an unterminated `${` is kept.
fn resolve_env_vars(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(start) = rest.find("${") {
        let Some(len) = rest[start + 2..].find('}') else {
            break;
        };
        let var_name = &rest[start + 2..start + 2 + len];
        result.push_str(&rest[..start]);
        result.push_str(&std::env::var(var_name).unwrap_or_default());
        rest = &rest[start + 2 + len + 1..];
    }
    result.push_str(rest);
    result
}

fn resolve_path(path: &Path) -> PathBuf {
    PathBuf::from(resolve_env_vars(&path.to_string_lossy()))
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order:
/// 1. `schemaquiz.toml` in the current directory
/// 2. `~/.config/schemaquiz/config.toml`
///
/// `SCHEMAQUIZ_QUESTION_SET` overrides the configured question set.
pub fn load_config_from(path: Option<&Path>) -> Result<SchemaquizConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("schemaquiz.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => {
            tracing::debug!("loading config from {}", path.display());
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            toml::from_str::<SchemaquizConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => SchemaquizConfig::default(),
    };

    if let Ok(set) = std::env::var("SCHEMAQUIZ_QUESTION_SET") {
        if !set.is_empty() {
            config.question_set = Some(PathBuf::from(set));
        }
    }

    config.question_set = config.question_set.as_deref().map(resolve_path);
    config.output_dir = resolve_path(&config.output_dir);

    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("schemaquiz"))
}
