use crate::error::{Error, Result};
use crate::types::ColorMode;
use qshowcase_content::Topic;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Resolve the config file path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. QSHOWCASE_CONFIG environment variable (with tilde expansion)
/// 3. Platform config directory (`dirs::config_dir()`)
pub fn resolve_config_path(explicit_path: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(&path.to_string_lossy()));
    }

    if let Ok(env_path) = std::env::var("QSHOWCASE_CONFIG") {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(config_dir) = dirs::config_dir() {
        return Ok(config_dir.join("qshowcase").join("config.toml"));
    }

    Err(Error::Config(
        "Could not determine config path: no platform config directory found".to_string(),
    ))
}

fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Menu label or slug selected on initial load
    #[serde(default)]
    pub default_topic: Option<String>,
    #[serde(default)]
    pub color: Option<ColorMode>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub display: DisplayConfig,
}

impl Config {
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "config file not found, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Topic selected when no `--topic` is given
    pub fn default_topic(&self) -> Result<Topic> {
        match &self.display.default_topic {
            None => Ok(Topic::default()),
            Some(raw) => raw
                .parse()
                .map_err(|e| Error::Config(format!("display.default_topic: {}", e))),
        }
    }

    pub fn color(&self) -> ColorMode {
        self.display.color.unwrap_or_default()
    }
}
