//! CLI configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use qscore_core::model::CategoryFilter;

/// Top-level qscore configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QscoreConfig {
    /// Output format for `summarize` when `--format` is not given.
    #[serde(default = "default_format")]
    pub default_format: String,
    /// Filter for `list` and `report` when `--filter` is not given.
    #[serde(default)]
    pub default_filter: CategoryFilter,
    /// Directory `report` writes into.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

fn default_format() -> String {
    "text".to_string()
}
fn default_output_dir() -> PathBuf {
    PathBuf::from("./qscore-reports")
}

impl Default for QscoreConfig {
    fn default() -> Self {
        Self {
            default_format: default_format(),
            default_filter: CategoryFilter::All,
            output_dir: default_output_dir(),
        }
    }
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order:
/// 1. `qscore.toml` in the current directory
/// 2. `~/.config/qscore/config.toml`
///
/// Environment variable override: `QSCORE_OUTPUT_DIR`.
pub fn load_config_from(path: Option<&Path>) -> Result<QscoreConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("qscore.toml");
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
            tracing::debug!("using config {}", path.display());
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            toml::from_str::<QscoreConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => QscoreConfig::default(),
    };

    if let Ok(dir) = std::env::var("QSCORE_OUTPUT_DIR") {
        if !dir.is_empty() {
            config.output_dir = PathBuf::from(dir);
        }
    }

    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("qscore"))
}
