use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::catalog;

/// Run configuration, optionally loaded from `~/.config/joosfetch/config.toml`.
///
/// Every field falls back to the compiled-in catalog, so an absent or partial
/// file behaves like the built-in defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    /// Prefix of every page URL; categories are appended verbatim.
    pub base_url: String,
    /// Directory receiving the text dumps, relative to the working directory.
    pub output_dir: PathBuf,
    /// Category path segments, fetched in order.
    pub categories: Vec<String>,
    /// Feature page names, fetched in order under every category.
    pub features: Vec<String>,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            base_url: catalog::BASE_URL.to_string(),
            output_dir: PathBuf::from(catalog::OUTPUT_DIR),
            categories: catalog::CATEGORIES.iter().map(|s| s.to_string()).collect(),
            features: catalog::FEATURES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl FetchConfig {
    /// Number of pages a run will attempt.
    pub fn page_count(&self) -> usize {
        self.categories.len() * self.features.len()
    }
}

pub fn config_path() -> Result<PathBuf> {
    Ok(config_path_in(&config_home()?))
}

fn config_home() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("joosfetch")?;
    Ok(xdg_dirs.get_config_home())
}

fn config_path_in(config_home: &Path) -> PathBuf {
    config_home.join("joosfetch").join("config.toml")
}

/// Load configuration from the XDG config path, or defaults if no file exists.
/// Never creates a file.
pub fn load() -> Result<FetchConfig> {
    load_in(&config_home()?)
}

/// Like `load`, with `config_home` standing in for `$XDG_CONFIG_HOME`.
pub fn load_in(config_home: &Path) -> Result<FetchConfig> {
    let path = config_path_in(config_home);
    if !path.exists() {
        tracing::debug!("no config at {}, using built-in defaults", path.display());
        return Ok(FetchConfig::default());
    }
    load_from(&path)
}

/// Load configuration from an explicit path.
pub fn load_from(path: &Path) -> Result<FetchConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let cfg: FetchConfig = toml::from_str(&data)
        .with_context(|| format!("invalid config {}", path.display()))?;
    tracing::info!("loaded config from {}", path.display());
    Ok(cfg)
}
