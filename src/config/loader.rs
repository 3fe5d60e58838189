//! Configuration file discovery and loading.
//!
//! This module handles finding and loading configuration files from
//! various locations in the correct priority order.

use crate::config::merger::merge_configs;
use crate::config::schema::DepcheckConfig;
use crate::error::{DepcheckError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the per-project configuration directory.
pub const CONFIG_DIR: &str = ".depcheck";

/// Paths to configuration files in priority order (later overrides earlier).
///
/// Merge order:
/// 1. User global config (`~/.depcheck/config.yml`)
/// 2. Project config (`.depcheck/config.yml`)
/// 3. Local overrides (`.depcheck/config.local.yml`)
#[derive(Debug, Clone)]
pub struct ConfigPaths {
    /// User's global config: ~/.depcheck/config.yml
    pub user_global: Option<PathBuf>,

    /// Project config: .depcheck/config.yml
    pub project: Option<PathBuf>,

    /// Local overrides: .depcheck/config.local.yml
    pub project_local: Option<PathBuf>,
}

impl ConfigPaths {
    /// Discover config files for the given project root.
    pub fn discover(project_root: &Path) -> Self {
        Self::discover_with_home(project_root, dirs::home_dir().as_deref())
    }

    /// Discover config files, looking for the user global config under `home`.
    pub fn discover_with_home(project_root: &Path, home: Option<&Path>) -> Self {
        Self {
            user_global: home.and_then(|h| existing(h.join(CONFIG_DIR).join("config.yml"))),
            project: existing(project_root.join(CONFIG_DIR).join("config.yml")),
            project_local: existing(project_root.join(CONFIG_DIR).join("config.local.yml")),
        }
    }

    /// Returns all existing config paths in merge order.
    pub fn all_existing(&self) -> Vec<&PathBuf> {
        [&self.user_global, &self.project, &self.project_local]
            .into_iter()
            .flatten()
            .collect()
    }
}

fn existing(path: PathBuf) -> Option<PathBuf> {
    if path.is_file() {
        Some(path)
    } else {
        None
    }
}

fn read_config(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            DepcheckError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            DepcheckError::Io(e)
        }
    })
}

/// Load a single config file and parse it into [`DepcheckConfig`].
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<DepcheckConfig> {
    let content = read_config(path)?;
    parse_config(&content, path)
}

/// Parse YAML content into [`DepcheckConfig`].
///
/// An empty document yields the default configuration.
pub fn parse_config(content: &str, source_path: &Path) -> Result<DepcheckConfig> {
    if content.trim().is_empty() {
        return Ok(DepcheckConfig::default());
    }
    serde_yaml::from_str(content).map_err(|e| DepcheckError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load a config file as raw YAML Value (for merging).
pub fn load_config_value(path: &Path) -> Result<serde_yaml::Value> {
    let content = read_config(path)?;

    serde_yaml::from_str(&content).map_err(|e| DepcheckError::ConfigParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load and merge all config files for a project.
///
/// Missing files are skipped; with no files at all the built-in defaults
/// are returned.
pub fn load_merged_config(project_root: &Path) -> Result<DepcheckConfig> {
    load_discovered_config(&ConfigPaths::discover(project_root), project_root)
}

/// Load and merge the files found by an explicit [`ConfigPaths`].
pub fn load_discovered_config(
    paths: &ConfigPaths,
    project_root: &Path,
) -> Result<DepcheckConfig> {
    let mut configs = Vec::new();
    for path in paths.all_existing() {
        tracing::debug!("Loading config from {}", path.display());
        let value = load_config_value(path)?;
        if !value.is_null() {
            configs.push(value);
        }
    }

    if configs.is_empty() {
        return Ok(DepcheckConfig::default());
    }

    let merged = merge_configs(&configs);

    serde_yaml::from_value(merged).map_err(|e| DepcheckError::ConfigParseError {
        path: project_root.join(CONFIG_DIR).join("config.yml"),
        message: format!("Failed to parse merged config: {}", e),
    })
}

/// Load config with optional path override.
///
/// If `config_override` is provided, loads only that file without merging.
/// Otherwise, discovers and merges all config files.
pub fn load_config(project_root: &Path, config_override: Option<&Path>) -> Result<DepcheckConfig> {
    if let Some(override_path) = config_override {
        load_config_file(override_path)
    } else {
        load_merged_config(project_root)
    }
}
