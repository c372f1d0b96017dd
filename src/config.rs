use crate::error::ConfigError;
use crate::pager::PAGE_SIZE;
use crate::theme::Theme;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// User configuration, read from `config.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Catalog JSON file; the bundled sample catalog is used when unset.
    pub catalog: Option<PathBuf>,
    pub page_size: usize,
    /// Startup theme; detected from the terminal when unset.
    pub theme: Option<Theme>,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog: None,
            page_size: PAGE_SIZE,
            theme: None,
            log_level: "info".to_string(),
        }
    }
}

pub fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "book-explorer", "book-explorer")
}

/// `<config dir>/config.toml`, if the platform has a home directory.
pub fn default_config_path() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().join("config.toml"))
}

impl Config {
    /// Load configuration.
    ///
    /// An explicit path must exist; the default location is optional and
    /// falls back to `Config::default()` when absent.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        Self::load_from(explicit, default_config_path())
    }

    fn load_from(explicit: Option<&Path>, default: Option<PathBuf>) -> Result<Self, ConfigError> {
        let path = match explicit {
            Some(p) if !p.exists() => return Err(ConfigError::NotFound(p.to_path_buf())),
            Some(p) => p.to_path_buf(),
            None => match default {
                Some(p) if p.exists() => p,
                _ => {
                    tracing::debug!("no config file, using defaults");
                    return Ok(Self::default());
                }
            },
        };
        Self::from_file(&path)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&text)
    }

    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.page_size == 0 {
            return Err(ConfigError::Invalid {
                key: "page_size",
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}
