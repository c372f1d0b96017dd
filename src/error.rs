use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading the book catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read catalog {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Catalog is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Duplicate book id: {0}")]
    DuplicateId(String),

    #[error("Name for {table} id {id} is not a string")]
    InvalidName { table: &'static str, id: String },
}

/// Errors raised while loading the configuration file.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config file not found: {0}")]
    NotFound(PathBuf),

    #[error("Failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Config is not valid TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid config value for `{key}`: {reason}")]
    Invalid { key: &'static str, reason: String },
}

/// Top-level error for startup failures.
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Logging setup failed: {0}")]
    Logging(String),

    #[error("Terminal error: {0}")]
    Io(#[from] std::io::Error),
}

impl CatalogError {
    pub fn user_message(&self) -> String {
        match self {
            CatalogError::Read { path, source } => {
                format!("Could not open catalog file {}: {}", path.display(), source)
            }
            CatalogError::Parse(e) => format!("Catalog file is malformed: {}", e),
            CatalogError::DuplicateId(id) => {
                format!("Catalog lists the book id '{}' more than once", id)
            }
            CatalogError::InvalidName { table, id } => {
                format!("Catalog {} entry '{}' must map to a name string", table, id)
            }
        }
    }
}

impl ConfigError {
    pub fn user_message(&self) -> String {
        match self {
            ConfigError::NotFound(path) => {
                format!("Config file {} does not exist", path.display())
            }
            ConfigError::Read { path, source } => {
                format!("Could not read config file {}: {}", path.display(), source)
            }
            ConfigError::Parse(e) => format!("Config file is malformed: {}", e),
            ConfigError::Invalid { key, reason } => {
                format!("Config option '{}' is invalid: {}", key, reason)
            }
        }
    }
}

impl AppError {
    /// Get a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            AppError::Catalog(e) => e.user_message(),
            AppError::Config(e) => e.user_message(),
            AppError::Logging(msg) => format!("Could not set up logging: {}", msg),
            AppError::Io(e) => format!("Terminal error: {}", e),
        }
    }

    /// Get recovery instructions if applicable
    pub fn recovery_instructions(&self) -> Option<String> {
        match self {
            AppError::Catalog(CatalogError::Read { .. }) => {
                Some("Check the --catalog path or the `catalog` key in config.toml".to_string())
            }
            AppError::Config(ConfigError::Parse(_) | ConfigError::Invalid { .. }) => {
                Some("Fix or remove config.toml to fall back to defaults".to_string())
            }
            _ => None,
        }
    }
}
