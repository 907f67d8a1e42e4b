//! Error types for configuration validation and loading.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    // Config parsing/loading errors
    #[error("config file not found: {0}")]
    NotFound(PathBuf),

    #[error("unsupported configuration format: {0}")]
    UnsupportedFormat(String),

    #[error("invalid config value for '{field}'{}", hint.as_ref().map(|h| format!(": {h}")).unwrap_or_default())]
    InvalidValue { field: String, hint: Option<String> },

    // Schema validation errors (no filesystem checks)
    #[error("schema validation failed: {message}")]
    SchemaValidation {
        message: String,
        hint: Option<String>,
    },

    // Filesystem validation errors (for CLI use)
    #[error("builtin symbol table not found: {}", path.display())]
    BuiltinsNotFound { path: PathBuf },

    // I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ConfigError {
    /// Suggested fix to show next to the error, when there is one.
    pub fn hint(&self) -> Option<&str> {
        match self {
            ConfigError::InvalidValue { hint, .. } | ConfigError::SchemaValidation { hint, .. } => {
                hint.as_deref()
            }
            ConfigError::NotFound(_) => Some("Pass an existing file to --config"),
            ConfigError::UnsupportedFormat(_) => Some("Use a .toml or .json config file"),
            ConfigError::BuiltinsNotFound { .. } => {
                Some("Point `builtins` at a doc JSON file, relative to the config file")
            }
            ConfigError::Io(_) => None,
        }
    }
}
