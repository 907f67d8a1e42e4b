//! Pluggable config validation strategies
//!
//! Separates filesystem validation (for CLI use) from schema validation (for library use).

use std::path::{Path, PathBuf};

use crate::config::DoclinkConfig;
use crate::error::{ConfigError, Result};

/// Trait for pluggable config validation strategies
pub trait ConfigValidator {
    fn validate(&self, config: &DoclinkConfig) -> Result<()>;
}

/// Schema-only validation (no filesystem checks)
///
/// # Example
///
/// ```
/// use doclink_config::{ConfigValidator, DoclinkConfig, SchemaValidator};
///
/// SchemaValidator.validate(&DoclinkConfig::default()).unwrap();
/// ```
pub struct SchemaValidator;

impl ConfigValidator for SchemaValidator {
    fn validate(&self, config: &DoclinkConfig) -> Result<()> {
        let base = config.builtin_href_base.as_str();
        if !(base.starts_with('/') || base.starts_with("http")) {
            return Err(ConfigError::SchemaValidation {
                message: format!("builtin_href_base '{base}' is neither absolute nor a URL"),
                hint: Some("Use a path such as /builtin/stable or an http(s) URL".to_string()),
            });
        }

        // Sorted so the first reported problem is stable.
        let mut links: Vec<_> = config.external_links.iter().collect();
        links.sort();
        for (name, url) in links {
            if name.trim().is_empty() {
                return Err(ConfigError::SchemaValidation {
                    message: "external_links names cannot be empty".to_string(),
                    hint: Some("Remove the entry with an empty key".to_string()),
                });
            }
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(ConfigError::SchemaValidation {
                    message: format!("external link for '{name}' is not an http(s) URL: {url}"),
                    hint: Some("External links must start with http:// or https://".to_string()),
                });
            }
        }

        Ok(())
    }
}

/// Filesystem validator (for CLI use)
///
/// Runs schema validation, then checks that the builtin symbol table exists.
pub struct FsValidator {
    root: PathBuf,
}

impl FsValidator {
    /// Create a new filesystem validator; relative paths are resolved against `root`.
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }
}

impl ConfigValidator for FsValidator {
    fn validate(&self, config: &DoclinkConfig) -> Result<()> {
        SchemaValidator.validate(config)?;

        if let Some(path) = config.builtins_path(&self.root) {
            if !path.is_file() {
                return Err(ConfigError::BuiltinsNotFound { path });
            }
        }

        Ok(())
    }
}

/// Convenience function for schema-only validation
pub fn validate_schema(config: &DoclinkConfig) -> Result<()> {
    SchemaValidator.validate(config)
}

/// Convenience function for filesystem validation
pub fn validate_fs(config: &DoclinkConfig, root: impl AsRef<Path>) -> Result<()> {
    FsValidator::new(root).validate(config)
}
