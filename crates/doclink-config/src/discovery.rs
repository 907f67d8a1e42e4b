//! File-based config discovery and layering
//!
//! Finds a doclink config file and merges it between the built-in defaults
//! and `DOCLINK_*` environment variables.

use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Env, Format as _, Json, Serialized, Toml},
};
use tracing::debug;

use crate::config::DoclinkConfig;
use crate::error::{ConfigError, Result};

/// Config file names, in lookup order.
pub const CONFIG_FILE_NAMES: [&str; 2] = ["doclink.toml", "doclink.json"];

/// Environment variable prefix; `__` separates nested keys.
pub const ENV_PREFIX: &str = "DOCLINK_";

/// File-based configuration discovery
///
/// # Example
///
/// ```no_run
/// use doclink_config::ConfigDiscovery;
///
/// let discovery = ConfigDiscovery::new(".");
/// let config = discovery.load(None).unwrap();
/// ```
pub struct ConfigDiscovery {
    root: PathBuf,
}

impl ConfigDiscovery {
    /// Create a new config discovery with a root directory
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Find a config file in the root directory
    ///
    /// `doclink.toml` takes precedence over `doclink.json`.
    pub fn find(&self) -> Option<PathBuf> {
        CONFIG_FILE_NAMES
            .iter()
            .map(|name| self.root.join(name))
            .find(|path| path.is_file())
    }

    /// Layered sources: defaults < config file < environment.
    ///
    /// An `explicit` path must exist; otherwise the discovered file, if any,
    /// is used.
    pub fn figment(&self, explicit: Option<&Path>) -> Result<Figment> {
        let mut figment = Figment::new().merge(Serialized::defaults(DoclinkConfig::default()));

        let file = match explicit {
            Some(path) if !path.is_file() => return Err(ConfigError::NotFound(path.to_path_buf())),
            Some(path) => Some(path.to_path_buf()),
            None => self.find(),
        };

        if let Some(path) = file {
            debug!(path = %path.display(), "using config file");
            figment = match path.extension().and_then(|ext| ext.to_str()) {
                Some("toml") => figment.merge(Toml::file(&path)),
                Some("json") => figment.merge(Json::file(&path)),
                _ => {
                    return Err(ConfigError::UnsupportedFormat(
                        path.display().to_string(),
                    ));
                }
            };
        }

        let env = Env::prefixed(ENV_PREFIX)
            .lowercase(false)
            .map(|key| env_key(key.as_str()).into())
            .split("__");
        Ok(figment.merge(env))
    }

    /// Load the layered configuration
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` when `explicit` does not exist, and
    /// `ConfigError::InvalidValue` when a layer does not deserialize.
    pub fn load(&self, explicit: Option<&Path>) -> Result<DoclinkConfig> {
        self.figment(explicit)?.extract().map_err(|e| {
            let field = if e.path.is_empty() {
                "configuration".to_string()
            } else {
                e.path.join(".")
            };
            ConfigError::InvalidValue {
                field,
                hint: Some(e.to_string()),
            }
        })
    }

    /// Directory relative config paths are resolved against.
    pub fn base_dir(&self, explicit: Option<&Path>) -> PathBuf {
        explicit
            .and_then(Path::parent)
            .filter(|parent| !parent.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| self.root.clone())
    }
}

/// Lowercases an environment key except for `external_links` entry names,
/// which are identifiers and stay as written.
fn env_key(key: &str) -> String {
    match key.split_once("__") {
        Some((field, entry)) if field.eq_ignore_ascii_case("external_links") => {
            format!("external_links__{entry}")
        }
        _ => key.to_ascii_lowercase(),
    }
}

/// Discover and load config from the current directory (convenience function)
pub fn discover() -> Result<DoclinkConfig> {
    let root = std::env::current_dir()?;
    ConfigDiscovery::new(&root).load(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn find_returns_none_when_no_config() {
        let dir = TempDir::new().unwrap();
        let discovery = ConfigDiscovery::new(dir.path());
        assert!(discovery.find().is_none());
    }

    #[test]
    fn toml_wins_over_json() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("doclink.json"), "{}").unwrap();
        fs::write(dir.path().join("doclink.toml"), "").unwrap();

        let found = ConfigDiscovery::new(dir.path()).find().unwrap();
        assert_eq!(found.file_name().unwrap(), "doclink.toml");
    }

    #[test]
    fn explicit_missing_path_is_not_found() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope.toml");
        let result = ConfigDiscovery::new(dir.path()).load(Some(&missing));
        assert!(matches!(result, Err(ConfigError::NotFound(path)) if path == missing));
    }

    #[test]
    fn unknown_extension_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("doclink.yaml");
        fs::write(&path, "include_private: true").unwrap();
        let result = ConfigDiscovery::new(dir.path()).load(Some(&path));
        assert!(matches!(result, Err(ConfigError::UnsupportedFormat(_))));
    }

    #[test]
    fn env_keys_keep_link_names() {
        assert_eq!(env_key("INCLUDE_PRIVATE"), "include_private");
        assert_eq!(env_key("SETTINGS__LOG_LEVEL"), "settings__log_level");
        assert_eq!(env_key("EXTERNAL_LINKS__Deno"), "external_links__Deno");
        assert_eq!(env_key("external_links__URLSearchParams"), "external_links__URLSearchParams");
    }

    #[test]
    fn base_dir_follows_explicit_config() {
        let discovery = ConfigDiscovery::new("/work");
        assert_eq!(
            discovery.base_dir(Some(Path::new("/etc/doclink/doclink.toml"))),
            PathBuf::from("/etc/doclink")
        );
        assert_eq!(
            discovery.base_dir(Some(Path::new("doclink.toml"))),
            PathBuf::from("/work")
        );
        assert_eq!(discovery.base_dir(None), PathBuf::from("/work"));
    }
}
