//! Top-level configuration structure for doclink.
//!
//! For file discovery and layering, see the `discovery` module.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ConfigError, Result as ConfigResult};
use crate::settings::GlobalSettings;

pub const DEFAULT_BUILTIN_HREF_BASE: &str = "/builtin/stable";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DoclinkConfig {
    /// Doc JSON of the runtime's own declarations, the second resolution tier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub builtins: Option<PathBuf>,

    #[serde(default = "default_builtin_href_base")]
    pub builtin_href_base: String,

    /// Extra identifier to URL entries, consulted before the MDN table.
    #[serde(default)]
    pub external_links: HashMap<String, String>,

    /// Keep `private` class members in member listings.
    #[serde(default)]
    pub include_private: bool,

    #[serde(default)]
    pub settings: GlobalSettings,
}

fn default_builtin_href_base() -> String {
    DEFAULT_BUILTIN_HREF_BASE.to_string()
}

impl Default for DoclinkConfig {
    fn default() -> Self {
        Self {
            builtins: None,
            builtin_href_base: default_builtin_href_base(),
            external_links: HashMap::new(),
            include_private: false,
            settings: GlobalSettings::default(),
        }
    }
}

impl DoclinkConfig {
    /// Create from serde_json::Value (for programmatic config)
    ///
    /// # Example
    ///
    /// ```
    /// use doclink_config::DoclinkConfig;
    /// use serde_json::json;
    ///
    /// let config = DoclinkConfig::from_value(json!({ "include_private": true })).unwrap();
    /// assert!(config.include_private);
    /// assert_eq!(config.builtin_href_base, "/builtin/stable");
    /// ```
    pub fn from_value(value: Value) -> ConfigResult<Self> {
        serde_json::from_value(value).map_err(|e| ConfigError::InvalidValue {
            field: "config".to_string(),
            hint: Some(e.to_string()),
        })
    }

    /// Convert to serde_json::Value
    pub fn to_value(&self) -> ConfigResult<Value> {
        serde_json::to_value(self).map_err(|e| ConfigError::InvalidValue {
            field: "config".to_string(),
            hint: Some(e.to_string()),
        })
    }

    /// `builtins` resolved against `root` when it is relative.
    pub fn builtins_path(&self, root: &Path) -> Option<PathBuf> {
        self.builtins.as_ref().map(|path| {
            if path.is_absolute() {
                path.clone()
            } else {
                root.join(path)
            }
        })
    }
}
