//! Configuration loading for commands.

use std::path::{Path, PathBuf};

use doclink_config::{ConfigDiscovery, ConfigValidator, DoclinkConfig, FsValidator};
use doclink_core::{Documentation, ExternalLinks};
use tracing::debug;

use crate::error::{Result, ResultExt};

/// Validated configuration plus the directory its relative paths are based on.
#[derive(Debug, Clone)]
pub struct Context {
    pub config: DoclinkConfig,
    pub base_dir: PathBuf,
}

impl Context {
    /// Load configuration from multiple sources.
    /// Priority: environment variables > config file > defaults
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let cwd = std::env::current_dir()?;
        Self::load_from(&cwd, explicit)
    }

    pub fn load_from(root: &Path, explicit: Option<&Path>) -> Result<Self> {
        let discovery = ConfigDiscovery::new(root);
        let config = discovery.load(explicit)?;
        let base_dir = discovery.base_dir(explicit);
        FsValidator::new(&base_dir).validate(&config)?;
        debug!(base_dir = %base_dir.display(), "configuration loaded");
        Ok(Self { config, base_dir })
    }

    /// Builtin symbol table to use; a command-line path wins over the config.
    pub fn builtins(&self, override_path: Option<&Path>) -> Result<Option<Documentation>> {
        let path = match override_path {
            Some(path) => Some(path.to_path_buf()),
            None => self.config.builtins_path(&self.base_dir),
        };
        path.map(|path| Documentation::from_path(&path).context("Failed to load builtin symbol table"))
            .transpose()
    }

    pub fn external_links(&self) -> ExternalLinks {
        ExternalLinks::new().with_extra(self.config.external_links.clone())
    }
}
