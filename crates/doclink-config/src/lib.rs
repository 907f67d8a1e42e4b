//! Layered configuration for doclink: built-in defaults, an optional
//! `doclink.toml`/`doclink.json`, and `DOCLINK_*` environment variables.

pub mod config;
pub mod discovery;
pub mod error;
pub mod settings;
pub mod validation;

pub use config::*;
pub use error::*;
pub use settings::*;

pub use discovery::{CONFIG_FILE_NAMES, ConfigDiscovery, ENV_PREFIX, discover};
pub use validation::{ConfigValidator, FsValidator, SchemaValidator, validate_fs, validate_schema};
