//! Global settings that are not about resolution itself.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GlobalSettings {
    /// Default tracing filter when neither `RUST_LOG` nor a verbosity flag is set.
    #[serde(default)]
    pub log_level: Option<String>,
}
