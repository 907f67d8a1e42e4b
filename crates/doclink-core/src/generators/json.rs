use chrono::Utc;
use serde::Serialize;

use crate::{
    error::{DocsError, Result},
    group::GroupedNodes,
};

/// Pretty-printed JSON index of grouped nodes including metadata.
pub fn render_json(grouped: &GroupedNodes) -> Result<String> {
    let payload = JsonPayload {
        version: env!("CARGO_PKG_VERSION"),
        generated_at: Utc::now().to_rfc3339(),
        nodes: grouped,
    };

    serde_json::to_string_pretty(&payload).map_err(|error| DocsError::Other {
        message: error.to_string(),
    })
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonPayload<'a> {
    version: &'static str,
    generated_at: String,
    nodes: &'a GroupedNodes,
}
