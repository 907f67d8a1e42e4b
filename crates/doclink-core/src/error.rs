use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for documentation operations.
pub type Result<T> = std::result::Result<T, DocsError>;

/// Error variants for loading documentation and answering queries over it.
#[derive(Debug, Error)]
pub enum DocsError {
    /// Failed to read a documentation file from disk.
    #[error("failed to read documentation '{path}': {error}")]
    Io {
        /// Path to the file that caused the error.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        error: std::io::Error,
    },

    /// Failed to read documentation from a stream.
    #[error("failed to read documentation: {error}")]
    Read {
        /// Underlying I/O error.
        #[source]
        error: std::io::Error,
    },

    /// The document is not valid JSON or does not match the node schema
    /// (unknown `kind` tag, missing definition payload, wrong field type).
    #[error("malformed documentation: {message}")]
    Parse {
        /// Deserializer message, including line and column.
        message: String,
    },

    /// A node deserialized but violates a structural rule of the model.
    #[error("invalid node '{path}': {details}")]
    InvalidNode {
        /// Qualified name (or position) of the offending node.
        path: String,
        /// What is wrong with it.
        details: String,
    },

    /// A class query was issued for a node that is not a class.
    #[error("'{name}' is not a class")]
    NotAClass {
        /// Qualified name of the node.
        name: String,
    },

    /// Walking an `extends` chain returned to a class already on the chain.
    #[error("cyclic extends: {}", chain.join(" -> "))]
    CyclicExtends {
        /// Qualified class names in visit order, ending with the repeated class.
        chain: Vec<String>,
    },

    /// Generic error variant.
    #[error("{message}")]
    Other {
        /// Human-readable error message.
        message: String,
    },
}

impl DocsError {
    /// Wraps a serde error raised while decoding a document.
    pub fn parse_error(error: serde_json::Error) -> Self {
        Self::Parse {
            message: error.to_string(),
        }
    }

    pub(crate) fn invalid_node(path: impl Into<String>, details: impl Into<String>) -> Self {
        Self::InvalidNode {
            path: path.into(),
            details: details.into(),
        }
    }
}
