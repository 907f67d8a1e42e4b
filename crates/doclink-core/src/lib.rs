#![deny(clippy::all)]

//! Documentation node model and cross-reference resolution.
//!
//! This crate provides:
//! - Typed models for the doc generator's JSON: declaration nodes and the
//!   recursive type-expression grammar.
//! - Namespace expansion and flattening, so every node carries its absolute scope.
//! - Canonical ordering and kind grouping for listings.
//! - Scoped name resolution with import, builtin and external fallbacks.
//! - Inherited member collection across class `extends` chains.
//! - A JSON index generator.

pub mod document;
pub mod error;
pub mod external;
pub mod group;
pub mod hierarchy;
pub mod model;
pub mod namespace;
pub mod references;
pub mod resolve;
pub mod types;

#[cfg(feature = "json")]
pub mod generators;

pub use document::Documentation;
pub use error::{DocsError, Result};
pub use external::{ExternalLinks, mdn_url};
pub use group::{GroupedNodes, group, sort_canonical};
pub use hierarchy::{ClassMembers, Member, VisibleMembers, collect_members};
pub use model::{ClassNode, DocNode, DocNodeDef, DocNodeKind, Location, qualify};
pub use namespace::{expand, flatten};
pub use references::{TypeReference, node_references, type_references};
pub use resolve::{LinkResolver, LinkResult, MustBe, resolve_link, resolve_scoped_name};
pub use types::{TsType, TsTypeDef};

#[cfg(feature = "json")]
pub use generators::json::render_json;
