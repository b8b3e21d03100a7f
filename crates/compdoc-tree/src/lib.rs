//! Reconciliation of field schemas with example configuration documents.
//!
//! The [`FieldSpec`](compdoc_schema::FieldSpec) tree and the example document
//! (a [`serde_yaml::Value`]) are two independent trees describing the same
//! configuration. They are linked only by name and dotted path:
//!
//! - [`sanitize`] prunes a document down to the fields a filter accepts.
//! - [`sort_node`] reorders mapping keys into schema declaration order.
//! - [`flatten`] turns the schema into addressable dotted paths such as
//!   `retry_until.backoff[].max_interval`.
//! - [`lookup`] addresses into a document with such a path.
//! - [`resolve_fields`] pairs each path with its default value and display type.

mod error;
mod flatten;
mod path;
mod resolve;
mod sanitize;
mod sort;

pub use error::{NodeKind, TreeError};
pub use flatten::{FlatField, flatten};
pub use path::{ARRAY_SUFFIX, MAP_KEY, lookup};
pub use resolve::{ResolvedField, infer_type, resolve_field, resolve_fields};
pub use sanitize::{common_view, full_view, sanitize};
pub use sort::sort_node;
