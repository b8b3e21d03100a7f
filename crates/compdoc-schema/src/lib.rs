//! Field schema and component records for compdoc.
//!
//! A [`Component`] describes one pluggable pipeline component (an input, a
//! processor, a cache, ...). Its configuration shape is a recursive
//! [`FieldSpec`] tree, which the rest of the workspace reconciles against an
//! example configuration document to produce reference documentation.
//!
//! # Example
//!
//! ```
//! use compdoc_schema::{Component, ComponentType, FieldSpec};
//!
//! let component = Component::new("memory", ComponentType::Cache)
//!     .with_summary("Stores key/value pairs in memory.")
//!     .with_config(FieldSpec::object().with_children(vec![
//!         FieldSpec::new("ttl", "The TTL of each item in seconds.").with_default(300),
//!     ]));
//!
//! assert!(component.config.validate().is_ok());
//! ```

mod component;
mod error;
mod field;

pub use component::{AnnotatedExample, Component, ComponentType, Status};
pub use error::SchemaError;
pub use field::{FieldSpec, FieldType};
