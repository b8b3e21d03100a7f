//! Markdown reference pages for pipeline components.
//!
//! [`ComponentRenderer`] takes a [`Component`](compdoc_schema::Component) and
//! an example configuration document and produces a complete page: front
//! matter, common and advanced config snippets, per-field reference and
//! annotated examples.
//!
//! # Example
//!
//! ```
//! use compdoc_render::ComponentRenderer;
//! use compdoc_schema::{Component, ComponentType, FieldSpec};
//!
//! let component = Component::new("memory", ComponentType::Cache).with_config(
//!     FieldSpec::object().with_children(vec![FieldSpec::new("ttl", "Item TTL in seconds.")]),
//! );
//! let example = serde_yaml::from_str("memory:\n  ttl: 300\n").unwrap();
//!
//! let page = ComponentRenderer::default().render(&component, &example).unwrap();
//! assert!(page.contains("### `ttl`"));
//! ```

mod context;
mod error;
mod renderer;
mod snippets;
mod tabs;
mod template;

pub use context::{ComponentContext, FieldContext, MISSING_DESCRIPTION};
pub use error::RenderError;
pub use renderer::{ComponentRenderer, RenderOptions};
pub use tabs::{ParseTabsStyleError, TabsStyle};
pub use template::{INLINE_FIELDS_MAX, render_page};
