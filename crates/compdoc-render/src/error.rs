//! Render error types.

use compdoc_schema::{ComponentType, SchemaError};
use compdoc_tree::TreeError;

/// Error that aborts rendering of a single component.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// The summary must render as a single paragraph.
    #[error("{kind} component '{name}' has a summary containing empty lines")]
    SummaryBlankLine {
        kind: ComponentType,
        name: String,
    },

    /// The field schema breaks a tree invariant.
    #[error("{kind} component '{name}' has an invalid config schema: {source}")]
    Schema {
        kind: ComponentType,
        name: String,
        source: SchemaError,
    },

    /// The example document has no entry under the component name.
    #[error("{kind} component '{name}' is missing from its config example")]
    MissingExample {
        kind: ComponentType,
        name: String,
    },

    /// Reconciling the schema with the example failed.
    #[error("{kind} component '{name}': {source}")]
    Tree {
        kind: ComponentType,
        name: String,
        source: TreeError,
    },
}
