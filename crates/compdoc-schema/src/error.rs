//! Schema error types.

/// Error raised when a schema or component definition is malformed.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// Two siblings share the same name.
    #[error("duplicate field '{name}' under '{path}'")]
    DuplicateField {
        /// Dotted path of the parent node (empty for the root).
        path: String,
        /// The repeated field name.
        name: String,
    },

    /// A node is marked as both an array and a map.
    #[error("field '{path}' cannot be both an array and a map")]
    ConflictingShape {
        /// Dotted path of the offending node.
        path: String,
    },

    /// YAML parsing error.
    #[error("{0}")]
    Parse(String),
}
