//! Error types for document tree operations.

use std::fmt;

use serde_yaml::Value;

/// Structural kind of a document node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeKind {
    Mapping,
    Sequence,
    Scalar,
    Null,
    Tagged,
}

impl NodeKind {
    /// Classify a document node.
    #[must_use]
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Mapping(_) => Self::Mapping,
            Value::Sequence(_) => Self::Sequence,
            Value::Null => Self::Null,
            Value::Tagged(_) => Self::Tagged,
            Value::Bool(_) | Value::Number(_) | Value::String(_) => Self::Scalar,
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Mapping => "mapping",
            Self::Sequence => "sequence",
            Self::Scalar => "scalar",
            Self::Null => "null",
            Self::Tagged => "tagged value",
        })
    }
}

/// Error from reconciling a schema with a document.
#[derive(Debug, thiserror::Error)]
pub enum TreeError {
    /// The document holds a different kind of node than the schema implies.
    #[error("expected {expected} node at {}, found {found}", display_path(.path))]
    NodeKind {
        /// Dotted path of the node, empty for the root.
        path: String,
        expected: NodeKind,
        found: NodeKind,
    },

    /// Neither the schema nor the example provides a value for a field.
    #[error(
        "field '{path}' not found in config example and no default value was provided in the spec"
    )]
    MissingDefault {
        /// Dotted path of the field.
        path: String,
    },

    /// YAML encoding or decoding failed.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON encoding of a default value failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl TreeError {
    pub(crate) fn node_kind(path: &str, expected: NodeKind, found: &Value) -> Self {
        Self::NodeKind {
            path: path.to_owned(),
            expected,
            found: NodeKind::of(found),
        }
    }
}

fn display_path(path: &str) -> String {
    if path.is_empty() {
        "root".to_owned()
    } else {
        format!("'{path}'")
    }
}
