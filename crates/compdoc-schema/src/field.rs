//! Recursive field descriptors.
//!
//! A [`FieldSpec`] tree describes the configuration shape of a component.
//! Composite nodes (those with children) are plain objects by default, or
//! homogeneous arrays/maps of objects when [`FieldSpec::is_array`] or
//! [`FieldSpec::is_map`] is set.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_yaml::Value;

use crate::SchemaError;

/// Display type of a field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    String,
    Int,
    Float,
    Bool,
    Object,
    Array,
    Unknown,
}

impl FieldType {
    /// Label used in rendered documentation.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Int => "int",
            Self::Float => "float",
            Self::Bool => "bool",
            Self::Object => "object",
            Self::Array => "array",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Descriptor of a single configuration field and its children.
///
/// The tree is read-only during rendering; it is built once when a component
/// is registered.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldSpec {
    /// Local key, unique among siblings. Empty for the anonymous root.
    pub name: String,

    /// Explicit display type. Inferred from examples or defaults when unset.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub field_type: Option<FieldType>,

    /// Markdown description.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,

    /// Literal default value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,

    /// Hidden from the common config view.
    pub advanced: bool,

    /// Hidden from both config views and from the field reference.
    pub deprecated: bool,

    /// Value may embed runtime interpolation expressions.
    pub interpolated: bool,

    /// Homogeneous array of this node's children.
    pub is_array: bool,

    /// Map with arbitrary keys whose values follow this node's children.
    pub is_map: bool,

    /// Enumerated allowed values.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,

    /// Enumerated allowed values with a summary each.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub annotated_options: Vec<(String, String)>,

    /// Example values for the field in isolation.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub examples: Vec<Value>,

    /// Version the field was introduced in.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub version: String,

    /// Child fields in declaration order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<FieldSpec>,
}

impl FieldSpec {
    /// Create a leaf field with a name and description.
    #[must_use]
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            ..Self::default()
        }
    }

    /// Create an anonymous root object.
    #[must_use]
    pub fn object() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_type(mut self, field_type: FieldType) -> Self {
        self.field_type = Some(field_type);
        self
    }

    #[must_use]
    pub fn with_default(mut self, default: impl Into<Value>) -> Self {
        self.default = Some(default.into());
        self
    }

    #[must_use]
    pub fn advanced(mut self) -> Self {
        self.advanced = true;
        self
    }

    #[must_use]
    pub fn deprecated(mut self) -> Self {
        self.deprecated = true;
        self
    }

    #[must_use]
    pub fn interpolated(mut self) -> Self {
        self.interpolated = true;
        self
    }

    /// Mark the field as an array (of objects when it has children).
    #[must_use]
    pub fn array(mut self) -> Self {
        self.is_array = true;
        self
    }

    /// Mark the field as a map with arbitrary keys.
    #[must_use]
    pub fn map(mut self) -> Self {
        self.is_map = true;
        self
    }

    #[must_use]
    pub fn with_options<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options = options.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_annotated_options<I, K, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = (K, S)>,
        K: Into<String>,
        S: Into<String>,
    {
        self.annotated_options = options
            .into_iter()
            .map(|(value, summary)| (value.into(), summary.into()))
            .collect();
        self
    }

    #[must_use]
    pub fn with_examples<I, V>(mut self, examples: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.examples = examples.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    #[must_use]
    pub fn with_children(mut self, children: Vec<FieldSpec>) -> Self {
        self.children = children;
        self
    }

    /// Whether this node describes an object, array of objects or map of objects.
    #[must_use]
    pub fn is_composite(&self) -> bool {
        !self.children.is_empty()
    }

    /// Find a direct child by name.
    #[must_use]
    pub fn child(&self, name: &str) -> Option<&FieldSpec> {
        self.children.iter().find(|c| c.name == name)
    }

    /// Check tree invariants: unique sibling names, and no node that is both
    /// an array and a map.
    pub fn validate(&self) -> Result<(), SchemaError> {
        self.validate_at("")
    }

    fn validate_at(&self, path: &str) -> Result<(), SchemaError> {
        if self.is_array && self.is_map {
            return Err(SchemaError::ConflictingShape {
                path: path.to_owned(),
            });
        }

        let mut seen = HashSet::with_capacity(self.children.len());
        for child in &self.children {
            if !seen.insert(child.name.as_str()) {
                return Err(SchemaError::DuplicateField {
                    path: path.to_owned(),
                    name: child.name.clone(),
                });
            }
            let child_path = if path.is_empty() {
                child.name.clone()
            } else {
                format!("{path}.{}", child.name)
            };
            child.validate_at(&child_path)?;
        }
        Ok(())
    }
}
