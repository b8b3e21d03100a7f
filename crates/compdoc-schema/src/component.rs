//! Component records.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{FieldSpec, SchemaError};

/// Kind of pipeline component.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentType {
    Buffer,
    Cache,
    Input,
    Metrics,
    Output,
    Processor,
    RateLimit,
    Tracer,
}

impl ComponentType {
    /// Every component type, in documentation order.
    #[must_use]
    pub const fn all() -> [Self; 8] {
        [
            Self::Buffer,
            Self::Cache,
            Self::Input,
            Self::Metrics,
            Self::Output,
            Self::Processor,
            Self::RateLimit,
            Self::Tracer,
        ]
    }

    /// Tag used as a config key and in front matter.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Buffer => "buffer",
            Self::Cache => "cache",
            Self::Input => "input",
            Self::Metrics => "metrics",
            Self::Output => "output",
            Self::Processor => "processor",
            Self::RateLimit => "rate_limit",
            Self::Tracer => "tracer",
        }
    }
}

impl fmt::Display for ComponentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifecycle status of a component.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    #[default]
    Stable,
    Beta,
    Experimental,
    Deprecated,
    Plugin,
}

impl Status {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Stable => "stable",
            Self::Beta => "beta",
            Self::Experimental => "experimental",
            Self::Deprecated => "deprecated",
            Self::Plugin => "plugin",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An isolated, titled usage example for a component.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnnotatedExample {
    pub title: String,
    pub summary: String,
    /// YAML config snippet shown verbatim.
    pub config: String,
}

/// Registered description of a pipeline component.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Component {
    pub name: String,

    #[serde(rename = "type")]
    pub component_type: ComponentType,

    #[serde(default)]
    pub status: Status,

    /// Short markdown summary. Must be a single paragraph.
    #[serde(default)]
    pub summary: String,

    #[serde(default)]
    pub description: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<String>,

    #[serde(default)]
    pub footnotes: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub examples: Vec<AnnotatedExample>,

    /// Root of the configuration schema.
    #[serde(default)]
    pub config: FieldSpec,

    /// Version the component was introduced in.
    #[serde(default)]
    pub version: String,
}

impl Component {
    /// Create a stable component with an empty schema.
    #[must_use]
    pub fn new(name: impl Into<String>, component_type: ComponentType) -> Self {
        Self {
            name: name.into(),
            component_type,
            status: Status::default(),
            summary: String::new(),
            description: String::new(),
            categories: Vec::new(),
            footnotes: String::new(),
            examples: Vec::new(),
            config: FieldSpec::object(),
            version: String::new(),
        }
    }

    /// Parse a component definition from YAML and validate its schema.
    ///
    /// Unknown top-level keys are ignored, so definition files may carry
    /// extra data such as an example configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is malformed or the schema breaks a tree
    /// invariant.
    pub fn from_yaml(content: &str) -> Result<Self, SchemaError> {
        let component: Self = serde_yaml::from_str(content)
            .map_err(|e| SchemaError::Parse(format!("Invalid YAML: {e}")))?;
        component.config.validate()?;
        Ok(component)
    }

    #[must_use]
    pub fn with_status(mut self, status: Status) -> Self {
        self.status = status;
        self
    }

    #[must_use]
    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = summary.into();
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn with_footnotes(mut self, footnotes: impl Into<String>) -> Self {
        self.footnotes = footnotes.into();
        self
    }

    #[must_use]
    pub fn with_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories = categories.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_example(
        mut self,
        title: impl Into<String>,
        summary: impl Into<String>,
        config: impl Into<String>,
    ) -> Self {
        self.examples.push(AnnotatedExample {
            title: title.into(),
            summary: summary.into(),
            config: config.into(),
        });
        self
    }

    #[must_use]
    pub fn with_config(mut self, config: FieldSpec) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static_assertions::assert_impl_all!(super::Component: Send, Sync);

    #[test]
    fn test_all_types_in_order() {
        let tags: Vec<_> = ComponentType::all().iter().map(|t| t.as_str()).collect();
        assert_eq!(
            tags,
            vec![
                "buffer",
                "cache",
                "input",
                "metrics",
                "output",
                "processor",
                "rate_limit",
                "tracer"
            ]
        );
    }

    #[test]
    fn test_type_serde_uses_snake_case() {
        let parsed: ComponentType = serde_yaml::from_str("rate_limit").unwrap();
        assert_eq!(parsed, ComponentType::RateLimit);
        assert_eq!(ComponentType::RateLimit.to_string(), "rate_limit");
    }

    #[test]
    fn test_status_defaults_to_stable() {
        assert_eq!(Status::default(), Status::Stable);
        assert_eq!(Component::new("x", ComponentType::Input).status, Status::Stable);
    }

    #[test]
    fn test_from_yaml_minimal() {
        let component = Component::from_yaml("name: stdin\ntype: input").unwrap();
        assert_eq!(component.name, "stdin");
        assert_eq!(component.component_type, ComponentType::Input);
        assert_eq!(component.status, Status::Stable);
        assert!(component.config.children.is_empty());
    }

    #[test]
    fn test_from_yaml_full() {
        let yaml = r#"
name: kafka
type: output
status: beta
summary: Writes messages to Kafka.
categories: [Services]
version: 3.1.0
examples:
  - title: Basic
    summary: Send to a topic.
    config: |
      output:
        kafka: {}
config:
  children:
    - name: addresses
      type: string
      is_array: true
    - name: topic
      interpolated: true
example:
  kafka:
    addresses: [localhost:9092]
"#;
        let component = Component::from_yaml(yaml).unwrap();
        assert_eq!(component.status, Status::Beta);
        assert_eq!(component.categories, vec!["Services".to_owned()]);
        assert_eq!(component.examples[0].title, "Basic");
        assert!(component.examples[0].config.contains("kafka"));
        assert_eq!(component.config.children.len(), 2);
        assert!(component.config.children[0].is_array);
        assert!(component.config.children[1].interpolated);
    }

    #[test]
    fn test_from_yaml_rejects_invalid_schema() {
        let yaml = r"
name: broken
type: cache
config:
  children:
    - name: ttl
    - name: ttl
";
        let err = Component::from_yaml(yaml).unwrap_err();
        assert!(matches!(err, SchemaError::DuplicateField { .. }));
    }

    #[test]
    fn test_from_yaml_invalid_yaml() {
        let err = Component::from_yaml("name: [oops").unwrap_err();
        assert!(matches!(err, SchemaError::Parse(_)));
    }

    #[test]
    fn test_from_yaml_unknown_type() {
        assert!(Component::from_yaml("name: x\ntype: widget").is_err());
    }
}
