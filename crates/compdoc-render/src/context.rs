//! Template context assembled from a component and its example config.

use compdoc_schema::{AnnotatedExample, Component};
use compdoc_tree::ResolvedField;
use serde::Serialize;

/// Description shown for fields that have none.
pub const MISSING_DESCRIPTION: &str = "Sorry! This field is missing documentation.";

/// Everything the template needs to document one field.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FieldContext {
    /// Dotted path of the field.
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: String,
    pub description: String,
    /// Default as compact JSON, empty when there is none to show.
    pub default: String,
    pub advanced: bool,
    pub deprecated: bool,
    pub interpolated: bool,
    /// YAML snippets, one per example value.
    pub examples: Vec<String>,
    pub annotated_options: Vec<(String, String)>,
    pub options: Vec<String>,
    pub version: String,
}

impl From<ResolvedField<'_>> for FieldContext {
    fn from(field: ResolvedField<'_>) -> Self {
        let spec = field.spec;
        let description = if spec.description.is_empty() {
            MISSING_DESCRIPTION
        } else {
            strip_leading_newlines(&spec.description)
        };

        Self {
            name: field.path,
            field_type: field.field_type.as_str().to_owned(),
            description: description.to_owned(),
            default: field.default,
            advanced: spec.advanced,
            deprecated: spec.deprecated,
            interpolated: spec.interpolated,
            examples: field.examples,
            annotated_options: spec.annotated_options.clone(),
            options: spec.options.clone(),
            version: spec.version.clone(),
        }
    }
}

/// Everything the template needs to document one component.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ComponentContext {
    pub name: String,
    #[serde(rename = "type")]
    pub component_type: String,
    pub front_matter_summary: String,
    pub summary: String,
    pub description: String,
    /// JSON array of categories, empty when there are none.
    pub categories: String,
    pub examples: Vec<AnnotatedExample>,
    pub fields: Vec<FieldContext>,
    pub footnotes: String,
    pub common_config: String,
    pub advanced_config: String,
    pub status: String,
    pub version: String,
}

impl ComponentContext {
    /// Build the component-level part of the context.
    ///
    /// Config snippets and fields are filled in by the caller.
    pub(crate) fn from_component(component: &Component) -> Result<Self, serde_json::Error> {
        let categories = if component.categories.is_empty() {
            String::new()
        } else {
            serde_json::to_string(&component.categories)?
        };
        let front_matter_summary = if component.summary.is_empty() {
            String::new()
        } else {
            serde_json::to_string(&component.summary)?
        };

        Ok(Self {
            name: component.name.clone(),
            component_type: component.component_type.as_str().to_owned(),
            front_matter_summary,
            summary: component.summary.clone(),
            description: strip_leading_newlines(&component.description).to_owned(),
            categories,
            examples: component.examples.clone(),
            fields: Vec::new(),
            footnotes: strip_leading_newlines(&component.footnotes).to_owned(),
            common_config: String::new(),
            advanced_config: String::new(),
            status: component.status.as_str().to_owned(),
            version: component.version.clone(),
        })
    }
}

fn strip_leading_newlines(text: &str) -> &str {
    text.trim_start_matches('\n')
}
