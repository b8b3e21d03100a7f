//! Default value resolution and display type inference.

use compdoc_schema::{FieldSpec, FieldType};
use serde_yaml::{Mapping, Value};

use crate::TreeError;
use crate::flatten::{FlatField, flatten};
use crate::path::lookup;

/// A documented field with its default and display type resolved.
#[derive(Clone, Debug)]
pub struct ResolvedField<'a> {
    /// Dotted path of the field.
    pub path: String,
    pub spec: &'a FieldSpec,
    /// Default rendered as compact JSON. Empty for composite fields.
    pub default: String,
    pub field_type: FieldType,
    /// Each example rendered as a YAML snippet keyed by the field name.
    pub examples: Vec<String>,
}

/// Resolve every non-deprecated field of `root` against an example document.
///
/// `example` is the component configuration value (the document described by
/// `root`), used to discover defaults for fields that declare none.
///
/// # Errors
///
/// Fails on the first field without an explicit default and without a value
/// in `example`, or when a value cannot be encoded.
pub fn resolve_fields<'a>(
    root: &'a FieldSpec,
    example: &Value,
) -> Result<Vec<ResolvedField<'a>>, TreeError> {
    let resolved = flatten(root)
        .into_iter()
        .filter(|field| !field.spec.deprecated)
        .map(|field| resolve_field(field, example))
        .collect::<Result<Vec<_>, _>>()?;
    tracing::debug!(fields = resolved.len(), "Resolved field defaults");
    Ok(resolved)
}

/// Resolve the default, display type and examples of a single field.
///
/// An explicit default always wins; the example document is only consulted
/// when the field declares none.
///
/// # Errors
///
/// Returns [`TreeError::MissingDefault`] when no value can be found.
pub fn resolve_field<'a>(
    field: FlatField<'a>,
    example: &Value,
) -> Result<ResolvedField<'a>, TreeError> {
    let FlatField { path, spec } = field;

    let default = match &spec.default {
        Some(default) => default,
        None => lookup(example, &path).ok_or_else(|| TreeError::MissingDefault {
            path: path.clone(),
        })?,
    };

    let default_text = if spec.is_composite() {
        String::new()
    } else {
        serde_json::to_string(default)?
    };

    let field_type = display_type(spec, default);
    let examples = render_examples(&path, &spec.examples)?;

    Ok(ResolvedField {
        path,
        spec,
        default: default_text,
        field_type,
        examples,
    })
}

/// Classify a literal into a display type plus an array flag.
///
/// Sequences report the type of their first element.
#[must_use]
pub fn infer_type(value: &Value) -> (FieldType, bool) {
    match value {
        Value::String(_) => (FieldType::String, false),
        Value::Bool(_) => (FieldType::Bool, false),
        Value::Number(n) if n.is_f64() => (FieldType::Float, false),
        Value::Number(_) => (FieldType::Int, false),
        Value::Mapping(_) => (FieldType::Object, false),
        Value::Sequence(items) => {
            let item_type = items.first().map_or(FieldType::Unknown, |item| infer_type(item).0);
            (item_type, true)
        }
        Value::Null | Value::Tagged(_) => (FieldType::Unknown, false),
    }
}

fn display_type(spec: &FieldSpec, default: &Value) -> FieldType {
    let (field_type, is_array) = match spec.field_type {
        Some(field_type) => (field_type, spec.is_array),
        None => infer_type(spec.examples.first().unwrap_or(default)),
    };

    if spec.is_map {
        FieldType::Object
    } else if is_array {
        FieldType::Array
    } else {
        field_type
    }
}

fn render_examples(path: &str, examples: &[Value]) -> Result<Vec<String>, TreeError> {
    let key = path.rsplit('.').next().unwrap_or(path);
    examples
        .iter()
        .map(|example| {
            let mut snippet = Mapping::with_capacity(1);
            snippet.insert(Value::from(key), example.clone());
            serde_yaml::to_string(&snippet).map_err(TreeError::from)
        })
        .collect()
}
