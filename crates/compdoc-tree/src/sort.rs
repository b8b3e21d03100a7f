//! Reordering of document mappings into schema declaration order.

use compdoc_schema::FieldSpec;
use serde_yaml::{Mapping, Value};

use crate::error::{NodeKind, TreeError};
use crate::path::{self, ARRAY_SUFFIX};

/// Reorder mapping keys to follow the declaration order of `spec`, recursively.
///
/// Keys unknown to the schema are moved after the known ones and keep their
/// relative order. The root must be a mapping (a sequence when the root spec is
/// an array) and every composite field present in the document must hold the
/// node kind its spec implies.
///
/// # Errors
///
/// Returns [`TreeError::NodeKind`] on the first node whose kind disagrees with
/// the schema.
pub fn sort_node(document: &mut Value, spec: &FieldSpec) -> Result<(), TreeError> {
    let expected = if spec.is_array {
        NodeKind::Sequence
    } else {
        NodeKind::Mapping
    };
    if NodeKind::of(document) != expected {
        return Err(TreeError::node_kind("", expected, document));
    }
    sort_value(document, spec, "")
}

fn sort_value(value: &mut Value, spec: &FieldSpec, path: &str) -> Result<(), TreeError> {
    if !spec.is_composite() {
        return Ok(());
    }

    if spec.is_array {
        let Value::Sequence(items) = value else {
            return Err(TreeError::node_kind(path, NodeKind::Sequence, value));
        };
        let item_path = format!("{path}{ARRAY_SUFFIX}");
        for item in items {
            sort_object(item, spec, &item_path)?;
        }
    } else if spec.is_map {
        let Value::Mapping(entries) = value else {
            return Err(TreeError::node_kind(path, NodeKind::Mapping, value));
        };
        let item_path = path::container(path, false, true);
        for (_, item) in entries.iter_mut() {
            sort_object(item, spec, &item_path)?;
        }
    } else {
        sort_object(value, spec, path)?;
    }
    Ok(())
}

fn sort_object(value: &mut Value, spec: &FieldSpec, path: &str) -> Result<(), TreeError> {
    let Value::Mapping(mapping) = value else {
        return Err(TreeError::node_kind(path, NodeKind::Mapping, value));
    };

    let mut pending: Vec<Option<(Value, Value)>> =
        std::mem::take(mapping).into_iter().map(Some).collect();
    let mut sorted = Mapping::with_capacity(pending.len());

    for child in &spec.children {
        let Some((key, mut item)) = pending
            .iter_mut()
            .find(|entry| {
                matches!(entry, Some((key, _)) if key.as_str() == Some(child.name.as_str()))
            })
            .and_then(Option::take)
        else {
            continue;
        };
        sort_value(&mut item, child, &path::join(path, &child.name))?;
        sorted.insert(key, item);
    }

    for (key, item) in pending.into_iter().flatten() {
        sorted.insert(key, item);
    }

    *mapping = sorted;
    Ok(())
}
