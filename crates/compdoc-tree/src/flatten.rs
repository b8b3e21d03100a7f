//! Flattening of field schemas into dotted paths.

use compdoc_schema::FieldSpec;

use crate::path;

/// A schema node paired with its dotted path.
#[derive(Clone, Debug)]
pub struct FlatField<'a> {
    /// Dotted path, e.g. `retry_until.backoff[].max_interval`.
    pub path: String,
    pub spec: &'a FieldSpec,
}

/// Walk the schema in pre-order, producing one entry per descendant of `root`.
///
/// The root itself is anonymous and is not emitted. Array-shaped composites
/// prefix their children with `name[]`, map-shaped composites with
/// `name.<name>`. Deprecated fields are kept; filtering is left to callers.
#[must_use]
pub fn flatten(root: &FieldSpec) -> Vec<FlatField<'_>> {
    let mut fields = Vec::new();
    let prefix = path::container("", root.is_array, root.is_map);
    walk(&prefix, &root.children, &mut fields);
    fields
}

fn walk<'a>(prefix: &str, children: &'a [FieldSpec], fields: &mut Vec<FlatField<'a>>) {
    for child in children {
        let field_path = path::join(prefix, &child.name);
        let nested = child
            .is_composite()
            .then(|| path::container(&field_path, child.is_array, child.is_map));
        fields.push(FlatField {
            path: field_path,
            spec: child,
        });
        if let Some(nested) = nested {
            walk(&nested, &child.children, fields);
        }
    }
}
