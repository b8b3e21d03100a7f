//! Schema-driven pruning of example documents.
//!
//! Pruning decisions are made against [`FieldSpec`] nodes, never against the
//! data. Keys the schema does not know about are left untouched, and nodes
//! whose shape disagrees with the schema are skipped rather than rejected:
//! shape problems are reported by [`sort_node`](crate::sort_node).

use compdoc_schema::FieldSpec;
use serde_yaml::Value;

/// Filter for the advanced view: every field that is not deprecated.
#[must_use]
pub fn full_view(field: &FieldSpec) -> bool {
    !field.deprecated
}

/// Filter for the common view: fields that are neither advanced nor deprecated.
#[must_use]
pub fn common_view(field: &FieldSpec) -> bool {
    !field.advanced && !field.deprecated
}

/// Remove every key whose field is rejected by `filter`, recursively.
///
/// `document` is the configuration value described by `spec` (the component
/// root or any composite field). It is modified in place, so callers must own
/// a private copy.
pub fn sanitize<F>(document: &mut Value, spec: &FieldSpec, filter: F)
where
    F: Fn(&FieldSpec) -> bool,
{
    sanitize_value(document, spec, &filter);
}

fn sanitize_value<F>(value: &mut Value, spec: &FieldSpec, filter: &F)
where
    F: Fn(&FieldSpec) -> bool,
{
    if !spec.is_composite() {
        return;
    }

    if spec.is_array {
        if let Value::Sequence(items) = value {
            for item in items {
                sanitize_object(item, spec, filter);
            }
        }
    } else if spec.is_map {
        if let Value::Mapping(entries) = value {
            for (_, item) in entries.iter_mut() {
                sanitize_object(item, spec, filter);
            }
        }
    } else {
        sanitize_object(value, spec, filter);
    }
}

fn sanitize_object<F>(value: &mut Value, spec: &FieldSpec, filter: &F)
where
    F: Fn(&FieldSpec) -> bool,
{
    let Value::Mapping(mapping) = value else {
        return;
    };

    mapping.retain(|key, _| {
        key.as_str()
            .and_then(|name| spec.child(name))
            .is_none_or(|child| filter(child))
    });

    for (key, item) in mapping.iter_mut() {
        if let Some(child) = key.as_str().and_then(|name| spec.child(name)) {
            sanitize_value(item, child, filter);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn doc(yaml: &str) -> Value {
        serde_yaml::from_str(yaml).unwrap()
    }

    fn schema() -> FieldSpec {
        FieldSpec::object().with_children(vec![
            FieldSpec::new("url", ""),
            FieldSpec::new("timeout", "").advanced(),
            FieldSpec::new("old_url", "").deprecated(),
            FieldSpec::new("tls", "").advanced().with_children(vec![
                FieldSpec::new("enabled", ""),
                FieldSpec::new("skip_verify", "").deprecated(),
            ]),
            FieldSpec::new("retries", "").array().with_children(vec![
                FieldSpec::new("max", ""),
                FieldSpec::new("jitter", "").advanced(),
            ]),
            FieldSpec::new("headers", "").map().with_children(vec![
                FieldSpec::new("value", ""),
                FieldSpec::new("secret", "").advanced(),
            ]),
        ])
    }

    fn example() -> Value {
        doc(r"
url: http://localhost
timeout: 5s
old_url: ''
tls:
  enabled: false
  skip_verify: false
retries:
  - max: 3
    jitter: 1s
  - max: 4
    jitter: 2s
headers:
  a:
    value: x
    secret: y
extra: kept
")
    }

    #[test]
    fn test_full_view_drops_deprecated_only() {
        let mut d = example();
        sanitize(&mut d, &schema(), full_view);
        assert_eq!(
            d,
            doc(r"
url: http://localhost
timeout: 5s
tls:
  enabled: false
retries:
  - max: 3
    jitter: 1s
  - max: 4
    jitter: 2s
headers:
  a:
    value: x
    secret: y
extra: kept
")
        );
    }

    #[test]
    fn test_common_view_drops_advanced_and_deprecated() {
        let mut d = example();
        sanitize(&mut d, &schema(), common_view);
        assert_eq!(
            d,
            doc(r"
url: http://localhost
retries:
  - max: 3
  - max: 4
headers:
  a:
    value: x
extra: kept
")
        );
    }

    #[test]
    fn test_sanitize_is_idempotent() {
        let mut once = example();
        sanitize(&mut once, &schema(), common_view);
        let mut twice = once.clone();
        sanitize(&mut twice, &schema(), common_view);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_unknown_keys_pass_through_at_every_level() {
        let mut d = doc("tls:\n  enabled: true\n  custom: 1\nz: 2\na: 3");
        sanitize(&mut d, &schema(), full_view);
        assert_eq!(d, doc("tls:\n  enabled: true\n  custom: 1\nz: 2\na: 3"));
    }

    #[test]
    fn test_shape_mismatch_is_left_alone() {
        let mut d = doc("tls: nope\nretries: 3\nheaders: [1, 2]");
        sanitize(&mut d, &schema(), common_view);
        assert_eq!(d, doc("retries: 3\nheaders: [1, 2]"));
    }

    #[test]
    fn test_array_root() {
        let spec = FieldSpec::object().array().with_children(vec![
            FieldSpec::new("name", ""),
            FieldSpec::new("weight", "").advanced(),
        ]);
        let mut d = doc("- name: a\n  weight: 1\n- name: b\n  weight: 2");
        sanitize(&mut d, &spec, common_view);
        assert_eq!(d, doc("- name: a\n- name: b"));
    }

    #[test]
    fn test_leaf_spec_is_noop() {
        let mut d = doc("a: 1");
        sanitize(&mut d, &FieldSpec::new("leaf", ""), |_| false);
        assert_eq!(d, doc("a: 1"));
    }
}
