//! Dotted path construction and addressing.
//!
//! Paths join field names with `.`. Two synthetic segments mark containers:
//! a `[]` suffix for arrays of objects and a `<name>` segment for maps with
//! arbitrary keys. When addressing into a document, `[]` selects the first
//! element of the sequence and `<name>` selects the first entry of the map.

use serde_yaml::Value;

/// Suffix appended to an array-of-objects segment.
pub const ARRAY_SUFFIX: &str = "[]";

/// Placeholder segment standing for any key of a map.
pub const MAP_KEY: &str = "<name>";

/// Join a parent path and a child segment.
pub(crate) fn join(parent: &str, segment: &str) -> String {
    if parent.is_empty() {
        segment.to_owned()
    } else {
        format!("{parent}.{segment}")
    }
}

/// Path under which the children of a container field are addressed.
pub(crate) fn container(path: &str, is_array: bool, is_map: bool) -> String {
    if is_array {
        format!("{path}{ARRAY_SUFFIX}")
    } else if is_map {
        join(path, MAP_KEY)
    } else {
        path.to_owned()
    }
}

/// Address a value inside a document by dotted path.
///
/// Returns `None` when any segment is missing or when the addressed value is
/// null. Only the first element of an array and the first key of a map are
/// ever inspected.
#[must_use]
pub fn lookup<'a>(document: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = document;
    for segment in path.split('.') {
        current = step(current, segment)?;
    }
    if current.is_null() {
        None
    } else {
        Some(current)
    }
}

fn step<'a>(value: &'a Value, segment: &str) -> Option<&'a Value> {
    if segment == MAP_KEY {
        return value.as_mapping()?.values().next();
    }
    if let Some(key) = segment.strip_suffix(ARRAY_SUFFIX) {
        let sequence = if key.is_empty() { value } else { value.get(key)? };
        return sequence.as_sequence()?.first();
    }
    value.get(segment)
}
