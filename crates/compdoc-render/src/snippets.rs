//! Common and advanced config snippets.
//!
//! Each snippet is produced from a private copy of the component's example
//! config: sanitize with a view filter, encode and decode it as YAML, then sort
//! the decoded node into schema order.

use compdoc_schema::{Component, FieldSpec};
use compdoc_tree::{TreeError, common_view, full_view, sanitize, sort_node};
use serde_yaml::{Mapping, Value};

/// The two YAML views of a component's example config.
#[derive(Debug)]
pub(crate) struct ConfigSnippets {
    pub common: String,
    pub advanced: String,
}

/// Build both views from the component's example config.
///
/// `config` is the value stored under the component name in the example
/// document. When `nest` is set, snippets are wrapped under the component
/// type key.
pub(crate) fn config_snippets(
    component: &Component,
    config: &Value,
    nest: bool,
) -> Result<ConfigSnippets, TreeError> {
    let advanced = ordered_config(&component.config, config, full_view)?;
    let common = ordered_config(&component.config, config, common_view)?;

    Ok(ConfigSnippets {
        common: serde_yaml::to_string(&wrap(component, common, nest))?,
        advanced: serde_yaml::to_string(&wrap(component, advanced, nest))?,
    })
}

fn ordered_config<F>(spec: &FieldSpec, config: &Value, filter: F) -> Result<Value, TreeError>
where
    F: Fn(&FieldSpec) -> bool,
{
    let mut config = config.clone();
    sanitize(&mut config, spec, filter);

    let encoded = serde_yaml::to_string(&config)?;
    let mut node: Value = serde_yaml::from_str(&encoded)?;
    sort_node(&mut node, spec)?;
    Ok(node)
}

fn wrap(component: &Component, node: Value, nest: bool) -> Value {
    let wrapped = single_entry(&component.name, node);
    if nest {
        single_entry(component.component_type.as_str(), wrapped)
    } else {
        wrapped
    }
}

fn single_entry(key: &str, value: Value) -> Value {
    let mut mapping = Mapping::with_capacity(1);
    mapping.insert(Value::from(key), value);
    Value::Mapping(mapping)
}
