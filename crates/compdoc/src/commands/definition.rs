//! Component definition files.
//!
//! A definition file is a YAML component record with one extra top-level
//! key, `example`, holding a complete example config for the component:
//!
//! ```yaml
//! name: memory
//! type: cache
//! config:
//!   children:
//!     - name: ttl
//!       description: Item TTL in seconds.
//! example:
//!   ttl: 300
//! ```

use std::path::{Path, PathBuf};

use compdoc_schema::Component;
use serde::Deserialize;
use serde_yaml::{Mapping, Value};

use crate::error::CliError;

/// A parsed definition: the component and its example document.
#[derive(Debug)]
pub(crate) struct Definition {
    pub component: Component,
    /// Example document holding the config under the component name.
    pub example: Value,
}

#[derive(Deserialize)]
struct ExampleSection {
    example: Option<Value>,
}

impl Definition {
    /// Read and parse a definition file.
    pub(crate) fn load(path: &Path) -> Result<Self, CliError> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(path, &content)
    }

    /// Parse a definition read from `path`.
    ///
    /// A missing `example` yields an empty example document, which the
    /// renderer reports as a missing example entry.
    pub(crate) fn parse(path: &Path, content: &str) -> Result<Self, CliError> {
        let component = Component::from_yaml(content).map_err(|source| CliError::Definition {
            path: path.to_path_buf(),
            source,
        })?;
        let section: ExampleSection = serde_yaml::from_str(content)?;

        let mut example = Mapping::new();
        if let Some(config) = section.example {
            example.insert(Value::from(component.name.as_str()), config);
        }

        Ok(Self {
            component,
            example: Value::Mapping(example),
        })
    }
}

/// Collect `*.yaml` and `*.yml` files under `dir`, recursively, in path order.
///
/// Symlinked directories are not descended into.
pub(crate) fn discover(dir: &Path) -> Result<Vec<PathBuf>, CliError> {
    let mut files = Vec::new();
    let mut pending = vec![dir.to_path_buf()];

    while let Some(current) = pending.pop() {
        for entry in std::fs::read_dir(&current)? {
            let entry = entry?;
            let path = entry.path();
            if entry.file_type()?.is_dir() {
                pending.push(path);
            } else if is_definition(&path) {
                files.push(path);
            }
        }
    }

    files.sort();
    Ok(files)
}

fn is_definition(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| matches!(ext, "yaml" | "yml"))
}
