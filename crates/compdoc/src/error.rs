//! CLI error types.

use std::path::PathBuf;

use compdoc_config::ConfigError;
use compdoc_render::RenderError;
use compdoc_schema::SchemaError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("{}: {source}", path.display())]
    Definition { path: PathBuf, source: SchemaError },

    #[error("{0}")]
    Render(#[from] RenderError),

    #[error("page {} is also produced by {}", page.display(), other.display())]
    DuplicatePage { page: PathBuf, other: PathBuf },

    #[error("{failed} of {total} components failed to render")]
    Build { failed: usize, total: usize },
}
