//! `compdoc build` command implementation.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use clap::Args;
use compdoc_config::{CliSettings, Config};
use compdoc_render::{ComponentRenderer, RenderOptions, TabsStyle};
use rayon::prelude::*;

use super::definition::{Definition, discover};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the build command.
#[derive(Args)]
pub(crate) struct BuildArgs {
    /// Path to configuration file (default: auto-discover compdoc.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Component definitions directory (overrides config).
    #[arg(short, long)]
    source_dir: Option<PathBuf>,

    /// Output directory for rendered pages (overrides config).
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Wrap config snippets under the component type key (overrides config).
    #[arg(long)]
    nest: bool,

    /// Do not wrap config snippets (overrides config).
    #[arg(long, conflicts_with = "nest")]
    no_nest: bool,

    /// Tabs markup style, docusaurus or directive (overrides config).
    #[arg(long)]
    tabs: Option<TabsStyle>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

/// Outcome of rendering one definition file.
struct Rendered {
    source: PathBuf,
    result: Result<PathBuf, CliError>,
}

impl BuildArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            source_dir: self.source_dir,
            output_dir: self.output_dir,
            nest: self.nest.then_some(true).or(self.no_nest.then_some(false)),
            tabs: self.tabs,
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        let source_dir = &config.components_resolved.source_dir;
        let output_dir = &config.output_resolved.dir;

        output.build_paths(source_dir, output_dir);

        let files = discover(source_dir)?;
        if files.is_empty() {
            output.no_definitions(source_dir);
            return Ok(());
        }

        let renderer = ComponentRenderer::new(RenderOptions {
            nest: config.output_resolved.nest,
            tabs: config.output_resolved.tabs,
        });
        let rendered = build_all(&renderer, &files, output_dir);

        let total = rendered.len();
        let mut failed = 0;
        for Rendered { source, result } in rendered {
            match result {
                Ok(page) => {
                    tracing::info!(source = %source.display(), page = %page.display(), "Rendered");
                }
                Err(err) => {
                    failed += 1;
                    output.definition_failed(&source, &err);
                }
            }
        }

        if failed > 0 {
            return Err(CliError::Build { failed, total });
        }

        output.build_succeeded(total, output_dir);
        Ok(())
    }
}

/// Render every definition in parallel, keeping input order in the report.
///
/// Definitions that map to the same page are all rejected and none of them
/// is written.
fn build_all(renderer: &ComponentRenderer, files: &[PathBuf], output_dir: &Path) -> Vec<Rendered> {
    let loaded: Vec<Result<Definition, CliError>> =
        files.par_iter().map(|source| Definition::load(source)).collect();

    let mut sources: HashMap<PathBuf, Vec<&Path>> = HashMap::new();
    for (source, definition) in files.iter().zip(&loaded) {
        if let Ok(definition) = definition {
            sources
                .entry(page_path(definition, output_dir))
                .or_default()
                .push(source);
        }
    }

    files
        .par_iter()
        .zip(loaded)
        .map(|(source, definition)| {
            let result = definition.and_then(|definition| {
                let page = page_path(&definition, output_dir);
                let other = sources
                    .get(&page)
                    .and_then(|shared| shared.iter().find(|other| **other != source.as_path()));
                if let Some(other) = other {
                    return Err(CliError::DuplicatePage {
                        page,
                        other: other.to_path_buf(),
                    });
                }
                build_one(renderer, &definition, page)
            });
            Rendered {
                source: source.clone(),
                result,
            }
        })
        .collect()
}

/// Page location for a definition: `<output>/<type>/<name>.md`.
fn page_path(definition: &Definition, output_dir: &Path) -> PathBuf {
    let component = &definition.component;
    output_dir
        .join(component.component_type.as_str())
        .join(format!("{}.md", component.name))
}

fn build_one(
    renderer: &ComponentRenderer,
    definition: &Definition,
    path: PathBuf,
) -> Result<PathBuf, CliError> {
    let page = renderer.render(&definition.component, &definition.example)?;
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)?;
    }
    std::fs::write(&path, page)?;
    Ok(path)
}
