//! `compdoc render` command implementation.

use std::io::Write;
use std::path::PathBuf;

use clap::Args;
use compdoc_render::{ComponentRenderer, RenderOptions, TabsStyle};

use super::definition::Definition;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the render command.
#[derive(Args)]
pub(crate) struct RenderArgs {
    /// Component definition file.
    file: PathBuf,

    /// Wrap config snippets under the component type key.
    #[arg(long)]
    nest: bool,

    /// Tabs markup style (docusaurus or directive).
    #[arg(long, default_value_t = TabsStyle::Docusaurus)]
    tabs: TabsStyle,

    /// Write the page to this file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl RenderArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let definition = Definition::load(&self.file)?;
        let renderer = ComponentRenderer::new(RenderOptions {
            nest: self.nest,
            tabs: self.tabs,
        });
        let page = renderer.render(&definition.component, &definition.example)?;

        match self.output {
            Some(path) => {
                if let Some(parent) = path.parent()
                    && !parent.as_os_str().is_empty()
                {
                    std::fs::create_dir_all(parent)?;
                }
                std::fs::write(&path, page)?;
                Output::new().page_written(&definition.component.name, &path);
            }
            None => std::io::stdout().lock().write_all(page.as_bytes())?,
        }
        Ok(())
    }
}
