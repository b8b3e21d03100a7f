//! Component documentation renderer.

use compdoc_schema::Component;
use compdoc_tree::{TreeError, resolve_fields};
use serde_yaml::Value;

use crate::RenderError;
use crate::context::{ComponentContext, FieldContext};
use crate::snippets::config_snippets;
use crate::tabs::TabsStyle;
use crate::template::render_page;

/// Options controlling page layout.
#[derive(Clone, Copy, Debug, Default)]
pub struct RenderOptions {
    /// Wrap config snippets under the component type key.
    pub nest: bool,
    /// Markup used for tabbed sections.
    pub tabs: TabsStyle,
}

/// Renders component reference pages.
///
/// The renderer holds no mutable state; one instance can render many
/// components, including from several threads at once.
#[derive(Clone, Debug, Default)]
pub struct ComponentRenderer {
    options: RenderOptions,
}

impl ComponentRenderer {
    #[must_use]
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    #[must_use]
    pub fn options(&self) -> RenderOptions {
        self.options
    }

    /// Render a component into a markdown page.
    ///
    /// `example` is the full example document, holding the component's config
    /// under its name. It is never modified.
    ///
    /// # Errors
    ///
    /// Returns an error naming the component if its summary spans several
    /// paragraphs, if its field schema is invalid, if the example has no entry
    /// for it, or if the schema and example cannot be reconciled.
    pub fn render(&self, component: &Component, example: &Value) -> Result<String, RenderError> {
        let ctx = self.context(component, example)?;
        Ok(render_page(&ctx, self.options.tabs))
    }

    /// Build the template context for a component without rendering it.
    ///
    /// # Errors
    ///
    /// See [`ComponentRenderer::render`].
    pub fn context(
        &self,
        component: &Component,
        example: &Value,
    ) -> Result<ComponentContext, RenderError> {
        if component.summary.contains("\n\n") {
            return Err(RenderError::SummaryBlankLine {
                kind: component.component_type,
                name: component.name.clone(),
            });
        }

        component
            .config
            .validate()
            .map_err(|source| RenderError::Schema {
                kind: component.component_type,
                name: component.name.clone(),
                source,
            })?;

        tracing::debug!(
            component = %component.name,
            kind = %component.component_type,
            nest = self.options.nest,
            "Rendering component docs"
        );

        let config = example
            .get(component.name.as_str())
            .ok_or_else(|| RenderError::MissingExample {
                kind: component.component_type,
                name: component.name.clone(),
            })?;

        let tree_error = |source: TreeError| RenderError::Tree {
            kind: component.component_type,
            name: component.name.clone(),
            source,
        };

        let mut ctx = ComponentContext::from_component(component)
            .map_err(|e| tree_error(TreeError::Json(e)))?;

        let snippets = config_snippets(component, config, self.options.nest).map_err(tree_error)?;
        ctx.common_config = snippets.common;
        ctx.advanced_config = snippets.advanced;

        ctx.fields = resolve_fields(&component.config, config)
            .map_err(tree_error)?
            .into_iter()
            .map(FieldContext::from)
            .collect();

        Ok(ctx)
    }
}
