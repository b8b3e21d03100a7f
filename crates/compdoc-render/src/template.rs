//! Markdown page template for component reference docs.
//!
//! Section order: front matter, autogenerated notice, status banner, summary,
//! config snippet(s), description, examples, fields, footnotes. Field docs
//! move above the examples for components with at most
//! [`INLINE_FIELDS_MAX`] fields.

use std::fmt::Write;

use crate::context::{ComponentContext, FieldContext};
use crate::tabs::{Tab, TabsStyle};

/// Components with up to this many fields list them right after the config.
pub const INLINE_FIELDS_MAX: usize = 4;

const INTERPOLATION_NOTE: &str = "This field supports \
     [interpolation functions](/docs/configuration/interpolation#bloblang-queries).";

/// Render a complete markdown page.
pub fn render_page(ctx: &ComponentContext, tabs: TabsStyle) -> String {
    let mut md = String::with_capacity(4096);

    render_front_matter(&mut md, ctx);
    render_notice(&mut md, ctx, tabs);
    render_intro(&mut md, ctx);
    render_config(&mut md, ctx, tabs);

    if !ctx.description.is_empty() {
        push_block(&mut md, &ctx.description);
    }

    let inline_fields = ctx.fields.len() <= INLINE_FIELDS_MAX;
    if inline_fields {
        render_fields(&mut md, &ctx.fields);
    }
    render_examples(&mut md, ctx, tabs);
    if !inline_fields {
        render_fields(&mut md, &ctx.fields);
    }

    if !ctx.footnotes.is_empty() {
        push_block(&mut md, &ctx.footnotes);
    }

    let trimmed = md.trim_end_matches('\n').len();
    md.truncate(trimmed);
    md.push('\n');
    md
}

/// Append a block of text followed by a blank line.
fn push_block(md: &mut String, text: &str) {
    md.push_str(text.trim_end_matches('\n'));
    md.push_str("\n\n");
}

fn render_front_matter(md: &mut String, ctx: &ComponentContext) {
    md.push_str("---\n");
    let _ = writeln!(md, "title: {}", ctx.name);
    let _ = writeln!(md, "type: {}", ctx.component_type);
    let _ = writeln!(md, "status: {}", ctx.status);
    if !ctx.front_matter_summary.is_empty() {
        let _ = writeln!(md, "description: {}", ctx.front_matter_summary);
    }
    if !ctx.categories.is_empty() {
        let _ = writeln!(md, "categories: {}", ctx.categories);
    }
    md.push_str("---\n\n");
}

fn render_notice(md: &mut String, ctx: &ComponentContext, tabs: TabsStyle) {
    md.push_str("<!--\n     THIS FILE IS AUTOGENERATED!\n\n");
    let _ = writeln!(
        md,
        "     To make changes please edit the spec of the {} component: {}",
        ctx.component_type, ctx.name
    );
    md.push_str("-->\n\n");

    if tabs.needs_imports() {
        md.push_str("import Tabs from '@theme/Tabs';\nimport TabItem from '@theme/TabItem';\n\n");
    }
}

fn render_intro(md: &mut String, ctx: &ComponentContext) {
    match ctx.status.as_str() {
        "beta" => push_block(
            md,
            "BETA: This component is mostly stable but breaking changes could still be made \
             outside of major version releases if a fundamental problem with the component is found.",
        ),
        "experimental" => push_block(
            md,
            "EXPERIMENTAL: This component is experimental and therefore subject to change or \
             removal outside of major version releases.",
        ),
        "deprecated" => push_block(
            md,
            ":::warning DEPRECATED\nThis component is deprecated and will be removed in the next \
             major version release. Please consider moving onto \
             [alternative components](#alternatives).\n:::",
        ),
        _ => {}
    }

    if !ctx.summary.is_empty() {
        push_block(md, &ctx.summary);
    }
    if !ctx.version.is_empty() {
        let _ = write!(md, "Introduced in version {}.\n\n", ctx.version);
    }
}

fn push_yaml_fence(md: &mut String, heading: &str, yaml: &str) {
    let _ = writeln!(md, "```yaml\n# {heading}");
    md.push_str(yaml.trim_end_matches('\n'));
    md.push_str("\n```\n\n");
}

fn render_config(md: &mut String, ctx: &ComponentContext, tabs: TabsStyle) {
    if ctx.common_config == ctx.advanced_config {
        push_yaml_fence(md, "Config fields, showing default values", &ctx.common_config);
        return;
    }

    let common = Tab {
        label: "Common",
        value: "common",
    };
    let advanced = Tab {
        label: "Advanced",
        value: "advanced",
    };

    tabs.open_group(md, &[common, advanced]);

    tabs.open_tab(md, common);
    push_yaml_fence(
        md,
        "Common config fields, showing default values",
        &ctx.common_config,
    );
    tabs.close_tab(md);

    tabs.open_tab(md, advanced);
    push_yaml_fence(
        md,
        "All config fields, showing default values",
        &ctx.advanced_config,
    );
    tabs.close_tab(md);

    tabs.close_group(md);
    md.push('\n');
}

fn render_examples(md: &mut String, ctx: &ComponentContext, tabs: TabsStyle) {
    if ctx.examples.is_empty() {
        return;
    }

    md.push_str("## Examples\n\n");

    let tab_list: Vec<Tab<'_>> = ctx
        .examples
        .iter()
        .map(|example| Tab {
            label: &example.title,
            value: &example.title,
        })
        .collect();

    tabs.open_group(md, &tab_list);
    for (example, tab) in ctx.examples.iter().zip(&tab_list) {
        tabs.open_tab(md, *tab);
        if !example.summary.is_empty() {
            push_block(md, &example.summary);
        }
        let config = example.config.trim_start_matches('\n');
        if !config.is_empty() {
            md.push_str("```yaml\n");
            md.push_str(config.trim_end_matches('\n'));
            md.push_str("\n```\n\n");
        }
        tabs.close_tab(md);
    }
    tabs.close_group(md);
    md.push('\n');
}

fn render_fields(md: &mut String, fields: &[FieldContext]) {
    if fields.is_empty() {
        return;
    }

    md.push_str("## Fields\n\n");
    for field in fields {
        render_field(md, field);
    }
}

fn render_field(md: &mut String, field: &FieldContext) {
    let _ = write!(md, "### `{}`\n\n", field.name);

    md.push_str(field.description.trim_end_matches('\n'));
    md.push('\n');
    if field.interpolated {
        md.push_str(INTERPOLATION_NOTE);
        md.push('\n');
    }
    md.push('\n');

    // Trailing double spaces are markdown line breaks.
    let _ = writeln!(md, "Type: `{}`  ", field.field_type);
    if !field.default.is_empty() {
        let _ = writeln!(md, "Default: `{}`  ", field.default);
    }
    if !field.version.is_empty() {
        let _ = writeln!(md, "Requires version {} or newer  ", field.version);
    }
    md.push('\n');

    if !field.annotated_options.is_empty() {
        md.push_str("| Option | Summary |\n|---|---|\n");
        for (option, summary) in &field.annotated_options {
            let _ = writeln!(md, "| `{option}` | {summary} |");
        }
        md.push('\n');
    } else if !field.options.is_empty() {
        let options: Vec<String> = field.options.iter().map(|o| format!("`{o}`")).collect();
        let _ = write!(md, "Options: {}.\n\n", options.join(", "));
    }

    if !field.examples.is_empty() {
        md.push_str("```yaml\n# Examples\n\n");
        md.push_str(&field.examples.join("\n"));
        md.push_str("```\n\n");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use compdoc_schema::AnnotatedExample;
    use pretty_assertions::assert_eq;

    fn field(name: &str) -> FieldContext {
        FieldContext {
            name: name.to_owned(),
            field_type: "string".to_owned(),
            description: "Some field.".to_owned(),
            default: "\"\"".to_owned(),
            advanced: false,
            deprecated: false,
            interpolated: false,
            examples: Vec::new(),
            annotated_options: Vec::new(),
            options: Vec::new(),
            version: String::new(),
        }
    }

    fn context() -> ComponentContext {
        ComponentContext {
            name: "memory".to_owned(),
            component_type: "cache".to_owned(),
            front_matter_summary: String::new(),
            summary: String::new(),
            description: String::new(),
            categories: String::new(),
            examples: Vec::new(),
            fields: Vec::new(),
            footnotes: String::new(),
            common_config: "memory:\n  ttl: 300\n".to_owned(),
            advanced_config: "memory:\n  ttl: 300\n".to_owned(),
            status: "stable".to_owned(),
            version: String::new(),
        }
    }

    #[test]
    fn test_minimal_page() {
        let page = render_page(&context(), TabsStyle::Docusaurus);
        assert_eq!(
            page,
            r"---
title: memory
type: cache
status: stable
---

<!--
     THIS FILE IS AUTOGENERATED!

     To make changes please edit the spec of the cache component: memory
-->

import Tabs from '@theme/Tabs';
import TabItem from '@theme/TabItem';

```yaml
# Config fields, showing default values
memory:
  ttl: 300
```
"
        );
    }

    #[test]
    fn test_front_matter_optionals() {
        let ctx = ComponentContext {
            front_matter_summary: "\"Caches things.\"".to_owned(),
            categories: "[\"Utility\"]".to_owned(),
            ..context()
        };
        let page = render_page(&ctx, TabsStyle::Docusaurus);
        assert!(page.starts_with(
            "---\ntitle: memory\ntype: cache\nstatus: stable\ndescription: \"Caches things.\"\ncategories: [\"Utility\"]\n---\n"
        ));
    }

    #[test]
    fn test_differing_views_use_tabs() {
        let ctx = ComponentContext {
            advanced_config: "memory:\n  ttl: 300\n  shards: 1\n".to_owned(),
            ..context()
        };
        let page = render_page(&ctx, TabsStyle::Docusaurus);
        assert!(page.contains("<Tabs defaultValue=\"common\""));
        assert!(page.contains("# Common config fields, showing default values\nmemory:\n  ttl: 300\n```"));
        assert!(page.contains("# All config fields, showing default values\nmemory:\n  ttl: 300\n  shards: 1\n```"));
        assert_eq!(page.matches("```yaml").count(), 2);
        assert!(!page.contains("# Config fields, showing default values"));
    }

    #[test]
    fn test_identical_views_render_single_block() {
        let page = render_page(&context(), TabsStyle::Docusaurus);
        assert_eq!(page.matches("```yaml").count(), 1);
        assert!(!page.contains("<Tabs"));
    }

    #[test]
    fn test_directive_tabs_have_no_imports() {
        let ctx = ComponentContext {
            advanced_config: "memory: {}\n".to_owned(),
            ..context()
        };
        let page = render_page(&ctx, TabsStyle::Directive);
        assert!(!page.contains("import Tabs"));
        assert!(page.contains("::: tabs\n::: tab Common\n"));
        assert!(page.contains("::: tab Advanced\n"));
    }

    #[test]
    fn test_status_banners() {
        for (status, needle) in [
            ("beta", "BETA:"),
            ("experimental", "EXPERIMENTAL:"),
            ("deprecated", ":::warning DEPRECATED"),
        ] {
            let ctx = ComponentContext {
                status: status.to_owned(),
                ..context()
            };
            assert!(render_page(&ctx, TabsStyle::Docusaurus).contains(needle));
        }
        let stable = render_page(&context(), TabsStyle::Docusaurus);
        assert!(!stable.contains("BETA:"));
    }

    #[test]
    fn test_summary_and_version() {
        let ctx = ComponentContext {
            summary: "Stores items in memory.".to_owned(),
            version: "3.4.0".to_owned(),
            ..context()
        };
        let page = render_page(&ctx, TabsStyle::Docusaurus);
        assert!(page.contains("Stores items in memory.\n\nIntroduced in version 3.4.0.\n\n```yaml"));
    }

    #[test]
    fn test_field_docs() {
        let mut ttl = field("ttl");
        ttl.interpolated = true;
        ttl.version = "3.1.0".to_owned();
        ttl.options = vec!["a".to_owned(), "b".to_owned()];
        ttl.examples = vec!["ttl: 5\n".to_owned(), "ttl: 10\n".to_owned()];

        let mut mode = field("mode");
        mode.default = String::new();
        mode.annotated_options = vec![("fast".to_owned(), "Go fast.".to_owned())];
        mode.options = vec!["ignored".to_owned()];

        let mut md = String::new();
        render_fields(&mut md, &[ttl, mode]);
        assert_eq!(
            md,
            concat!(
                "## Fields\n\n",
                "### `ttl`\n\n",
                "Some field.\n",
                "This field supports [interpolation functions]",
                "(/docs/configuration/interpolation#bloblang-queries).\n\n",
                "Type: `string`  \n",
                "Default: `\"\"`  \n",
                "Requires version 3.1.0 or newer  \n\n",
                "Options: `a`, `b`.\n\n",
                "```yaml\n# Examples\n\nttl: 5\n\nttl: 10\n```\n\n",
                "### `mode`\n\n",
                "Some field.\n\n",
                "Type: `string`  \n\n",
                "| Option | Summary |\n|---|---|\n| `fast` | Go fast. |\n\n",
            )
        );
    }

    #[test]
    fn test_few_fields_render_before_examples() {
        let ctx = ComponentContext {
            fields: vec![field("a")],
            examples: vec![AnnotatedExample {
                title: "Basic".to_owned(),
                summary: String::new(),
                config: "\nmemory: {}\n".to_owned(),
            }],
            ..context()
        };
        let page = render_page(&ctx, TabsStyle::Docusaurus);
        let fields_at = page.find("## Fields").unwrap();
        let examples_at = page.find("## Examples").unwrap();
        assert!(fields_at < examples_at);
    }

    #[test]
    fn test_many_fields_render_after_examples() {
        let ctx = ComponentContext {
            fields: (0..5).map(|i| field(&format!("f{i}"))).collect(),
            examples: vec![AnnotatedExample {
                title: "Basic".to_owned(),
                summary: "A summary.".to_owned(),
                config: "memory: {}".to_owned(),
            }],
            ..context()
        };
        let page = render_page(&ctx, TabsStyle::Docusaurus);
        let fields_at = page.find("## Fields").unwrap();
        let examples_at = page.find("## Examples").unwrap();
        assert!(examples_at < fields_at);
    }

    #[test]
    fn test_examples_section() {
        let ctx = ComponentContext {
            examples: vec![
                AnnotatedExample {
                    title: "Basic".to_owned(),
                    summary: "Keep it simple.".to_owned(),
                    config: "\ninput:\n  memory: {}\n".to_owned(),
                },
                AnnotatedExample {
                    title: "Tuned".to_owned(),
                    summary: String::new(),
                    config: String::new(),
                },
            ],
            ..context()
        };
        let page = render_page(&ctx, TabsStyle::Docusaurus);
        assert!(page.contains(
            r#"## Examples

<Tabs defaultValue="Basic" values={[
  { label: 'Basic', value: 'Basic', },
  { label: 'Tuned', value: 'Tuned', },
]}>

<TabItem value="Basic">

Keep it simple.

```yaml
input:
  memory: {}
```

</TabItem>
<TabItem value="Tuned">

</TabItem>
</Tabs>
"#
        ));
    }

    #[test]
    fn test_description_and_footnotes() {
        let ctx = ComponentContext {
            description: "Long form.".to_owned(),
            footnotes: "## Performance\n\nFast.".to_owned(),
            ..context()
        };
        let page = render_page(&ctx, TabsStyle::Docusaurus);
        assert!(page.contains("```\n\nLong form.\n\n"));
        assert!(page.ends_with("## Performance\n\nFast.\n"));
    }

    #[test]
    fn test_no_fields_section_without_fields() {
        let page = render_page(&context(), TabsStyle::Docusaurus);
        assert!(!page.contains("## Fields"));
    }
}
