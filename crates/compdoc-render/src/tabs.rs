//! Tabbed layout markup.
//!
//! Two markup flavours are supported:
//!
//! - [`TabsStyle::Docusaurus`]: `<Tabs>` / `<TabItem>` MDX components.
//! - [`TabsStyle::Directive`]: CommonMark container directives:
//!
//! ```markdown
//! ::: tabs
//! ::: tab Common
//! ...
//! :::
//! ::: tab Advanced
//! ...
//! :::
//! :::
//! ```

use std::fmt::{self, Write};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Markup used for tabbed sections.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TabsStyle {
    #[default]
    Docusaurus,
    Directive,
}

/// A single tab: display label and stable identifier.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Tab<'a> {
    pub label: &'a str,
    pub value: &'a str,
}

impl TabsStyle {
    /// Whether the markup needs component imports at the top of the page.
    pub(crate) fn needs_imports(self) -> bool {
        matches!(self, Self::Docusaurus)
    }

    /// Open a tab group. `tabs` lists every tab in display order; the first
    /// is selected by default.
    pub(crate) fn open_group(self, md: &mut String, tabs: &[Tab<'_>]) {
        match self {
            Self::Docusaurus => {
                let default = tabs.first().map_or("", |t| t.value);
                let _ = writeln!(md, "<Tabs defaultValue=\"{default}\" values={{[");
                for tab in tabs {
                    let _ = writeln!(
                        md,
                        "  {{ label: '{}', value: '{}', }},",
                        tab.label, tab.value
                    );
                }
                md.push_str("]}>\n\n");
            }
            Self::Directive => md.push_str("::: tabs\n"),
        }
    }

    pub(crate) fn open_tab(self, md: &mut String, tab: Tab<'_>) {
        match self {
            Self::Docusaurus => {
                let _ = writeln!(md, "<TabItem value=\"{}\">\n", tab.value);
            }
            Self::Directive => {
                let _ = writeln!(md, "::: tab {}\n", tab.label);
            }
        }
    }

    pub(crate) fn close_tab(self, md: &mut String) {
        match self {
            Self::Docusaurus => md.push_str("</TabItem>\n"),
            Self::Directive => md.push_str(":::\n"),
        }
    }

    pub(crate) fn close_group(self, md: &mut String) {
        match self {
            Self::Docusaurus => md.push_str("</Tabs>\n"),
            Self::Directive => md.push_str(":::\n"),
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Docusaurus => "docusaurus",
            Self::Directive => "directive",
        }
    }
}

impl fmt::Display for TabsStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown tabs style name.
#[derive(Debug, thiserror::Error)]
#[error("unknown tabs style '{0}' (expected 'docusaurus' or 'directive')")]
pub struct ParseTabsStyleError(String);

impl FromStr for TabsStyle {
    type Err = ParseTabsStyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "docusaurus" => Ok(Self::Docusaurus),
            "directive" => Ok(Self::Directive),
            other => Err(ParseTabsStyleError(other.to_owned())),
        }
    }
}
