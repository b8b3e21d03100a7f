//! Terminal reporting for the `render` and `build` commands.
//!
//! Everything goes to stderr, so `compdoc render` without `-o` can pipe the
//! page itself on stdout. Per-page progress is logged through `tracing`
//! instead and only shows with `--verbose`.

use std::fmt::Display;
use std::path::Path;

use console::{Style, Term};

/// Reporter for command progress and failures.
pub(crate) struct Output {
    term: Term,
    green: Style,
    yellow: Style,
    red: Style,
}

impl Output {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            term: Term::stderr(),
            green: Style::new().green(),
            yellow: Style::new().yellow(),
            red: Style::new().red(),
        }
    }

    /// Where `build` reads definitions from and writes pages to.
    pub(crate) fn build_paths(&self, source_dir: &Path, output_dir: &Path) {
        self.line(None, &format!("Source: {}", source_dir.display()));
        self.line(None, &format!("Output: {}", output_dir.display()));
    }

    /// The source directory held no `*.yaml` or `*.yml` files.
    pub(crate) fn no_definitions(&self, source_dir: &Path) {
        self.line(
            Some(&self.yellow),
            &format!("No component definitions found in {}", source_dir.display()),
        );
    }

    /// One definition failed. The build keeps going with the others.
    pub(crate) fn definition_failed(&self, source: &Path, err: &impl Display) {
        self.line(Some(&self.red), &failure_line(source, err));
    }

    /// Closing line of a build in which every definition rendered.
    pub(crate) fn build_succeeded(&self, total: usize, output_dir: &Path) {
        self.line(Some(&self.green), &build_summary(total, output_dir));
    }

    /// `render -o` wrote the page for `name`.
    pub(crate) fn page_written(&self, name: &str, page: &Path) {
        self.line(
            Some(&self.green),
            &format!("Rendered {name} to {}", page.display()),
        );
    }

    /// The command failed as a whole; the process exits with status 1.
    pub(crate) fn fatal(&self, err: &impl Display) {
        self.line(Some(&self.red), &format!("Error: {err}"));
    }

    fn line(&self, style: Option<&Style>, msg: &str) {
        let _ = match style {
            Some(style) => self.term.write_line(&style.apply_to(msg).to_string()),
            None => self.term.write_line(msg),
        };
    }
}

fn failure_line(source: &Path, err: &impl Display) -> String {
    format!("{}: {err}", source.display())
}

fn build_summary(total: usize, output_dir: &Path) -> String {
    let noun = if total == 1 { "component" } else { "components" };
    format!("Rendered {total} {noun} to {}", output_dir.display())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_failure_line_leads_with_source() {
        let line = failure_line(
            Path::new("components/bad.yaml"),
            &"output component 'bad' has no example entry",
        );
        assert_eq!(
            line,
            "components/bad.yaml: output component 'bad' has no example entry"
        );
    }

    #[test]
    fn test_build_summary_counts_components() {
        assert_eq!(
            build_summary(1, Path::new("site")),
            "Rendered 1 component to site"
        );
        assert_eq!(
            build_summary(12, Path::new("site")),
            "Rendered 12 components to site"
        );
    }
}
