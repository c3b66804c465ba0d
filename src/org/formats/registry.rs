//! Output format lookup
//!
//! A [FormatRegistry] owns the `[output]` settings and the renderers a document can be
//! written with. Each render call hands the settings to the renderer, so one registry serves
//! both the configured default format and any format picked by name.

use crate::org::ast::Document;
use crate::org::config::OutputConfig;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum FormatError {
    /// No renderer is registered under the requested name.
    UnknownFormat {
        name: String,
        available: Vec<&'static str>,
    },
    /// The renderer failed to encode the document.
    Encode {
        format: &'static str,
        message: String,
    },
}

impl FormatError {
    pub(crate) fn encode(format: &'static str, err: impl fmt::Display) -> Self {
        FormatError::Encode {
            format,
            message: err.to_string(),
        }
    }
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::UnknownFormat { name, available } => write!(
                f,
                "unknown format '{name}' (available: {})",
                available.join(", ")
            ),
            FormatError::Encode { format, message } => {
                write!(f, "cannot write {format} output: {message}")
            }
        }
    }
}

impl std::error::Error for FormatError {}

/// A way of writing a parsed document out as text.
pub trait Formatter: Send + Sync {
    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str;

    /// Render `doc`. Renderers without options of their own ignore `output`.
    fn render(&self, doc: &Document, output: &OutputConfig) -> Result<String, FormatError>;
}

/// The renderers known to the command line tool, in listing order.
pub struct FormatRegistry {
    output: OutputConfig,
    formatters: Vec<Box<dyn Formatter>>,
}

impl FormatRegistry {
    /// A registry holding every built-in renderer, configured by `output`.
    pub fn new(output: OutputConfig) -> Self {
        let mut registry = Self::empty(output);
        registry.register(super::HtmlFormatter);
        registry.register(super::TreevizFormatter);
        registry.register(super::JsonFormatter);
        registry.register(super::YamlFormatter);
        registry
    }

    pub fn empty(output: OutputConfig) -> Self {
        Self {
            output,
            formatters: Vec::new(),
        }
    }

    /// Add a renderer, taking the place of one registered under the same name.
    pub fn register<F: Formatter + 'static>(&mut self, formatter: F) {
        let boxed: Box<dyn Formatter> = Box::new(formatter);
        match self.position(boxed.name()) {
            Some(at) => self.formatters[at] = boxed,
            None => self.formatters.push(boxed),
        }
    }

    pub fn output(&self) -> &OutputConfig {
        &self.output
    }

    pub fn get(&self, name: &str) -> Option<&dyn Formatter> {
        self.position(name).map(|at| self.formatters[at].as_ref())
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.formatters.iter().map(|f| f.name()).collect()
    }

    /// Render `doc` with the renderer called `name`.
    pub fn render(&self, doc: &Document, name: &str) -> Result<String, FormatError> {
        let formatter = self.get(name).ok_or_else(|| FormatError::UnknownFormat {
            name: name.to_string(),
            available: self.names(),
        })?;
        formatter.render(doc, &self.output)
    }

    /// Render `doc` with the format named in the output settings.
    pub fn render_default(&self, doc: &Document) -> Result<String, FormatError> {
        self.render(doc, &self.output.format)
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.formatters.iter().position(|f| f.name() == name)
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::new(OutputConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::org::parsing::parse_document;

    struct BlockCount;

    impl Formatter for BlockCount {
        fn name(&self) -> &'static str {
            "count"
        }
        fn description(&self) -> &'static str {
            "Number of top-level blocks"
        }
        fn render(&self, doc: &Document, _output: &OutputConfig) -> Result<String, FormatError> {
            Ok(doc.children.len().to_string())
        }
    }

    #[test]
    fn builtins_are_listed_in_order() {
        let registry = FormatRegistry::default();
        assert_eq!(registry.names(), vec!["html", "treeviz", "json", "yaml"]);
    }

    #[test]
    fn register_adds_then_replaces() {
        let mut registry = FormatRegistry::empty(OutputConfig::default());
        registry.register(BlockCount);
        registry.register(BlockCount);

        assert_eq!(registry.names(), vec!["count"]);
        let doc = parse_document("one\n\ntwo\n");
        assert_eq!(registry.render(&doc, "count"), Ok("2".to_string()));
    }

    #[test]
    fn unknown_format_lists_what_exists() {
        let registry = FormatRegistry::default();
        let err = registry.render(&Document::default(), "pdf").unwrap_err();
        assert_eq!(
            err.to_string(),
            "unknown format 'pdf' (available: html, treeviz, json, yaml)"
        );
    }

    #[test]
    fn default_format_comes_from_output_settings() {
        let output = OutputConfig {
            format: "treeviz".to_string(),
            ..OutputConfig::default()
        };
        let registry = FormatRegistry::new(output);
        let doc = parse_document("Hello\n");
        assert_eq!(
            registry.render_default(&doc),
            registry.render(&doc, "treeviz")
        );
    }

    #[test]
    fn output_settings_reach_the_renderer() {
        let doc = parse_document("Text[fn:n].\n\n[fn:n] Note.\n");
        let hidden = FormatRegistry::new(OutputConfig {
            show_footnotes: false,
            ..OutputConfig::default()
        });
        assert!(!hidden.render(&doc, "html").unwrap().contains("org-footnotes"));
        assert!(FormatRegistry::default()
            .render(&doc, "html")
            .unwrap()
            .contains("org-footnotes"));
    }
}
