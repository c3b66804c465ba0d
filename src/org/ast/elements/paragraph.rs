//! Paragraph and ignored-line elements
//!
//! A paragraph is a run of prose lines. Its inline content is built once, when the paragraph
//! is closed, from its lines joined with newlines.
//!
//! An ignored line is a comment (`# text`) or keyword line (`#+TITLE: text`). It is kept in the
//! tree so renderers can emit it as a comment.

use super::super::traits::{visit_inlines, AstNode, Visitor};
use super::inlines::{plain_text, InlineContent};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paragraph {
    /// Indent of the owning container, fixed when the paragraph opens.
    pub indent: usize,
    pub lines: Vec<String>,
    pub inlines: InlineContent,
}

impl Paragraph {
    pub fn new(indent: usize, lines: Vec<String>, inlines: InlineContent) -> Self {
        Self {
            indent,
            lines,
            inlines,
        }
    }

    /// The raw source lines joined with newlines.
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

impl AstNode for Paragraph {
    fn node_type(&self) -> &'static str {
        "Paragraph"
    }

    fn display_label(&self) -> String {
        plain_text(&self.inlines).trim().to_string()
    }

    fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_paragraph(self);
        visit_inlines(visitor, &self.inlines);
        visitor.leave_paragraph(self);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IgnoredLine {
    /// The line with its leading comment hash removed.
    pub content: String,
}

impl IgnoredLine {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
}

impl AstNode for IgnoredLine {
    fn node_type(&self) -> &'static str {
        "IgnoredLine"
    }

    fn display_label(&self) -> String {
        self.content.clone()
    }

    fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_ignored_line(self);
    }
}
