//! Footnote definition element
//!
//! `[fn:NAME] text` (or `[NAME] text`) at the start of a line, running until a blank line.
//! Each definition keeps its own tokenized body. The document's
//! [FootnoteRegistry](crate::org::ast::FootnoteRegistry) holds the body that wins when a name
//! is defined more than once.

use super::super::traits::{visit_inlines, AstNode, Visitor};
use super::inlines::InlineContent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FootnoteDefinition {
    pub name: String,
    pub indent: usize,
    /// Source lines, the leading `[fn:NAME]` tag included.
    pub lines: Vec<String>,
    /// The body after the tag.
    pub inlines: InlineContent,
}

impl AstNode for FootnoteDefinition {
    fn node_type(&self) -> &'static str {
        "FootnoteDefinition"
    }

    fn display_label(&self) -> String {
        self.name.clone()
    }

    fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_footnote_definition(self);
        visit_inlines(visitor, &self.inlines);
        visitor.leave_footnote_definition(self);
    }
}
