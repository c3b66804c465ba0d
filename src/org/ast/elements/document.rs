//! Document element
//!
//! The root of a parsed content tree: the top-level blocks in source order and the footnote
//! registry filled while parsing. Once the parser hands a document out, nothing mutates it.

use super::super::footnotes::FootnoteRegistry;
use super::super::traits::{visit_children, AstNode, Visitor};
use super::block::{blocks_text, Block};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Document {
    pub children: Vec<Block>,
    pub footnotes: FootnoteRegistry,
}

impl Document {
    pub fn new(children: Vec<Block>, footnotes: FootnoteRegistry) -> Self {
        Self {
            children,
            footnotes,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn text(&self) -> String {
        blocks_text(&self.children)
    }
}

impl AstNode for Document {
    fn node_type(&self) -> &'static str {
        "Document"
    }

    fn display_label(&self) -> String {
        format!(
            "Document ({} blocks, {} footnotes)",
            self.children.len(),
            self.footnotes.len()
        )
    }

    fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_document(self);
        visit_children(visitor, &self.children);
        visitor.leave_document(self);
    }
}
