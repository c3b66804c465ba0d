//! Delimited block element
//!
//! Content between `#+BEGIN_X` and `#+END_X` markers, X being one of VERSE, QUOTE, CENTER,
//! EXAMPLE, SRC, HTML or COMMENT.
//!
//! Example, src, html and comment blocks are verbatim: their lines are kept exactly, comment
//! lines included, and never tokenized. Verse, quote and center blocks drop `#` comment lines
//! and carry inline content built from their body.
//!
//! A block whose end marker never shows up runs to the end of the input. It is still a normal
//! block, with `terminated` left false.

use crate::org::lexing::DelimitedKind;

use super::super::traits::{visit_inlines, AstNode, Visitor};
use super::inlines::InlineContent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DelimitedBlock {
    pub kind: DelimitedKind,
    /// Indent of the begin marker.
    pub indent: usize,
    /// Body lines, markers excluded.
    pub lines: Vec<String>,
    /// Inline content of markup-bearing kinds, `None` for verbatim kinds.
    pub inlines: Option<InlineContent>,
    /// Language of a src block.
    pub language: Option<String>,
    /// Whether the end marker was seen.
    pub terminated: bool,
}

impl DelimitedBlock {
    pub fn is_verbatim(&self) -> bool {
        self.kind.is_verbatim()
    }

    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

impl AstNode for DelimitedBlock {
    fn node_type(&self) -> &'static str {
        match self.kind {
            DelimitedKind::Verse => "VerseBlock",
            DelimitedKind::Quote => "QuoteBlock",
            DelimitedKind::Center => "CenterBlock",
            DelimitedKind::Example => "ExampleBlock",
            DelimitedKind::Src => "SrcBlock",
            DelimitedKind::Html => "HtmlBlock",
            DelimitedKind::Comment => "CommentBlock",
        }
    }

    fn display_label(&self) -> String {
        match &self.language {
            Some(language) => format!("{} ({} lines)", language, self.lines.len()),
            None => format!("{} lines", self.lines.len()),
        }
    }

    fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_delimited_block(self);
        if let Some(inlines) = &self.inlines {
            visit_inlines(visitor, inlines);
        }
        visitor.leave_delimited_block(self);
    }
}
