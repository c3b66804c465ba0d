//! Block sum type
//!
//! The closed set of blocks that can appear in a document or inside a list item. Lists only
//! hold their own item type, so an item can never end up directly under a document or a
//! paragraph directly under a list.

use super::super::traits::{AstNode, Visitor};
use super::delimited::DelimitedBlock;
use super::footnote::FootnoteDefinition;
use super::inlines::plain_text;
use super::list::{DefinitionList, OrderedList, UnorderedList};
use super::paragraph::{IgnoredLine, Paragraph};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    UnorderedList(UnorderedList),
    OrderedList(OrderedList),
    DefinitionList(DefinitionList),
    Paragraph(Paragraph),
    IgnoredLine(IgnoredLine),
    FootnoteDefinition(FootnoteDefinition),
    Delimited(DelimitedBlock),
}

impl Block {
    pub fn as_paragraph(&self) -> Option<&Paragraph> {
        match self {
            Block::Paragraph(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_unordered_list(&self) -> Option<&UnorderedList> {
        match self {
            Block::UnorderedList(l) => Some(l),
            _ => None,
        }
    }

    pub fn as_ordered_list(&self) -> Option<&OrderedList> {
        match self {
            Block::OrderedList(l) => Some(l),
            _ => None,
        }
    }

    pub fn as_definition_list(&self) -> Option<&DefinitionList> {
        match self {
            Block::DefinitionList(l) => Some(l),
            _ => None,
        }
    }

    pub fn as_delimited(&self) -> Option<&DelimitedBlock> {
        match self {
            Block::Delimited(d) => Some(d),
            _ => None,
        }
    }

    pub fn as_footnote_definition(&self) -> Option<&FootnoteDefinition> {
        match self {
            Block::FootnoteDefinition(f) => Some(f),
            _ => None,
        }
    }

    pub fn as_ignored_line(&self) -> Option<&IgnoredLine> {
        match self {
            Block::IgnoredLine(i) => Some(i),
            _ => None,
        }
    }
}

impl AstNode for Block {
    fn node_type(&self) -> &'static str {
        match self {
            Block::UnorderedList(l) => l.node_type(),
            Block::OrderedList(l) => l.node_type(),
            Block::DefinitionList(l) => l.node_type(),
            Block::Paragraph(p) => p.node_type(),
            Block::IgnoredLine(i) => i.node_type(),
            Block::FootnoteDefinition(f) => f.node_type(),
            Block::Delimited(d) => d.node_type(),
        }
    }

    fn display_label(&self) -> String {
        match self {
            Block::UnorderedList(l) => l.display_label(),
            Block::OrderedList(l) => l.display_label(),
            Block::DefinitionList(l) => l.display_label(),
            Block::Paragraph(p) => p.display_label(),
            Block::IgnoredLine(i) => i.display_label(),
            Block::FootnoteDefinition(f) => f.display_label(),
            Block::Delimited(d) => d.display_label(),
        }
    }

    fn accept(&self, visitor: &mut dyn Visitor) {
        match self {
            Block::UnorderedList(l) => l.accept(visitor),
            Block::OrderedList(l) => l.accept(visitor),
            Block::DefinitionList(l) => l.accept(visitor),
            Block::Paragraph(p) => p.accept(visitor),
            Block::IgnoredLine(i) => i.accept(visitor),
            Block::FootnoteDefinition(f) => f.accept(visitor),
            Block::Delimited(d) => d.accept(visitor),
        }
    }
}

/// Visible text of a run of blocks, one entry per line.
///
/// Paragraphs and markup-bearing delimited blocks contribute their inline text, verbatim
/// blocks their raw lines, lists the text of every item. Comments and footnote definitions
/// contribute nothing.
pub fn blocks_text(blocks: &[Block]) -> String {
    let mut parts: Vec<String> = Vec::new();
    for block in blocks {
        match block {
            Block::Paragraph(p) => parts.push(plain_text(&p.inlines)),
            Block::Delimited(d) => match &d.inlines {
                Some(inlines) => parts.push(plain_text(inlines)),
                None => parts.push(d.text()),
            },
            Block::UnorderedList(l) => parts.extend(l.items.iter().map(|i| i.text())),
            Block::OrderedList(l) => parts.extend(l.items.iter().map(|i| i.text())),
            Block::DefinitionList(l) => parts.extend(
                l.items
                    .iter()
                    .map(|i| format!("{}\n{}", i.title_text(), i.text())),
            ),
            Block::IgnoredLine(_) | Block::FootnoteDefinition(_) => {}
        }
    }
    parts.join("\n")
}
