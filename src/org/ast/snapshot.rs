//! AST Snapshot - a normalized intermediate representation of the AST tree
//!
//! This module provides a canonical, format-agnostic representation of the AST
//! suitable for serialization to any output format (JSON, YAML, treeviz, etc.)
//!
//! The snapshot captures the complete tree structure with node types, labels,
//! attributes, and children, inline nodes included, so that each serializer only
//! deals with presentation. Serializers should consume [snapshot_from_document]
//! rather than walking the AST themselves.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::elements::{
    Block, DefinitionItem, DelimitedBlock, Document, InlineNode, ListItem, OrderedItem,
};
use super::footnotes::FootnoteRegistry;
use super::traits::AstNode;

/// A snapshot of an AST node in a normalized, serializable form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AstSnapshot {
    /// The type of node (e.g., "Paragraph", "OrderedList", "Bold")
    pub node_type: String,

    /// The primary label or text content of the node
    pub label: String,

    /// Additional attributes specific to the node type
    #[serde(skip_serializing_if = "BTreeMap::is_empty", default)]
    pub attributes: BTreeMap<String, String>,

    /// Child nodes in the tree
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub children: Vec<AstSnapshot>,
}

impl AstSnapshot {
    pub fn new(node_type: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            node_type: node_type.into(),
            label: label.into(),
            attributes: BTreeMap::new(),
            children: Vec::new(),
        }
    }

    pub fn with_attribute(mut self, key: &str, value: impl ToString) -> Self {
        self.attributes.insert(key.to_string(), value.to_string());
        self
    }

    pub fn with_child(mut self, child: AstSnapshot) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = AstSnapshot>) -> Self {
        self.children.extend(children);
        self
    }
}

/// Build the snapshot of a whole document.
///
/// Blocks come first, in source order. A non-empty footnote registry is appended as a last
/// `Footnotes` child holding one `Footnote` per entry, in ordinal order.
pub fn snapshot_from_document(doc: &Document) -> AstSnapshot {
    let mut root = AstSnapshot::new(doc.node_type(), doc.display_label())
        .with_children(doc.children.iter().map(|b| snapshot_from_block(b, &doc.footnotes)));
    if !doc.footnotes.is_empty() {
        root = root.with_child(snapshot_from_footnotes(&doc.footnotes));
    }
    root
}

pub fn snapshot_from_block(block: &Block, footnotes: &FootnoteRegistry) -> AstSnapshot {
    let base = AstSnapshot::new(block.node_type(), block.display_label());
    match block {
        Block::UnorderedList(list) => base
            .with_attribute("indent", list.indent)
            .with_children(list.items.iter().map(|i| snapshot_list_item(i, footnotes))),
        Block::OrderedList(list) => base
            .with_attribute("indent", list.indent)
            .with_attribute("start", list.start)
            .with_children(list.items.iter().map(|i| snapshot_ordered_item(i, footnotes))),
        Block::DefinitionList(list) => base
            .with_attribute("indent", list.indent)
            .with_children(
                list.items
                    .iter()
                    .map(|i| snapshot_definition_item(i, footnotes)),
            ),
        Block::Paragraph(p) => base
            .with_attribute("indent", p.indent)
            .with_children(snapshot_inlines(&p.inlines, footnotes)),
        Block::IgnoredLine(_) => base,
        Block::FootnoteDefinition(f) => base
            .with_attribute("name", &f.name)
            .with_children(snapshot_inlines(&f.inlines, footnotes)),
        Block::Delimited(d) => snapshot_delimited(base, d, footnotes),
    }
}

fn snapshot_delimited(
    base: AstSnapshot,
    block: &DelimitedBlock,
    footnotes: &FootnoteRegistry,
) -> AstSnapshot {
    let mut snapshot = base
        .with_attribute("indent", block.indent)
        .with_attribute("terminated", block.terminated);
    if let Some(language) = &block.language {
        snapshot = snapshot.with_attribute("language", language);
    }
    match &block.inlines {
        Some(inlines) => snapshot.with_children(snapshot_inlines(inlines, footnotes)),
        None => snapshot.with_children(
            block
                .lines
                .iter()
                .map(|line| AstSnapshot::new("Line", line.as_str())),
        ),
    }
}

fn snapshot_list_item(item: &ListItem, footnotes: &FootnoteRegistry) -> AstSnapshot {
    AstSnapshot::new(item.node_type(), item.display_label())
        .with_children(item.children.iter().map(|b| snapshot_from_block(b, footnotes)))
}

fn snapshot_ordered_item(item: &OrderedItem, footnotes: &FootnoteRegistry) -> AstSnapshot {
    AstSnapshot::new(item.node_type(), item.display_label())
        .with_attribute("number", item.number)
        .with_children(item.children.iter().map(|b| snapshot_from_block(b, footnotes)))
}

fn snapshot_definition_item(item: &DefinitionItem, footnotes: &FootnoteRegistry) -> AstSnapshot {
    let title = AstSnapshot::new("Term", item.title_text())
        .with_children(snapshot_inlines(&item.title, footnotes));
    AstSnapshot::new(item.node_type(), item.display_label())
        .with_child(title)
        .with_children(item.children.iter().map(|b| snapshot_from_block(b, footnotes)))
}

pub fn snapshot_inlines(content: &[InlineNode], footnotes: &FootnoteRegistry) -> Vec<AstSnapshot> {
    content
        .iter()
        .map(|node| snapshot_inline(node, footnotes))
        .collect()
}

fn snapshot_inline(node: &InlineNode, footnotes: &FootnoteRegistry) -> AstSnapshot {
    match node {
        InlineNode::Raw(text) | InlineNode::Code(text) | InlineNode::Verbatim(text) => {
            AstSnapshot::new(node.node_type(), text.as_str())
        }
        InlineNode::Emph { children, .. } => AstSnapshot::new(node.node_type(), "")
            .with_children(snapshot_inlines(children, footnotes)),
        InlineNode::Link(link) => AstSnapshot::new(node.node_type(), link.description.as_str())
            .with_attribute("url", &link.url)
            .with_attribute("kind", format!("{:?}", link.kind)),
        InlineNode::FootnoteRef(name) => {
            let snapshot = AstSnapshot::new(node.node_type(), name.as_str());
            match footnotes.ordinal(name) {
                Some(ordinal) => snapshot.with_attribute("ordinal", ordinal),
                None => snapshot,
            }
        }
    }
}

fn snapshot_from_footnotes(footnotes: &FootnoteRegistry) -> AstSnapshot {
    AstSnapshot::new("Footnotes", format!("{} footnotes", footnotes.len())).with_children(
        footnotes.iter().map(|(name, footnote)| {
            let entry =
                AstSnapshot::new("Footnote", name).with_attribute("ordinal", footnote.ordinal);
            match &footnote.body {
                Some(body) => entry.with_children(snapshot_inlines(body, footnotes)),
                None => entry.with_attribute("undefined", true),
            }
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::org::ast::{EmphKind, FootnoteDefinition, Link, Paragraph};

    #[test]
    fn snapshot_includes_inline_tree() {
        let para = Paragraph::new(
            0,
            vec!["a *b* [[http://x][y]]".to_string()],
            vec![
                InlineNode::raw("a "),
                InlineNode::emph(EmphKind::Bold, vec![InlineNode::raw("b")]),
                InlineNode::raw(" "),
                InlineNode::Link(Link::new("http://x", "y")),
            ],
        );
        let doc = Document::new(vec![Block::Paragraph(para)], FootnoteRegistry::new());
        let snapshot = snapshot_from_document(&doc);

        assert_eq!(snapshot.node_type, "Document");
        let para = &snapshot.children[0];
        assert_eq!(para.node_type, "Paragraph");
        assert_eq!(para.label, "a b y");
        let kinds: Vec<_> = para.children.iter().map(|c| c.node_type.as_str()).collect();
        assert_eq!(kinds, vec!["Raw", "Bold", "Raw", "Link"]);
        assert_eq!(para.children[3].attributes["url"], "http://x");
        assert_eq!(para.children[3].attributes["kind"], "Http");
    }

    #[test]
    fn footnote_definition_carries_its_body() {
        let definition = FootnoteDefinition {
            name: "n".to_string(),
            indent: 0,
            lines: vec!["[fn:n] a /b/".to_string()],
            inlines: vec![
                InlineNode::raw("a "),
                InlineNode::emph(EmphKind::Italic, vec![InlineNode::raw("b")]),
            ],
        };
        let doc = Document::new(
            vec![Block::FootnoteDefinition(definition)],
            FootnoteRegistry::new(),
        );
        let snapshot = snapshot_from_document(&doc);

        let node = &snapshot.children[0];
        assert_eq!(node.attributes["name"], "n");
        let kinds: Vec<_> = node.children.iter().map(|c| c.node_type.as_str()).collect();
        assert_eq!(kinds, vec!["Raw", "Italic"]);
    }

    #[test]
    fn footnotes_are_appended_last() {
        let mut footnotes = FootnoteRegistry::new();
        footnotes.reference("1");
        let doc = Document::new(Vec::new(), footnotes);
        let snapshot = snapshot_from_document(&doc);
        assert_eq!(snapshot.children.len(), 1);
        let entry = &snapshot.children[0].children[0];
        assert_eq!(entry.node_type, "Footnote");
        assert_eq!(entry.attributes["undefined"], "true");
    }
}
