//! AST traits - Common interfaces for uniform node access
//!
//! [Visitor] is the contract renderers consume: one enter/leave pair per block kind, plus a
//! hook for inline nodes. Traversal order is document order, children before the matching
//! `leave_*` call.

use super::elements::inlines::InlineNode;
use super::elements::{
    DefinitionItem, DefinitionList, DelimitedBlock, Document, FootnoteDefinition, IgnoredLine,
    ListItem, OrderedItem, OrderedList, Paragraph, UnorderedList,
};

/// Visitor trait for traversing the AST
///
/// Default implementations are empty, so you only need to override the methods you care about.
///
/// ```ignore
/// struct LinkCollector(Vec<String>);
///
/// impl Visitor for LinkCollector {
///     fn visit_inline(&mut self, node: &InlineNode) {
///         if let InlineNode::Link(link) = node {
///             self.0.push(link.url.clone());
///         }
///     }
/// }
/// ```
pub trait Visitor {
    fn visit_document(&mut self, _document: &Document) {}
    fn leave_document(&mut self, _document: &Document) {}

    fn visit_unordered_list(&mut self, _list: &UnorderedList) {}
    fn leave_unordered_list(&mut self, _list: &UnorderedList) {}

    fn visit_ordered_list(&mut self, _list: &OrderedList) {}
    fn leave_ordered_list(&mut self, _list: &OrderedList) {}

    fn visit_definition_list(&mut self, _list: &DefinitionList) {}
    fn leave_definition_list(&mut self, _list: &DefinitionList) {}

    fn visit_list_item(&mut self, _item: &ListItem) {}
    fn leave_list_item(&mut self, _item: &ListItem) {}

    fn visit_ordered_item(&mut self, _item: &OrderedItem) {}
    fn leave_ordered_item(&mut self, _item: &OrderedItem) {}

    /// Called before the term's inline nodes are visited.
    fn visit_definition_item(&mut self, _item: &DefinitionItem) {}
    /// Called between the term and the item's children.
    fn visit_definition_body(&mut self, _item: &DefinitionItem) {}
    fn leave_definition_item(&mut self, _item: &DefinitionItem) {}

    fn visit_paragraph(&mut self, _paragraph: &Paragraph) {}
    fn leave_paragraph(&mut self, _paragraph: &Paragraph) {}

    fn visit_ignored_line(&mut self, _line: &IgnoredLine) {}

    fn visit_footnote_definition(&mut self, _footnote: &FootnoteDefinition) {}
    fn leave_footnote_definition(&mut self, _footnote: &FootnoteDefinition) {}

    fn visit_delimited_block(&mut self, _block: &DelimitedBlock) {}
    fn leave_delimited_block(&mut self, _block: &DelimitedBlock) {}

    /// Inline nodes. Emphasis children are visited between this call and [Visitor::leave_inline].
    fn visit_inline(&mut self, _node: &InlineNode) {}
    fn leave_inline(&mut self, _node: &InlineNode) {}
}

/// Common interface for all AST nodes
pub trait AstNode {
    fn node_type(&self) -> &'static str;
    fn display_label(&self) -> String;

    /// Accept a visitor for traversing this node and its children
    fn accept(&self, visitor: &mut dyn Visitor);
}

/// Visit an inline forest in order.
pub fn visit_inlines(visitor: &mut dyn Visitor, content: &[InlineNode]) {
    for node in content {
        visitor.visit_inline(node);
        if let InlineNode::Emph { children, .. } = node {
            visit_inlines(visitor, children);
        }
        visitor.leave_inline(node);
    }
}

/// Helper function to visit all children in a node slice
pub fn visit_children<T: AstNode>(visitor: &mut dyn Visitor, items: &[T]) {
    for item in items {
        item.accept(visitor);
    }
}
