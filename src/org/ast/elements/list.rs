//! List elements
//!
//! Three list flavors share one shape: a container holding items, each item holding blocks.
//!
//!     - Unordered:  `- `, `+ ` or `* ` bullets.
//!     - Ordered:    `1. ` or `1) `, with an optional `[@N]` counter reset on the first item.
//!     - Definition: `- term :: description`.
//!
//! All items of one list share the list's indent. A bullet at a deeper indent opens a nested
//! list inside the current item; a bullet at a shallower indent closes the list.
//!
//! Examples:
//!         - Bread
//!         - Milk
//!           1. whole
//!           2. skimmed
//!         - Butter :: salted, ideally

use super::super::traits::{visit_children, visit_inlines, AstNode, Visitor};
use super::block::{blocks_text, Block};
use super::inlines::{plain_text, InlineContent};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnorderedList {
    pub indent: usize,
    pub items: Vec<ListItem>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderedList {
    pub indent: usize,
    /// Number of the first item, or its `[@N]` counter reset.
    pub start: u32,
    pub items: Vec<OrderedItem>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefinitionList {
    pub indent: usize,
    pub items: Vec<DefinitionItem>,
}

/// An unordered list entry.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListItem {
    pub children: Vec<Block>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderedItem {
    /// The number displayed for this entry.
    pub number: u32,
    pub children: Vec<Block>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefinitionItem {
    /// The term, tokenized as soon as the item opens.
    pub title: InlineContent,
    pub children: Vec<Block>,
}

impl ListItem {
    pub fn new(children: Vec<Block>) -> Self {
        Self { children }
    }

    /// Text of every block under this item.
    pub fn text(&self) -> String {
        blocks_text(&self.children)
    }
}

impl OrderedItem {
    pub fn new(number: u32, children: Vec<Block>) -> Self {
        Self { number, children }
    }

    pub fn text(&self) -> String {
        blocks_text(&self.children)
    }
}

impl DefinitionItem {
    pub fn new(title: InlineContent, children: Vec<Block>) -> Self {
        Self { title, children }
    }

    pub fn title_text(&self) -> String {
        plain_text(&self.title)
    }

    pub fn text(&self) -> String {
        blocks_text(&self.children)
    }
}

impl AstNode for UnorderedList {
    fn node_type(&self) -> &'static str {
        "UnorderedList"
    }
    fn display_label(&self) -> String {
        format!("{} items", self.items.len())
    }
    fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_unordered_list(self);
        visit_children(visitor, &self.items);
        visitor.leave_unordered_list(self);
    }
}

impl AstNode for OrderedList {
    fn node_type(&self) -> &'static str {
        "OrderedList"
    }
    fn display_label(&self) -> String {
        format!("{} items from {}", self.items.len(), self.start)
    }
    fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_ordered_list(self);
        visit_children(visitor, &self.items);
        visitor.leave_ordered_list(self);
    }
}

impl AstNode for DefinitionList {
    fn node_type(&self) -> &'static str {
        "DefinitionList"
    }
    fn display_label(&self) -> String {
        format!("{} items", self.items.len())
    }
    fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_definition_list(self);
        visit_children(visitor, &self.items);
        visitor.leave_definition_list(self);
    }
}

impl AstNode for ListItem {
    fn node_type(&self) -> &'static str {
        "ListItem"
    }
    fn display_label(&self) -> String {
        first_line(&self.text())
    }
    fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_list_item(self);
        visit_children(visitor, &self.children);
        visitor.leave_list_item(self);
    }
}

impl AstNode for OrderedItem {
    fn node_type(&self) -> &'static str {
        "OrderedItem"
    }
    fn display_label(&self) -> String {
        format!("{}. {}", self.number, first_line(&self.text()))
    }
    fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_ordered_item(self);
        visit_children(visitor, &self.children);
        visitor.leave_ordered_item(self);
    }
}

impl AstNode for DefinitionItem {
    fn node_type(&self) -> &'static str {
        "DefinitionItem"
    }
    fn display_label(&self) -> String {
        self.title_text()
    }
    fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_definition_item(self);
        visit_inlines(visitor, &self.title);
        visitor.visit_definition_body(self);
        visit_children(visitor, &self.children);
        visitor.leave_definition_item(self);
    }
}

fn first_line(text: &str) -> String {
    text.lines().next().unwrap_or("").trim().to_string()
}
