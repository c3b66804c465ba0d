//! AST for org content
//!
//!     The tree handed to renderers once a parse completes. It is built bottom-up during a
//!     single pass and never mutated afterwards.
//!
//!     - [elements]: the block and inline node types.
//!     - [footnotes]: the registry the document root owns.
//!     - [traits]: [AstNode] for uniform access and the [Visitor] renderers implement.
//!     - [snapshot]: a normalized, serializable view of the tree used by the output formats.

pub mod elements;
pub mod footnotes;
pub mod snapshot;
pub mod traits;

pub use elements::{
    blocks_text, plain_text, Block, DefinitionItem, DefinitionList, DelimitedBlock, Document,
    EmphKind, FootnoteDefinition, IgnoredLine, InlineContent, InlineNode, Link, LinkKind,
    ListItem, OrderedItem, OrderedList, Paragraph, UnorderedList,
};
pub use footnotes::{Footnote, FootnoteRegistry};
pub use snapshot::{snapshot_from_block, snapshot_from_document, AstSnapshot};
pub use traits::{visit_children, visit_inlines, AstNode, Visitor};
