//! AST element definitions
//!
//!     Blocks come in two families.
//!
//!     Containers hold other blocks and have no text of their own: the document root, the three
//!     list kinds and their items. A list's children are always items of its own kind, and an
//!     item's children are ordinary blocks, which is how nesting happens.
//!
//!     Content blocks hold source lines: paragraphs, ignored lines, footnote definitions and
//!     delimited blocks. Markup-bearing ones also carry the inline content built from those
//!     lines when the block closed.

pub mod block;
pub mod delimited;
pub mod document;
pub mod footnote;
pub mod inlines;
pub mod list;
pub mod paragraph;

pub use block::{blocks_text, Block};
pub use delimited::DelimitedBlock;
pub use document::Document;
pub use footnote::FootnoteDefinition;
pub use inlines::{plain_text, EmphKind, InlineContent, InlineNode, Link, LinkKind};
pub use list::{DefinitionItem, DefinitionList, ListItem, OrderedItem, OrderedList, UnorderedList};
pub use paragraph::{IgnoredLine, Paragraph};
