//! Testing utilities for AST assertions
//!
//! # Parser Testing Guidelines
//!
//! Document level tests use two tools together:
//!
//! 1. **[Fixture]** - vetted `.org` samples under `tests/fixtures/`
//! 2. **[assert_ast](fn@assert_ast)** - fluent verification of the whole tree shape
//!
//! ## Fixtures
//!
//! Small inline sources are fine when a test targets one construct. Anything mixing several
//! blocks goes in a fixture, so changes to the markup rules only touch the samples.
//!
//! ## Fluent assertions
//!
//! Matching by hand on nested lists reads like this:
//!
//! ```rust-example
//! match &doc.children[0] {
//!     Block::UnorderedList(list) => {
//!         assert_eq!(list.items.len(), 2);
//!         match &list.items[0].children[0] {
//!             Block::Paragraph(p) => assert_eq!(plain_text(&p.inlines), "one"),
//!             _ => panic!("Expected paragraph"),
//!         }
//!     }
//!     _ => panic!("Expected list"),
//! }
//! ```
//!
//! With `assert_ast` the same test becomes:
//!
//! ```rust-example
//! use orgtext::org::testing::assert_ast;
//!
//! assert_ast(&doc).item(0, |item| {
//!     item.assert_unordered_list()
//!         .item_count(2)
//!         .item(0, |li| {
//!             li.text("one");
//!         });
//! });
//! ```
//!
//! Failures name the path to the offending node, e.g. `items[0].items[1].children[0]`.

mod ast_assertions;
mod fixtures;

pub use ast_assertions::{
    assert_ast, BlockAssertion, DelimitedAssertion, DocumentAssertion, FootnoteAssertion,
    FootnoteDefinitionAssertion, IgnoredLineAssertion, InlineAssertion, InlinesAssertion,
    ItemAssertion, ListAssertion, ParagraphAssertion,
};
pub use fixtures::Fixture;
