//! Parsing module
//!
//!     Turns source text into a [Document]:
//!
//!         1. Lexing: split the text into lines and classify each one. See
//!            [lexing](crate::org::lexing).
//!         2. Block parsing: the [engine] feeds lines through a stack of open blocks, each
//!            deciding with the rules in [blocks] whether it takes the line, hands it to a new
//!            child or closes.
//!         3. Inline tokenizing: when a markup-bearing block closes, its text goes through the
//!            [inline tokenizer](crate::org::inlines).
//!
//!     Parsing never fails. Unknown lines are paragraphs, unterminated blocks run to the end of
//!     the input, and the result is always a document, possibly an empty one.
//!
//! Testing
//!
//!     See the [testing module](crate::org::testing) for fixture loading and the fluent AST
//!     assertions used by the integration tests.

pub(crate) mod blocks;
pub mod engine;

pub use engine::Parser;

use crate::org::ast::Document;
use crate::org::config::ParserConfig;

/// Parse source text with the default configuration.
pub fn parse_document(source: &str) -> Document {
    Parser::default().parse(source)
}

/// Parse source text with the given configuration.
pub fn parse_with_config(source: &str, config: &ParserConfig) -> Document {
    Parser::new(config.clone()).parse(source)
}

/// Parse already split lines with the default configuration.
pub fn parse_lines<S: AsRef<str>>(lines: &[S]) -> Document {
    Parser::default().parse_lines(lines)
}
