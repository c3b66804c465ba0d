//! Parser engine - the document driver
//!
//!     Feeds lines one at a time through an explicit stack of open blocks. The root sits at the
//!     bottom and is never popped before the end of input; the innermost open block sits on
//!     top and is always offered a line first.
//!
//!     For every line:
//!
//!         1. Classify it once.
//!         2. While the top block rejects it, pop the top, finalize it and hand the result to
//!            the new top (its parent).
//!         3. The accepting block consumes the line. If it delegates, push the new child and
//!            let it consume the delegated line, repeating until no one delegates.
//!
//!     At the end of input every open block is finalized, innermost first, and the root's
//!     children become the document.
//!
//!     Nesting is decided by indentation alone, never by lookahead.

use tracing::debug;

use crate::org::ast::{Document, FootnoteRegistry};
use crate::org::config::ParserConfig;
use crate::org::inlines::InlineTokenizer;
use crate::org::lexing::{classify_line, split_lines, LineClassifier, LineKind};

use super::blocks::{BlockContext, Closed, OpenBlock};

/// A reusable parser bound to one configuration.
#[derive(Debug, Clone)]
pub struct Parser {
    config: ParserConfig,
    tokenizer: InlineTokenizer,
}

impl Parser {
    pub fn new(config: ParserConfig) -> Self {
        let tokenizer = InlineTokenizer::new(&config);
        Self { config, tokenizer }
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    pub fn tokenizer(&self) -> &InlineTokenizer {
        &self.tokenizer
    }

    /// Parse source text. Accepts `\n` and `\r\n` line endings.
    pub fn parse(&self, source: &str) -> Document {
        self.parse_lines(&split_lines(source))
    }

    /// Parse lines that have already been split, without terminators.
    pub fn parse_lines<S: AsRef<str>>(&self, lines: &[S]) -> Document {
        let mut footnotes = FootnoteRegistry::new();
        let mut classifier = LineClassifier::new();
        let mut ctx = BlockContext {
            tab_width: self.config.tab_width,
            tokenizer: &self.tokenizer,
            footnotes: &mut footnotes,
            classifier: &mut classifier,
        };

        let mut stack = vec![OpenBlock::root()];
        let lines = lines
            .iter()
            .map(|line| line.as_ref())
            .skip_while(|line| classify_line(line) == LineKind::Blank);

        for line in lines {
            let kind = ctx.classifier.classify(line);
            while !top(&stack).accept(line, kind, ctx.tab_width) {
                close_top(&mut stack, &mut ctx);
            }

            let mut delegation = top_mut(&mut stack).consume(line, kind, &mut ctx);
            while let Some(next) = delegation {
                debug!(block = next.block.name(), line = %next.line, "open");
                stack.push(next.block);
                let kind = ctx.classifier.classify(&next.line);
                delegation = top_mut(&mut stack).consume(&next.line, kind, &mut ctx);
            }
        }

        while stack.len() > 1 {
            close_top(&mut stack, &mut ctx);
        }
        let children = match stack.pop().map(|root| root.finalize(&mut ctx)) {
            Some(Closed::Root(children)) => children,
            other => unreachable!("the stack bottom is the root, found {other:?}"),
        };

        Document::new(children, footnotes)
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new(ParserConfig::default())
    }
}

fn top(stack: &[OpenBlock]) -> &OpenBlock {
    match stack.last() {
        Some(block) => block,
        None => unreachable!("the root is only popped after the last line"),
    }
}

fn top_mut(stack: &mut [OpenBlock]) -> &mut OpenBlock {
    match stack.last_mut() {
        Some(block) => block,
        None => unreachable!("the root is only popped after the last line"),
    }
}

/// Pop the innermost block, finalize it and give it to its parent.
fn close_top(stack: &mut Vec<OpenBlock>, ctx: &mut BlockContext<'_>) {
    if stack.len() < 2 {
        unreachable!("the root rejected a line");
    }
    let Some(block) = stack.pop() else {
        unreachable!("stack has at least two blocks");
    };
    debug!(block = block.name(), "close");
    let closed = block.finalize(ctx);
    top_mut(stack).adopt(closed);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::org::ast::Block;

    #[test]
    fn empty_input_gives_empty_document() {
        let parser = Parser::default();
        let doc = parser.parse("");
        assert!(doc.is_empty());
        assert!(doc.footnotes.is_empty());

        let doc = parser.parse("\n\n   \n");
        assert!(doc.is_empty());
    }

    #[test]
    fn blank_lines_between_paragraphs_make_no_blocks() {
        let doc = Parser::default().parse("one\n\n\n\ntwo\n");
        assert_eq!(doc.children.len(), 2);
        assert!(doc.children.iter().all(|b| b.as_paragraph().is_some()));
    }

    #[test]
    fn nested_list_closes_on_dedent() {
        let doc = Parser::default().parse("- a\n  - b\n- c\n");
        assert_eq!(doc.children.len(), 1);
        let list = doc.children[0].as_unordered_list().unwrap();
        assert_eq!(list.items.len(), 2);
        let nested = list.items[0].children[1].as_unordered_list().unwrap();
        assert_eq!(nested.indent, 2);
        assert_eq!(nested.items[0].text(), "b");
        assert_eq!(list.items[1].text(), "c");
    }

    #[test]
    fn lines_may_come_pre_split() {
        let parser = Parser::default();
        let from_lines = parser.parse_lines(&["#+BEGIN_SRC sh", "ls", "#+END_SRC"]);
        let from_text = parser.parse("#+BEGIN_SRC sh\nls\n#+END_SRC\n");
        assert_eq!(from_lines, from_text);
        assert!(matches!(&from_lines.children[0], Block::Delimited(d) if d.terminated));
    }

    #[test]
    fn tab_width_drives_nesting() {
        let config = ParserConfig {
            tab_width: 2,
            ..ParserConfig::default()
        };
        // With tabs at two columns the nested bullet sits at the item's own text column.
        let doc = Parser::new(config).parse("- a\n\t- b\n");
        let list = doc.children[0].as_unordered_list().unwrap();
        assert_eq!(list.items.len(), 1);
        let nested = list.items[0].children[1].as_unordered_list().unwrap();
        assert_eq!(nested.indent, 2);
    }
}
