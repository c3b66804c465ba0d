//! Fluent assertion API for AST nodes

use crate::org::ast::{
    plain_text, AstNode, Block, DelimitedBlock, Document, EmphKind, Footnote, FootnoteDefinition,
    IgnoredLine, InlineNode, LinkKind, Paragraph,
};
use crate::org::lexing::DelimitedKind;

// ============================================================================
// Entry Point
// ============================================================================

/// Create an assertion builder for a document
pub fn assert_ast(doc: &Document) -> DocumentAssertion<'_> {
    DocumentAssertion { doc }
}

fn summarize_blocks(blocks: &[Block]) -> String {
    blocks
        .iter()
        .map(|b| b.node_type())
        .collect::<Vec<_>>()
        .join(", ")
}

// ============================================================================
// Document Assertions
// ============================================================================

pub struct DocumentAssertion<'a> {
    doc: &'a Document,
}

impl<'a> DocumentAssertion<'a> {
    /// Assert the number of top level blocks
    pub fn item_count(self, expected: usize) -> Self {
        let actual = self.doc.children.len();
        assert_eq!(
            actual,
            expected,
            "Expected {} items, found {} items: [{}]",
            expected,
            actual,
            summarize_blocks(&self.doc.children)
        );
        self
    }

    /// Assert on a specific top level block by index
    pub fn item<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(BlockAssertion<'a>),
    {
        assert!(
            index < self.doc.children.len(),
            "Item index {} out of bounds (document has {} items)",
            index,
            self.doc.children.len()
        );
        assertion(BlockAssertion {
            block: &self.doc.children[index],
            context: format!("items[{}]", index),
        });
        self
    }

    /// Assert the number of registered footnotes, defined or not
    pub fn footnote_count(self, expected: usize) -> Self {
        let actual = self.doc.footnotes.len();
        assert_eq!(
            actual, expected,
            "Expected {} footnotes, found {}",
            expected, actual
        );
        self
    }

    /// Assert the footnote names in ordinal order
    pub fn footnote_order(self, expected: &[&str]) -> Self {
        let actual: Vec<&str> = self.doc.footnotes.iter().map(|(name, _)| name).collect();
        assert_eq!(actual, expected, "Footnote order mismatch");
        self
    }

    /// Assert on the registry entry for a footnote name
    pub fn footnote<F>(self, name: &str, assertion: F) -> Self
    where
        F: FnOnce(FootnoteAssertion<'a>),
    {
        let footnote = self
            .doc
            .footnotes
            .get(name)
            .unwrap_or_else(|| panic!("No footnote named '{}' in the registry", name));
        assertion(FootnoteAssertion {
            footnote,
            context: format!("footnotes[{}]", name),
        });
        self
    }
}

// ============================================================================
// Block Assertions
// ============================================================================

pub struct BlockAssertion<'a> {
    block: &'a Block,
    context: String,
}

impl<'a> BlockAssertion<'a> {
    fn mismatch(&self, expected: &str) -> ! {
        panic!(
            "{}: Expected {}, found {}",
            self.context,
            expected,
            self.block.node_type()
        )
    }

    pub fn assert_paragraph(self) -> ParagraphAssertion<'a> {
        match self.block {
            Block::Paragraph(paragraph) => ParagraphAssertion {
                paragraph,
                context: self.context,
            },
            _ => self.mismatch("Paragraph"),
        }
    }

    pub fn assert_unordered_list(self) -> ListAssertion<'a> {
        match self.block {
            Block::UnorderedList(list) => ListAssertion {
                indent: list.indent,
                start: None,
                items: list
                    .items
                    .iter()
                    .map(|item| ItemView {
                        children: &item.children,
                        number: None,
                        title: None,
                    })
                    .collect(),
                context: self.context,
            },
            _ => self.mismatch("UnorderedList"),
        }
    }

    pub fn assert_ordered_list(self) -> ListAssertion<'a> {
        match self.block {
            Block::OrderedList(list) => ListAssertion {
                indent: list.indent,
                start: Some(list.start),
                items: list
                    .items
                    .iter()
                    .map(|item| ItemView {
                        children: &item.children,
                        number: Some(item.number),
                        title: None,
                    })
                    .collect(),
                context: self.context,
            },
            _ => self.mismatch("OrderedList"),
        }
    }

    pub fn assert_definition_list(self) -> ListAssertion<'a> {
        match self.block {
            Block::DefinitionList(list) => ListAssertion {
                indent: list.indent,
                start: None,
                items: list
                    .items
                    .iter()
                    .map(|item| ItemView {
                        children: &item.children,
                        number: None,
                        title: Some(item.title.as_slice()),
                    })
                    .collect(),
                context: self.context,
            },
            _ => self.mismatch("DefinitionList"),
        }
    }

    pub fn assert_delimited(self) -> DelimitedAssertion<'a> {
        match self.block {
            Block::Delimited(block) => DelimitedAssertion {
                block,
                context: self.context,
            },
            _ => self.mismatch("delimited block"),
        }
    }

    pub fn assert_ignored_line(self) -> IgnoredLineAssertion<'a> {
        match self.block {
            Block::IgnoredLine(line) => IgnoredLineAssertion {
                line,
                context: self.context,
            },
            _ => self.mismatch("IgnoredLine"),
        }
    }

    pub fn assert_footnote_definition(self) -> FootnoteDefinitionAssertion<'a> {
        match self.block {
            Block::FootnoteDefinition(definition) => FootnoteDefinitionAssertion {
                definition,
                context: self.context,
            },
            _ => self.mismatch("FootnoteDefinition"),
        }
    }
}

// ============================================================================
// Paragraph Assertions
// ============================================================================

pub struct ParagraphAssertion<'a> {
    paragraph: &'a Paragraph,
    context: String,
}

impl<'a> ParagraphAssertion<'a> {
    /// Assert the visible text, markup removed
    pub fn text(self, expected: &str) -> Self {
        let actual = plain_text(&self.paragraph.inlines);
        assert_eq!(actual, expected, "{}: Paragraph text mismatch", self.context);
        self
    }

    pub fn text_contains(self, expected: &str) -> Self {
        let actual = plain_text(&self.paragraph.inlines);
        assert!(
            actual.contains(expected),
            "{}: Expected paragraph text to contain '{}', got '{}'",
            self.context,
            expected,
            actual
        );
        self
    }

    pub fn line_count(self, expected: usize) -> Self {
        let actual = self.paragraph.lines.len();
        assert_eq!(
            actual, expected,
            "{}: Expected {} lines, found {}",
            self.context, expected, actual
        );
        self
    }

    pub fn indent(self, expected: usize) -> Self {
        assert_eq!(
            self.paragraph.indent, expected,
            "{}: Paragraph indent mismatch",
            self.context
        );
        self
    }

    pub fn inlines<F>(self, assertion: F) -> Self
    where
        F: FnOnce(InlinesAssertion<'a>),
    {
        assertion(InlinesAssertion {
            nodes: &self.paragraph.inlines,
            context: format!("{}.inlines", self.context),
        });
        self
    }
}

// ============================================================================
// List Assertions
// ============================================================================

/// The parts of a list item the assertions look at, whatever the list kind.
struct ItemView<'a> {
    children: &'a [Block],
    number: Option<u32>,
    title: Option<&'a [InlineNode]>,
}

pub struct ListAssertion<'a> {
    indent: usize,
    start: Option<u32>,
    items: Vec<ItemView<'a>>,
    context: String,
}

impl<'a> ListAssertion<'a> {
    pub fn item_count(self, expected: usize) -> Self {
        assert_eq!(
            self.items.len(),
            expected,
            "{}: Expected {} list items, found {}",
            self.context,
            expected,
            self.items.len()
        );
        self
    }

    pub fn indent(self, expected: usize) -> Self {
        assert_eq!(self.indent, expected, "{}: List indent mismatch", self.context);
        self
    }

    /// Assert the start number of an ordered list
    pub fn start(self, expected: u32) -> Self {
        match self.start {
            Some(actual) => assert_eq!(
                actual, expected,
                "{}: Ordered list start mismatch",
                self.context
            ),
            None => panic!("{}: Only ordered lists have a start number", self.context),
        }
        self
    }

    pub fn item<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(ItemAssertion<'a>),
    {
        let view = self.items.get(index).unwrap_or_else(|| {
            panic!(
                "{}: Item index {} out of bounds (list has {} items)",
                self.context,
                index,
                self.items.len()
            )
        });
        assertion(ItemAssertion {
            children: view.children,
            number: view.number,
            title: view.title,
            context: format!("{}.items[{}]", self.context, index),
        });
        self
    }
}

pub struct ItemAssertion<'a> {
    children: &'a [Block],
    number: Option<u32>,
    title: Option<&'a [InlineNode]>,
    context: String,
}

impl<'a> ItemAssertion<'a> {
    /// Assert the text of the item's first paragraph
    pub fn text(self, expected: &str) -> Self {
        let actual = self
            .children
            .first()
            .and_then(|b| b.as_paragraph())
            .map(|p| plain_text(&p.inlines))
            .unwrap_or_default();
        assert_eq!(actual, expected, "{}: Item text mismatch", self.context);
        self
    }

    pub fn number(self, expected: u32) -> Self {
        assert_eq!(
            self.number,
            Some(expected),
            "{}: Item number mismatch",
            self.context
        );
        self
    }

    /// Assert the visible text of a definition item's term
    pub fn title(self, expected: &str) -> Self {
        match self.title {
            Some(title) => assert_eq!(
                plain_text(title),
                expected,
                "{}: Definition term mismatch",
                self.context
            ),
            None => panic!("{}: Only definition items have a term", self.context),
        }
        self
    }

    pub fn title_inlines<F>(self, assertion: F) -> Self
    where
        F: FnOnce(InlinesAssertion<'a>),
    {
        match self.title {
            Some(nodes) => assertion(InlinesAssertion {
                nodes,
                context: format!("{}.title", self.context),
            }),
            None => panic!("{}: Only definition items have a term", self.context),
        }
        self
    }

    pub fn child_count(self, expected: usize) -> Self {
        assert_eq!(
            self.children.len(),
            expected,
            "{}: Expected {} children, found {}: [{}]",
            self.context,
            expected,
            self.children.len(),
            summarize_blocks(self.children)
        );
        self
    }

    pub fn child<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(BlockAssertion<'a>),
    {
        let block = self.children.get(index).unwrap_or_else(|| {
            panic!(
                "{}: Child index {} out of bounds (item has {} children)",
                self.context,
                index,
                self.children.len()
            )
        });
        assertion(BlockAssertion {
            block,
            context: format!("{}.children[{}]", self.context, index),
        });
        self
    }
}

// ============================================================================
// Delimited Block Assertions
// ============================================================================

pub struct DelimitedAssertion<'a> {
    block: &'a DelimitedBlock,
    context: String,
}

impl<'a> DelimitedAssertion<'a> {
    pub fn kind(self, expected: DelimitedKind) -> Self {
        assert_eq!(
            self.block.kind, expected,
            "{}: Delimited kind mismatch",
            self.context
        );
        self
    }

    pub fn language(self, expected: Option<&str>) -> Self {
        assert_eq!(
            self.block.language.as_deref(),
            expected,
            "{}: Src language mismatch",
            self.context
        );
        self
    }

    pub fn terminated(self, expected: bool) -> Self {
        assert_eq!(
            self.block.terminated, expected,
            "{}: Expected terminated = {}",
            self.context, expected
        );
        self
    }

    pub fn lines(self, expected: &[&str]) -> Self {
        assert_eq!(
            self.block.lines, expected,
            "{}: Body lines mismatch",
            self.context
        );
        self
    }

    /// Assert the block has no inline content
    pub fn verbatim(self) -> Self {
        assert!(
            self.block.inlines.is_none(),
            "{}: Expected a verbatim block, found inline content",
            self.context
        );
        self
    }

    pub fn inlines<F>(self, assertion: F) -> Self
    where
        F: FnOnce(InlinesAssertion<'a>),
    {
        match &self.block.inlines {
            Some(nodes) => assertion(InlinesAssertion {
                nodes,
                context: format!("{}.inlines", self.context),
            }),
            None => panic!("{}: Verbatim blocks have no inline content", self.context),
        }
        self
    }
}

pub struct IgnoredLineAssertion<'a> {
    line: &'a IgnoredLine,
    context: String,
}

impl IgnoredLineAssertion<'_> {
    pub fn content(self, expected: &str) -> Self {
        assert_eq!(
            self.line.content, expected,
            "{}: Comment content mismatch",
            self.context
        );
        self
    }
}

pub struct FootnoteDefinitionAssertion<'a> {
    definition: &'a FootnoteDefinition,
    context: String,
}

impl<'a> FootnoteDefinitionAssertion<'a> {
    pub fn name(self, expected: &str) -> Self {
        assert_eq!(
            self.definition.name, expected,
            "{}: Footnote name mismatch",
            self.context
        );
        self
    }

    pub fn line_count(self, expected: usize) -> Self {
        assert_eq!(
            self.definition.lines.len(),
            expected,
            "{}: Footnote line count mismatch",
            self.context
        );
        self
    }

    pub fn text(self, expected: &str) -> Self {
        let actual = plain_text(&self.definition.inlines);
        assert_eq!(
            actual, expected,
            "{}: Footnote definition text mismatch",
            self.context
        );
        self
    }

    pub fn inlines<F>(self, assertion: F) -> Self
    where
        F: FnOnce(InlinesAssertion<'a>),
    {
        assertion(InlinesAssertion {
            nodes: &self.definition.inlines,
            context: format!("{}.inlines", self.context),
        });
        self
    }
}

pub struct FootnoteAssertion<'a> {
    footnote: &'a Footnote,
    context: String,
}

impl FootnoteAssertion<'_> {
    pub fn ordinal(self, expected: usize) -> Self {
        assert_eq!(
            self.footnote.ordinal, expected,
            "{}: Ordinal mismatch",
            self.context
        );
        self
    }

    pub fn body_text(self, expected: &str) -> Self {
        match &self.footnote.body {
            Some(body) => assert_eq!(
                plain_text(body),
                expected,
                "{}: Body mismatch",
                self.context
            ),
            None => panic!("{}: Footnote is never defined", self.context),
        }
        self
    }

    pub fn undefined(self) -> Self {
        assert!(
            self.footnote.body.is_none(),
            "{}: Expected no definition",
            self.context
        );
        self
    }
}

// ============================================================================
// Inline Assertions
// ============================================================================

pub struct InlinesAssertion<'a> {
    nodes: &'a [InlineNode],
    context: String,
}

impl<'a> InlinesAssertion<'a> {
    pub fn count(self, expected: usize) -> Self {
        let types: Vec<_> = self.nodes.iter().map(|n| n.node_type()).collect();
        assert_eq!(
            self.nodes.len(),
            expected,
            "{}: Expected {} inline nodes, found {:?}",
            self.context,
            expected,
            types
        );
        self
    }

    pub fn plain_text(self, expected: &str) -> Self {
        assert_eq!(
            plain_text(self.nodes),
            expected,
            "{}: Inline text mismatch",
            self.context
        );
        self
    }

    pub fn node<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(InlineAssertion<'a>),
    {
        let node = self.nodes.get(index).unwrap_or_else(|| {
            panic!(
                "{}: Inline index {} out of bounds ({} nodes)",
                self.context,
                index,
                self.nodes.len()
            )
        });
        assertion(InlineAssertion {
            node,
            context: format!("{}[{}]", self.context, index),
        });
        self
    }
}

pub struct InlineAssertion<'a> {
    node: &'a InlineNode,
    context: String,
}

impl<'a> InlineAssertion<'a> {
    fn mismatch(&self, expected: &str) -> ! {
        panic!(
            "{}: Expected {}, found {:?}",
            self.context, expected, self.node
        )
    }

    pub fn raw(self, expected: &str) {
        match self.node {
            InlineNode::Raw(text) => {
                assert_eq!(text, expected, "{}: Raw text mismatch", self.context)
            }
            _ => self.mismatch("Raw"),
        }
    }

    pub fn code(self, expected: &str) {
        match self.node {
            InlineNode::Code(text) => {
                assert_eq!(text, expected, "{}: Code text mismatch", self.context)
            }
            _ => self.mismatch("Code"),
        }
    }

    pub fn verbatim(self, expected: &str) {
        match self.node {
            InlineNode::Verbatim(text) => {
                assert_eq!(text, expected, "{}: Verbatim text mismatch", self.context)
            }
            _ => self.mismatch("Verbatim"),
        }
    }

    pub fn link(self, url: &str, description: &str) {
        match self.node {
            InlineNode::Link(link) => {
                assert_eq!(link.url, url, "{}: Link url mismatch", self.context);
                assert_eq!(
                    link.description, description,
                    "{}: Link description mismatch",
                    self.context
                );
            }
            _ => self.mismatch("Link"),
        }
    }

    pub fn link_kind(self, expected: LinkKind) {
        match self.node {
            InlineNode::Link(link) => {
                assert_eq!(link.kind, expected, "{}: Link kind mismatch", self.context)
            }
            _ => self.mismatch("Link"),
        }
    }

    pub fn footnote_ref(self, expected: &str) {
        match self.node {
            InlineNode::FootnoteRef(name) => {
                assert_eq!(name, expected, "{}: Footnote name mismatch", self.context)
            }
            _ => self.mismatch("FootnoteRef"),
        }
    }

    /// Assert an emphasis node of the given kind and descend into its children
    pub fn emph<F>(self, kind: EmphKind, assertion: F)
    where
        F: FnOnce(InlinesAssertion<'a>),
    {
        match self.node {
            InlineNode::Emph {
                kind: actual,
                children,
            } if *actual == kind => assertion(InlinesAssertion {
                nodes: children,
                context: format!("{}.{}", self.context, kind.node_type()),
            }),
            _ => self.mismatch(kind.node_type()),
        }
    }
}
